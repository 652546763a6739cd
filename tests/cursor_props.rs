use citer::{Advance, Cursor, EndPolicy, PosInts};
use proptest::prelude::*;

proptest! {
    #[test]
    fn keep_exhausts_after_exactly_len_steps(values in proptest::collection::vec(any::<i64>(), 1..64)) {
        let mut cursor = Cursor::from_source(values.as_slice()).expect("buffer fits");

        for step in 0..values.len() {
            prop_assert!(!cursor.is_done(), "done too early at step {}", step);
            prop_assert_eq!(cursor.index(), step);
            prop_assert_eq!(cursor.peek(), Some(&values[step]));
            cursor.advance_keep();
        }

        prop_assert!(cursor.is_done());
        prop_assert_eq!(cursor.peek(), None);
        prop_assert!(cursor.has_buffer(), "keep must hold the buffer");
        prop_assert_eq!(cursor.advance_keep(), Advance::Idle);
    }

    #[test]
    fn reset_rewinds_from_any_position(
        values in proptest::collection::vec(any::<u16>(), 1..32),
        steps in 0usize..48,
    ) {
        let mut cursor = Cursor::from_source(values.as_slice()).unwrap();
        for _ in 0..steps {
            cursor.advance_keep();
        }

        cursor.reset();
        prop_assert_eq!(cursor.index(), 0);
        prop_assert_eq!(cursor.peek(), Some(&values[0]));
        prop_assert!(!cursor.is_done());
    }

    #[test]
    fn consume_releases_at_the_end(values in proptest::collection::vec(any::<u8>(), 0..32)) {
        let mut cursor = Cursor::from_source(values.as_slice()).unwrap();
        let mut seen = Vec::new();
        while let Some(value) = cursor.peek() {
            seen.push(*value);
            cursor.advance_consume();
        }

        prop_assert_eq!(&seen, &values);

        // An empty session starts done, so nothing has released it yet
        if values.is_empty() {
            prop_assert!(cursor.has_buffer());
            prop_assert_eq!(cursor.advance_consume(), Advance::Released);
        }
        prop_assert!(!cursor.has_buffer());
        prop_assert!(cursor.is_done());

        // Resetting a released cursor has nothing to rewind
        cursor.reset();
        prop_assert!(cursor.is_done());
    }

    #[test]
    fn every_policy_visits_the_same_elements(values in proptest::collection::vec(any::<i32>(), 0..32)) {
        for policy in EndPolicy::ALL {
            let mut slot = Some(Cursor::from_source(values.as_slice()).unwrap());
            let mut seen = Vec::new();
            while let Some(cursor) = slot.take() {
                let Some(value) = cursor.peek() else {
                    slot = Some(cursor);
                    break;
                };
                seen.push(*value);
                slot = cursor.advance_owned(policy);
            }
            prop_assert_eq!(&seen, &values, "policy {}", policy);
            prop_assert_eq!(
                slot.is_none(),
                policy == EndPolicy::DestroySelf && !values.is_empty()
            );
        }
    }

    #[test]
    fn posints_stops_at_first_negative(
        prefix in proptest::collection::vec(0i32..1000, 0..16),
        sentinel in i32::MIN..0,
        tail in proptest::collection::vec(any::<i32>(), 0..8),
    ) {
        let mut values = prefix.clone();
        values.push(sentinel);
        values.extend(tail);

        let cursor = Cursor::from_source(PosInts::new(&values)).unwrap();
        let seen: Vec<i32> = cursor.copied().collect();
        prop_assert_eq!(seen, prefix);
    }
}
