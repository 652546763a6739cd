//! Cursor session lifecycle across the three end policies

use citer::{Advance, Cursor, CursorSlot, EndPolicy, PosInts};
use test_case::test_case;

#[test]
fn test_empty_cursor_is_safe_to_query() {
    let cursor: Cursor<'_, i32> = Cursor::new();
    assert!(cursor.is_done(), "empty cursor should report done");
    assert_eq!(cursor.peek(), None);
    assert_eq!(cursor.index(), 0);
}

#[test]
fn test_four_keeps_then_reset() {
    let values = [10, 20, 30, 40];
    let mut cursor = Cursor::from_source(&values).expect("buffer fits");

    for _ in 0..4 {
        assert!(!cursor.is_done());
        cursor.advance_keep();
    }
    assert!(cursor.is_done(), "four advances should exhaust four elements");

    cursor.reset();
    assert!(!cursor.is_done());
    assert_eq!(cursor.index(), 0);
    assert_eq!(cursor.peek(), Some(&10));
}

#[test_case(EndPolicy::Keep, Advance::Exhausted, true ; "keep holds the buffer")]
#[test_case(EndPolicy::Consume, Advance::Released, false ; "consume releases the buffer")]
#[test_case(EndPolicy::DestroySelf, Advance::Retired, false ; "destroy releases everything")]
fn test_terminal_outcome_per_policy(policy: EndPolicy, terminal: Advance, holds_buffer: bool) {
    let values = [1, 2, 3];
    let mut slot = Some(Cursor::from_source(&values).unwrap());

    assert_eq!(slot.advance(policy), Advance::Moved);
    assert_eq!(slot.advance(policy), Advance::Moved);
    assert_eq!(slot.advance(policy), terminal);

    assert!(slot.is_done());
    assert_eq!(slot.peek(), None);
    assert_eq!(slot.as_ref().map_or(false, Cursor::has_buffer), holds_buffer);
    assert_eq!(slot.is_none(), policy == EndPolicy::DestroySelf);
}

#[test]
fn test_retired_cursor_leaves_nothing_to_reuse() {
    let values = [7];
    let mut slot = Some(Cursor::from_source(&values).unwrap());

    assert_eq!(slot.advance(EndPolicy::DestroySelf), Advance::Retired);
    assert!(slot.is_none(), "retiring must empty the slot");

    // Only a fresh cursor can start another session
    let mut fresh = slot.take().unwrap_or_default();
    fresh.populate(values.iter().collect());
    assert_eq!(fresh.peek(), Some(&7));
}

#[test]
fn test_unpopulated_cursor_retires_on_destroy() {
    let cursor: Cursor<'_, i32> = Cursor::new();
    assert!(cursor.advance_owned(EndPolicy::DestroySelf).is_none());

    let mut slot: Option<Cursor<'_, i32>> = Some(Cursor::new());
    assert_eq!(slot.advance(EndPolicy::Keep), Advance::Idle);
    assert_eq!(slot.advance(EndPolicy::Consume), Advance::Idle);
    assert!(slot.is_some());
}

#[test]
fn test_consumed_cursor_is_reused_across_sessions() {
    let first = [11, 13, 17, -1];
    let second = [19, 23, -1];
    let mut cursor = Cursor::new();

    let mut sessions = Vec::new();
    for source in [PosInts::new(&first), PosInts::new(&second)] {
        cursor.set_from(source).unwrap();
        let mut seen = Vec::new();
        while let Some(value) = cursor.peek() {
            seen.push(*value);
            cursor.advance_consume();
        }
        assert!(!cursor.has_buffer(), "consume should release at the end");
        sessions.push(seen);
    }

    assert_eq!(sessions, vec![vec![11, 13, 17], vec![19, 23]]);
}

#[test]
fn test_destroy_loop_leaves_empty_slot() {
    let values = [19, 23, 29, -1];
    let mut slot = Some(Cursor::from_source(PosInts::new(&values)).unwrap());
    let mut seen = Vec::new();

    while let Some(cursor) = slot {
        seen.extend(cursor.peek().copied());
        slot = cursor.advance_or_destroy();
    }

    assert_eq!(seen, vec![19, 23, 29]);
    assert!(slot.is_none());

    // Queries and advances on the empty slot stay harmless
    assert!(slot.is_done());
    assert_eq!(slot.index(), 0);
    assert_eq!(CursorSlot::advance(&mut slot, EndPolicy::DestroySelf), Advance::Idle);
}

#[test]
fn test_destroy_on_empty_session_retires_immediately() {
    let values = [-1];
    let cursor = Cursor::from_source(PosInts::new(&values)).unwrap();
    assert!(cursor.is_done());
    assert!(cursor.advance_or_destroy().is_none());
}

#[test]
fn test_populate_mid_session_discards_previous() {
    let first = ["a", "b", "c"];
    let second = ["x"];
    let mut cursor: Cursor<'_, str> = first.iter().copied().collect();
    cursor.advance_keep();

    cursor.populate(second.to_vec());
    assert_eq!(cursor.as_slice(), &["x"]);
    assert_eq!(cursor.peek(), Some("x"));
    assert_eq!(cursor.advance_keep(), Advance::Exhausted);
}

#[test]
fn test_string_session_replay() {
    let mut cursor = Cursor::from_source("loop").unwrap();
    let once: String = cursor.by_ref().collect();
    cursor.reset();
    let twice: String = cursor.collect();
    assert_eq!(once, "loop");
    assert_eq!(twice, "loop");
}
