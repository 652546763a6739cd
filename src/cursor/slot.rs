//! Safe navigation over a cursor that may already be gone
//!
//! `Option<Cursor>` is the slot a `DestroySelf` loop leaves behind. Every
//! operation here treats an empty slot as an empty cursor instead of an error.

use super::{Advance, Cursor, EndPolicy};

/// Cursor queries and advance on a possibly-absent cursor
pub trait CursorSlot<'a, T: ?Sized> {
    /// True when the slot is empty or its cursor is done
    fn is_done(&self) -> bool;

    /// Current element, `None` when the slot is empty
    fn peek(&self) -> Option<&'a T>;

    /// Current position, 0 when the slot is empty
    fn index(&self) -> usize;

    /// Advance the held cursor; a retired cursor empties the slot
    fn advance(&mut self, policy: EndPolicy) -> Advance;
}

impl<'a, T: ?Sized> CursorSlot<'a, T> for Option<Cursor<'a, T>> {
    fn is_done(&self) -> bool {
        self.as_ref().map_or(true, Cursor::is_done)
    }

    fn peek(&self) -> Option<&'a T> {
        self.as_ref().and_then(Cursor::peek)
    }

    fn index(&self) -> usize {
        self.as_ref().map_or(0, Cursor::index)
    }

    fn advance(&mut self, policy: EndPolicy) -> Advance {
        let Some(cursor) = self.as_mut() else {
            return Advance::Idle;
        };
        let outcome = cursor.advance(policy);
        if outcome == Advance::Retired {
            *self = None;
        }
        outcome
    }
}
