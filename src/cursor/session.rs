//! Cursor state machine
//!
//! Invariant kept by every mutating method:
//!   done == false  ⇒  position < len  ∧  current == Some(buffer[position])
//!   buffer == None ⇒  len == 0 ∧ position == 0 ∧ done ∧ current == None

use super::{Advance, EndPolicy};
use tracing::debug;

/// Owning buffer of borrowed element references plus a movable cursor
///
/// The buffer belongs to the cursor from `populate` until it is released;
/// the elements it points at belong to whoever handed them out and must
/// outlive `'a`.
#[derive(Debug)]
pub struct Cursor<'a, T: ?Sized> {
    /// Element references for the current session (None = no session)
    buffer: Option<Vec<&'a T>>,

    /// Index of `current` in `buffer`; equal to the length once exhausted
    position: usize,

    /// Cached `buffer[position]`
    current: Option<&'a T>,

    /// Mirrors `position >= len`
    done: bool,
}

impl<'a, T: ?Sized> Cursor<'a, T> {
    /// Create an empty cursor (no session, done, nothing to peek)
    pub fn new() -> Self {
        Self {
            buffer: None,
            position: 0,
            current: None,
            done: true,
        }
    }

    /// Start a new session over `buffer`
    ///
    /// Any previous session is released first. An empty buffer yields a
    /// session that is already done.
    pub fn populate(&mut self, buffer: Vec<&'a T>) {
        self.clear();

        debug!(len = buffer.len(), "cursor session populated");
        self.current = buffer.first().copied();
        self.done = buffer.is_empty();
        self.position = 0;
        self.buffer = Some(buffer);
    }

    /// Move to the next element, applying `policy` if the end is reached
    ///
    /// Calling this on a cursor that is already done applies the policy
    /// again: `Keep` is a no-op, `Consume` releases a buffer that is still
    /// held, `DestroySelf` retires. After `Advance::Retired` the caller must
    /// drop the cursor, so only the owning wrappers and `CursorSlot` reach
    /// this form.
    pub(crate) fn advance(&mut self, policy: EndPolicy) -> Advance {
        let len = self.len();
        let mut just_exhausted = false;

        if !self.done {
            self.position += 1;
            if let Some(next) = self.element(self.position) {
                self.current = Some(next);
                return Advance::Moved;
            }
            just_exhausted = true;
        }

        match policy {
            EndPolicy::Keep => {
                self.position = len;
                self.current = None;
                self.done = true;
                if just_exhausted {
                    Advance::Exhausted
                } else {
                    Advance::Idle
                }
            }
            EndPolicy::Consume => match self.release() {
                Some(buffer) => {
                    debug!(len = buffer.len(), "cursor session consumed");
                    Advance::Released
                }
                None => Advance::Idle,
            },
            EndPolicy::DestroySelf => {
                self.release();
                debug!("cursor retired");
                Advance::Retired
            }
        }
    }

    /// Advance under any policy, dropping the cursor when it retires
    ///
    /// Returns `None` exactly when `policy` is `DestroySelf` and the end was
    /// reached, so a retired cursor can never be touched again. For the
    /// [`Advance`] outcome, advance through a [`CursorSlot`] instead.
    ///
    /// A retiring advance through `&mut` does not exist:
    ///
    /// ```compile_fail
    /// use citer::{Cursor, EndPolicy};
    ///
    /// let values = [1];
    /// let mut cursor: Cursor<'_, i32> = values.iter().collect();
    /// cursor.advance(EndPolicy::DestroySelf);
    /// ```
    ///
    /// [`CursorSlot`]: super::CursorSlot
    pub fn advance_owned(mut self, policy: EndPolicy) -> Option<Self> {
        match self.advance(policy) {
            Advance::Retired => None,
            _ => Some(self),
        }
    }

    /// Advance, keeping the buffer at the end so `reset` can replay it
    pub fn advance_keep(&mut self) -> Advance {
        self.advance(EndPolicy::Keep)
    }

    /// Advance, releasing the buffer at the end
    pub fn advance_consume(&mut self) -> Advance {
        self.advance(EndPolicy::Consume)
    }

    /// Advance, destroying the cursor at the end
    ///
    /// Meant as a loop condition:
    ///
    /// ```
    /// use citer::Cursor;
    ///
    /// let values = [19, 23, 29];
    /// let mut slot: Option<Cursor<'_, i32>> = Some(values.iter().collect());
    /// let mut sum = 0;
    /// while let Some(cursor) = slot {
    ///     sum += cursor.peek().copied().unwrap_or_default();
    ///     slot = cursor.advance_or_destroy();
    /// }
    /// assert_eq!(sum, 71);
    /// ```
    pub fn advance_or_destroy(self) -> Option<Self> {
        self.advance_owned(EndPolicy::DestroySelf)
    }

    /// Rewind to the first element of the held buffer
    ///
    /// No-op when no buffer is held or the held buffer is empty.
    pub fn reset(&mut self) {
        if let Some(first) = self.element(0) {
            self.position = 0;
            self.current = Some(first);
            self.done = false;
        }
    }

    /// Current element, if any
    #[inline]
    pub fn peek(&self) -> Option<&'a T> {
        self.current
    }

    /// Current position (0 when no session is active)
    #[inline]
    pub fn index(&self) -> usize {
        self.position
    }

    /// Whether the cursor has no current element
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Number of references in the held buffer
    pub fn len(&self) -> usize {
        self.buffer.as_ref().map_or(0, Vec::len)
    }

    /// True when no references are held
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True while a buffer is held, even an exhausted one
    pub fn has_buffer(&self) -> bool {
        self.buffer.is_some()
    }

    /// Elements from the current one to the end
    pub fn remaining(&self) -> usize {
        if self.done {
            0
        } else {
            self.len() - self.position
        }
    }

    /// The held buffer, or an empty slice
    pub fn as_slice(&self) -> &[&'a T] {
        self.buffer.as_deref().unwrap_or(&[])
    }

    /// Release the buffer and return to the empty state
    pub fn clear(&mut self) {
        if let Some(buffer) = self.release() {
            debug!(len = buffer.len(), "cursor session cleared");
        }
    }

    /// Release the buffer and the cursor
    pub fn destroy(self) {
        debug!(len = self.len(), "cursor destroyed");
    }

    fn element(&self, position: usize) -> Option<&'a T> {
        self.buffer
            .as_ref()
            .and_then(|buffer| buffer.get(position))
            .copied()
    }

    fn release(&mut self) -> Option<Vec<&'a T>> {
        self.position = 0;
        self.current = None;
        self.done = true;
        self.buffer.take()
    }
}

impl<'a, T: ?Sized> Default for Cursor<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: ?Sized> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            position: self.position,
            current: self.current,
            done: self.done,
        }
    }
}

/// Yields the current element, then advances with [`EndPolicy::Keep`]
///
/// A drained cursor still holds its buffer, so `reset` replays it.
impl<'a, T: ?Sized> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current?;
        self.advance(EndPolicy::Keep);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, T: ?Sized> FromIterator<&'a T> for Cursor<'a, T> {
    fn from_iter<I: IntoIterator<Item = &'a T>>(iter: I) -> Self {
        let mut cursor = Cursor::new();
        cursor.populate(iter.into_iter().collect());
        cursor
    }
}
