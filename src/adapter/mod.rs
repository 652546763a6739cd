//! Sources that fill a cursor
//!
//! An adapter turns its own source type into a buffer of element references
//! sized to the element count and hands that buffer to the cursor. The
//! buffer is moved, so the adapter keeps nothing; the references borrow the
//! source, so the source outlives the session.

mod posints;

pub use posints::PosInts;

use crate::cursor::Cursor;
use crate::{CollectionError, Result};

/// A borrowed source of element references
pub trait CursorSource<'a> {
    /// Element type the references point at
    type Item: ?Sized + 'a;

    /// Build the reference buffer for one session
    fn references(&self) -> Result<Vec<&'a Self::Item>>;
}

impl<'a> CursorSource<'a> for &'a str {
    type Item = str;

    /// One single-character slice per `char`
    fn references(&self) -> Result<Vec<&'a str>> {
        let text: &'a str = *self;
        let mut buffer = reserve_exact(text.chars().count())?;
        buffer.extend(
            text.char_indices()
                .map(|(start, ch)| &text[start..start + ch.len_utf8()]),
        );
        Ok(buffer)
    }
}

impl<'a, T: 'a> CursorSource<'a> for &'a [T] {
    type Item = T;

    fn references(&self) -> Result<Vec<&'a T>> {
        let items: &'a [T] = *self;
        let mut buffer = reserve_exact(items.len())?;
        buffer.extend(items.iter());
        Ok(buffer)
    }
}

impl<'a, T: 'a, const N: usize> CursorSource<'a> for &'a [T; N] {
    type Item = T;

    fn references(&self) -> Result<Vec<&'a T>> {
        let items: &'a [T] = *self;
        items.references()
    }
}

impl<'a, T: ?Sized> Cursor<'a, T> {
    /// Create a cursor populated from `source`
    pub fn from_source<S>(source: S) -> Result<Self>
    where
        S: CursorSource<'a, Item = T>,
    {
        let mut cursor = Cursor::new();
        cursor.set_from(source)?;
        Ok(cursor)
    }

    /// Replace the current session with one built from `source`
    ///
    /// If the buffer cannot be built the cursor is left untouched.
    pub fn set_from<S>(&mut self, source: S) -> Result<()>
    where
        S: CursorSource<'a, Item = T>,
    {
        let buffer = source.references()?;
        self.populate(buffer);
        Ok(())
    }
}

/// Empty buffer with room for exactly `len` references
pub(crate) fn reserve_exact<R>(len: usize) -> Result<Vec<R>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|source| CollectionError::Allocation {
            requested: len,
            source,
        })?;
    Ok(buffer)
}
