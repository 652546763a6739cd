//! Sentinel-terminated runs of non-negative integers
//!
//! The first negative value marks the end of the run, the way a caller
//! without a length would hand over `{2, 3, 5, 7, -1}`.

use super::{reserve_exact, CursorSource};
use crate::{CollectionError, Result};

/// Non-negative integers terminated by the first negative value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosInts<'a> {
    values: &'a [i32],
}

impl<'a> PosInts<'a> {
    /// Wrap a sentinel-terminated slice
    pub fn new(values: &'a [i32]) -> Self {
        Self { values }
    }

    /// Number of values before the sentinel
    pub fn terminated_len(&self) -> Result<usize> {
        self.values
            .iter()
            .position(|&value| value < 0)
            .ok_or(CollectionError::MissingSentinel {
                scanned: self.values.len(),
            })
    }

    /// The values before the sentinel
    pub fn values(&self) -> Result<&'a [i32]> {
        let len = self.terminated_len()?;
        Ok(&self.values[..len])
    }
}

impl<'a> CursorSource<'a> for PosInts<'a> {
    type Item = i32;

    fn references(&self) -> Result<Vec<&'a i32>> {
        let values = self.values()?;
        let mut buffer = reserve_exact(values.len())?;
        buffer.extend(values.iter());
        Ok(buffer)
    }
}
