//! # Owning cursors over borrowed element references
//!
//! This library implements a small generic-container toolkit built around one
//! abstraction: a [`Cursor`] that owns a buffer of element references and
//! walks it with an explicit end-of-iteration policy.
//!
//! ## Core pieces
//!
//! 1. **Cursor**: owned `Vec<&T>` buffer, cached current element, position and
//!    `done` flag kept consistent after every mutation
//! 2. **End policies**: `Keep` (exhausted but resettable), `Consume` (buffer
//!    released, cursor reusable), `DestroySelf` (cursor dropped)
//! 3. **Binary search tree**: unbalanced, ordered by a caller comparator,
//!    elements released through a caller destructor
//! 4. **Adapters**: strings, sentinel-terminated integer arrays, slices and
//!    trees all fill a cursor through [`CursorSource`]
//!
//! Borrowed element references carry the lifetime of their source, so a
//! cursor derived from a tree can never outlive it and never frees its data.
//!
//! ## Usage Example
//!
//! ```
//! use citer::BinaryTree;
//!
//! let mut tree = BinaryTree::ordered();
//! tree.extend([5, 3, 8, 3]);
//!
//! let mut cursor = tree.to_cursor()?;
//! let mut seen = Vec::new();
//! while let Some(value) = cursor.peek() {
//!     seen.push(*value);
//!     cursor.advance_consume();
//! }
//! assert_eq!(seen, vec![3, 3, 5, 8]);
//! assert!(!cursor.has_buffer());
//! # Ok::<(), citer::CollectionError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules
pub mod cursor;  // Owning cursor and end policies
pub mod adapter; // Sources that fill a cursor
pub mod tree;    // Comparator-ordered binary search tree
pub mod demo;    // Tutorial walkthrough used by the CLI

// Re-exports for convenience
pub use adapter::{CursorSource, PosInts};
pub use cursor::{Advance, Cursor, CursorSlot, EndPolicy};
pub use tree::{BinaryTree, Node};

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors reported while building element buffers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The reference buffer for a session could not be reserved
    #[error("could not reserve a buffer of {requested} element references")]
    Allocation {
        /// Number of element references requested
        requested: usize,
        /// Allocator report
        #[source]
        source: TryReserveError,
    },

    /// A sentinel-terminated sequence contained no negative terminator
    #[error("no negative sentinel found after scanning {scanned} values")]
    MissingSentinel {
        /// Number of values scanned before giving up
        scanned: usize,
    },
}

/// Result alias used by buffer-building operations
pub type Result<T> = std::result::Result<T, CollectionError>;
