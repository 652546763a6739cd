//! Comparator-ordered binary search tree
//!
//! Unbalanced on purpose: nodes are placed by plain descent and never
//! rotated, so insertion order decides the shape. Descent rule at each node,
//! with `c = comparator(existing, incoming)`:
//!   c == Greater → left
//!   otherwise    → right (ties land right, after earlier equal elements)
//!
//! Elements are owned by the tree and released through the destructor bound
//! at construction, exactly once each, leaf first. Flattening hands out
//! borrows only, so a derived cursor can neither outlive the tree nor free
//! its elements.

mod node;
mod traversal;

pub use node::Node;
pub use traversal::{Direction, InOrder};

use crate::adapter::{reserve_exact, CursorSource};
use crate::cursor::Cursor;
use crate::Result;
use node::Link;
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, trace};
use traversal::PostOrder;

/// Binary search tree over a caller comparator and destructor
pub struct BinaryTree<T, C, D>
where
    C: Fn(&T, &T) -> Ordering,
    D: FnMut(T),
{
    /// Root node (None = empty tree)
    root: Link<T>,

    /// Total order used for every descent
    comparator: C,

    /// Receives every element once when the tree goes away
    destructor: D,
}

/// Tree over `Ord` elements that drops them normally
pub type OrdTree<T> = BinaryTree<T, fn(&T, &T) -> Ordering, fn(T)>;

impl<T: Ord> OrdTree<T> {
    /// Create an empty tree ordered by `Ord` with a dropping destructor
    pub fn ordered() -> Self {
        Self::new(T::cmp, drop)
    }
}

impl<T, C, D> BinaryTree<T, C, D>
where
    C: Fn(&T, &T) -> Ordering,
    D: FnMut(T),
{
    /// Create an empty tree bound to `comparator` and `destructor` for life
    pub fn new(comparator: C, destructor: D) -> Self {
        Self {
            root: None,
            comparator,
            destructor,
        }
    }

    /// Number of elements
    ///
    /// Walks the whole tree: O(n) per call.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if the tree holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        traversal::height(self.root.as_deref())
    }

    /// Root node, if any
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Insert `data` as a new leaf
    ///
    /// No rebalancing: worst-case depth is O(n) for sorted input.
    pub fn insert(&mut self, data: T) {
        let mut depth = 0usize;
        let mut slot = &mut self.root;

        while let Some(node) = slot {
            slot = match Direction::for_ordering((self.comparator)(&node.data, &data)) {
                Direction::Left => &mut node.left,
                Direction::Right => &mut node.right,
            };
            depth += 1;
        }

        *slot = Some(Node::boxed(data));
        trace!(depth, "inserted tree node");
    }

    /// Insert `data` if present; `None` is a no-op
    pub fn insert_opt(&mut self, data: Option<T>) {
        if let Some(data) = data {
            self.insert(data);
        }
    }

    /// Smallest element (leftmost)
    pub fn first(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.data())
    }

    /// Largest element (rightmost); the last inserted among equals
    pub fn last(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.data())
    }

    /// Borrow every element in order
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_deref())
    }

    /// In-order element references in a buffer sized exactly to `len()`
    pub fn references(&self) -> Result<Vec<&T>> {
        let len = self.len();
        let mut buffer = reserve_exact(len)?;
        buffer.extend(self.iter());
        debug_assert_eq!(buffer.len(), len);
        Ok(buffer)
    }

    /// Start a new session on `cursor` over the elements in order
    ///
    /// The tree is left untouched and stays borrowed for as long as the
    /// cursor holds the references. On failure the cursor is not modified.
    pub fn flatten_into<'a>(&'a self, cursor: &mut Cursor<'a, T>) -> Result<()> {
        let buffer = self.references()?;
        debug!(len = buffer.len(), "flattened tree into cursor");
        cursor.populate(buffer);
        Ok(())
    }

    /// New cursor over the elements in order
    pub fn to_cursor(&self) -> Result<Cursor<'_, T>> {
        let mut cursor = Cursor::new();
        self.flatten_into(&mut cursor)?;
        Ok(cursor)
    }

    /// Destroy the tree, handing every element to the destructor
    ///
    /// Order is post-order: left subtree, right subtree, then the node.
    pub fn destroy(self) {
        drop(self);
    }
}

impl<T, C, D> Drop for BinaryTree<T, C, D>
where
    C: Fn(&T, &T) -> Ordering,
    D: FnMut(T),
{
    fn drop(&mut self) {
        let mut released = 0usize;
        for data in PostOrder::new(self.root.take()) {
            (self.destructor)(data);
            released += 1;
        }
        debug!(released, "tree destroyed");
    }
}

impl<T, C, D> Extend<T> for BinaryTree<T, C, D>
where
    C: Fn(&T, &T) -> Ordering,
    D: FnMut(T),
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.insert(data);
        }
    }
}

impl<'a, T, C, D> IntoIterator for &'a BinaryTree<T, C, D>
where
    C: Fn(&T, &T) -> Ordering,
    D: FnMut(T),
{
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, C, D> CursorSource<'a> for &'a BinaryTree<T, C, D>
where
    T: 'a,
    C: Fn(&T, &T) -> Ordering,
    D: FnMut(T),
{
    type Item = T;

    fn references(&self) -> Result<Vec<&'a T>> {
        let tree: &'a BinaryTree<T, C, D> = *self;
        tree.references()
    }
}

impl<T, C, D> fmt::Debug for BinaryTree<T, C, D>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> Ordering,
    D: FnMut(T),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("elements", &self.iter().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
