//! Stack-based tree walks
//!
//! The tree is unbalanced, so depth can reach n. Every walk keeps its own
//! explicit stack instead of recursing:
//!   in-order   (left, self, right) borrows elements for flattening
//!   post-order (left, right, self) moves elements out, leaf first
//!   depth      (any order) measures height

use super::node::{Link, Node};
use std::cmp::Ordering;
use std::iter::FusedIterator;

/// Side of a node an element descends to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Existing element compares strictly greater than the incoming one
    Left,

    /// Existing element compares less than or equal (ties go right)
    Right,
}

impl Direction {
    /// Route an incoming element given `comparator(existing, incoming)`
    #[inline]
    pub fn for_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Direction::Left,
            Ordering::Less | Ordering::Equal => Direction::Right,
        }
    }
}

/// Borrowing in-order iterator
#[derive(Debug)]
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree is done but which are not yet yielded
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut walk = Self { stack: Vec::new() };
        walk.descend_left(root);
        walk
    }

    fn descend_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right());
        Some(node.data())
    }
}

impl<'a, T> FusedIterator for InOrder<'a, T> {}

/// Owning post-order drain
///
/// Yields every element exactly once, each only after both of its subtrees
/// have been yielded, and frees each node as its element leaves.
#[derive(Debug)]
pub(super) struct PostOrder<T> {
    /// (node, children already pushed)
    stack: Vec<(Box<Node<T>>, bool)>,
}

impl<T> PostOrder<T> {
    pub(super) fn new(root: Link<T>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<T> Iterator for PostOrder<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let (mut node, expanded) = self.stack.pop()?;
            if expanded {
                let Node { data, .. } = *node;
                return Some(data);
            }

            let (left, right) = node.detach();
            self.stack.push((node, true));
            // Left on top so its whole subtree drains before the right one
            self.stack.extend(right.map(|child| (child, false)));
            self.stack.extend(left.map(|child| (child, false)));
        }
    }
}

/// Number of nodes on the longest root-to-leaf path
pub(super) fn height<T>(root: Option<&Node<T>>) -> usize {
    let mut stack: Vec<(&Node<T>, usize)> = root.map(|node| (node, 1)).into_iter().collect();
    let mut max_depth = 0;

    while let Some((node, depth)) = stack.pop() {
        max_depth = max_depth.max(depth);
        stack.extend(node.left().map(|child| (child, depth + 1)));
        stack.extend(node.right().map(|child| (child, depth + 1)));
    }

    max_depth
}
