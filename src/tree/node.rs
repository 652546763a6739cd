//! Owned tree node
//!
//! Each node owns its element and both children; dropping a node drops the
//! whole subtree below it.

use super::traversal::Direction;
use std::fmt;

/// Owned link to a child subtree
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Binary search tree node
pub struct Node<T> {
    /// Element held by this node
    pub(super) data: T,

    /// Subtree ordered before `data`
    pub(super) left: Link<T>,

    /// Subtree ordered at or after `data`
    pub(super) right: Link<T>,
}

impl<T> Node<T> {
    /// Allocate a leaf holding `data`
    pub(crate) fn boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    /// Element held by this node
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Left child
    #[inline]
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Right child
    #[inline]
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Child on the given side
    pub fn child(&self, direction: Direction) -> Option<&Node<T>> {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Take both children, leaving this node a leaf
    pub(super) fn detach(&mut self) -> (Link<T>, Link<T>) {
        (self.left.take(), self.right.take())
    }
}

/// Shows the element and which children exist, never the subtrees
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("has_left", &self.left.is_some())
            .field("has_right", &self.right.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_has_no_children() {
        let node = Node::boxed(7);
        assert!(node.is_leaf());
        assert_eq!(node.data(), &7);
        assert!(node.child(Direction::Left).is_none());
        assert!(node.child(Direction::Right).is_none());
    }

    #[test]
    fn test_detach_children() {
        let mut node = Node::boxed(5);
        node.left = Some(Node::boxed(3));
        node.right = Some(Node::boxed(8));
        assert!(!node.is_leaf());
        assert_eq!(node.child(Direction::Left).map(Node::data), Some(&3));

        let (left, right) = node.detach();
        assert_eq!(left.map(|n| n.data), Some(3));
        assert_eq!(right.map(|n| n.data), Some(8));
        assert!(node.is_leaf());
    }

    #[test]
    fn test_debug_shows_children_presence() {
        let mut node = Node::boxed(5);
        node.right = Some(Node::boxed(8));
        assert_eq!(
            format!("{node:?}"),
            "Node { data: 5, has_left: false, has_right: true }"
        );
    }
}
