//! Shared helpers for integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

use citer::BinaryTree;

/// Elements handed to a tree destructor, in release order
pub type Released<T> = Rc<RefCell<Vec<T>>>;

/// Ordered tree whose destructor records every released element
pub fn recording_tree<T: Ord + 'static>(
) -> (BinaryTree<T, fn(&T, &T) -> Ordering, impl FnMut(T)>, Released<T>) {
    let released: Released<T> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&released);
    let tree = BinaryTree::new(
        T::cmp as fn(&T, &T) -> Ordering,
        move |value: T| sink.borrow_mut().push(value),
    );
    (tree, released)
}

/// Key plus insertion sequence; trees compare on `key` only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged {
    pub key: i32,
    pub seq: usize,
}

/// Comparator that ignores the insertion sequence
pub fn by_key(a: &Tagged, b: &Tagged) -> Ordering {
    a.key.cmp(&b.key)
}

/// Tag each key with its position in `keys`
pub fn tagged(keys: &[i32]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(seq, &key)| Tagged { key, seq })
        .collect()
}
