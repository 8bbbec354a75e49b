use crate::avl_tree::tree;
use crate::entry::{Key, Record};
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node<R> {
    pub record: R,
    pub height: usize,
    pub left: tree::Tree<R>,
    pub right: tree::Tree<R>,
}

impl<R> Node<R> {
    pub fn new(record: R) -> Self {
        Node {
            record,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node {
            ref mut height,
            ref left,
            ref right,
            ..
        } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    pub fn balance(&self) -> i64 {
        (tree::height(&self.left) as i64) - (tree::height(&self.right) as i64)
    }
}

impl<R: Record> Node<R> {
    pub fn key(&self) -> Key {
        self.record.key()
    }
}
