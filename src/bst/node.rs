use crate::bst::tree;
use crate::traversal::Cursor;

/// A struct representing an internal node of an unbalanced binary search tree.
pub struct Node<T> {
    pub key: T,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<'a, T> Cursor for &'a Node<T> {
    fn left(&self) -> Option<Self> {
        let node: &'a Node<T> = *self;
        node.left.as_ref().map(|child| &**child)
    }

    fn right(&self) -> Option<Self> {
        let node: &'a Node<T> = *self;
        node.right.as_ref().map(|child| &**child)
    }
}
