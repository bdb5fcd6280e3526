use crate::bst::node::Node;
use crate::error::Result;
use crate::traversal::{self, Order, Traversal};
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

// Every walk in this module is iterative: the depth of an unbalanced tree is linear in the number
// of keys for sorted input.

/// Returns the slot that holds `key`, or the empty slot where `key` would be attached.
fn locate<'a, T>(mut tree: &'a mut Tree<T>, key: &T) -> &'a mut Tree<T>
where
    T: Ord,
{
    loop {
        let ordering = match tree.as_ref() {
            Some(node) => key.cmp(&node.key),
            None => return tree,
        };
        if ordering == Ordering::Equal {
            return tree;
        }

        let node = match tree {
            Some(node) => node,
            None => unreachable!(),
        };
        tree = if ordering == Ordering::Less {
            &mut node.left
        } else {
            &mut node.right
        };
    }
}

/// Detaches the leftmost node of `tree`, splicing its right subtree into its place.
fn take_min<T>(mut tree: &mut Tree<T>) -> Option<Box<Node<T>>> {
    while tree.as_ref().map_or(false, |node| node.left.is_some()) {
        tree = match tree {
            Some(node) => &mut node.left,
            None => unreachable!(),
        };
    }

    let mut node = tree.take()?;
    *tree = node.right.take();
    Some(node)
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let slot = locate(tree, &key);
    if slot.is_some() {
        return false;
    }
    *slot = Some(Box::new(Node::new(key)));
    true
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let slot = locate(tree, key);
    let mut node = slot.take()?;

    // With two children the successor's key moves up into this node and the successor itself,
    // which has no left child, is the node that gets unlinked.
    if node.left.is_some() {
        if let Some(successor) = take_min(&mut node.right) {
            let Node { key: successor_key, .. } = *successor;
            let removed = mem::replace(&mut node.key, successor_key);
            *slot = Some(node);
            return Some(removed);
        }
    }

    *slot = match node.left.take() {
        Some(left) => Some(left),
        None => node.right.take(),
    };
    Some(node.key)
}

pub fn get<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match key.cmp(&node.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.key),
        }
    }
    None
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

pub fn height<T>(tree: &Tree<T>) -> usize {
    let mut stack: Vec<(&Node<T>, usize)> = tree.iter().map(|node| (&**node, 1)).collect();
    let mut ret = 0;
    while let Some((node, depth)) = stack.pop() {
        ret = ret.max(depth);
        for child in node.left.iter().chain(node.right.iter()) {
            stack.push((&**child, depth + 1));
        }
    }
    ret
}

pub fn traverse<T>(tree: &Tree<T>, order: Order) -> Traversal<&Node<T>> {
    Traversal::new(tree.as_ref().map(|node| &**node), order)
}

/// Releases every node of `tree`, children before their parent.
pub fn clear<T>(tree: &mut Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        if node.is_leaf() {
            continue;
        }
        let left = node.left.take();
        let right = node.right.take();
        stack.push(node);
        stack.extend(right);
        stack.extend(left);
    }
}

/// Checks that an in-order walk is strictly ascending and returns the number of nodes.
pub fn check<T>(tree: &Tree<T>) -> Result<usize>
where
    T: Ord,
{
    traversal::check_ascending(traverse(tree, Order::InOrder).map(|node| &node.key))
}
