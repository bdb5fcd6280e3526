use crate::avl_tree::node::Node;
use crate::error::{Error, Result};
use crate::traversal::{self, Order, Traversal};
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

pub fn balance_factor<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => 0,
        Some(ref node) => node.balance(),
    }
}

// The demoted node's height is recomputed before the promoted child's because the child's height
// depends on it.
fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    trace!("Rotating left at height {}.", node.height);
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    trace!("Rotating right at height {}.", node.height);
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

/// Recomputes the height of the root of `tree` and rotates it back into balance if its child
/// subtree heights differ by two.
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

/// Detaches the leftmost node of `tree` and rebalances every node on the way back up.
fn remove_min<T>(tree: &mut Tree<T>) -> Option<Box<Node<T>>> {
    let has_left = match tree {
        Some(ref node) => node.left.is_some(),
        None => return None,
    };

    if has_left {
        let ret = match tree {
            Some(ref mut node) => remove_min(&mut node.left),
            None => unreachable!(),
        };
        balance(tree);
        return ret;
    }

    let mut node = tree.take()?;
    *tree = node.right.take();
    Some(node)
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    match tree {
        Some(ref mut node) => {
            let inserted = match key.cmp(&node.key) {
                Ordering::Less => insert(&mut node.left, key),
                Ordering::Greater => insert(&mut node.right, key),
                Ordering::Equal => false,
            };
            if !inserted {
                return false;
            }
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    }

    balance(tree);
    true
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                if node.left.is_some() {
                    if let Some(successor) = remove_min(&mut node.right) {
                        let removed = mem::replace(&mut node.key, successor.key);
                        *tree = Some(node);
                        balance(tree);
                        return Some(removed);
                    }
                }

                let unboxed_node = *node;
                let Node { key: removed, left, right, .. } = unboxed_node;
                *tree = match left {
                    Some(left) => Some(left),
                    None => right,
                };
                return Some(removed);
            },
        },
        None => return None,
    };

    if ret.is_some() {
        balance(tree);
    }
    ret
}

pub fn get<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.key) {
            Ordering::Less => get(&node.left, key),
            Ordering::Greater => get(&node.right, key),
            Ordering::Equal => Some(&node.key),
        }
    })
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

pub fn traverse<T>(tree: &Tree<T>, order: Order) -> Traversal<&Node<T>> {
    Traversal::new(tree.as_ref().map(|node| &**node), order)
}

fn check_heights<T>(tree: &Tree<T>) -> Result<usize> {
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(0),
    };

    let left = check_heights(&node.left)?;
    let right = check_heights(&node.right)?;
    let expected = left.max(right) + 1;
    if node.height != expected {
        return Err(Error::HeightMismatch {
            expected,
            actual: node.height,
        });
    }

    let balance = left as i32 - right as i32;
    if balance.abs() > 1 {
        return Err(Error::Unbalanced { balance });
    }
    Ok(expected)
}

/// Checks ordering, cached heights and balance factors, and returns the number of nodes.
pub fn check<T>(tree: &Tree<T>) -> Result<usize>
where
    T: Ord,
{
    check_heights(tree)?;
    traversal::check_ascending(traverse(tree, Order::InOrder).map(|node| &node.key))
}
