use crate::error::{Error, Result};

/// The order in which a traversal visits the nodes of a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields keys in ascending order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

impl Default for Order {
    fn default() -> Self {
        Order::InOrder
    }
}

/// A read-only position in a tree that can step to either child.
pub trait Cursor: Sized {
    fn left(&self) -> Option<Self>;

    fn right(&self) -> Option<Self>;
}

/// A depth-first walk over a tree that keeps its own stack, so deep trees cannot exhaust the call
/// stack.
///
/// Each stack frame records whether the children of the node have already been pushed. A node is
/// yielded once it is popped in the expanded state, except in pre-order where it is yielded as soon
/// as its children are scheduled.
pub struct Traversal<C> {
    order: Order,
    stack: Vec<(C, bool)>,
}

impl<C> Traversal<C>
where
    C: Cursor,
{
    pub fn new(root: Option<C>, order: Order) -> Self {
        Traversal {
            order,
            stack: root.into_iter().map(|cursor| (cursor, false)).collect(),
        }
    }

    fn schedule(&mut self, cursor: Option<C>) {
        if let Some(cursor) = cursor {
            self.stack.push((cursor, false));
        }
    }
}

impl<C> Iterator for Traversal<C>
where
    C: Cursor,
{
    type Item = C;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((cursor, expanded)) = self.stack.pop() {
            if expanded {
                return Some(cursor);
            }

            let left = cursor.left();
            let right = cursor.right();
            match self.order {
                Order::InOrder => {
                    self.schedule(right);
                    self.stack.push((cursor, true));
                    self.schedule(left);
                },
                Order::PreOrder => {
                    self.schedule(right);
                    self.schedule(left);
                    return Some(cursor);
                },
                Order::PostOrder => {
                    self.stack.push((cursor, true));
                    self.schedule(right);
                    self.schedule(left);
                },
            }
        }
        None
    }
}

/// Checks that `keys` is strictly ascending and returns how many keys it yielded.
pub fn check_ascending<'a, T, I>(keys: I) -> Result<usize>
where
    T: 'a + Ord,
    I: IntoIterator<Item = &'a T>,
{
    let mut count = 0;
    let mut prev: Option<&T> = None;
    for key in keys {
        if let Some(prev_key) = prev {
            if prev_key >= key {
                return Err(Error::OutOfOrder);
            }
        }
        prev = Some(key);
        count += 1;
    }
    Ok(count)
}
