use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::error::{Error, Result};
use crate::summary::Summary;
use crate::traversal::{Order, Traversal};

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every insertion and removal
/// recomputes the heights along the path it took and rotates wherever that invariant broke.
///
/// # Examples
///
/// ```
/// use ordered_trees::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.min(), Some(&0));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet {
            tree: None,
            len: 0,
        }
    }

    /// Inserts a key into the set. Returns `false` and leaves the set untouched if the key already
    /// exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = tree::insert(&mut self.tree, key);
        if inserted {
            self.len += 1;
        } else {
            debug!("Ignoring duplicate key.");
        }
        inserted
    }

    /// Removes a key from the set and returns it. Returns `None` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let ret = tree::remove(&mut self.tree, key);
        match ret {
            Some(_) => self.len -= 1,
            None => debug!("Key to remove was not found."),
        }
        ret
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::get(&self.tree, key).is_some()
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Clears the set, removing all keys.
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns the height of the tree, where an empty set has height 0 and a single key has
    /// height 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// for key in 0..7 {
    ///     set.insert(key);
    /// }
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns the height of the root's left subtree minus the height of its right subtree.
    pub fn balance_factor(&self) -> i32 {
        tree::balance_factor(&self.tree)
    }

    /// Returns an iterator that lazily visits every key in the given order. Each call starts a
    /// fresh walk from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    /// use ordered_trees::Order;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.insert(3);
    ///
    /// assert_eq!(set.traverse(Order::PreOrder).collect::<Vec<&u32>>(), vec![&2, &1, &3]);
    /// ```
    pub fn traverse(&self, order: Order) -> AvlSetIter<T> {
        AvlSetIter {
            traversal: tree::traverse(&self.tree, order),
        }
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    pub fn iter(&self) -> AvlSetIter<T> {
        self.traverse(Order::InOrder)
    }

    /// Like `traverse`, but also yields the height of the subtree rooted at each key.
    pub fn traverse_heights(&self, order: Order) -> impl Iterator<Item = (&T, usize)> {
        tree::traverse(&self.tree, order).map(|node| (&node.key, node.height))
    }

    /// Returns a snapshot of the shape of the tree.
    pub fn summary(&self) -> Summary {
        Summary {
            len: self.len,
            height: self.height(),
            root_color: None,
            black_height: None,
        }
    }

    /// Checks the ordering invariant, every cached height and balance factor, and the cached
    /// length.
    pub fn validate(&self) -> Result<()> {
        let actual = tree::check(&self.tree)?;
        if actual != self.len {
            return Err(Error::LengthMismatch {
                expected: self.len,
                actual,
            });
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = AvlSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `AvlSet<T>`.
///
/// This iterator yields immutable references to keys in the order it was created with.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    traversal: Traversal<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.traversal.next().map(|node| &node.key)
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
