use crate::bst::node::Node;
use crate::bst::tree;
use crate::error::{Error, Result};
use crate::summary::Summary;
use crate::traversal::{Order, Traversal};

/// An ordered set implemented using an unbalanced binary search tree.
///
/// Keys are stored exactly where the descent from the root ends, so the shape of the tree depends
/// entirely on insertion order. Inserting sorted keys degrades it into a linked list. Every
/// operation walks the tree iteratively, so even a degenerate tree cannot overflow the stack.
///
/// # Examples
///
/// ```
/// use ordered_trees::bst::BstSet;
///
/// let mut set = BstSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.min(), Some(&0));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct BstSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> BstSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BstSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstSet;
    ///
    /// let set: BstSet<u32> = BstSet::new();
    /// ```
    pub fn new() -> Self {
        BstSet {
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
    /// use ordered_trees::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
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
    /// A node with two children keeps its place in the tree: it takes over the key of its in-order
    /// successor, and the successor's node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
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
    /// use ordered_trees::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
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
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        tree::clear(&mut self.tree);
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

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty set has
    /// height 0 and a single key has height 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// for key in 0..4 {
    ///     set.insert(key);
    /// }
    /// assert_eq!(set.height(), 4);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns an iterator that lazily visits every key in the given order. Each call starts a
    /// fresh walk from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstSet;
    /// use ordered_trees::Order;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.traverse(Order::PreOrder).collect::<Vec<&u32>>(), vec![&2, &1, &3]);
    /// assert_eq!(set.traverse(Order::PostOrder).collect::<Vec<&u32>>(), vec![&1, &3, &2]);
    /// ```
    pub fn traverse(&self, order: Order) -> BstSetIter<T> {
        BstSetIter {
            traversal: tree::traverse(&self.tree, order),
        }
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    pub fn iter(&self) -> BstSetIter<T> {
        self.traverse(Order::InOrder)
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

    /// Checks the ordering invariant and the cached length.
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

impl<T> Drop for BstSet<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<'a, T> IntoIterator for &'a BstSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = BstSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `BstSet<T>`.
///
/// This iterator yields immutable references to keys in the order it was created with.
pub struct BstSetIter<'a, T>
where
    T: 'a,
{
    traversal: Traversal<&'a Node<T>>,
}

impl<'a, T> Iterator for BstSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.traversal.next().map(|node| &node.key)
    }
}

impl<T> Default for BstSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
