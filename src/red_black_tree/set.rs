use crate::red_black_tree::node::Color;
use crate::red_black_tree::tree::{NodeRef, Tree};
use crate::summary::Summary;
use crate::traversal::{Order, Traversal};
use crate::Result;

/// The number of nodes allocated together when a `RedBlackSet` created with `new` grows.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree where every node is either red or
/// black. The root and every absent child are black, no red node has a red child, and every path
/// from a node down to an absent child passes through the same number of black nodes. Together
/// these keep the height within twice the optimum.
///
/// Nodes are stored in a `TypedArena` and link to their children and parent by `Entry`. Every
/// absent link points at a single shared sentinel.
///
/// # Examples
///
/// ```
/// use ordered_trees::red_black_tree::{Color, RedBlackSet};
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.root_color(), Some(Color::Black));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct RedBlackSet<T> {
    tree: Tree<T>,
}

impl<T> RedBlackSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `RedBlackSet<T>` whose arena allocates `chunk_size` nodes at a
    /// time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::with_chunk_size(16);
    /// ```
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        RedBlackSet {
            tree: Tree::new(chunk_size),
        }
    }

    /// Inserts a key into the set. Returns `false` and leaves the set untouched if the key already
    /// exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = self.tree.insert(key);
        if !inserted {
            debug!("Ignoring duplicate key.");
        }
        inserted
    }

    /// Removes a key from the set and returns it. Returns `None` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let ret = self.tree.remove(key);
        if ret.is_none() {
            debug!("Key to remove was not found.");
        }
        ret
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        !self.tree.find(key).is_nil()
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.root().is_nil()
    }

    /// Clears the set, removing all keys.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        self.tree.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        self.tree.max()
    }

    /// Returns the height of the tree, where an empty set has height 0 and a single key has
    /// height 1.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns the number of black nodes on any path from the root down to an absent child,
    /// counting the root. An empty set has black height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.black_height(), 0);
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.black_height(), 1);
    /// ```
    pub fn black_height(&self) -> usize {
        self.tree.black_height()
    }

    /// Returns the color of the root. Returns `None` if the set is empty.
    pub fn root_color(&self) -> Option<Color> {
        let root = self.tree.root();
        if root.is_nil() {
            None
        } else {
            Some(self.tree.color(root))
        }
    }

    /// Returns an iterator that lazily visits every key in the given order. Each call starts a
    /// fresh walk from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackSet;
    /// use ordered_trees::Order;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.insert(3);
    ///
    /// assert_eq!(set.traverse(Order::PreOrder).collect::<Vec<&u32>>(), vec![&2, &1, &3]);
    /// ```
    pub fn traverse(&self, order: Order) -> RedBlackSetIter<T> {
        RedBlackSetIter {
            traversal: self.tree.traverse(order),
        }
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    pub fn iter(&self) -> RedBlackSetIter<T> {
        self.traverse(Order::InOrder)
    }

    /// Like `traverse`, but also yields the color of each key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::{Color, RedBlackSet};
    /// use ordered_trees::Order;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    ///
    /// assert_eq!(
    ///     set.traverse_colored(Order::InOrder).collect::<Vec<(&u32, Color)>>(),
    ///     vec![(&1, Color::Black), (&2, Color::Red)],
    /// );
    /// ```
    pub fn traverse_colored(&self, order: Order) -> impl Iterator<Item = (&T, Color)> {
        self.tree.traverse(order).map(|node| (node.key(), node.color()))
    }

    /// Returns a snapshot of the shape of the tree.
    pub fn summary(&self) -> Summary {
        Summary {
            len: self.len(),
            height: self.height(),
            root_color: self.root_color(),
            black_height: Some(self.black_height()),
        }
    }

    /// Checks the ordering invariant, every coloring rule, the parent links, and the cached
    /// length.
    pub fn validate(&self) -> Result<()> {
        self.tree.check().map(|_| ())
    }
}

impl<'a, T> IntoIterator for &'a RedBlackSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = RedBlackSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `RedBlackSet<T>`.
///
/// This iterator yields immutable references to keys in the order it was created with.
pub struct RedBlackSetIter<'a, T>
where
    T: 'a,
{
    traversal: Traversal<NodeRef<'a, T>>,
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.traversal.next().map(|node| node.key())
    }
}

impl<T> Default for RedBlackSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
