use crate::arena::{Entry, TypedArena};
use crate::error::{Error, Result};
use crate::red_black_tree::node::{Color, Link, Node, Side};
use crate::traversal::{self, Cursor, Order, Traversal};
use std::cmp::Ordering;
use std::mem;

/// The nodes of a red black tree together with its sentinel.
///
/// `Entry::NIL` stands for the sentinel everywhere a child or parent is absent. Reads of its
/// color, parent, or children go to `sentinel`, and so do writes: deletion records the parent of
/// a removed leaf in the sentinel before fixing the tree up from there.
pub struct Tree<T> {
    arena: TypedArena<Node<T>>,
    sentinel: Link,
    root: Entry,
}

impl<T> Tree<T> {
    pub fn new(chunk_size: usize) -> Self {
        Tree {
            arena: TypedArena::new(chunk_size),
            sentinel: Link::sentinel(),
            root: Entry::NIL,
        }
    }

    pub fn root(&self) -> Entry {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    fn link(&self, entry: Entry) -> &Link {
        if entry.is_nil() {
            &self.sentinel
        } else {
            &self.arena[entry].link
        }
    }

    fn link_mut(&mut self, entry: Entry) -> &mut Link {
        if entry.is_nil() {
            &mut self.sentinel
        } else {
            &mut self.arena[entry].link
        }
    }

    pub fn key(&self, entry: Entry) -> &T {
        &self.arena[entry].key
    }

    pub fn color(&self, entry: Entry) -> Color {
        self.link(entry).color
    }

    fn set_color(&mut self, entry: Entry, color: Color) {
        self.link_mut(entry).color = color;
    }

    fn parent(&self, entry: Entry) -> Entry {
        self.link(entry).parent
    }

    fn set_parent(&mut self, entry: Entry, parent: Entry) {
        self.link_mut(entry).parent = parent;
    }

    pub fn child(&self, entry: Entry, side: Side) -> Entry {
        self.link(entry).child(side)
    }

    fn set_child(&mut self, entry: Entry, side: Side, child: Entry) {
        *self.link_mut(entry).child_mut(side) = child;
    }

    fn side_of(&self, entry: Entry) -> Side {
        if entry == self.child(self.parent(entry), Side::Left) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Points whichever slot of `parent` held `old` at `new`. A `NIL` parent means `old` was the
    /// root.
    fn replace_child(&mut self, parent: Entry, old: Entry, new: Entry) {
        if parent.is_nil() {
            self.root = new;
        } else if self.child(parent, Side::Left) == old {
            self.set_child(parent, Side::Left, new);
        } else {
            self.set_child(parent, Side::Right, new);
        }
    }

    /// Promotes the child of `entry` opposite to `side` into its position, so that `entry` moves
    /// down towards `side`.
    fn rotate(&mut self, entry: Entry, side: Side) {
        trace!("Rotating {:?}.", side);
        let child = self.child(entry, side.opposite());
        let grandchild = self.child(child, side);

        self.set_child(entry, side.opposite(), grandchild);
        if !grandchild.is_nil() {
            self.set_parent(grandchild, entry);
        }

        let parent = self.parent(entry);
        self.set_parent(child, parent);
        self.replace_child(parent, entry, child);

        self.set_child(child, side, entry);
        self.set_parent(entry, child);
    }

    /// Replaces the subtree rooted at `old` with the subtree rooted at `new`. The parent of `new`
    /// is written even when `new` is the sentinel.
    fn transplant(&mut self, old: Entry, new: Entry) {
        let parent = self.parent(old);
        self.replace_child(parent, old, new);
        self.set_parent(new, parent);
    }

    fn extreme(&self, mut entry: Entry, side: Side) -> Entry {
        while !self.child(entry, side).is_nil() {
            entry = self.child(entry, side);
        }
        entry
    }

    pub fn min(&self) -> Option<&T> {
        if self.root.is_nil() {
            return None;
        }
        Some(self.key(self.extreme(self.root, Side::Left)))
    }

    pub fn max(&self) -> Option<&T> {
        if self.root.is_nil() {
            return None;
        }
        Some(self.key(self.extreme(self.root, Side::Right)))
    }

    fn fix_insert(&mut self, mut entry: Entry) {
        while self.color(self.parent(entry)) == Color::Red {
            let parent = self.parent(entry);
            let grandparent = self.parent(parent);
            let side = self.side_of(parent);
            let uncle = self.child(grandparent, side.opposite());

            if self.color(uncle) == Color::Red {
                trace!("Recoloring around a red uncle.");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                entry = grandparent;
                continue;
            }

            if entry == self.child(parent, side.opposite()) {
                entry = parent;
                self.rotate(entry, side);
            }

            let parent = self.parent(entry);
            let grandparent = self.parent(parent);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    fn fix_delete(&mut self, mut entry: Entry) {
        while entry != self.root && self.color(entry) == Color::Black {
            let parent = self.parent(entry);
            let side = self.side_of(entry);
            let mut sibling = self.child(parent, side.opposite());

            if self.color(sibling) == Color::Red {
                trace!("Rotating a red sibling above the parent.");
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.child(parent, side.opposite());
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, side.opposite());
            if self.color(near) == Color::Black && self.color(far) == Color::Black {
                self.set_color(sibling, Color::Red);
                entry = parent;
                continue;
            }

            if self.color(far) == Color::Black {
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, side.opposite());
                sibling = self.child(parent, side.opposite());
            }

            let parent_color = self.color(parent);
            let far = self.child(sibling, side.opposite());
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            self.set_color(far, Color::Black);
            self.rotate(parent, side);
            entry = self.root;
        }

        self.set_color(entry, Color::Black);
    }

    pub fn find(&self, key: &T) -> Entry
    where
        T: Ord,
    {
        let mut curr = self.root;
        while !curr.is_nil() {
            curr = match key.cmp(self.key(curr)) {
                Ordering::Less => self.child(curr, Side::Left),
                Ordering::Greater => self.child(curr, Side::Right),
                Ordering::Equal => return curr,
            };
        }
        Entry::NIL
    }

    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let mut parent = Entry::NIL;
        let mut side = Side::Left;
        let mut curr = self.root;
        while !curr.is_nil() {
            parent = curr;
            side = match key.cmp(self.key(curr)) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return false,
            };
            curr = self.child(curr, side);
        }

        let entry = self.arena.allocate(Node::new(key, parent));
        if parent.is_nil() {
            self.root = entry;
        } else {
            self.set_child(parent, side, entry);
        }
        self.fix_insert(entry);
        true
    }

    pub fn remove(&mut self, key: &T) -> Option<T>
    where
        T: Ord,
    {
        let entry = self.find(key);
        if entry.is_nil() {
            return None;
        }

        // A node with two children takes over its successor's key, and the successor, which has no
        // left child, is unlinked in its place.
        let right = self.child(entry, Side::Right);
        let target = if self.child(entry, Side::Left).is_nil() || right.is_nil() {
            entry
        } else {
            self.extreme(right, Side::Left)
        };

        let replacement = match self.child(target, Side::Left) {
            left if left.is_nil() => self.child(target, Side::Right),
            left => left,
        };
        let removed_color = self.color(target);
        self.transplant(target, replacement);

        let Node { key: target_key, .. } = self.arena.free(target);
        let removed = if target == entry {
            target_key
        } else {
            mem::replace(&mut self.arena[entry].key, target_key)
        };

        if removed_color == Color::Black {
            self.fix_delete(replacement);
        }
        Some(removed)
    }

    /// Releases every node, children before their parent, and resets the sentinel.
    pub fn clear(&mut self) {
        let entries: Vec<Entry> = self
            .traverse(Order::PostOrder)
            .map(|node| node.entry)
            .collect();
        for entry in entries {
            self.arena.free(entry);
        }
        self.arena.clear();
        self.sentinel = Link::sentinel();
        self.root = Entry::NIL;
    }

    fn subtree_height(&self, entry: Entry) -> usize {
        if entry.is_nil() {
            return 0;
        }
        let left = self.subtree_height(self.child(entry, Side::Left));
        let right = self.subtree_height(self.child(entry, Side::Right));
        left.max(right) + 1
    }

    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    /// Counts the black nodes on the leftmost path from the root, including the root and
    /// excluding the sentinel.
    pub fn black_height(&self) -> usize {
        let mut ret = 0;
        let mut curr = self.root;
        while !curr.is_nil() {
            if self.color(curr) == Color::Black {
                ret += 1;
            }
            curr = self.child(curr, Side::Left);
        }
        ret
    }

    pub fn traverse(&self, order: Order) -> Traversal<NodeRef<T>> {
        let root = if self.root.is_nil() {
            None
        } else {
            Some(NodeRef {
                tree: self,
                entry: self.root,
            })
        };
        Traversal::new(root, order)
    }

    fn check_subtree(&self, entry: Entry) -> Result<usize> {
        if entry.is_nil() {
            return Ok(0);
        }

        let mut black_heights = [0; 2];
        for (i, side) in [Side::Left, Side::Right].iter().enumerate() {
            let child = self.child(entry, *side);
            if child.is_nil() {
                continue;
            }
            if self.parent(child) != entry {
                return Err(Error::BrokenParentLink);
            }
            if self.color(entry) == Color::Red && self.color(child) == Color::Red {
                return Err(Error::RedChildOfRed);
            }
            black_heights[i] = self.check_subtree(child)?;
        }

        let [left, right] = black_heights;
        if left != right {
            return Err(Error::BlackHeightMismatch { left, right });
        }
        match self.color(entry) {
            Color::Black => Ok(left + 1),
            Color::Red => Ok(left),
        }
    }

    /// Checks every red black invariant along with ordering and parent links, and returns the
    /// number of reachable nodes.
    pub fn check(&self) -> Result<usize>
    where
        T: Ord,
    {
        if self.sentinel.color != Color::Black {
            return Err(Error::RedSentinel);
        }
        if !self.root.is_nil() {
            if self.color(self.root) != Color::Black {
                return Err(Error::RedRoot);
            }
            if !self.parent(self.root).is_nil() {
                return Err(Error::BrokenParentLink);
            }
        }
        self.check_subtree(self.root)?;

        let count = traversal::check_ascending(self.traverse(Order::InOrder).map(|node| node.key()))?;
        if count != self.len() {
            return Err(Error::LengthMismatch {
                expected: self.len(),
                actual: count,
            });
        }
        Ok(count)
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// A read-only position in a `Tree<T>`. Never refers to the sentinel.
pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    entry: Entry,
}

impl<'a, T> NodeRef<'a, T> {
    pub fn key(&self) -> &'a T {
        let tree: &'a Tree<T> = self.tree;
        tree.key(self.entry)
    }

    pub fn color(&self) -> Color {
        self.tree.color(self.entry)
    }

    fn step(&self, side: Side) -> Option<Self> {
        let entry = self.tree.child(self.entry, side);
        if entry.is_nil() {
            None
        } else {
            Some(NodeRef {
                tree: self.tree,
                entry,
            })
        }
    }
}

impl<'a, T> Cursor for NodeRef<'a, T> {
    fn left(&self) -> Option<Self> {
        self.step(Side::Left)
    }

    fn right(&self) -> Option<Self> {
        self.step(Side::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::Tree;
    use crate::error::Error;
    use crate::red_black_tree::node::{Color, Side};
    use crate::Order;

    fn shape(tree: &Tree<u32>) -> Vec<(u32, Color)> {
        tree.traverse(Order::PreOrder)
            .map(|node| (*node.key(), node.color()))
            .collect()
    }

    #[test]
    fn test_insert_recolors_red_uncle() {
        let mut tree = Tree::new(16);
        for key in &[20, 10, 30, 5] {
            tree.insert(*key);
        }
        assert_eq!(
            shape(&tree),
            vec![
                (20, Color::Black),
                (10, Color::Black),
                (5, Color::Red),
                (30, Color::Black),
            ],
        );
        assert_eq!(tree.check(), Ok(4));
    }

    #[test]
    fn test_insert_zig_zag() {
        let mut tree = Tree::new(16);
        for key in &[30, 10, 20] {
            tree.insert(*key);
        }
        assert_eq!(
            shape(&tree),
            vec![(20, Color::Black), (10, Color::Red), (30, Color::Red)],
        );
        assert_eq!(tree.check(), Ok(3));
    }

    #[test]
    fn test_remove_black_leaf_with_red_sibling() {
        let mut tree = Tree::new(16);
        for key in 1..=6 {
            tree.insert(key);
        }
        assert_eq!(
            shape(&tree),
            vec![
                (2, Color::Black),
                (1, Color::Black),
                (4, Color::Red),
                (3, Color::Black),
                (5, Color::Black),
                (6, Color::Red),
            ],
        );

        assert_eq!(tree.remove(&1), Some(1));
        assert_eq!(tree.check(), Ok(5));
        assert_eq!(
            shape(&tree),
            vec![
                (4, Color::Black),
                (2, Color::Black),
                (3, Color::Red),
                (5, Color::Black),
                (6, Color::Red),
            ],
        );
    }

    #[test]
    fn test_remove_two_children_keeps_node() {
        let mut tree = Tree::new(16);
        for key in &[20, 10, 30, 25, 35] {
            tree.insert(*key);
        }
        let root = tree.root();

        assert_eq!(tree.remove(&20), Some(20));
        assert_eq!(tree.root(), root);
        assert_eq!(*tree.key(root), 25);
        assert!(tree.check().is_ok());
    }

    #[test]
    fn test_remove_last() {
        let mut tree = Tree::new(16);
        tree.insert(1);
        assert_eq!(tree.remove(&1), Some(1));
        assert!(tree.root().is_nil());
        assert_eq!(tree.color(tree.root()), Color::Black);
        assert_eq!(tree.check(), Ok(0));
    }

    #[test]
    fn test_check_detects_red_root() {
        let mut tree = Tree::new(16);
        tree.insert(1);
        let root = tree.root();
        tree.set_color(root, Color::Red);
        assert_eq!(tree.check(), Err(Error::RedRoot));
    }

    #[test]
    fn test_check_detects_black_height_mismatch() {
        let mut tree = Tree::new(16);
        for key in &[2, 1, 3] {
            tree.insert(*key);
        }
        let left = tree.child(tree.root(), Side::Left);
        tree.set_color(left, Color::Black);
        assert_eq!(
            tree.check(),
            Err(Error::BlackHeightMismatch { left: 1, right: 0 }),
        );
    }

    #[test]
    fn test_check_detects_red_child_of_red() {
        let mut tree = Tree::new(16);
        for key in &[2, 1, 3, 4] {
            tree.insert(*key);
        }
        let right = tree.child(tree.root(), Side::Right);
        tree.set_color(right, Color::Red);
        assert_eq!(tree.check(), Err(Error::RedChildOfRed));
    }

    #[test]
    fn test_clear() {
        let mut tree = Tree::new(2);
        for key in 0..10 {
            tree.insert(key);
        }
        tree.clear();
        assert_eq!(tree.len(), 0);
        assert!(tree.root().is_nil());
        assert!(tree.insert(3));
        assert_eq!(tree.check(), Ok(1));
    }
}
