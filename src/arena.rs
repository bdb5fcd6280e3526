//! Chunked allocator for tree nodes that are linked by handle instead of by pointer.

use std::mem;
use std::ops::{Index, IndexMut};

/// A handle to an object stored in a `TypedArena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Entry {
    chunk_index: usize,
    block_index: usize,
}

impl Entry {
    /// A handle that never refers to an allocated object.
    ///
    /// Trees use it as the handle of their shared sentinel node.
    pub const NIL: Entry = Entry {
        chunk_index: usize::MAX,
        block_index: usize::MAX,
    };

    /// Returns `true` if this is the `NIL` handle.
    pub fn is_nil(self) -> bool {
        self == Entry::NIL
    }
}

enum Block<T> {
    Occupied(T),
    Vacant(Option<Entry>),
}

/// An allocator for a single type of object that hands out copyable `Entry` handles.
///
/// Objects are stored in fixed-size chunks that are never reallocated, and freed blocks are
/// threaded onto a free list so that later allocations reuse them. Every object still in the arena
/// is dropped when the arena is dropped.
///
/// # Examples
///
/// ```
/// use ordered_trees::arena::TypedArena;
///
/// let mut arena = TypedArena::new(1024);
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert!(arena.is_empty());
/// ```
pub struct TypedArena<T> {
    head: Option<Entry>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    len: usize,
    capacity: usize,
}

impl<T> TypedArena<T> {
    fn block(&self, entry: Entry) -> Option<&Block<T>> {
        self.chunks
            .get(entry.chunk_index)
            .and_then(|chunk| chunk.get(entry.block_index))
    }

    fn block_mut(&mut self, entry: Entry) -> Option<&mut Block<T>> {
        self.chunks
            .get_mut(entry.chunk_index)
            .and_then(|chunk| chunk.get_mut(entry.block_index))
    }

    /// Constructs a new, empty `TypedArena<T>` that allocates `chunk_size` objects at a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::new(1024);
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Expected a positive chunk size.");
        TypedArena {
            head: None,
            chunks: Vec::new(),
            chunk_size,
            len: 0,
            capacity: 0,
        }
    }

    /// Moves `value` into the arena and returns its handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(x), Some(&0));
    /// ```
    pub fn allocate(&mut self, value: T) -> Entry {
        self.len += 1;

        if let Some(entry) = self.head.take() {
            let vacant = mem::replace(
                &mut self.chunks[entry.chunk_index][entry.block_index],
                Block::Occupied(value),
            );
            match vacant {
                Block::Vacant(next) => self.head = next,
                Block::Occupied(_) => panic!("Expected a vacant block."),
            }
            return entry;
        }

        if self.len > self.capacity {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
            self.capacity += self.chunk_size;
        }

        let chunk_index = self.chunks.len() - 1;
        let chunk = &mut self.chunks[chunk_index];
        chunk.push(Block::Occupied(value));
        Entry {
            chunk_index,
            block_index: chunk.len() - 1,
        }
    }

    /// Removes the object behind `entry` from the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `entry` does not refer to an allocated object.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(x), 0);
    /// ```
    pub fn free(&mut self, entry: Entry) -> T {
        let next = self.head;
        let block = match self.block_mut(entry) {
            Some(block) => block,
            None => panic!("Error: attempting to free invalid block."),
        };
        if let Block::Vacant(_) = block {
            panic!("Error: attempting to free vacant block.");
        }

        match mem::replace(block, Block::Vacant(next)) {
            Block::Occupied(value) => {
                self.len -= 1;
                self.head = Some(entry);
                value
            },
            Block::Vacant(_) => unreachable!(),
        }
    }

    /// Returns a reference to the object behind `entry`, or `None` if `entry` is vacant or was
    /// never handed out.
    pub fn get(&self, entry: Entry) -> Option<&T> {
        match self.block(entry) {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the object behind `entry`, or `None` if `entry` is vacant
    /// or was never handed out.
    pub fn get_mut(&mut self, entry: Entry) -> Option<&mut T> {
        match self.block_mut(entry) {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of objects currently allocated.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no objects are currently allocated.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every object and releases all chunks. Handles obtained before the call are invalid
    /// afterwards.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.head = None;
        self.len = 0;
        self.capacity = 0;
    }
}

impl<T> Index<Entry> for TypedArena<T> {
    type Output = T;

    fn index(&self, entry: Entry) -> &Self::Output {
        self.get(entry).expect("Error: entry out of bounds.")
    }
}

impl<T> IndexMut<Entry> for TypedArena<T> {
    fn index_mut(&mut self, entry: Entry) -> &mut Self::Output {
        self.get_mut(entry).expect("Error: entry out of bounds.")
    }
}
