//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! Nodes live in a `TypedArena` and refer to each other by `Entry`. Every absent child, and the
//! parent of the root, is the shared sentinel `Entry::NIL`, which always reads as black.

mod node;
mod set;
mod tree;

pub use self::node::Color;
pub use self::set::{RedBlackSet, RedBlackSetIter, DEFAULT_CHUNK_SIZE};
