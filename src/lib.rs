//! Ordered sets backed by three binary search tree variants.
//!
//! - [`bst::BstSet`]: a plain binary search tree with no rebalancing.
//! - [`avl_tree::AvlSet`]: a tree whose child subtree heights differ by at most one.
//! - [`red_black_tree::RedBlackSet`]: a tree kept approximately balanced by a color bit per node.
//!
//! All three share the same contract: inserting a duplicate key is a no-op, removing an absent
//! key leaves the tree untouched, and traversals are lazy and can be restarted at any time.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod arena;
pub mod avl_tree;
pub mod bst;
mod error;
pub mod red_black_tree;
mod summary;
mod traversal;

pub use crate::error::{Error, Result};
pub use crate::summary::Summary;
pub use crate::traversal::Order;
