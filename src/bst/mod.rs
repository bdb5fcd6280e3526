//! Binary search tree without any rebalancing.
//!
//! Its depth grows linearly on sorted input, which makes it a baseline for the balanced trees in
//! this crate rather than a general purpose container.

mod node;
mod set;
mod tree;

pub use self::set::{BstSet, BstSetIter};
