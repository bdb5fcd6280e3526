use std::error;
use std::fmt;
use std::result;

/// A structural invariant that a tree failed to uphold.
///
/// These are reported by the `validate` method of each set. A correctly operating tree never
/// produces one, so any `Err` indicates a defect in the tree itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// An in-order walk produced a key that was not strictly greater than its predecessor.
    OutOfOrder,
    /// The cached number of keys disagrees with the number of nodes in the tree.
    LengthMismatch { expected: usize, actual: usize },
    /// A node's cached height is not one more than the height of its taller child.
    HeightMismatch { expected: usize, actual: usize },
    /// The child subtree heights of a node differ by more than one.
    Unbalanced { balance: i32 },
    /// The root of a red black tree is red.
    RedRoot,
    /// A red node has a red child.
    RedChildOfRed,
    /// Two paths from the same node to the sentinel pass through different numbers of black
    /// nodes.
    BlackHeightMismatch { left: usize, right: usize },
    /// The sentinel of a red black tree is red.
    RedSentinel,
    /// A child does not point back at its parent.
    BrokenParentLink,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfOrder => write!(f, "keys are not in strictly ascending order"),
            Error::LengthMismatch { expected, actual } => {
                write!(f, "expected {} nodes, found {}", expected, actual)
            },
            Error::HeightMismatch { expected, actual } => {
                write!(f, "expected height {}, found {}", expected, actual)
            },
            Error::Unbalanced { balance } => write!(f, "balance factor {} is out of range", balance),
            Error::RedRoot => write!(f, "root is red"),
            Error::RedChildOfRed => write!(f, "red node has a red child"),
            Error::BlackHeightMismatch { left, right } => {
                write!(f, "black heights differ: left {}, right {}", left, right)
            },
            Error::RedSentinel => write!(f, "sentinel is red"),
            Error::BrokenParentLink => write!(f, "child does not point back at its parent"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
