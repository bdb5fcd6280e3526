use crate::red_black_tree::Color;

/// A read-only snapshot of the shape of a tree, intended for diagnostics and display.
///
/// The color fields are only populated by `RedBlackSet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub len: usize,
    pub height: usize,
    pub root_color: Option<Color>,
    pub black_height: Option<usize>,
}
