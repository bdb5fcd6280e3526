use crate::arena::Entry;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// The side of a node that a child hangs off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The structural fields of a node. The sentinel has these and nothing else.
#[derive(Clone, Copy, Debug)]
pub struct Link {
    pub color: Color,
    pub parent: Entry,
    pub left: Entry,
    pub right: Entry,
}

impl Link {
    pub fn sentinel() -> Self {
        Link {
            color: Color::Black,
            parent: Entry::NIL,
            left: Entry::NIL,
            right: Entry::NIL,
        }
    }

    pub fn child(&self, side: Side) -> Entry {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut Entry {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A struct representing an internal node of a red black tree.
pub struct Node<T> {
    pub key: T,
    pub link: Link,
}

impl<T> Node<T> {
    pub fn new(key: T, parent: Entry) -> Self {
        Node {
            key,
            link: Link {
                color: Color::Red,
                parent,
                left: Entry::NIL,
                right: Entry::NIL,
            },
        }
    }
}
