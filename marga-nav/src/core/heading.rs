//! Cardinal headings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Robot heading in the maze frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    /// +y
    #[default]
    Up,
    /// +x
    Right,
    /// -y
    Down,
    /// -x
    Left,
}

impl Heading {
    /// All headings in clockwise order starting from `Up`.
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    /// Unit step `(dx, dy)` for this heading.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, 1),
            Heading::Right => (1, 0),
            Heading::Down => (0, -1),
            Heading::Left => (-1, 0),
        }
    }

    /// Heading for a unit step, if it is one.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Heading> {
        match (dx, dy) {
            (0, 1) => Some(Heading::Up),
            (1, 0) => Some(Heading::Right),
            (0, -1) => Some(Heading::Down),
            (-1, 0) => Some(Heading::Left),
            _ => None,
        }
    }

    /// Heading after a counter-clockwise quarter turn.
    #[inline]
    pub fn left(self) -> Heading {
        match self {
            Heading::Up => Heading::Left,
            Heading::Right => Heading::Up,
            Heading::Down => Heading::Right,
            Heading::Left => Heading::Down,
        }
    }

    /// Heading after a clockwise quarter turn.
    #[inline]
    pub fn right(self) -> Heading {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    /// Opposite heading.
    #[inline]
    pub fn reverse(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Right => Heading::Left,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::Up => "up",
            Heading::Right => "right",
            Heading::Down => "down",
            Heading::Left => "left",
        };
        f.write_str(name)
    }
}
