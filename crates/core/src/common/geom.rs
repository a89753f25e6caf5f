//! Grid geometry.
//!
//! Positions use screen coordinates: `x` grows to the right and `y` grows
//! downward, so the identity orientation points `Down` toward higher rows.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A grid cell coordinate.
///
/// Signed so that a step off the top or left edge is representable and can be
/// rejected by a bounds check instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Position {
    /// Creates a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell in `direction`.
    pub const fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A heading on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward higher columns.
    Right,
    /// Toward higher rows.
    Down,
    /// Toward column 0.
    Left,
}

impl Direction {
    /// Unit step `(dx, dy)` for this heading.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }

    /// Quarter turn clockwise as seen on screen.
    pub const fn rotate_cw(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// Quarter turn counter-clockwise as seen on screen.
    pub const fn rotate_ccw(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
            Self::Right => Self::Up,
        }
    }
}

/// One of the five orientations a tile or endpoint can take.
///
/// Serialized with the short names used by level strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Identity: forward is `Down`.
    #[default]
    #[serde(rename = "ID")]
    Id,
    /// One quarter turn clockwise: forward is `Left`.
    #[serde(rename = "ROT1")]
    Rot1,
    /// Half turn: forward is `Up`.
    #[serde(rename = "ROT2")]
    Rot2,
    /// Three quarter turns clockwise: forward is `Right`.
    #[serde(rename = "ROT3")]
    Rot3,
    /// Identity mirrored left-to-right: forward is `Down`, side exits swapped.
    #[serde(rename = "MIR")]
    Mir,
}

impl Orientation {
    /// All orientations in rotation order, mirror last.
    pub const ALL: [Self; 5] = [Self::Id, Self::Rot1, Self::Rot2, Self::Rot3, Self::Mir];

    /// The heading a token leaves a tile with when it goes straight through.
    pub const fn forward(self) -> Direction {
        match self {
            Self::Id | Self::Mir => Direction::Down,
            Self::Rot1 => Direction::Left,
            Self::Rot2 => Direction::Up,
            Self::Rot3 => Direction::Right,
        }
    }

    /// Whether the side exits of a branch are swapped.
    pub const fn is_mirrored(self) -> bool {
        matches!(self, Self::Mir)
    }

    /// The serialized short name (`ID`, `ROT1`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Rot1 => "ROT1",
            Self::Rot2 => "ROT2",
            Self::Rot3 => "ROT3",
            Self::Mir => "MIR",
        }
    }
}
