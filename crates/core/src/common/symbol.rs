//! Tape alphabet.
//!
//! Four coloured symbols can be stored on a tape. `Empty` is what the head
//! reads once it has moved past the last stored symbol; it never occupies a
//! tape cell itself.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DecodeError;

/// One symbol of the tape alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    /// Sentinel read past the end of the tape.
    Empty,
    /// Red, written `R`.
    Red,
    /// Blue, written `B`.
    Blue,
    /// Green, written `G`.
    Green,
    /// Yellow, written `Y`.
    Yellow,
}

impl Symbol {
    /// The four symbols that can be stored on a tape, in letter order `R B G Y`.
    pub const COLORS: [Self; 4] = [Self::Red, Self::Blue, Self::Green, Self::Yellow];

    /// Parses a tape letter.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Symbol`] for anything other than `R`, `B`, `G` or `Y`.
    pub fn from_letter(c: char) -> Result<Self, DecodeError> {
        match c {
            'R' => Ok(Self::Red),
            'B' => Ok(Self::Blue),
            'G' => Ok(Self::Green),
            'Y' => Ok(Self::Yellow),
            other => Err(DecodeError::Symbol(other)),
        }
    }

    /// Returns the tape letter, or `None` for [`Symbol::Empty`].
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Red => Some('R'),
            Self::Blue => Some('B'),
            Self::Green => Some('G'),
            Self::Yellow => Some('Y'),
        }
    }

    /// Returns `true` for the `Empty` sentinel.
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter() {
            Some(c) => write!(f, "{c}"),
            None => write!(f, "_"),
        }
    }
}
