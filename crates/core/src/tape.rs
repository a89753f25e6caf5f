//! The symbol tape.
//!
//! A tape is a queue of coloured symbols with a read head. Reading consumes
//! from the head end and writing appends at the tail, so the unread part of
//! the tape is always `symbols[head..]`.
//!
//! Two tapes compare equal when their unread contents are equal, regardless
//! of how many symbols each has already consumed.

use std::fmt;
use std::str::FromStr;

use crate::common::{DecodeError, Symbol};

/// An ordered symbol sequence with a head cursor.
///
/// `Clone` produces an independent value: moving the head of a clone never
/// affects the original. Test cases rely on this to run every case against
/// a fresh copy of its input.
#[derive(Clone, Debug, Default)]
pub struct Tape {
    symbols: Vec<Symbol>,
    head: usize,
}

impl Tape {
    /// Creates an empty tape.
    pub const fn new() -> Self {
        Self {
            symbols: Vec::new(),
            head: 0,
        }
    }

    /// Creates a tape holding `symbols` with the head on the first one.
    ///
    /// `Empty` entries are dropped; they cannot occupy a cell.
    pub fn from_symbols<I: IntoIterator<Item = Symbol>>(symbols: I) -> Self {
        Self {
            symbols: symbols.into_iter().filter(|s| !s.is_empty()).collect(),
            head: 0,
        }
    }

    /// Symbol under the head, or [`Symbol::Empty`] past the end.
    pub fn head(&self) -> Symbol {
        self.symbols
            .get(self.head)
            .copied()
            .unwrap_or(Symbol::Empty)
    }

    /// Reads the symbol under the head and moves the head forward.
    pub fn pop(&mut self) -> Symbol {
        let symbol = self.head();
        self.advance();
        symbol
    }

    /// Moves the head forward by one cell; no-op past the end.
    pub fn advance(&mut self) {
        if self.head < self.symbols.len() {
            self.head += 1;
        }
    }

    /// Appends a symbol at the tail. Writing `Empty` does nothing.
    pub fn push(&mut self, symbol: Symbol) {
        if !symbol.is_empty() {
            self.symbols.push(symbol);
        }
    }

    /// The unread symbols, head first.
    pub fn contents(&self) -> &[Symbol] {
        &self.symbols[self.head..]
    }

    /// Index of the head within everything ever written.
    pub const fn head_index(&self) -> usize {
        self.head
    }

    /// Number of unread symbols.
    pub fn len(&self) -> usize {
        self.contents().len()
    }

    /// Whether there is nothing left to read.
    pub fn is_empty(&self) -> bool {
        self.contents().is_empty()
    }
}

impl PartialEq for Tape {
    fn eq(&self, other: &Self) -> bool {
        self.contents() == other.contents()
    }
}

impl Eq for Tape {}

impl FromStr for Tape {
    type Err = DecodeError;

    /// Parses a string of tape letters (`R`, `B`, `G`, `Y`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .map(Symbol::from_letter)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { symbols, head: 0 })
    }
}

impl fmt::Display for Tape {
    /// Writes the unread contents as tape letters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.contents() {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
