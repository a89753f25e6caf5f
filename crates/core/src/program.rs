//! Program model.
//!
//! A program is a rectangular grid of oriented tiles with a start and an end
//! endpoint. This module provides:
//! 1. **Tiles:** [`TileKind`] and [`Tile`], the behaviour descriptor of one cell.
//! 2. **Endpoints:** Where the token enters and where it is accepted.
//! 3. **Program:** Bounds-checked storage and editing of the grid.
//!
//! A program is immutable during a run; the controller only hands out
//! mutable access while stopped.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common::{Direction, EditError, Orientation, Position, Symbol};

/// The behaviour family of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Carries the token forward.
    Conveyor,
    /// Branches on blue / red, passes everything else straight through.
    #[serde(rename = "BranchBR")]
    BranchBr,
    /// Branches on green / yellow, passes everything else straight through.
    #[serde(rename = "BranchGY")]
    BranchGy,
    /// Appends red and carries the token forward.
    WriteR,
    /// Appends blue and carries the token forward.
    WriteB,
    /// Appends green and carries the token forward.
    WriteG,
    /// Appends yellow and carries the token forward.
    WriteY,
}

impl TileKind {
    /// Every tile kind, in palette order.
    pub const ALL: [Self; 7] = [
        Self::Conveyor,
        Self::BranchBr,
        Self::BranchGy,
        Self::WriteR,
        Self::WriteB,
        Self::WriteG,
        Self::WriteY,
    ];

    /// For branches, the `(clockwise, counter-clockwise)` exit colours.
    pub const fn branch_colors(self) -> Option<(Symbol, Symbol)> {
        match self {
            Self::BranchBr => Some((Symbol::Blue, Symbol::Red)),
            Self::BranchGy => Some((Symbol::Green, Symbol::Yellow)),
            _ => None,
        }
    }

    /// For writers, the colour appended to the tape.
    pub const fn written(self) -> Option<Symbol> {
        match self {
            Self::WriteR => Some(Symbol::Red),
            Self::WriteB => Some(Symbol::Blue),
            Self::WriteG => Some(Symbol::Green),
            Self::WriteY => Some(Symbol::Yellow),
            _ => None,
        }
    }
}

/// One grid cell's behaviour: a kind plus an orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Behaviour family.
    pub kind: TileKind,
    /// Rotation or mirror applied to the kind's identity layout.
    pub orientation: Orientation,
}

impl Tile {
    /// Creates a tile.
    pub const fn new(kind: TileKind, orientation: Orientation) -> Self {
        Self { kind, orientation }
    }

    /// Straight-through exit heading.
    pub const fn forward(self) -> Direction {
        self.orientation.forward()
    }

    /// Side exit taken by a branch's first colour.
    pub const fn first_exit(self) -> Direction {
        if self.orientation.is_mirrored() {
            self.forward().rotate_ccw()
        } else {
            self.forward().rotate_cw()
        }
    }

    /// Side exit taken by a branch's second colour.
    pub const fn second_exit(self) -> Direction {
        if self.orientation.is_mirrored() {
            self.forward().rotate_cw()
        } else {
            self.forward().rotate_ccw()
        }
    }
}

/// A start or end cell with its orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// Cell holding the endpoint.
    pub position: Position,
    /// Orientation; for the start, its forward heading is the first move.
    pub orientation: Orientation,
}

impl Endpoint {
    /// Creates an endpoint.
    pub const fn new(position: Position, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

/// A grid of tiles with start and end endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    cols: u32,
    rows: u32,
    cells: BTreeMap<Position, Tile>,
    start: Endpoint,
    end: Endpoint,
}

impl Program {
    /// Creates an empty `cols` x `rows` program.
    ///
    /// The start sits at `(cols / 2, 0)` and the end at `(cols / 2, rows - 1)`,
    /// both with the identity orientation.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::BadDimensions`] if either dimension is zero or
    /// does not fit a signed coordinate.
    pub fn new(cols: u32, rows: u32) -> Result<Self, EditError> {
        if cols == 0 || rows == 0 || i32::try_from(cols).is_err() || i32::try_from(rows).is_err() {
            return Err(EditError::BadDimensions { cols, rows });
        }
        let mid = (cols / 2) as i32;
        Ok(Self {
            cols,
            rows,
            cells: BTreeMap::new(),
            start: Endpoint::new(Position::new(mid, 0), Orientation::Id),
            end: Endpoint::new(Position::new(mid, rows as i32 - 1), Orientation::Id),
        })
    }

    /// Grid width.
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Grid height.
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// The start endpoint.
    pub const fn start(&self) -> Endpoint {
        self.start
    }

    /// The end endpoint.
    pub const fn end(&self) -> Endpoint {
        self.end
    }

    /// Whether `position` lies inside the grid.
    pub const fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.cols
            && (position.y as u32) < self.rows
    }

    /// The tile at `position`, if any.
    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.cells.get(&position).copied()
    }

    /// All placed tiles ordered by column, then row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.cells.iter().map(|(p, t)| (*p, *t))
    }

    /// Number of placed tiles.
    pub fn tile_count(&self) -> usize {
        self.cells.len()
    }

    /// Places `tile` at `position`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// [`EditError::OutOfBounds`] outside the grid, [`EditError::Reserved`]
    /// on the start or end cell.
    pub fn set_tile(&mut self, position: Position, tile: Tile) -> Result<(), EditError> {
        self.check_bounds(position)?;
        if position == self.start.position || position == self.end.position {
            return Err(EditError::Reserved {
                x: position.x,
                y: position.y,
            });
        }
        let _ = self.cells.insert(position, tile);
        Ok(())
    }

    /// Removes and returns the tile at `position`.
    pub fn clear_tile(&mut self, position: Position) -> Option<Tile> {
        self.cells.remove(&position)
    }

    /// Moves the start endpoint; any tile on the target cell is removed.
    ///
    /// # Errors
    ///
    /// [`EditError::OutOfBounds`] outside the grid, [`EditError::Reserved`]
    /// on the end cell.
    pub fn set_start(&mut self, start: Endpoint) -> Result<(), EditError> {
        self.check_bounds(start.position)?;
        if start.position == self.end.position {
            return Err(EditError::Reserved {
                x: start.position.x,
                y: start.position.y,
            });
        }
        let _ = self.cells.remove(&start.position);
        self.start = start;
        Ok(())
    }

    /// Moves the end endpoint; any tile on the target cell is removed.
    ///
    /// # Errors
    ///
    /// [`EditError::OutOfBounds`] outside the grid, [`EditError::Reserved`]
    /// on the start cell.
    pub fn set_end(&mut self, end: Endpoint) -> Result<(), EditError> {
        self.check_bounds(end.position)?;
        if end.position == self.start.position {
            return Err(EditError::Reserved {
                x: end.position.x,
                y: end.position.y,
            });
        }
        let _ = self.cells.remove(&end.position);
        self.end = end;
        Ok(())
    }

    /// Moves both endpoints at once, so they may trade places.
    ///
    /// # Errors
    ///
    /// [`EditError::OutOfBounds`] if either lies outside the grid,
    /// [`EditError::Reserved`] if both name the same cell.
    pub fn set_endpoints(&mut self, start: Endpoint, end: Endpoint) -> Result<(), EditError> {
        self.check_bounds(start.position)?;
        self.check_bounds(end.position)?;
        if start.position == end.position {
            return Err(EditError::Reserved {
                x: end.position.x,
                y: end.position.y,
            });
        }
        let _ = self.cells.remove(&start.position);
        let _ = self.cells.remove(&end.position);
        self.start = start;
        self.end = end;
        Ok(())
    }

    fn check_bounds(&self, position: Position) -> Result<(), EditError> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(EditError::OutOfBounds {
                x: position.x,
                y: position.y,
                cols: self.cols,
                rows: self.rows,
            })
        }
    }
}
