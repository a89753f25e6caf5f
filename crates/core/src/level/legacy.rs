//! Legacy positional program strings.
//!
//! ```text
//! lvl<cols>x<rows>:<cell><cell>...
//! ```
//!
//! Exactly `cols * rows` two-character cells follow the colon in row-major
//! order. The first character is the tile kind (`.` empty, `c` conveyor,
//! `b` blue/red branch, `g` green/yellow branch, `R` `B` `G` `Y` writers),
//! the second the orientation (`0`..`3` quarter turns, `m` mirror, `.` for an
//! empty cell). Endpoints are not stored: they take [`Program::new`]'s
//! default cells, which must therefore be empty in the string.

use super::LEGACY_PREFIX;
use crate::common::{DecodeError, Orientation, Position};
use crate::program::{Program, Tile, TileKind};

/// Decodes a `lvl` string into a program.
///
/// # Errors
///
/// Returns [`DecodeError::Legacy`] for any deviation from the grammar.
pub fn decode(text: &str) -> Result<Program, DecodeError> {
    let body = text
        .strip_prefix(LEGACY_PREFIX)
        .ok_or_else(|| legacy("missing `lvl` prefix"))?;
    let (dims, cells) = body
        .split_once(':')
        .ok_or_else(|| legacy("missing `:` after the dimensions"))?;
    let (cols, rows) = dims
        .split_once('x')
        .ok_or_else(|| legacy("dimensions must look like `9x9`"))?;
    let cols: u32 = cols
        .parse()
        .map_err(|_| legacy(format!("bad column count {cols:?}")))?;
    let rows: u32 = rows
        .parse()
        .map_err(|_| legacy(format!("bad row count {rows:?}")))?;
    let mut program = Program::new(cols, rows).map_err(|e| legacy(e.to_string()))?;

    let chars: Vec<char> = cells.chars().collect();
    let expected = cols as usize * rows as usize * 2;
    if chars.len() != expected {
        return Err(legacy(format!(
            "expected {expected} cell characters, found {}",
            chars.len()
        )));
    }

    for (index, pair) in chars.chunks_exact(2).enumerate() {
        let position = Position::new(
            (index % cols as usize) as i32,
            (index / cols as usize) as i32,
        );
        let Some(kind) = kind_from_char(pair[0])? else {
            if pair[1] != '.' {
                return Err(legacy(format!(
                    "empty cell {position} has orientation {:?}",
                    pair[1]
                )));
            }
            continue;
        };
        let orientation = orientation_from_char(pair[1])?;
        program
            .set_tile(position, Tile::new(kind, orientation))
            .map_err(|e| legacy(e.to_string()))?;
    }
    Ok(program)
}

/// Encodes a program in the legacy grammar.
///
/// Endpoint positions and orientations are not representable; a decoded
/// string always has the default endpoints.
pub fn encode(program: &Program) -> String {
    let mut out = format!("{LEGACY_PREFIX}{}x{}:", program.cols(), program.rows());
    for y in 0..program.rows() as i32 {
        for x in 0..program.cols() as i32 {
            match program.tile(Position::new(x, y)) {
                Some(tile) => {
                    out.push(kind_char(tile.kind));
                    out.push(orientation_char(tile.orientation));
                }
                None => out.push_str(".."),
            }
        }
    }
    out
}

fn legacy(reason: impl Into<String>) -> DecodeError {
    DecodeError::Legacy(reason.into())
}

fn kind_from_char(c: char) -> Result<Option<TileKind>, DecodeError> {
    Ok(Some(match c {
        '.' => return Ok(None),
        'c' => TileKind::Conveyor,
        'b' => TileKind::BranchBr,
        'g' => TileKind::BranchGy,
        'R' => TileKind::WriteR,
        'B' => TileKind::WriteB,
        'G' => TileKind::WriteG,
        'Y' => TileKind::WriteY,
        other => return Err(legacy(format!("unknown tile kind {other:?}"))),
    }))
}

const fn kind_char(kind: TileKind) -> char {
    match kind {
        TileKind::Conveyor => 'c',
        TileKind::BranchBr => 'b',
        TileKind::BranchGy => 'g',
        TileKind::WriteR => 'R',
        TileKind::WriteB => 'B',
        TileKind::WriteG => 'G',
        TileKind::WriteY => 'Y',
    }
}

fn orientation_from_char(c: char) -> Result<Orientation, DecodeError> {
    match c {
        '0' => Ok(Orientation::Id),
        '1' => Ok(Orientation::Rot1),
        '2' => Ok(Orientation::Rot2),
        '3' => Ok(Orientation::Rot3),
        'm' => Ok(Orientation::Mir),
        other => Err(legacy(format!("unknown orientation {other:?}"))),
    }
}

const fn orientation_char(orientation: Orientation) -> char {
    match orientation {
        Orientation::Id => '0',
        Orientation::Rot1 => '1',
        Orientation::Rot2 => '2',
        Orientation::Rot3 => '3',
        Orientation::Mir => 'm',
    }
}
