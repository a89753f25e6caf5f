//! Legacy `lvl` program string tests.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tapeworks_core::common::{DecodeError, Orientation, Position};
use tapeworks_core::level::{self, Decoded, legacy};
use tapeworks_core::program::{Program, Tile, TileKind};

use crate::common::builder::straight_line;

const ONE_CONVEYOR: &str = "lvl3x3:........c0........";

#[test]
fn decodes_a_single_conveyor() {
    let program = legacy::decode(ONE_CONVEYOR).unwrap();
    assert_eq!(program, straight_line(3, 3));
}

#[test]
fn top_level_decode_yields_a_bare_program() {
    assert_eq!(
        level::decode(ONE_CONVEYOR).unwrap(),
        Decoded::Program(straight_line(3, 3))
    );
}

#[test]
fn encode_then_decode_keeps_every_tile() {
    let mut program = Program::new(4, 3).unwrap();
    let tiles = [
        (0, 0, TileKind::BranchBr, Orientation::Mir),
        (3, 1, TileKind::BranchGy, Orientation::Rot1),
        (1, 1, TileKind::WriteB, Orientation::Rot3),
        (0, 2, TileKind::WriteY, Orientation::Rot2),
    ];
    for (x, y, kind, orientation) in tiles {
        let tile = Tile::new(kind, orientation);
        program.set_tile(Position::new(x, y), tile).unwrap();
    }
    let encoded = legacy::encode(&program);
    assert!(encoded.starts_with("lvl4x3:bm"));
    assert_eq!(encoded.len(), "lvl4x3:".len() + 4 * 3 * 2);
    assert_eq!(legacy::decode(&encoded).unwrap(), program);
}

#[test]
fn encoding_uses_row_major_pairs() {
    let mut program = Program::new(2, 2).unwrap();
    let writer = Tile::new(TileKind::WriteR, Orientation::Id);
    program.set_tile(Position::new(0, 1), writer).unwrap();
    assert_eq!(legacy::encode(&program), "lvl2x2:....R0..");
}

#[rstest]
#[case::no_colon("lvl3x3")]
#[case::no_separator("lvl33:..")]
#[case::bad_number("lvl3xZ:..")]
#[case::zero_rows("lvl3x0:")]
#[case::too_few_cells("lvl2x2:......")]
#[case::too_many_cells("lvl1x2:......")]
#[case::unknown_kind("lvl2x2:....q0..")]
#[case::unknown_orientation("lvl2x2:....c7..")]
#[case::oriented_empty_cell("lvl2x2:....c0.1")]
#[case::tile_on_start("lvl2x2:..c0....")]
fn malformed_strings_are_rejected(#[case] text: &str) {
    assert!(matches!(legacy::decode(text), Err(DecodeError::Legacy(_))));
}
