//! Program model tests.

use rstest::rstest;
use tapeworks_core::common::{Direction, EditError, Orientation, Position};
use tapeworks_core::program::{Endpoint, Program, Tile, TileKind};

fn conveyor(orientation: Orientation) -> Tile {
    Tile::new(TileKind::Conveyor, orientation)
}

#[test]
fn new_program_places_default_endpoints() {
    let program = Program::new(9, 9).unwrap();
    assert_eq!(program.start().position, Position::new(4, 0));
    assert_eq!(program.end().position, Position::new(4, 8));
    assert_eq!(program.start().orientation, Orientation::Id);
    assert_eq!(program.tile_count(), 0);
}

#[rstest]
#[case(0, 5)]
#[case(5, 0)]
#[case(0, 0)]
fn rejects_empty_dimensions(#[case] cols: u32, #[case] rows: u32) {
    assert_eq!(
        Program::new(cols, rows).unwrap_err(),
        EditError::BadDimensions { cols, rows }
    );
}

#[test]
fn set_tile_checks_bounds_and_endpoints() {
    let mut program = Program::new(3, 3).unwrap();
    assert!(matches!(
        program.set_tile(Position::new(3, 0), conveyor(Orientation::Id)),
        Err(EditError::OutOfBounds { x: 3, y: 0, .. })
    ));
    assert!(matches!(
        program.set_tile(Position::new(0, -1), conveyor(Orientation::Id)),
        Err(EditError::OutOfBounds { .. })
    ));
    assert_eq!(
        program.set_tile(Position::new(1, 0), conveyor(Orientation::Id)),
        Err(EditError::Reserved { x: 1, y: 0 })
    );
    program
        .set_tile(Position::new(0, 1), conveyor(Orientation::Rot3))
        .unwrap();
    assert_eq!(
        program.tile(Position::new(0, 1)),
        Some(conveyor(Orientation::Rot3))
    );
}

#[test]
fn moving_an_endpoint_clears_its_cell() {
    let mut program = Program::new(3, 3).unwrap();
    program
        .set_tile(Position::new(0, 1), conveyor(Orientation::Id))
        .unwrap();
    program
        .set_start(Endpoint::new(Position::new(0, 1), Orientation::Rot3))
        .unwrap();
    assert_eq!(program.tile(Position::new(0, 1)), None);
    assert_eq!(program.start().orientation, Orientation::Rot3);
}

#[test]
fn endpoints_can_trade_places_together() {
    let mut program = Program::new(3, 3).unwrap();
    let start = program.start();
    let end = program.end();
    let onto_end = Endpoint::new(end.position, Orientation::Id);
    assert!(program.set_start(onto_end).is_err());
    program
        .set_endpoints(Endpoint::new(end.position, Orientation::Rot2), start)
        .unwrap();
    assert_eq!(program.start().position, Position::new(1, 2));
    assert_eq!(program.end().position, Position::new(1, 0));
}

#[test]
fn clear_tile_returns_the_removed_tile() {
    let mut program = Program::new(3, 3).unwrap();
    let tile = Tile::new(TileKind::WriteG, Orientation::Mir);
    program.set_tile(Position::new(2, 2), tile).unwrap();
    assert_eq!(program.clear_tile(Position::new(2, 2)), Some(tile));
    assert_eq!(program.clear_tile(Position::new(2, 2)), None);
}

#[rstest]
#[case(Orientation::Id, Direction::Down, Direction::Left, Direction::Right)]
#[case(Orientation::Rot1, Direction::Left, Direction::Up, Direction::Down)]
#[case(Orientation::Rot2, Direction::Up, Direction::Right, Direction::Left)]
#[case(Orientation::Rot3, Direction::Right, Direction::Down, Direction::Up)]
#[case(Orientation::Mir, Direction::Down, Direction::Right, Direction::Left)]
fn tile_exits_follow_orientation(
    #[case] orientation: Orientation,
    #[case] forward: Direction,
    #[case] first: Direction,
    #[case] second: Direction,
) {
    let tile = Tile::new(TileKind::BranchBr, orientation);
    assert_eq!(tile.forward(), forward);
    assert_eq!(tile.first_exit(), first);
    assert_eq!(tile.second_exit(), second);
}
