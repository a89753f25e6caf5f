use tapeworks_core::common::{Orientation, Position};
use tapeworks_core::level::{Level, TestCase};
use tapeworks_core::program::{Program, Tile, TileKind};
use tapeworks_core::tape::Tape;

/// A `cols` x `rows` program with a column of identity conveyors joining the
/// default start and end.
pub fn straight_line(cols: u32, rows: u32) -> Program {
    let mut program = Program::new(cols, rows).unwrap();
    let x = (cols / 2) as i32;
    let conveyor = Tile::new(TileKind::Conveyor, Orientation::Id);
    for y in 1..rows as i32 - 1 {
        program.set_tile(Position::new(x, y), conveyor).unwrap();
    }
    program
}

/// A 3 x 4 program: start `(1, 0)`, `tile` at `(1, 1)`, a conveyor at
/// `(1, 2)` and the end at `(1, 3)`.
pub fn single_tile(tile: Tile) -> Program {
    let mut program = Program::new(3, 4).unwrap();
    program.set_tile(Position::new(1, 1), tile).unwrap();
    let conveyor = Tile::new(TileKind::Conveyor, Orientation::Id);
    program.set_tile(Position::new(1, 2), conveyor).unwrap();
    program
}

/// A 4 x 4 program whose conveyors circle forever below the start.
pub fn endless_loop() -> Program {
    let mut program = Program::new(4, 4).unwrap();
    for (x, y, orientation) in [
        (2, 1, Orientation::Rot3),
        (3, 1, Orientation::Id),
        (3, 2, Orientation::Rot1),
        (2, 2, Orientation::Rot2),
    ] {
        let tile = Tile::new(TileKind::Conveyor, orientation);
        program.set_tile(Position::new(x, y), tile).unwrap();
    }
    program
}

/// Parses a tape, panicking on bad letters.
pub fn tape(letters: &str) -> Tape {
    letters.parse().unwrap()
}

/// Builds a test case from tape letters.
pub fn case(accept: bool, input: &str, output: &str, limit: u32) -> TestCase {
    TestCase {
        accept,
        input: tape(input),
        output: tape(output),
        limit,
    }
}

/// Wraps a program and cases into a level titled `Test`.
pub fn level(program: Program, test_cases: Vec<TestCase>) -> Level {
    Level {
        title: "Test".to_string(),
        test_cases,
        program,
    }
}
