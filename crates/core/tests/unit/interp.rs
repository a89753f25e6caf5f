//! Token interpreter tests.
//!
//! Each test binds a small program and tape, runs the interpreter to a halt
//! and checks the verdict, the halt reason and the final tape.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tapeworks_core::common::{Orientation, Position, StepFault};
use tapeworks_core::interp::token::Halt;
use tapeworks_core::interp::{Interpreter, TokenInterpreter};
use tapeworks_core::program::{Endpoint, Program, Tile, TileKind};

use crate::common::builder::{endless_loop, single_tile, straight_line, tape};

fn run(program: &Program, input: &str, limit: u32) -> TokenInterpreter {
    let mut interp = TokenInterpreter::new();
    interp.set_program(program);
    interp.set_tape(tape(input));
    interp.set_limit(limit);
    interp.start().unwrap();
    while interp.running() {
        interp.step().unwrap();
    }
    interp
}

#[test]
fn straight_conveyor_accepts_and_keeps_the_tape() {
    let program = straight_line(9, 9);
    let interp = run(&program, "R", 10);
    assert!(interp.accept());
    assert_eq!(interp.halt(), Some(Halt::Accepted));
    assert_eq!(interp.position(), Position::new(4, 8));
    assert_eq!(interp.steps(), 8);
    assert_eq!(interp.tape().to_string(), "R");
}

#[test]
fn start_places_the_token_on_the_start_cell() {
    let program = straight_line(5, 5);
    let mut interp = TokenInterpreter::new();
    interp.set_program(&program);
    interp.start().unwrap();
    assert!(interp.running());
    assert_eq!(interp.position(), Position::new(2, 0));
    assert_eq!(interp.steps(), 0);
}

#[rstest]
#[case::blue_turns_first("B", false, Position::new(0, 1), "")]
#[case::red_turns_second("R", false, Position::new(2, 1), "")]
#[case::green_passes("GR", true, Position::new(1, 3), "GR")]
#[case::empty_passes("", true, Position::new(1, 3), "")]
fn red_blue_branch(
    #[case] input: &str,
    #[case] accept: bool,
    #[case] last: Position,
    #[case] remaining: &str,
) {
    let program = single_tile(Tile::new(TileKind::BranchBr, Orientation::Id));
    let interp = run(&program, input, 0);
    assert_eq!(interp.accept(), accept);
    assert_eq!(interp.position(), last);
    assert_eq!(interp.tape().to_string(), remaining);
}

#[test]
fn mirrored_branch_swaps_side_exits() {
    let program = single_tile(Tile::new(TileKind::BranchGy, Orientation::Mir));
    let interp = run(&program, "G", 0);
    assert_eq!(interp.halt(), Some(Halt::EmptyCell));
    assert_eq!(interp.position(), Position::new(2, 1));
    assert!(interp.tape().is_empty());
}

#[test]
fn writer_appends_at_the_tail() {
    let program = single_tile(Tile::new(TileKind::WriteY, Orientation::Id));
    let interp = run(&program, "B", 0);
    assert!(interp.accept());
    assert_eq!(interp.tape().to_string(), "BY");
}

#[test]
fn leaving_the_grid_rejects_in_place() {
    let mut program = Program::new(3, 3).unwrap();
    program
        .set_start(Endpoint::new(Position::new(1, 0), Orientation::Rot2))
        .unwrap();
    let interp = run(&program, "", 0);
    assert!(!interp.accept());
    assert_eq!(interp.halt(), Some(Halt::OffGrid));
    assert_eq!(interp.position(), Position::new(1, 0));
    assert_eq!(interp.steps(), 1);
}

#[test]
fn entering_an_empty_cell_rejects() {
    let program = Program::new(3, 3).unwrap();
    let interp = run(&program, "R", 0);
    assert_eq!(interp.halt(), Some(Halt::EmptyCell));
    assert_eq!(interp.position(), Position::new(1, 1));
}

#[test]
fn step_limit_rejects_a_loop() {
    let interp = run(&endless_loop(), "", 5);
    assert!(!interp.accept());
    assert_eq!(interp.halt(), Some(Halt::LimitReached));
    assert_eq!(interp.steps(), 5);
}

#[test]
fn limit_does_not_cut_an_accepting_last_step() {
    let interp = run(&straight_line(9, 9), "", 8);
    assert!(interp.accept());
}

#[test]
fn misuse_reports_faults() {
    let mut interp = TokenInterpreter::new();
    assert_eq!(interp.start(), Err(StepFault::NoProgram));
    assert_eq!(interp.step(), Err(StepFault::NotStarted));

    let program = straight_line(3, 3);
    interp.set_program(&program);
    interp.start().unwrap();
    while interp.running() {
        interp.step().unwrap();
    }
    assert_eq!(interp.step(), Err(StepFault::Halted));
}
