//! Case sequencing: fail-fast, fresh state per case, and restarts.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tapeworks_core::common::Orientation;
use tapeworks_core::editor::Editor;
use tapeworks_core::program::{Tile, TileKind};
use tapeworks_core::run::{ControllerEvent, CurrentTest, RunState, Tick};

use crate::common::builder::{case, endless_loop, level as make_level, single_tile, straight_line};
use crate::common::harness::{TestContext, scripted};
use crate::common::mocks::interpreter::{Plan, interpreters_built, script};

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
fn run_halts_at_the_first_failing_case(#[case] failing: usize) {
    script((0..4).map(|i| {
        if i == failing {
            Plan::reject_after(2)
        } else {
            Plan::accept_after(2)
        }
    }));
    let mut c = scripted(vec![case(true, "", "", 0); 4]);
    c.play().unwrap();
    assert_eq!(c.drain(), Tick::Idle);

    let indices: Vec<usize> = c.outcomes().iter().map(|o| o.index).collect();
    assert_eq!(indices, (0..=failing).collect::<Vec<_>>());
    assert!(c.outcomes()[..failing].iter().all(|o| o.passed()));
    assert!(!c.outcomes()[failing].passed());
    assert_eq!(interpreters_built(), failing + 1);

    assert_eq!(c.state(), RunState::Stopped);
    assert_eq!(c.current(), &CurrentTest::default());
    assert!(c.editor().is_enabled());
    assert_eq!(
        c.drain_events().last(),
        Some(&ControllerEvent::RunFinished {
            passed: false,
            judged: failing + 1
        })
    );
}

#[test]
fn all_cases_pass_in_order() {
    script([Plan::accept_after(1); 4]);
    let mut c = scripted(vec![case(true, "", "", 0); 4]);
    c.play().unwrap();
    assert_eq!(c.drain(), Tick::Idle);

    assert_eq!(c.outcomes().len(), 4);
    assert!(c.outcomes().iter().all(|o| o.passed()));
    assert_eq!(c.stats().cases_passed, 4);
    assert_eq!(c.stats().cases_started, 4);
    assert_eq!(interpreters_built(), 4);

    let events = c.drain_events();
    let started: Vec<usize> = events
        .iter()
        .filter_map(|e| match e {
            ControllerEvent::CaseStarted { index } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(started, vec![0, 1, 2, 3]);
    assert_eq!(
        events.last(),
        Some(&ControllerEvent::RunFinished {
            passed: true,
            judged: 4
        })
    );
    assert_eq!(c.current().index, 0);
}

#[test]
fn each_case_gets_its_limit() {
    script([Plan::accept_after(1); 2]);
    let mut c = scripted(vec![case(true, "", "", 7), case(true, "", "", 3)]);
    c.play().unwrap();
    assert_eq!(c.interpreter().unwrap().limit(), 7);
    let _ = c.tick();
    let _ = c.tick();
    let _ = c.tick();
    assert_eq!(c.current().index, 1);
    assert_eq!(c.interpreter().unwrap().limit(), 3);
}

#[test]
fn each_case_starts_from_its_own_input_tape() {
    let writer = single_tile(Tile::new(TileKind::WriteR, Orientation::Id));
    let cases = vec![case(true, "B", "BR", 0), case(true, "B", "BR", 0)];
    let mut ctx = TestContext::new().with_level(&make_level(writer, cases));

    let outcomes = ctx.run_to_end().to_vec();
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.passed() && o.tape == "BR"));
    assert_eq!(ctx.controller.test_cases()[0].input.to_string(), "B");
}

#[test]
fn a_second_run_starts_again_from_the_first_case() {
    let cases = vec![case(true, "", "", 0), case(false, "", "", 0)];
    let mut ctx = TestContext::new().with_level(&make_level(straight_line(9, 9), cases));

    let first = ctx.run_to_end().to_vec();
    assert_eq!(first.len(), 2);
    assert!(!first[1].passed());

    let second = ctx.run_to_end().to_vec();
    assert_eq!(second, first);
    assert_eq!(ctx.controller.stats().cases_started, 4);
}

#[test]
fn stop_then_play_runs_the_whole_level() {
    script([Plan::accept_after(1); 3]);
    let mut c = scripted(vec![case(true, "", "", 0); 2]);
    c.play().unwrap();
    let _ = c.tick();
    let _ = c.tick();
    let _ = c.tick();
    assert_eq!(c.current().index, 1);
    c.stop();
    assert_eq!(c.outcomes().len(), 1);

    c.play().unwrap();
    assert_eq!(c.drain(), Tick::Idle);
    assert_eq!(c.outcomes().len(), 2);
    assert_eq!(c.outcomes()[0].index, 0);
    assert_eq!(interpreters_built(), 4);
}

#[test]
fn endless_program_keeps_the_run_alive() {
    let looping = make_level(endless_loop(), vec![case(true, "", "", 0)]);
    let mut ctx = TestContext::new().with_level(&looping);
    ctx.controller.play().unwrap();
    assert_eq!(ctx.controller.drain_at_most(1_000), Tick::Ran);
    assert_eq!(ctx.controller.state(), RunState::Running);
    assert!(ctx.controller.outcomes().is_empty());

    ctx.controller.stop();
    assert_eq!(ctx.controller.drain_at_most(1_000), Tick::Idle);
}

#[test]
fn endless_program_fails_at_its_step_limit() {
    let looping = make_level(endless_loop(), vec![case(true, "", "", 20)]);
    let mut ctx = TestContext::new().with_level(&looping);
    let outcomes = ctx.run_to_end().to_vec();
    assert!(!outcomes[0].accept);
    assert!(!outcomes[0].passed());
}
