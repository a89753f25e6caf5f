//! Run state and control surface tests.

use rstest::rstest;
use tapeworks_core::run::{Command, Controls, RunState};

#[rstest]
#[case(RunState::Stopped, true, false, false)]
#[case(RunState::Running, false, true, true)]
#[case(RunState::Paused, true, false, true)]
fn controls_follow_state(
    #[case] state: RunState,
    #[case] play: bool,
    #[case] pause: bool,
    #[case] stop: bool,
) {
    assert_eq!(state.controls(), Controls { play, pause, stop });
    assert_eq!(state.controls().allows(Command::Play), play);
    assert_eq!(state.controls().allows(Command::Pause), pause);
    assert_eq!(state.controls().allows(Command::Stop), stop);
    assert_eq!(state.controls().allows(Command::Load), !state.is_active());
    assert!(state.controls().allows(Command::Share));
}

#[test]
fn default_state_is_stopped() {
    assert_eq!(RunState::default(), RunState::Stopped);
}

#[test]
fn names_are_lowercase() {
    assert_eq!(RunState::Paused.to_string(), "paused");
    assert_eq!(Command::Share.to_string(), "share");
}
