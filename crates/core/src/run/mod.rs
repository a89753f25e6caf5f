//! Run loop and test harness.
//!
//! This module drives a program through its test cases. It provides:
//! 1. **State machine:** [`RunState`] and the [`Controls`] derived from it.
//! 2. **Coordinator:** [`Controller::tick`] issues one interpreter step per
//!    task and suspends on the animation [`Completion`](crate::anim::Completion)
//!    until the bridge resolves it.
//! 3. **Judge:** [`judge`] compares a halted interpreter with its case; the
//!    controller then advances to the next case or stops.
//!
//! Work is queued, never nested: advancing to the next case is a deferred
//! task so the bridge gets a tick to settle between cases.

mod controller;
mod judge;
mod state;

pub use controller::{Controller, ControllerEvent, CurrentTest, Tick};
pub use judge::{TestOutcome, Verdict, judge};
pub use state::{Command, Controls, RunState};

use crate::anim::InstantBridge;
use crate::editor::EditorLatch;
use crate::interp::TokenInterpreter;

/// Controller wired for headless use: token semantics, instant animation.
pub type HeadlessController = Controller<TokenInterpreter, InstantBridge, EditorLatch>;
