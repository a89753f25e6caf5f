//! Step-wise interpreters.
//!
//! The controller only relies on the [`Interpreter`] contract: bind a program
//! and a tape, start, then advance one transition at a time while observing
//! `running`, `accept` and `position`. [`TokenInterpreter`] is the tile
//! semantics shipped with this crate.

/// The token-on-a-grid interpreter.
pub mod token;

pub use token::TokenInterpreter;

use crate::common::{Position, StepFault};
use crate::program::Program;
use crate::tape::Tape;

/// A step-executable simulation bound to one program and one tape.
///
/// The controller builds a fresh instance with `Default` for every test case
/// and never reuses one across cases.
pub trait Interpreter {
    /// Binds the program to execute.
    fn set_program(&mut self, program: &Program);

    /// Binds the tape the program reads and writes. The interpreter owns it.
    fn set_tape(&mut self, tape: Tape);

    /// Sets the step ceiling; `0` means unlimited.
    fn set_limit(&mut self, limit: u32);

    /// Places the token on the start cell and marks the interpreter running.
    ///
    /// # Errors
    ///
    /// Implementations report a [`StepFault`] when they cannot start.
    fn start(&mut self) -> Result<(), StepFault>;

    /// Performs exactly one transition.
    ///
    /// # Errors
    ///
    /// Implementations report a [`StepFault`] when the transition cannot be
    /// performed; callers treat that as a halt with `accept == false`.
    fn step(&mut self) -> Result<(), StepFault>;

    /// Whether another `step` is expected.
    fn running(&self) -> bool;

    /// The terminal verdict; meaningful once `running` is `false`.
    fn accept(&self) -> bool;

    /// Current token cell.
    fn position(&self) -> Position;

    /// The bound tape in its current state.
    fn tape(&self) -> &Tape;

    /// Transitions performed since `start`.
    fn steps(&self) -> u32;
}
