//! Run-loop controller and test harness for a tile-and-tape puzzle machine.
//!
//! A program is a grid of oriented tiles that a token walks across while
//! reading and writing coloured symbols on a tape. This crate provides:
//! 1. **Model:** Tapes, programs and levels with their test cases.
//! 2. **Interpreter:** A step-wise token interpreter behind a trait.
//! 3. **Codec:** JSON-hash and legacy `lvl` level strings, share links.
//! 4. **Controller:** The play / pause / stop state machine that steps the
//!    interpreter, paces it through an animation bridge and judges each case.
//! 5. **Support:** Configuration and run statistics.

/// Animation bridge, transforms and completions.
pub mod anim;
/// Common types: symbols, geometry and errors.
pub mod common;
/// Controller configuration with defaults.
pub mod config;
/// Editor enable/disable seam.
pub mod editor;
/// Interpreter contract and the token interpreter.
pub mod interp;
/// Levels, test cases and their string encodings.
pub mod level;
/// Grid programs and tiles.
pub mod program;
/// Run-loop controller and judge.
pub mod run;
/// Run statistics collection and reporting.
pub mod stats;
/// The symbol tape.
pub mod tape;

/// Root configuration; use `Config::default()` or load JSON.
pub use crate::config::Config;
/// A level: title, program and test cases.
pub use crate::level::{Level, TestCase};
/// A grid program.
pub use crate::program::Program;
/// The controller; see [`run::HeadlessController`] for the default wiring.
pub use crate::run::Controller;
/// The symbol tape.
pub use crate::tape::Tape;
