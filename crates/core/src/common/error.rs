//! Error types.
//!
//! Every failure the controller can report is non-fatal: it is returned to
//! the caller of the attempted operation and never leaves state half-changed.
//! This module defines:
//! 1. **Decode errors:** A level string that cannot be turned into a level.
//! 2. **Edit errors:** Program mutations that fall outside the grid.
//! 3. **Control errors:** Commands issued while their control is disabled.
//! 4. **Step faults:** Interpreter failures, judged as a rejected run.
//! 5. **Config errors:** Unreadable or malformed configuration files.

use thiserror::Error;

use crate::run::{Command, RunState};

/// A level string could not be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input was empty after trimming.
    #[error("level string is empty")]
    Empty,

    /// The JSON-hash payload is not valid JSON or does not match the schema shape.
    #[error("invalid level JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON-hash payload parsed but describes an impossible level.
    #[error("invalid level: {0}")]
    Schema(String),

    /// A `lvl`-prefixed string does not follow the legacy positional grammar.
    #[error("invalid legacy level string: {0}")]
    Legacy(String),

    /// A tape contains a character outside the tape alphabet.
    #[error("invalid tape symbol {0:?}")]
    Symbol(char),

    /// A percent-escape decoded to bytes that are not UTF-8.
    #[error("escaped level string is not valid UTF-8")]
    Escape,
}

/// A program edit was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EditError {
    /// The coordinate lies outside the grid.
    #[error("cell ({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        /// Column of the rejected cell.
        x: i32,
        /// Row of the rejected cell.
        y: i32,
        /// Grid width.
        cols: u32,
        /// Grid height.
        rows: u32,
    },

    /// The coordinate holds the start or end endpoint.
    #[error("cell ({x}, {y}) is reserved for an endpoint")]
    Reserved {
        /// Column of the rejected cell.
        x: i32,
        /// Row of the rejected cell.
        y: i32,
    },

    /// A grid needs at least one row and one column.
    #[error("grid dimensions {cols}x{rows} are not positive")]
    BadDimensions {
        /// Requested width.
        cols: u32,
        /// Requested height.
        rows: u32,
    },
}

/// A controller command could not be carried out.
#[derive(Debug, Error)]
pub enum ControlError {
    /// The command's control is disabled in the current run state.
    #[error("{command} is not available while {state}")]
    Disabled {
        /// The rejected command.
        command: Command,
        /// The state the controller was in.
        state: RunState,
    },

    /// Play was issued with no program loaded.
    #[error("no program is loaded")]
    NoProgram,

    /// Share was issued with no program loaded.
    #[error("nothing to share: no program is loaded")]
    EmptyShare,

    /// The model can only be replaced or edited while stopped.
    #[error("the program cannot be changed while a run is in progress")]
    Busy,

    /// Load was given a string that does not decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// An edit was rejected by the program model.
    #[error(transparent)]
    Edit(#[from] EditError),
}

/// An interpreter could not perform the requested transition.
///
/// The controller judges any fault as a halted, rejected run.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StepFault {
    /// `start` was called before `set_program`.
    #[error("interpreter has no program")]
    NoProgram,

    /// `step` was called before `start`.
    #[error("interpreter has not been started")]
    NotStarted,

    /// `step` was called after the interpreter halted.
    #[error("interpreter has already halted")]
    Halted,

    /// Implementation-specific failure.
    #[error("interpreter fault: {0}")]
    Fault(String),
}

/// A configuration file could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid configuration document.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
