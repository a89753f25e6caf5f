//! Common types shared by every layer of the controller.
//!
//! This module provides the small value types that the tape, the program
//! model, the interpreter and the level codec all agree on. It includes:
//! 1. **Symbols:** The tape alphabet, including the `Empty` sentinel.
//! 2. **Geometry:** Grid positions, headings and tile orientations.
//! 3. **Error Handling:** Decode, edit, control and interpreter fault types.

/// Error types for decoding, editing, control commands and interpreter faults.
pub mod error;

/// Grid positions, headings and tile orientations.
pub mod geom;

/// The tape alphabet.
pub mod symbol;

pub use error::{ConfigError, ControlError, DecodeError, EditError, StepFault};
pub use geom::{Direction, Orientation, Position};
pub use symbol::Symbol;
