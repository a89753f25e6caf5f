//! # Unit Components
//!
//! Behavioural tests grouped by the module they exercise.


/// Configuration defaults and JSON loading.
pub mod config;


/// Token interpreter semantics.
pub mod interp;


/// Legacy `lvl` program strings.
pub mod legacy;

/// Grid program model and tile exits.
pub mod program;

/// Case sequencing across a level.
pub mod sequencing;

/// Run state and control surface.
pub mod state;

/// Run statistics.
pub mod stats;
