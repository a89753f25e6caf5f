//! Animation bridge.
//!
//! The controller never draws. For every step it asks the bridge where a
//! grid cell is on screen, snaps the token there, then asks for a timed
//! transition to the next cell and waits on the [`Completion`] it handed
//! over. This module provides:
//! 1. **Geometry:** [`Transform`] and the [`GridLayout`] that maps cells to it.
//! 2. **Promise:** [`Completion`], the single-threaded completion flag.
//! 3. **Trait:** [`AnimationBridge`], the seam a real renderer implements.
//! 4. **Bridges:** [`InstantBridge`] for headless runs and [`TimedBridge`]
//!    for paced runs driven by a host clock.

mod bridges;

pub use bridges::{Frame, InstantBridge, TimedBridge};

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use serde::Serialize;

use crate::common::Position;
use crate::program::Program;

/// Screen placement of the token (a translation; tiles are axis aligned).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Transform {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

impl Transform {
    /// Creates a transform.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation toward `to`; `t` is clamped to `0.0..=1.0`.
    pub fn lerp(self, to: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            x: (to.x - self.x).mul_add(t, self.x),
            y: (to.y - self.y).mul_add(t, self.y),
        }
    }
}

impl fmt::Display for Transform {
    /// Formats as an SVG-style `translate(x,y)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({},{})", self.x, self.y)
    }
}

/// A token fill colour, e.g. `#E0E`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Fill(pub String);

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps grid cells to screen transforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    /// Left edge of the grid.
    pub origin_x: f64,
    /// Top edge of the grid.
    pub origin_y: f64,
    /// Side length of one cell.
    pub cell_size: f64,
}

impl GridLayout {
    /// Transform of the top-left corner of `position`.
    pub fn cell_transform(&self, position: Position) -> Transform {
        Transform::new(
            f64::from(position.x).mul_add(self.cell_size, self.origin_x),
            f64::from(position.y).mul_add(self.cell_size, self.origin_y),
        )
    }
}

/// Completion flag shared between the controller and a running animation.
///
/// Cloning shares the flag. Resolving is idempotent and resolving a
/// completion nobody waits on any more is harmless.
#[derive(Clone, Debug, Default)]
pub struct Completion(Rc<Cell<bool>>);

impl Completion {
    /// Creates an unresolved completion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the animation finished.
    pub fn resolve(&self) {
        self.0.set(true);
    }

    /// Whether the animation has finished.
    pub fn is_resolved(&self) -> bool {
        self.0.get()
    }
}

/// The view-side seam used by the controller to pace visible steps.
pub trait AnimationBridge {
    /// Screen transform of a grid cell.
    fn cell_transform(&self, position: Position) -> Transform;

    /// Moves the token to `transform` immediately, without a transition.
    fn place_token(&mut self, transform: Transform, fill: Fill);

    /// Starts a transition of the token to `transform` over `duration` and
    /// resolves `done` once it has finished.
    fn animate_token(
        &mut self,
        transform: Transform,
        fill: Fill,
        duration: Duration,
        done: Completion,
    );

    /// Called after the program has been replaced so the view can redraw it.
    fn redraw(&mut self, _program: &Program) {}
}
