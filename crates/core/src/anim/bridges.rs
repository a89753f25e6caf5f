use std::time::Duration;

use tracing::trace;

use super::{AnimationBridge, Completion, Fill, GridLayout, Transform};
use crate::common::Position;
use crate::program::Program;

/// One recorded token update.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Where the token was sent.
    pub transform: Transform,
    /// Fill it was drawn with.
    pub fill: Fill,
    /// Transition length; `None` for an instantaneous placement.
    pub duration: Option<Duration>,
}

/// Headless bridge: every transition completes the moment it starts.
///
/// Keeps the frames it was asked to draw so callers can inspect the path the
/// token took.
#[derive(Debug)]
pub struct InstantBridge {
    layout: GridLayout,
    frames: Vec<Frame>,
    redraws: usize,
}

impl InstantBridge {
    /// Creates a bridge using `layout` for cell transforms.
    pub const fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            frames: Vec::new(),
            redraws: 0,
        }
    }

    /// Every frame drawn so far.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Forgets recorded frames.
    pub fn clear_frames(&mut self) {
        self.frames.clear();
    }

    /// How many times the program view was redrawn.
    pub const fn redraws(&self) -> usize {
        self.redraws
    }
}

impl AnimationBridge for InstantBridge {
    fn cell_transform(&self, position: Position) -> Transform {
        self.layout.cell_transform(position)
    }

    fn place_token(&mut self, transform: Transform, fill: Fill) {
        self.frames.push(Frame {
            transform,
            fill,
            duration: None,
        });
    }

    fn animate_token(
        &mut self,
        transform: Transform,
        fill: Fill,
        duration: Duration,
        done: Completion,
    ) {
        self.frames.push(Frame {
            transform,
            fill,
            duration: Some(duration),
        });
        done.resolve();
    }

    fn redraw(&mut self, _program: &Program) {
        self.redraws += 1;
    }
}

#[derive(Debug)]
struct Transition {
    from: Transform,
    to: Transform,
    started: Duration,
    duration: Duration,
    done: Completion,
}

/// Bridge on a virtual clock advanced by the host.
///
/// A transition resolves its completion on the first [`TimedBridge::advance`]
/// that reaches its end time. Starting a new transition while one is in
/// flight replaces it; the replaced completion is resolved so no waiter is
/// left hanging.
#[derive(Debug)]
pub struct TimedBridge {
    layout: GridLayout,
    now: Duration,
    token: Transform,
    fill: Fill,
    transition: Option<Transition>,
}

impl TimedBridge {
    /// Creates a bridge at time zero.
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            now: Duration::ZERO,
            token: Transform::default(),
            fill: Fill::default(),
            transition: None,
        }
    }

    /// Moves the clock forward, finishing any transition that has run its course.
    pub fn advance(&mut self, elapsed: Duration) {
        self.now += elapsed;
        if let Some(t) = &self.transition {
            let end = t.started + t.duration;
            if self.now >= end {
                self.token = t.to;
                t.done.resolve();
                self.transition = None;
                trace!(token = %self.token, "transition finished");
            }
        }
    }

    /// Current virtual time.
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Whether a transition is in flight.
    pub const fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Where the token is drawn right now, interpolated mid-transition.
    pub fn token(&self) -> Transform {
        match &self.transition {
            Some(t) if !t.duration.is_zero() => {
                let progress = (self.now - t.started).as_secs_f64() / t.duration.as_secs_f64();
                t.from.lerp(t.to, progress)
            }
            Some(t) => t.to,
            None => self.token,
        }
    }

    /// Current token fill.
    pub const fn fill(&self) -> &Fill {
        &self.fill
    }
}

impl AnimationBridge for TimedBridge {
    fn cell_transform(&self, position: Position) -> Transform {
        self.layout.cell_transform(position)
    }

    fn place_token(&mut self, transform: Transform, fill: Fill) {
        if let Some(previous) = self.transition.take() {
            previous.done.resolve();
        }
        self.token = transform;
        self.fill = fill;
    }

    fn animate_token(
        &mut self,
        transform: Transform,
        fill: Fill,
        duration: Duration,
        done: Completion,
    ) {
        if let Some(previous) = self.transition.take() {
            previous.done.resolve();
        }
        self.fill = fill;
        if duration.is_zero() {
            self.token = transform;
            done.resolve();
            return;
        }
        self.transition = Some(Transition {
            from: self.token,
            to: transform,
            started: self.now,
            duration,
            done,
        });
    }
}
