//! Run states, commands and the control surface derived from them.

use std::fmt;

use serde::Serialize;

/// The controller's run state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum RunState {
    /// No interpreter exists; the editor is enabled.
    #[default]
    Stopped,
    /// Steps are being issued.
    Running,
    /// A case is in progress but no new step is issued.
    Paused,
}

impl RunState {
    /// Whether a case is in progress, paused or not.
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Stopped)
    }

    /// The control surface for this state.
    pub const fn controls(self) -> Controls {
        Controls::for_state(self)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stopped => "stopped",
            Self::Running => "running",
            Self::Paused => "paused",
        })
    }
}

/// A user command accepted by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Command {
    /// Start a run, or resume a paused one.
    Play,
    /// Suspend step issuance.
    Pause,
    /// Abandon the run.
    Stop,
    /// Replace the program from a level string.
    Load,
    /// Export the program as a share link.
    Share,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Stop => "stop",
            Self::Load => "load",
            Self::Share => "share",
        })
    }
}

/// Which buttons a front end should enable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Controls {
    /// Play (or resume).
    pub play: bool,
    /// Pause.
    pub pause: bool,
    /// Stop.
    pub stop: bool,
}

impl Controls {
    /// Play is enabled unless running, pause only while running, stop
    /// unless stopped.
    pub const fn for_state(state: RunState) -> Self {
        match state {
            RunState::Stopped => Self {
                play: true,
                pause: false,
                stop: false,
            },
            RunState::Running => Self {
                play: false,
                pause: true,
                stop: true,
            },
            RunState::Paused => Self {
                play: true,
                pause: false,
                stop: true,
            },
        }
    }

    /// Whether `command` is enabled. Load is only offered while stopped;
    /// share is always offered.
    pub const fn allows(self, command: Command) -> bool {
        match command {
            Command::Play => self.play,
            Command::Pause => self.pause,
            Command::Stop => self.stop,
            Command::Load => !self.stop,
            Command::Share => true,
        }
    }
}
