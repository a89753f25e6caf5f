//! Editor seam.
//!
//! The program editor is owned by the host. The controller only switches it
//! off when a run starts and back on when the run stops, so the program
//! cannot change under a running interpreter.

/// Something that lets the user author the program while no run is active.
pub trait Editor {
    /// Allows editing.
    fn enable(&mut self);

    /// Forbids editing.
    fn disable(&mut self);

    /// Whether editing is currently allowed.
    fn is_enabled(&self) -> bool;
}

/// Minimal editor that only tracks its enabled flag.
#[derive(Debug, Default)]
pub struct EditorLatch {
    enabled: bool,
    toggles: usize,
}

impl EditorLatch {
    /// Creates a latch, enabled or not.
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled,
            toggles: 0,
        }
    }

    /// How many times the flag actually changed.
    pub const fn toggles(&self) -> usize {
        self.toggles
    }

    fn set(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.toggles += 1;
        }
    }
}

impl Editor for EditorLatch {
    fn enable(&mut self) {
        self.set(true);
    }

    fn disable(&mut self) {
        self.set(false);
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
