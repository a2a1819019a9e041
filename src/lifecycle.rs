//! Lifecycle Helpers

/// Runs an action at most once per instance.
#[derive(Debug, Default, Clone, Copy)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `action` on the first call only. Returns whether it ran.
    pub fn fire(&mut self, action: impl FnOnce()) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        action();
        true
    }
}
