//! Loading overlay shown for a fixed time after mount.

use std::time::Duration;

use tracing::debug;

#[derive(Clone, Debug)]
pub struct LoadingScreen {
    remaining: Duration,
    visible: bool,
}

impl LoadingScreen {
    pub fn new(duration: Duration) -> Self {
        Self {
            remaining: duration,
            visible: !duration.is_zero(),
        }
    }

    /// An overlay that is already gone.
    pub fn dismissed() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Count down by `dt`. Returns `true` on the call that hides the overlay.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.visible {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(dt);
        if self.remaining.is_zero() {
            self.visible = false;
            debug!("Loading screen dismissed");
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }
}
