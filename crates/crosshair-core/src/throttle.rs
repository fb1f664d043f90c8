// File: crates/crosshair-core/src/throttle.rs
// Summary: Leading-edge throttle: the first call in a window passes, the rest are dropped.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct Throttle {
    window: Duration,
    opened: Option<Instant>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self { window, opened: None }
    }

    pub fn admit(&mut self) -> bool {
        self.admit_at(Instant::now())
    }

    /// Returns true if no call was admitted within `window` before `now`.
    pub fn admit_at(&mut self, now: Instant) -> bool {
        match self.opened {
            Some(t) if now.saturating_duration_since(t) < self.window => false,
            _ => {
                self.opened = Some(now);
                true
            }
        }
    }

    /// Whether a window is currently open at `now`.
    pub fn pending_at(&self, now: Instant) -> bool {
        self.opened.is_some_and(|t| now.saturating_duration_since(t) < self.window)
    }
}
