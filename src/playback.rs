//! Playback pacing: how many kernel steps a display frame runs and how long it waits.
//!
//! Speed never touches the timestep. Fast playback runs more fixed steps per frame and
//! slow playback spaces single steps further apart in wall-clock time.

use std::time::Duration;

use crate::config::FRAME_INTERVAL_MS;

/// Work and wait for one display frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePlan {
    /// Kernel steps to run this frame.
    pub steps: u32,
    /// Wall-clock delay before the next frame should start.
    pub delay: Duration,
}

/// Converts a playback-speed scalar into per-frame plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackPacer {
    frame_interval: Duration,
}

impl Default for PlaybackPacer {
    fn default() -> Self {
        Self::new(Duration::from_millis(FRAME_INTERVAL_MS))
    }
}

impl PlaybackPacer {
    pub fn new(frame_interval: Duration) -> Self {
        Self { frame_interval }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// At `speed >= 1`, `floor(speed)` steps per frame at the normal frame cadence.
    /// Below 1, one step per frame with the frame interval stretched by `1 / speed`.
    /// Non-positive or non-finite speeds fall back to 1x.
    pub fn plan(&self, speed: f64) -> FramePlan {
        let speed = if speed.is_finite() && speed > 0.0 {
            speed
        } else {
            1.0
        };

        if speed >= 1.0 {
            FramePlan {
                steps: speed.floor().min(u32::MAX as f64) as u32,
                delay: self.frame_interval,
            }
        } else {
            FramePlan {
                steps: 1,
                delay: Duration::from_nanos(
                    (self.frame_interval.as_nanos() as f64 / speed).round() as u64,
                ),
            }
        }
    }
}
