//! Frame timing and the field's simulation clock.
//!
//! [`Time`] measures wall-clock frames for the host loop. [`SimulationClock`]
//! is the single scalar every droplet derivation reads; it only moves when
//! the host feeds it a frame delta.
//!
//! ```ignore
//! let mut time = Time::new();
//! loop {
//!     let dt = time.update();
//!     field.advance(dt);
//! }
//! ```

use std::time::{Duration, Instant};

/// Monotonic simulation time in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationClock {
    seconds: f32,
}

impl SimulationClock {
    /// A clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value in seconds.
    #[inline]
    pub fn seconds(&self) -> f32 {
        self.seconds
    }

    /// Advance by `elapsed` seconds.
    ///
    /// Negative and non-finite deltas are ignored so the clock never runs
    /// backwards.
    #[inline]
    pub fn advance(&mut self, elapsed: f32) {
        if elapsed.is_finite() && elapsed > 0.0 {
            self.seconds += elapsed;
        }
    }
}

/// Frame timer for the host loop.
#[derive(Debug)]
pub struct Time {
    last_frame: Instant,
    frame_count: u64,
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
    paused: bool,
}

impl Time {
    /// Create a new timer starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
            paused: false,
        }
    }

    /// Measure one frame. Call once per frame.
    ///
    /// Returns the frame delta in seconds, which is 0 while paused.
    pub fn update(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        if self.paused {
            0.0
        } else {
            delta
        }
    }

    /// Total frames measured.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second, refreshed twice a second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Toggle pause. While paused `update` returns 0.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
