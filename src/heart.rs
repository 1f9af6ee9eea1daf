//! Lub-dub beat for the scene's heart model.
//!
//! A closed-form function of elapsed time: two Gaussian pulses per beat,
//! turned into a squash-and-stretch scale.
//!
//! Standalone helper: the rain renderer draws no model, so hosts that do
//! apply [`HeartBeat::scale`] to their own transform, typically fed from
//! the same clock as the field.
//!
//! ```ignore
//! let scale = HeartBeat::default().scale(field.clock());
//! let model = Mat4::from_scale(scale);
//! ```

use glam::Vec3;

/// Beat parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartBeat {
    /// Beats per minute.
    pub bpm: f32,
    /// Peak scale change.
    pub amp: f32,
    /// How much of the pulse goes to y rather than x/z.
    pub stretch: f32,
}

impl Default for HeartBeat {
    fn default() -> Self {
        Self {
            bpm: 78.0,
            amp: 0.05,
            stretch: 0.4,
        }
    }
}

impl HeartBeat {
    /// Position within the current beat, in `[0, 1)`.
    pub fn phase(&self, t: f32) -> f32 {
        (t * self.bpm / 60.0).rem_euclid(1.0)
    }

    /// Pulse strength at time `t`: a strong beat at phase 0.05 and a
    /// weaker one at 0.35.
    pub fn pulse(&self, t: f32) -> f32 {
        let phase = self.phase(t);
        let p1 = (-20.0 * (phase - 0.05).powi(2)).exp();
        let p2 = (-30.0 * (phase - 0.35).powi(2)).exp();
        (p1 + p2 * 0.6) * self.amp
    }

    /// Scale to apply to the model at time `t`.
    pub fn scale(&self, t: f32) -> Vec3 {
        let beat = self.pulse(t);
        let xz = 1.0 + beat * (1.0 - self.stretch);
        let y = 1.0 + beat * (1.0 + self.stretch);
        Vec3::new(xz, y, xz)
    }
}
