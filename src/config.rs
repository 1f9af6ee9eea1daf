//! Construction parameters for a [`RainField`](crate::RainField).
//!
//! Every field except `position` is a *construction* parameter: changing
//! it means resampling all droplets. `position` only translates the field.

use glam::{Vec2, Vec3};

use crate::error::RainError;
use crate::visuals::{BlendMode, Color};

/// Droplet sprite shape controls, each in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    /// Half-width of the bright vertical core in sprite UV units.
    /// Narrower means a thinner streak.
    pub core_width: f32,
    /// Fade-in length from the sprite top.
    pub head_fade: f32,
    /// Fade-out length toward the sprite bottom.
    pub tail_fade: f32,
    /// Horizontal scale of the elliptical mask (smaller = taller oval).
    pub ellipse_x: f32,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            core_width: 0.18,
            head_fade: 0.22,
            tail_fade: 0.28,
            ellipse_x: 0.75,
        }
    }
}

/// Everything needed to build a rain field.
///
/// Use method chaining to configure:
///
/// ```ignore
/// let config = RainConfig::new()
///     .with_count(2000)
///     .with_speed(2.0, 12.0)
///     .with_wind(0.5, 0.8)
///     .with_blending(BlendMode::Normal);
/// let field = RainField::new(config)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RainConfig {
    /// Number of droplets.
    pub count: u32,
    /// Footprint (width along x, depth along z) in world units.
    pub area: Vec2,
    /// Height of the vertical loop box.
    pub height: f32,
    /// On-screen sprite diameter in pixels, scaled by `300 / depth`.
    pub base_size: f32,
    /// Fall speed range `(min, max)` in units per second.
    pub speed: Vec2,
    /// Sideways sway amplitude in world units. Zero disables sway.
    pub wind: f32,
    /// Sway frequency.
    pub wind_freq: f32,
    /// Droplet color.
    pub color: Color,
    /// Overall opacity in `[0, 1]`.
    pub opacity: f32,
    /// Blend mode.
    pub blending: BlendMode,
    /// World translation of the box centre.
    pub position: Vec3,
    /// Sprite shape.
    pub shape: ShapeParams,
    /// RNG seed for attribute sampling. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            area: Vec2::new(50.0, 30.0),
            height: 40.0,
            base_size: 14.0,
            speed: Vec2::new(1.0, 10.0),
            wind: 1.0,
            wind_freq: 1.1,
            color: Color::RAIN,
            opacity: 0.1,
            blending: BlendMode::Additive,
            position: Vec3::ZERO,
            shape: ShapeParams::default(),
            seed: None,
        }
    }
}

impl RainConfig {
    /// Create a config with the default scene values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of droplets.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Set the footprint width (x) and depth (z).
    pub fn with_area(mut self, width: f32, depth: f32) -> Self {
        self.area = Vec2::new(width, depth);
        self
    }

    /// Set the loop box height.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Set the nominal sprite diameter in pixels.
    pub fn with_base_size(mut self, base_size: f32) -> Self {
        self.base_size = base_size;
        self
    }

    /// Set the fall speed range.
    pub fn with_speed(mut self, min: f32, max: f32) -> Self {
        self.speed = Vec2::new(min, max);
        self
    }

    /// Set sway amplitude and frequency.
    pub fn with_wind(mut self, amplitude: f32, frequency: f32) -> Self {
        self.wind = amplitude;
        self.wind_freq = frequency;
        self
    }

    /// Set the droplet color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the overall opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the blend mode.
    pub fn with_blending(mut self, blending: BlendMode) -> Self {
        self.blending = blending;
        self
    }

    /// Set the world translation of the field.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set all shape parameters.
    pub fn with_shape(mut self, shape: ShapeParams) -> Self {
        self.shape = shape;
        self
    }

    /// Fix the sampling seed so rebuilds are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every parameter, returning the first violation.
    pub fn validate(&self) -> Result<(), RainError> {
        if self.count == 0 {
            return Err(RainError::InvalidCount);
        }

        let (width, depth) = (self.area.x, self.area.y);
        if !(width.is_finite() && depth.is_finite() && width > 0.0 && depth > 0.0) {
            return Err(RainError::InvalidArea { width, depth });
        }

        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(RainError::InvalidHeight(self.height));
        }

        let (min, max) = (self.speed.x, self.speed.y);
        if !(min.is_finite() && max.is_finite() && min >= 0.0 && min <= max) {
            return Err(RainError::InvalidSpeedRange { min, max });
        }

        if !(self.wind.is_finite() && self.wind_freq.is_finite()) {
            return Err(RainError::InvalidWind {
                amplitude: self.wind,
                frequency: self.wind_freq,
            });
        }

        for (name, value) in [
            ("core_width", self.shape.core_width),
            ("head_fade", self.shape.head_fade),
            ("tail_fade", self.shape.tail_fade),
            ("ellipse_x", self.shape.ellipse_x),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(RainError::InvalidShape { name, value });
            }
        }

        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(RainError::InvalidOpacity(self.opacity));
        }

        if !(self.base_size.is_finite() && self.base_size > 0.0) {
            return Err(RainError::InvalidBaseSize(self.base_size));
        }

        Ok(())
    }

    /// Whether `other` differs only in placement, so the droplets can be kept.
    pub fn same_construction(&self, other: &RainConfig) -> bool {
        let mut moved = other.clone();
        moved.position = self.position;
        *self == moved
    }
}
