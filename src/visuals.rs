//! Visual configuration for droplet rendering.
//!
//! Blending and color are kept apart from the motion parameters: they
//! change how a droplet composites, never where it is.
//!
//! # Usage
//!
//! ```ignore
//! let config = RainConfig::new()
//!     .with_blending(BlendMode::Additive)
//!     .with_color(Color::from_hex("#bbceed")?);
//! ```

use glam::Vec3;

use crate::error::RainError;

/// How overlapping droplets combine with the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard alpha compositing in draw order.
    Normal,

    /// Additive blending (default).
    ///
    /// Droplet colors are scaled by alpha and summed, so dense rain
    /// brightens where streaks overlap.
    #[default]
    Additive,
}

impl BlendMode {
    /// The wgpu blend state for this mode.
    pub fn blend_state(&self) -> wgpu::BlendState {
        match self {
            BlendMode::Normal => wgpu::BlendState::ALPHA_BLENDING,
            BlendMode::Additive => wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::SrcAlpha,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::One,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
            },
        }
    }

    /// Composite a straight-alpha source over `dst` (linear RGB, alpha last).
    ///
    /// CPU mirror of [`BlendMode::blend_state`].
    pub fn composite(&self, src: Vec3, alpha: f32, dst: [f32; 4]) -> [f32; 4] {
        match self {
            BlendMode::Normal => [
                src.x * alpha + dst[0] * (1.0 - alpha),
                src.y * alpha + dst[1] * (1.0 - alpha),
                src.z * alpha + dst[2] * (1.0 - alpha),
                alpha + dst[3] * (1.0 - alpha),
            ],
            BlendMode::Additive => [
                src.x * alpha + dst[0],
                src.y * alpha + dst[1],
                src.z * alpha + dst[2],
                alpha + dst[3],
            ],
        }
    }

    /// The other mode.
    pub fn toggled(&self) -> Self {
        match self {
            BlendMode::Normal => BlendMode::Additive,
            BlendMode::Additive => BlendMode::Normal,
        }
    }
}

/// An RGB color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub Vec3);

impl Color {
    /// Droplet default, a pale blue.
    pub const RAIN: Color = Color(Vec3::new(0xbb as f32 / 255.0, 0xce as f32 / 255.0, 0xed as f32 / 255.0));

    /// Scene background grey.
    pub const BACKGROUND: Color = Color(Vec3::new(0x63 as f32 / 255.0, 0x63 as f32 / 255.0, 0x6b as f32 / 255.0));

    /// Create a color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color(Vec3::new(r, g, b))
    }

    /// Parse `#rrggbb` or the `#rgb` shorthand. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, RainError> {
        let err = || RainError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return Err(err());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
        let (r, g, b) = match digits.len() {
            6 => (channel(&digits[0..2])?, channel(&digits[2..4])?, channel(&digits[4..6])?),
            3 => {
                // #abc expands to #aabbcc
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                (r * 17, g * 17, b * 17)
            }
            _ => return Err(err()),
        };

        Ok(Color::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0))
    }

    /// Color as a vector.
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        self.0
    }

    /// Clear color for a render pass.
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.0.x as f64,
            g: self.0.y as f64,
            b: self.0.z as f64,
            a: 1.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::RAIN
    }
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Self {
        Color(v)
    }
}
