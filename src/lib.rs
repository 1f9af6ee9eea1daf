//! # Rainfield
//!
//! A GPU-driven field of falling rain droplets rendered as point sprites.
//!
//! Each droplet is sampled once when the field is built and never touched
//! again. Per frame the host only advances a clock; position, top-edge fade,
//! sprite size and the teardrop mask are derived from `(droplet, clock)` in
//! the vertex and fragment shaders. The same derivation is available on the
//! CPU in [`motion`] and drives the software [`raster`] path.
//!
//! ## Quick Start
//!
//! ```ignore
//! use rainfield::prelude::*;
//!
//! fn main() -> Result<(), AppError> {
//!     rainfield::window::run(
//!         RainConfig::new()
//!             .with_count(2000)
//!             .with_speed(2.0, 12.0)
//!             .with_blending(BlendMode::Additive),
//!     )
//! }
//! ```
//!
//! ## Headless frames
//!
//! ```ignore
//! let mut field = RainField::new(RainConfig::new().with_seed(7))?;
//! field.advance(2.5);
//! save_frame(&field, &Camera::new(), 1280, 720, Color::BACKGROUND, "rain.png")?;
//! ```
//!
//! ## Parameters
//!
//! | Parameter | Default | Effect |
//! |-----------|---------|--------|
//! | `count` | 1000 | droplets in the field |
//! | `area` | 50 × 30 | horizontal extent (x, z) |
//! | `height` | 40 | vertical loop distance |
//! | `base_size` | 14 | sprite size in pixels at 300 units |
//! | `speed` | 1..10 | fall speed range |
//! | `wind` | 1.0 @ 1.1 | sway amplitude and frequency |
//! | `color` | `#bbceed` | droplet colour |
//! | `opacity` | 0.1 | peak alpha |
//! | `blending` | additive | compositing mode |
//!
//! Changing anything but `position` rebuilds the field.

pub mod camera;
pub mod config;
pub mod droplet;
pub mod error;
pub mod field;
pub mod gpu;
pub mod heart;
pub mod motion;
pub mod raster;
pub mod shader;
pub mod spawn;
pub mod time;
pub mod uniforms;
pub mod visuals;
pub mod window;

pub use bytemuck;
pub use camera::Camera;
pub use config::{RainConfig, ShapeParams};
pub use droplet::Droplet;
pub use error::{AppError, GpuError, RainError};
pub use field::{DropletSample, RainField};
pub use glam::{Vec2, Vec3};
pub use gpu::RainRenderer;
pub use heart::HeartBeat;
pub use raster::{rasterize, save_frame};
pub use spawn::SpawnContext;
pub use time::{SimulationClock, Time};
pub use uniforms::RainUniforms;
pub use visuals::{BlendMode, Color};

/// Common imports.
///
/// ```ignore
/// use rainfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::camera::Camera;
    pub use crate::config::{RainConfig, ShapeParams};
    pub use crate::error::{AppError, RainError};
    pub use crate::field::RainField;
    pub use crate::raster::save_frame;
    pub use crate::visuals::{BlendMode, Color};
    pub use glam::{Vec2, Vec3};
}
