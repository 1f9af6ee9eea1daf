//! The rain field: droplets, clock and parameters.
//!
//! A [`RainField`] is built once per distinct [`RainConfig`]. Afterwards the
//! only host-side mutation is [`RainField::advance`]; positions and alpha
//! are derived on demand from `(droplet, clock)` by [`crate::motion`] or the
//! GPU shader.
//!
//! # Example
//!
//! ```ignore
//! let mut field = RainField::new(RainConfig::new().with_count(2000))?;
//!
//! // Host loop
//! field.advance(time.update());
//! renderer.render(&field)?;
//!
//! // Changing a construction parameter resamples every droplet
//! field.reconfigure(field.config().clone().with_speed(2.0, 20.0))?;
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use glam::{Mat4, Vec2, Vec3};

use crate::camera::Camera;
use crate::config::RainConfig;
use crate::droplet::Droplet;
use crate::error::RainError;
use crate::motion::{self, MotionParams};
use crate::time::SimulationClock;
use crate::uniforms::RainUniforms;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Derived state of one droplet for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropletSample {
    /// Position in world space (field translation applied).
    pub world_position: Vec3,
    /// View-space z. Negative in front of the camera.
    pub view_z: f32,
    /// Sprite diameter in pixels; 0 when behind the camera.
    pub point_size: f32,
    /// Top-edge fade in `[0, 1]`.
    pub fade: f32,
}

/// A fixed set of droplets looping through a box.
#[derive(Debug, Clone)]
pub struct RainField {
    config: RainConfig,
    droplets: Vec<Droplet>,
    clock: SimulationClock,
    generation: u64,
}

impl RainField {
    /// Validate `config` and sample every droplet.
    pub fn new(config: RainConfig) -> Result<Self, RainError> {
        config.validate()?;
        let droplets = Droplet::sample_all(&config);
        log::info!(
            "Built rain field: {} droplets, {}x{}x{} box",
            droplets.len(),
            config.area.x,
            config.height,
            config.area.y
        );

        Ok(Self {
            config,
            droplets,
            clock: SimulationClock::new(),
            generation: next_generation(),
        })
    }

    /// Build a field from caller-supplied droplets instead of sampling.
    ///
    /// `droplets.len()` must equal `config.count`, and every droplet must
    /// lie within the ranges `config` samples from.
    pub fn with_droplets(config: RainConfig, droplets: Vec<Droplet>) -> Result<Self, RainError> {
        config.validate()?;
        if droplets.len() != config.count as usize {
            return Err(RainError::InvalidCount);
        }
        if let Some(index) = droplets.iter().position(|d| !d.fits(&config)) {
            return Err(RainError::InvalidDroplet { index });
        }

        Ok(Self {
            config,
            droplets,
            clock: SimulationClock::new(),
            generation: next_generation(),
        })
    }

    /// Advance the simulation clock. O(1) regardless of droplet count.
    #[inline]
    pub fn advance(&mut self, elapsed_secs: f32) {
        self.clock.advance(elapsed_secs);
    }

    /// Apply a new configuration.
    ///
    /// A change to any construction parameter rebuilds the field (fresh
    /// sampling, clock reset) and returns `Ok(true)`. A change to
    /// `position` alone only moves the field. An invalid config leaves the
    /// field untouched.
    pub fn reconfigure(&mut self, config: RainConfig) -> Result<bool, RainError> {
        if self.config.same_construction(&config) {
            self.config.position = config.position;
            return Ok(false);
        }

        *self = RainField::new(config)?;
        log::debug!("Rain field rebuilt, generation {}", self.generation);
        Ok(true)
    }

    /// Move the field without resampling.
    pub fn set_position(&mut self, position: Vec3) {
        self.config.position = position;
    }

    /// Current configuration.
    #[inline]
    pub fn config(&self) -> &RainConfig {
        &self.config
    }

    /// Static droplet attributes, in draw order.
    #[inline]
    pub fn droplets(&self) -> &[Droplet] {
        &self.droplets
    }

    /// Number of droplets.
    #[inline]
    pub fn len(&self) -> usize {
        self.droplets.len()
    }

    /// Always false for a constructed field.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.droplets.is_empty()
    }

    /// Simulation clock in seconds.
    #[inline]
    pub fn clock(&self) -> f32 {
        self.clock.seconds()
    }

    /// Identifies this build. Unique per process; every rebuild gets a new one.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Motion parameters for [`crate::motion`].
    #[inline]
    pub fn motion_params(&self) -> MotionParams {
        MotionParams::from(&self.config)
    }

    /// Field-local position of droplet `index` at the current clock.
    pub fn local_position(&self, index: usize) -> Option<Vec3> {
        let params = self.motion_params();
        self.droplets
            .get(index)
            .map(|d| motion::droplet_position(d, self.clock(), &params))
    }

    /// Derive droplet `index` for the current frame.
    pub fn sample(&self, index: usize, view: &Mat4) -> Option<DropletSample> {
        let droplet = self.droplets.get(index)?;
        Some(self.derive(droplet, &self.motion_params(), view))
    }

    /// Derive every droplet for the current frame, in draw order.
    pub fn samples<'a>(&'a self, view: &'a Mat4) -> impl Iterator<Item = DropletSample> + 'a {
        let params = self.motion_params();
        self.droplets.iter().map(move |d| self.derive(d, &params, view))
    }

    /// Uniform block for the GPU shader.
    pub fn uniforms(&self, camera: &Camera, viewport: Vec2) -> RainUniforms {
        RainUniforms::new(&self.config, self.clock(), camera, viewport)
    }

    fn derive(&self, droplet: &Droplet, params: &MotionParams, view: &Mat4) -> DropletSample {
        let local = motion::droplet_position(droplet, self.clock(), params);
        let world_position = local + self.config.position;
        let view_z = view.transform_point3(world_position).z;
        let fade = motion::top_fade(motion::top_fraction(local.y, params.height));

        DropletSample {
            world_position,
            view_z,
            point_size: motion::point_size(self.config.base_size, view_z),
            fade,
        }
    }
}
