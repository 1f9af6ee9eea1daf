//! Per-droplet static attributes.
//!
//! A [`Droplet`] is sampled once when its field is built and never
//! touched again. It is also the GPU vertex format: the droplet buffer is
//! uploaded verbatim and stepped once per instance.

use bytemuck::{Pod, Zeroable};

use crate::config::RainConfig;
use crate::spawn::SpawnContext;

/// Upper bound (exclusive) for [`Droplet::wind_seed`].
pub const WIND_SEED_RANGE: f32 = 1000.0;

/// One rain particle's immutable attributes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Droplet {
    /// Horizontal lane `(x, z)` within the footprint.
    pub offset: [f32; 2],
    /// Height at clock zero, in `[0, height)`.
    pub start_height: f32,
    /// Fall speed in units per second.
    pub fall_speed: f32,
    /// Phase offset that desynchronizes sway, in `[0, 1000)`.
    pub wind_seed: f32,
}

impl Droplet {
    /// Vertex attributes, matching `DropletIn` in the rain shader.
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x2, // offset
        1 => Float32,   // start_height
        2 => Float32,   // fall_speed
        3 => Float32,   // wind_seed
    ];

    /// Sample one droplet for `config`.
    pub fn sample(ctx: &mut SpawnContext, config: &RainConfig) -> Self {
        let x = ctx.random_spread(config.area.x);
        let z = ctx.random_spread(config.area.y);
        let start_height = ctx.random() * config.height;
        let fall_speed = ctx.random_lerp(config.speed.x, config.speed.y);
        let wind_seed = ctx.random() * WIND_SEED_RANGE;

        Self {
            offset: [x, z],
            // random() * height can round up to height for large boxes
            start_height: if start_height >= config.height { 0.0 } else { start_height },
            fall_speed,
            wind_seed,
        }
    }

    /// Sample `config.count` droplets.
    pub fn sample_all(config: &RainConfig) -> Vec<Droplet> {
        let mut ctx = SpawnContext::new(config.seed);
        (0..config.count)
            .map(|_| Droplet::sample(&mut ctx, config))
            .collect()
    }

    /// Whether this droplet could have been sampled for `config`.
    ///
    /// Every attribute must be finite and inside its sampling range.
    pub fn fits(&self, config: &RainConfig) -> bool {
        let half_w = config.area.x * 0.5;
        let half_d = config.area.y * 0.5;
        let [x, z] = self.offset;

        x.is_finite()
            && z.is_finite()
            && x.abs() <= half_w
            && z.abs() <= half_d
            && self.start_height >= 0.0
            && self.start_height < config.height
            && self.fall_speed >= config.speed.x
            && self.fall_speed <= config.speed.y
            && self.wind_seed >= 0.0
            && self.wind_seed < WIND_SEED_RANGE
    }

    /// Per-instance vertex buffer layout.
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Droplet>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
