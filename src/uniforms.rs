//! The per-frame uniform block shared with `rain.wgsl`.
//!
//! Only this block changes between frames; the droplet buffer stays put.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::camera::Camera;
use crate::config::RainConfig;

/// Mirrors `struct RainUniforms` in the shader. 208 bytes, 16-byte aligned.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct RainUniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    /// World translation of the field.
    pub model_offset: [f32; 3],
    /// Simulation clock in seconds.
    pub time: f32,
    pub color: [f32; 3],
    pub opacity: f32,
    /// Render target size in pixels.
    pub viewport: [f32; 2],
    pub height: f32,
    pub base_size: f32,
    pub wind_amp: f32,
    pub wind_freq: f32,
    pub core_width: f32,
    pub head_fade: f32,
    pub tail_fade: f32,
    pub ellipse_x: f32,
    pub _padding: [f32; 2],
}

impl RainUniforms {
    /// Build the block for one frame.
    pub fn new(config: &RainConfig, time: f32, camera: &Camera, viewport: Vec2) -> Self {
        let aspect = if viewport.y > 0.0 { viewport.x / viewport.y } else { 1.0 };
        let shape = &config.shape;

        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix(aspect).to_cols_array_2d(),
            model_offset: config.position.to_array(),
            time,
            color: config.color.to_vec3().to_array(),
            opacity: config.opacity,
            viewport: viewport.to_array(),
            height: config.height,
            base_size: config.base_size,
            wind_amp: config.wind,
            wind_freq: config.wind_freq,
            core_width: shape.core_width,
            head_fade: shape.head_fade,
            tail_fade: shape.tail_fade,
            ellipse_x: shape.ellipse_x,
            _padding: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size_is_16_aligned() {
        assert_eq!(std::mem::size_of::<RainUniforms>(), 208);
        assert_eq!(std::mem::size_of::<RainUniforms>() % 16, 0);
    }

    #[test]
    fn test_field_offsets_match_wgsl() {
        let u = RainUniforms::zeroed();
        let base = &u as *const RainUniforms as usize;
        assert_eq!(&u.model_offset as *const _ as usize - base, 128);
        assert_eq!(&u.color as *const _ as usize - base, 144);
        assert_eq!(&u.viewport as *const _ as usize - base, 160);
        assert_eq!(&u.ellipse_x as *const _ as usize - base, 196);
    }

    #[test]
    fn test_new_copies_parameters() {
        let config = RainConfig::new().with_opacity(0.4).with_wind(0.0, 2.0);
        let u = RainUniforms::new(&config, 3.5, &Camera::new(), Vec2::new(1280.0, 720.0));
        assert_eq!(u.time, 3.5);
        assert_eq!(u.opacity, 0.4);
        assert_eq!(u.wind_amp, 0.0);
        assert_eq!(u.wind_freq, 2.0);
        assert_eq!(u.height, 40.0);
        assert_eq!(u.viewport, [1280.0, 720.0]);
    }
}
