//! Pure per-droplet derivation: position, fade, sprite size and shape mask.
//!
//! Every function here is a stateless function of a droplet's static
//! attributes, the field clock and the field parameters. `rain.wgsl`
//! evaluates the same formulas on the GPU; this module is the CPU
//! reference used by [`RainField::sample`](crate::RainField::sample), the
//! software rasterizer and the tests.
//!
//! ```text
//! y     = wrap(start_height - clock * fall_speed, height) - height / 2
//! sway  = sin((clock + wind_seed) * wind_freq) * wind
//! pos   = (offset.x + sway, y, offset.z + sway * 0.15)
//! fade  = smoothstep(0.08, 0.55, (y + height / 2) / height)
//! size  = base_size * 300 / -view_z
//! ```

use glam::{Vec2, Vec3};

use crate::config::{RainConfig, ShapeParams};
use crate::droplet::Droplet;

/// Lower edge of the top-fade band, as a fraction of box height.
pub const FADE_START: f32 = 0.08;
/// Height fraction above which droplets are fully visible.
pub const FADE_END: f32 = 0.55;
/// Perspective numerator for sprite sizing.
pub const SIZE_SCALE: f32 = 300.0;
/// Fraction of the x sway applied along z.
pub const Z_SWAY_COUPLING: f32 = 0.15;
/// Fragments fainter than this are discarded.
pub const ALPHA_CUTOFF: f32 = 0.01;

/// The parameters the position derivation reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    pub height: f32,
    pub wind: f32,
    pub wind_freq: f32,
}

impl From<&RainConfig> for MotionParams {
    fn from(config: &RainConfig) -> Self {
        Self {
            height: config.height,
            wind: config.wind,
            wind_freq: config.wind_freq,
        }
    }
}

/// GLSL `smoothstep`, including reversed edges (`edge0 > edge1`).
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Non-negative modulo into `[0, modulus)`, matching WGSL/GLSL `mod`.
#[inline]
pub fn wrap(value: f32, modulus: f32) -> f32 {
    let r = value - modulus * (value / modulus).floor();
    if r >= 0.0 && r < modulus {
        r
    } else {
        0.0
    }
}

/// Vertical position, centred on the box (`-height/2 ..= height/2`).
#[inline]
pub fn droplet_y(droplet: &Droplet, clock: f32, height: f32) -> f32 {
    wrap(droplet.start_height - clock * droplet.fall_speed, height) - height * 0.5
}

/// Sideways displacement from wind.
#[inline]
pub fn sway(droplet: &Droplet, clock: f32, params: &MotionParams) -> f32 {
    ((clock + droplet.wind_seed) * params.wind_freq).sin() * params.wind
}

/// Local (field-space) position of a droplet at `clock`.
pub fn droplet_position(droplet: &Droplet, clock: f32, params: &MotionParams) -> Vec3 {
    let y = droplet_y(droplet, clock, params.height);
    let s = sway(droplet, clock, params);
    Vec3::new(droplet.offset[0] + s, y, droplet.offset[1] + s * Z_SWAY_COUPLING)
}

/// Height fraction: 0 at the box bottom, 1 at the top.
#[inline]
pub fn top_fraction(y: f32, height: f32) -> f32 {
    (y + height * 0.5) / height
}

/// Visibility factor that hides the loop seam.
#[inline]
pub fn top_fade(top: f32) -> f32 {
    smoothstep(FADE_START, FADE_END, top)
}

/// Sprite diameter in pixels for a view-space z.
///
/// Returns 0 at or behind the camera plane.
#[inline]
pub fn point_size(base_size: f32, view_z: f32) -> f32 {
    let distance = -view_z;
    if distance > 0.0 {
        base_size * (SIZE_SCALE / distance)
    } else {
        0.0
    }
}

/// Shape mask for one sprite pixel.
///
/// `uv` spans `[0, 1]²` with `y = 0` at the sprite top. Returns `None`
/// where the pixel is discarded.
pub fn shape_alpha(uv: Vec2, shape: &ShapeParams, fade: f32, opacity: f32) -> Option<f32> {
    let mut p = uv - Vec2::splat(0.5);
    p.x /= shape.ellipse_x;
    if p.length() > 0.5 {
        return None;
    }

    let dx = (uv.x - 0.5).abs();
    let core = smoothstep(shape.core_width, 0.0, dx);
    let head = smoothstep(0.0, shape.head_fade, uv.y);
    let tail = smoothstep(1.0, 1.0 - shape.tail_fade, uv.y);

    let alpha = core * head * tail * fade * opacity;
    if alpha < ALPHA_CUTOFF {
        None
    } else {
        Some(alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn droplet(start_height: f32, fall_speed: f32) -> Droplet {
        Droplet {
            offset: [3.0, -2.0],
            start_height,
            fall_speed,
            wind_seed: 17.0,
        }
    }

    fn params(height: f32) -> MotionParams {
        MotionParams { height, wind: 1.0, wind_freq: 1.1 }
    }

    #[test]
    fn test_smoothstep_edges() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
        // Reversed edges invert the ramp
        assert_eq!(smoothstep(1.0, 0.0, 0.0), 1.0);
        assert_eq!(smoothstep(1.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_wrap_is_non_negative() {
        assert_eq!(wrap(-20.0, 40.0), 20.0);
        assert_eq!(wrap(-40.0, 40.0), 0.0);
        assert_eq!(wrap(45.0, 40.0), 5.0);
        for i in -500..500 {
            let r = wrap(i as f32 * 0.37, 7.0);
            assert!((0.0..7.0).contains(&r));
        }
    }

    #[test]
    fn test_single_droplet_loop() {
        let d = Droplet { offset: [0.0, 0.0], start_height: 0.0, fall_speed: 10.0, wind_seed: 0.0 };
        let p = params(40.0);
        assert_eq!(droplet_position(&d, 0.0, &p).y, -20.0);
        assert_eq!(droplet_position(&d, 2.0, &p).y, 0.0);
        assert_eq!(droplet_position(&d, 4.0, &p).y, -20.0);
    }

    #[test]
    fn test_initial_placement() {
        for start in [0.0, 1.5, 12.0, 39.9] {
            let d = droplet(start, 3.0);
            assert_eq!(droplet_y(&d, 0.0, 40.0), start - 20.0);
        }
    }

    #[test]
    fn test_periodic_in_fall_time() {
        let height = 40.0;
        let d = droplet(13.0, 4.0);
        let period = height / d.fall_speed;
        for i in 0..20 {
            let clock = i as f32 * 0.73;
            let a = droplet_y(&d, clock, height);
            let b = droplet_y(&d, clock + period, height);
            // Compare on the circle so a seam crossing is not a false failure
            let diff = wrap(a - b + height * 0.5, height) - height * 0.5;
            assert!(diff.abs() < 1e-3, "clock {}: {} vs {}", clock, a, b);
        }
    }

    #[test]
    fn test_zero_wind_no_sway() {
        let p = MotionParams { height: 40.0, wind: 0.0, wind_freq: 1.1 };
        let d = droplet(5.0, 2.0);
        for i in 0..100 {
            let clock = i as f32 * 0.31;
            assert_eq!(sway(&d, clock, &p), 0.0);
            let pos = droplet_position(&d, clock, &p);
            assert_eq!(pos.x, d.offset[0]);
            assert_eq!(pos.z, d.offset[1]);
        }
    }

    #[test]
    fn test_sway_z_coupling() {
        let p = params(40.0);
        let d = droplet(5.0, 2.0);
        let pos = droplet_position(&d, 1.3, &p);
        let s = sway(&d, 1.3, &p);
        assert!((pos.x - (d.offset[0] + s)).abs() < 1e-6);
        assert!((pos.z - (d.offset[1] + s * 0.15)).abs() < 1e-6);
        assert!(s.abs() <= 1.0);
    }

    #[test]
    fn test_top_fade_band() {
        assert_eq!(top_fade(FADE_START), 0.0);
        assert_eq!(top_fade(FADE_END), 1.0);
        assert_eq!(top_fade(0.0), 0.0);
        assert_eq!(top_fade(1.0), 1.0);
        let mid = top_fade(0.3);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn test_top_fraction() {
        assert_eq!(top_fraction(-20.0, 40.0), 0.0);
        assert_eq!(top_fraction(20.0, 40.0), 1.0);
        assert_eq!(top_fraction(0.0, 40.0), 0.5);
    }

    #[test]
    fn test_point_size_perspective() {
        assert_eq!(point_size(14.0, -300.0), 14.0);
        assert_eq!(point_size(14.0, -40.0), 14.0 * 7.5);
        assert!(point_size(14.0, -10.0) > point_size(14.0, -20.0));
        assert_eq!(point_size(14.0, 0.0), 0.0);
        assert_eq!(point_size(14.0, 5.0), 0.0);
    }

    #[test]
    fn test_shape_center_visible() {
        let shape = ShapeParams::default();
        let alpha = shape_alpha(Vec2::new(0.5, 0.5), &shape, 1.0, 0.1);
        assert!(matches!(alpha, Some(a) if a > 0.0));
        assert!((alpha.unwrap() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_shape_edge_masked() {
        let shape = ShapeParams::default();
        assert_eq!(shape_alpha(Vec2::new(0.0, 0.5), &shape, 1.0, 0.1), None);
        assert_eq!(shape_alpha(Vec2::new(1.0, 0.5), &shape, 1.0, 0.1), None);
        // Outside the core but inside the ellipse
        assert_eq!(shape_alpha(Vec2::new(0.3, 0.5), &shape, 1.0, 1.0), None);
    }

    #[test]
    fn test_shape_head_and_tail_taper() {
        let shape = ShapeParams::default();
        // Very top and bottom rows are fully faded
        assert_eq!(shape_alpha(Vec2::new(0.5, 0.0), &shape, 1.0, 1.0), None);
        assert_eq!(shape_alpha(Vec2::new(0.5, 1.0), &shape, 1.0, 1.0), None);
        let near_top = shape_alpha(Vec2::new(0.5, 0.1), &shape, 1.0, 1.0).unwrap();
        assert!(near_top < 1.0);
    }

    #[test]
    fn test_zero_opacity_is_transparent() {
        let shape = ShapeParams::default();
        assert_eq!(shape_alpha(Vec2::new(0.5, 0.5), &shape, 1.0, 0.0), None);
    }

    #[test]
    fn test_fade_scales_alpha() {
        let shape = ShapeParams::default();
        assert_eq!(shape_alpha(Vec2::new(0.5, 0.5), &shape, 0.0, 1.0), None);
        let half = shape_alpha(Vec2::new(0.5, 0.5), &shape, 0.5, 1.0).unwrap();
        assert!((half - 0.5).abs() < 1e-6);
    }
}
