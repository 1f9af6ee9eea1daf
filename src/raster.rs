//! Software point-sprite rasterizer.
//!
//! Evaluates the same per-droplet derivation as the GPU path, serially,
//! and composites each sprite into an image in draw order. There is no
//! opaque geometry on this path, so there is nothing to depth test against
//! and, as on the GPU, droplets never occlude each other.

use std::path::Path;

use glam::{Vec2, Vec4};
use image::{Rgba, RgbaImage};

use crate::camera::Camera;
use crate::field::RainField;
use crate::motion;
use crate::visuals::Color;

/// Render the field's current frame.
///
/// Blending happens in linear float space and is clamped once at the end.
pub fn rasterize(field: &RainField, camera: &Camera, width: u32, height: u32, background: Color) -> RgbaImage {
    let bg = background.to_vec3();
    let mut target = vec![[bg.x, bg.y, bg.z, 1.0f32]; (width as usize) * (height as usize)];

    if width > 0 && height > 0 {
        let config = field.config();
        let view = camera.view_matrix();
        let proj = camera.projection_matrix(width as f32 / height as f32);
        let color = config.color.to_vec3();
        let size = Vec2::new(width as f32, height as f32);

        for sample in field.samples(&view) {
            if sample.point_size <= 0.0 || sample.fade <= 0.0 {
                continue;
            }

            let view_pos = view.transform_point3(sample.world_position);
            let clip = proj * Vec4::new(view_pos.x, view_pos.y, view_pos.z, 1.0);
            if clip.w <= 0.0 {
                continue;
            }
            let ndc = clip.truncate() / clip.w;
            if !(0.0..=1.0).contains(&ndc.z) {
                continue;
            }

            // Screen space, y down
            let center = Vec2::new((ndc.x * 0.5 + 0.5) * size.x, (0.5 - ndc.y * 0.5) * size.y);
            let half = sample.point_size * 0.5;
            let min = center - Vec2::splat(half);

            let x0 = min.x.floor().max(0.0) as u32;
            let y0 = min.y.floor().max(0.0) as u32;
            let x1 = (center.x + half).ceil().min(size.x) as u32;
            let y1 = (center.y + half).ceil().min(size.y) as u32;

            for py in y0..y1 {
                for px in x0..x1 {
                    let pixel_center = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                    let uv = (pixel_center - min) / sample.point_size;
                    if uv.x < 0.0 || uv.x > 1.0 || uv.y < 0.0 || uv.y > 1.0 {
                        continue;
                    }

                    let Some(alpha) = motion::shape_alpha(uv, &config.shape, sample.fade, config.opacity)
                    else {
                        continue;
                    };

                    let idx = py as usize * width as usize + px as usize;
                    target[idx] = config.blending.composite(color, alpha, target[idx]);
                }
            }
        }
    }

    RgbaImage::from_fn(width, height, |x, y| {
        let px = target[y as usize * width as usize + x as usize];
        Rgba([to_u8(px[0]), to_u8(px[1]), to_u8(px[2]), to_u8(px[3])])
    })
}

/// Render the current frame and write it as an image (format from the
/// path extension).
pub fn save_frame<P: AsRef<Path>>(
    field: &RainField,
    camera: &Camera,
    width: u32,
    height: u32,
    background: Color,
    path: P,
) -> Result<(), image::ImageError> {
    let image = rasterize(field, camera, width, height, background);
    image.save(path)?;
    log::info!("Wrote {}x{} frame at t={:.2}s", width, height, field.clock());
    Ok(())
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
