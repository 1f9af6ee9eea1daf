//! Integration tests for the public rain field API.
//!
//! These exercise the CPU derivation end to end; the GPU path shares the
//! same formulas and is covered by the shader validation tests.

use rainfield::motion::{self, MotionParams};
use rainfield::prelude::*;
use rainfield::{rasterize, Droplet};

fn pinned(start_height: f32, fall_speed: f32, wind_seed: f32) -> Droplet {
    Droplet {
        offset: [0.0, 0.0],
        start_height,
        fall_speed,
        wind_seed,
    }
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

// ============================================================================
// Looping motion
// ============================================================================

#[test]
fn test_single_droplet_loops_through_box() {
    let config = RainConfig::new()
        .with_count(1)
        .with_height(40.0)
        .with_speed(10.0, 10.0)
        .with_wind(0.0, 1.1);
    let mut field = RainField::with_droplets(config, vec![pinned(0.0, 10.0, 0.0)]).unwrap();

    assert!(close(field.local_position(0).unwrap().y, -20.0));
    field.advance(2.0);
    assert!(close(field.local_position(0).unwrap().y, 0.0));
    field.advance(2.0);
    assert!(close(field.local_position(0).unwrap().y, -20.0));
}

#[test]
fn test_equal_speed_range_gives_uniform_speed() {
    let field = RainField::new(RainConfig::new().with_seed(3).with_speed(1.0, 1.0)).unwrap();
    assert!(field.droplets().iter().all(|d| d.fall_speed == 1.0));
}

#[test]
fn test_positions_periodic_in_height_over_speed() {
    let config = RainConfig::new().with_seed(11).with_count(64).with_wind(0.0, 1.0);
    let params = MotionParams::from(&config);
    let field = RainField::new(config).unwrap();

    for d in field.droplets().iter().filter(|d| d.fall_speed > 0.5) {
        let period = params.height / d.fall_speed;
        let a = motion::droplet_position(d, 1.3, &params);
        let b = motion::droplet_position(d, 1.3 + period, &params);
        assert!((a - b).length() < 1e-2, "{:?} vs {:?}", a, b);
    }
}

#[test]
fn test_zero_wind_keeps_horizontal_offset() {
    let config = RainConfig::new().with_seed(5).with_count(32).with_wind(0.0, 1.1);
    let mut field = RainField::new(config).unwrap();

    for _ in 0..10 {
        field.advance(0.37);
        for (i, d) in field.droplets().iter().enumerate() {
            let pos = field.local_position(i).unwrap();
            assert_eq!(pos.x, d.offset[0]);
            assert_eq!(pos.z, d.offset[1]);
        }
    }
}

#[test]
fn test_positions_stay_inside_box() {
    let config = RainConfig::new().with_seed(9).with_count(500).with_wind(0.0, 1.0);
    let mut field = RainField::new(config).unwrap();

    for _ in 0..50 {
        field.advance(0.21);
        for i in 0..field.len() {
            let pos = field.local_position(i).unwrap();
            assert!(pos.y >= -20.0 && pos.y < 20.0);
            assert!(pos.x.abs() <= 25.0);
            assert!(pos.z.abs() <= 15.0);
        }
    }
}

// ============================================================================
// Rebuild semantics
// ============================================================================

#[test]
fn test_seeded_fields_match() {
    let a = RainField::new(RainConfig::new().with_seed(1234)).unwrap();
    let b = RainField::new(RainConfig::new().with_seed(1234)).unwrap();
    assert_eq!(a.droplets(), b.droplets());
}

#[test]
fn test_construction_change_resamples_and_resets_clock() {
    let mut field = RainField::new(RainConfig::new().with_seed(1)).unwrap();
    field.advance(3.0);

    let reseeded = field.config().clone().with_seed(2);
    assert_eq!(field.reconfigure(reseeded), Ok(true));
    assert_eq!(field.clock(), 0.0);

    let fresh = RainField::new(RainConfig::new().with_seed(2)).unwrap();
    assert_eq!(field.droplets(), fresh.droplets());
}

#[test]
fn test_blend_change_rebuilds() {
    let mut field = RainField::new(RainConfig::new().with_seed(1).with_count(10)).unwrap();
    let generation = field.generation();

    let normal = field.config().clone().with_blending(BlendMode::Normal);
    assert_eq!(field.reconfigure(normal), Ok(true));
    assert_ne!(field.generation(), generation);
    assert_eq!(field.config().blending, BlendMode::Normal);
}

#[test]
fn test_move_keeps_droplets_and_clock() {
    let mut field = RainField::new(RainConfig::new().with_seed(1).with_count(10)).unwrap();
    field.advance(1.5);
    let before = field.local_position(3).unwrap();

    field.set_position(Vec3::new(10.0, 0.0, 0.0));
    assert_eq!(field.clock(), 1.5);
    assert_eq!(field.local_position(3).unwrap(), before);

    let view = Camera::new().view_matrix();
    let sample = field.sample(3, &view).unwrap();
    assert!((sample.world_position - (before + Vec3::new(10.0, 0.0, 0.0))).length() < 1e-4);
}

#[test]
fn test_invalid_configs_rejected() {
    assert_eq!(
        RainField::new(RainConfig::new().with_count(0)).unwrap_err(),
        RainError::InvalidCount
    );
    assert!(matches!(
        RainField::new(RainConfig::new().with_speed(5.0, 1.0)),
        Err(RainError::InvalidSpeedRange { .. })
    ));
    assert!(matches!(
        RainField::new(RainConfig::new().with_area(0.0, 10.0)),
        Err(RainError::InvalidArea { .. })
    ));
}

// ============================================================================
// Fade and software frames
// ============================================================================

#[test]
fn test_fade_hides_bottom_of_box() {
    let config = RainConfig::new().with_count(2).with_speed(0.0, 0.0).with_wind(0.0, 1.0);
    let field =
        RainField::with_droplets(config, vec![pinned(1.0, 0.0, 0.0), pinned(30.0, 0.0, 0.0)])
            .unwrap();
    let view = Camera::new().view_matrix();

    let low = field.sample(0, &view).unwrap();
    let high = field.sample(1, &view).unwrap();
    assert_eq!(low.fade, 0.0);
    assert_eq!(high.fade, 1.0);
}

#[test]
fn test_headless_frame_has_rain() {
    let mut field = RainField::new(
        RainConfig::new()
            .with_seed(77)
            .with_count(2000)
            .with_opacity(0.6),
    )
    .unwrap();
    field.advance(1.0);

    let black = Color::rgb(0.0, 0.0, 0.0);
    let image = rasterize(&field, &Camera::new(), 320, 180, black);
    assert_eq!(image.dimensions(), (320, 180));
    assert!(image.pixels().any(|p| p.0[2] > 0));
}

#[test]
fn test_save_frame_writes_png() {
    let field = RainField::new(RainConfig::new().with_seed(8).with_count(50)).unwrap();
    let path = std::env::temp_dir().join(format!("rainfield_test_{}.png", std::process::id()));

    save_frame(&field, &Camera::new(), 64, 48, Color::BACKGROUND, &path).unwrap();
    let loaded = image::open(&path).unwrap();
    assert_eq!((loaded.width(), loaded.height()), (64, 48));
    let _ = std::fs::remove_file(&path);
}
