// Host-side tests for the orbit camera and background starfield.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod sim;

use glam::{Vec3, Vec4Swizzles};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sim::*;
use std::f32::consts::{PI, TAU};

fn still_camera() -> OrbitCamera {
    let settings = OrbitSettings {
        auto_rotate: false,
        ..OrbitSettings::default()
    };
    OrbitCamera::new(Vec3::from_array(CAMERA_EYE), Vec3::ZERO, settings)
}

#[test]
fn default_camera_starts_at_the_configured_eye() {
    let cam = OrbitCamera::default();
    let eye = cam.eye();
    assert!(eye.distance(Vec3::new(0.0, 5.0, 25.0)) < 1e-4, "{eye:?}");
    assert!((cam.distance() - 650.0f32.sqrt()).abs() < 1e-4);
}

#[test]
fn wheel_zoom_is_clamped_to_distance_limits() {
    let mut cam = still_camera();
    for _ in 0..200 {
        cam.zoom(1.0);
        cam.update(1.0 / 60.0);
    }
    assert!((cam.distance() - ORBIT_MAX_DISTANCE).abs() < 1e-4);

    for _ in 0..200 {
        cam.zoom(-1.0);
        cam.update(1.0 / 60.0);
    }
    assert!((cam.distance() - ORBIT_MIN_DISTANCE).abs() < 1e-4);
}

#[test]
fn single_notch_scales_distance_by_zoom_step() {
    let mut cam = still_camera();
    let d = cam.distance();
    cam.zoom(-3.0);
    cam.update(0.0);
    assert!((cam.distance() - d * ORBIT_ZOOM_STEP).abs() < 1e-4);
    cam.zoom(0.0);
    cam.update(0.0);
    assert!((cam.distance() - d * ORBIT_ZOOM_STEP).abs() < 1e-4);
}

#[test]
fn damped_drag_converges_to_the_full_rotation() {
    let mut cam = still_camera();
    let start = cam.azimuth();
    cam.begin_drag();
    cam.rotate_by_pixels(100.0, 0.0, 600.0);
    cam.end_drag();

    cam.update(1.0 / 60.0);
    let after_one = cam.azimuth();
    // Damping applies only a small slice per frame
    assert!((after_one - start).abs() < TAU * 100.0 / 600.0 * 0.1);

    for _ in 0..1000 {
        cam.update(1.0 / 60.0);
    }
    let expected = start - TAU * 100.0 / 600.0;
    assert!((cam.azimuth() - expected).abs() < 1e-3);
}

#[test]
fn polar_angle_never_flips_over_the_pole() {
    let mut cam = still_camera();
    cam.rotate_by_pixels(0.0, 10_000.0, 100.0);
    for _ in 0..500 {
        cam.update(1.0 / 60.0);
    }
    assert!(cam.polar() > 0.0 && cam.polar() < PI);

    cam.rotate_by_pixels(0.0, -50_000.0, 100.0);
    for _ in 0..500 {
        cam.update(1.0 / 60.0);
    }
    assert!(cam.polar() > 0.0 && cam.polar() < PI);
    assert!(cam.eye().is_finite());
}

#[test]
fn auto_rotate_orbits_without_changing_distance() {
    let mut cam = OrbitCamera::default();
    let d = cam.distance();
    let a = cam.azimuth();
    for _ in 0..120 {
        cam.update(1.0 / 60.0);
    }
    assert!((cam.distance() - d).abs() < 1e-4);
    assert!((cam.eye().distance(cam.target) - d).abs() < 1e-3);
    assert!(cam.azimuth() < a);
}

#[test]
fn auto_rotate_pauses_while_dragging() {
    let mut cam = OrbitCamera::default();
    cam.begin_drag();
    assert!(cam.is_dragging());
    let a = cam.azimuth();
    for _ in 0..60 {
        cam.update(1.0 / 60.0);
    }
    assert_eq!(cam.azimuth(), a);
    cam.end_drag();
    cam.update(1.0 / 60.0);
    assert!(cam.azimuth() < a);
}

#[test]
fn view_projection_maps_target_to_screen_center() {
    let cam = OrbitCamera::default();
    let clip = cam.projection_matrix(16.0 / 9.0) * cam.view_matrix() * Vec3::ZERO.extend(1.0);
    let ndc = clip.xyz() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn starfield_fills_a_thick_shell() {
    let mut rng = StdRng::seed_from_u64(21);
    let stars = Starfield::generate(STAR_COUNT, &mut rng);
    assert_eq!(stars.len(), STAR_COUNT);
    assert_eq!(stars.colors.len(), STAR_COUNT);
    for p in &stars.positions {
        let r = p.length();
        assert!(r >= STAR_RADIUS_MIN - 1e-3 && r <= STAR_RADIUS_MIN + STAR_RADIUS_SPAN + 1e-3);
    }
    for c in &stars.colors {
        assert!(c.x >= 0.5 && c.x <= 1.0);
        assert_eq!(c.x, c.y);
        assert!(c.z >= c.x && c.z <= c.x + 0.2);
    }
    // Both hemispheres are populated
    assert!(stars.positions.iter().any(|p| p.y > 0.0));
    assert!(stars.positions.iter().any(|p| p.y < 0.0));
}

#[test]
fn empty_starfield_is_allowed() {
    let stars = Starfield::generate(0, &mut StdRng::seed_from_u64(0));
    assert!(stars.is_empty());
}
