// Host-side tests for the scene session, frame scheduling and presentation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod sim;

use sim::*;
use std::cell::RefCell;
use std::rc::Rc;

fn params(count: usize) -> SceneParams {
    SceneParams {
        particle_count: count,
        seed: Some(42),
        ..SceneParams::default()
    }
}

fn run(session: &mut Session, from: f64, seconds: f64) -> f64 {
    let dt = 1.0 / 60.0;
    let mut t = from;
    while t < from + seconds {
        t += dt;
        session.advance(dt as f32, t);
    }
    t
}

#[test]
fn default_params_match_the_controls() {
    let p = SceneParams::default();
    assert_eq!(p.particle_count, 10_000);
    assert_eq!(p.twinkle_speed, 5.0);
    assert_eq!(p.auto_cycle_interval_sec, 5.0);
    assert!(p.seed.is_none());
}

#[test]
fn new_session_explodes_into_the_tree() {
    let s = Session::new(params(1000)).unwrap();
    assert_eq!(s.particle_count(), 1000);
    assert_eq!(s.particles().len(), 1000);
    assert_eq!(s.targets().len(), 1000);
    assert_eq!(s.starfield().len(), STAR_COUNT);
    assert_eq!(s.active_shape(), ShapeId::Tree);
    assert!(s.transition().in_transition());
    assert!(!s.auto_cycle_enabled());
    assert_eq!(s.generation(), 0);

    let half = EXPLOSION_CUBE_SIDE / 2.0;
    for p in s.particles().current() {
        assert!(p.abs().max_element() <= half);
    }
}

#[test]
fn out_of_range_count_is_rejected_at_creation() {
    let err = Session::new(params(10)).err();
    assert_eq!(
        err,
        Some(SceneError::ParticleCountOutOfRange {
            count: 10,
            min: MIN_PARTICLE_COUNT,
            max: MAX_PARTICLE_COUNT,
        })
    );
    assert!(Session::new(params(MAX_PARTICLE_COUNT + 1)).is_err());
    assert!(validate_particle_count(MIN_PARTICLE_COUNT).is_ok());
    assert!(validate_particle_count(MAX_PARTICLE_COUNT).is_ok());
}

#[test]
fn seeded_sessions_are_reproducible() {
    let a = Session::new(params(1000)).unwrap();
    let b = Session::new(params(1000)).unwrap();
    assert_eq!(a.particles().position_array(), b.particles().position_array());
    assert_eq!(a.targets().get(ShapeId::Heart), b.targets().get(ShapeId::Heart));
}

#[test]
fn particles_settle_on_the_tree_after_startup() {
    let mut s = Session::new(params(1000)).unwrap();
    let t = run(&mut s, 0.0, 5.0);
    assert!(t >= 5.0);
    assert!(!s.transition().in_transition());
    let tree = s.targets().get(ShapeId::Tree);
    for (p, target) in s.particles().rendered().iter().zip(tree) {
        assert!(p.distance(*target) <= 0.1);
    }
}

#[test]
fn regeneration_resizes_everything_and_restarts_the_morph() {
    let mut s = Session::new(params(1000)).unwrap();
    let t = run(&mut s, 0.0, 1.0);
    s.select_shape(ShapeId::Heart);
    run(&mut s, t, 0.1);
    let before = s.particles().position_array().to_vec();

    s.set_particle_count(5000).unwrap();

    assert_eq!(s.generation(), 1);
    assert_eq!(s.particle_count(), 5000);
    assert_eq!(s.particles().len(), 5000);
    assert_eq!(s.particles().position_array().len(), 15_000);
    assert_eq!(s.particles().color_array().len(), 15_000);
    assert_eq!(s.particles().sizes().len(), 5000);
    for shape in ShapeId::ALL {
        assert_eq!(s.targets().get(shape).len(), 5000);
    }
    assert_eq!(s.active_shape(), ShapeId::Tree);
    assert!(s.transition().in_transition());
    assert_eq!(s.transition().progress(), 0.0);
    assert_ne!(&s.particles().position_array()[..3000], &before[..3000]);
}

#[test]
fn failed_regeneration_leaves_state_untouched() {
    let mut s = Session::new(params(2000)).unwrap();
    run(&mut s, 0.0, 0.2);
    let positions = s.particles().position_array().to_vec();
    let transition = s.transition().clone();

    let err = s.set_particle_count(50).unwrap_err();
    assert!(matches!(err, SceneError::ParticleCountOutOfRange { count: 50, .. }));
    assert_eq!(s.particle_count(), 2000);
    assert_eq!(s.generation(), 0);
    assert_eq!(s.particles().position_array(), positions.as_slice());
    assert_eq!(s.transition(), &transition);
}

#[test]
fn shape_requests_during_a_morph_are_dropped() {
    let mut s = Session::new(params(1000)).unwrap();
    // Still morphing into the tree
    assert!(!s.select_shape(ShapeId::Heart));
    assert_eq!(s.active_shape(), ShapeId::Tree);

    run(&mut s, 0.0, 1.0);
    assert!(s.select_shape(ShapeId::Heart));
    assert_eq!(s.active_shape(), ShapeId::Heart);
}

#[test]
fn auto_cycle_alternates_shapes() {
    let mut s = Session::new(params(1000)).unwrap();
    assert!(s.toggle_auto_cycle());

    let t = run(&mut s, 0.0, 4.9);
    assert_eq!(s.active_shape(), ShapeId::Tree);
    let t = run(&mut s, t, 0.2);
    assert_eq!(s.active_shape(), ShapeId::Heart);
    run(&mut s, t, 5.0);
    assert_eq!(s.active_shape(), ShapeId::Tree);
}

#[test]
fn toggling_auto_cycle_mid_morph_keeps_the_morph() {
    let mut s = Session::new(params(1000)).unwrap();
    run(&mut s, 0.0, 0.1);
    let before = s.transition().clone();
    assert!(s.toggle_auto_cycle());
    assert_eq!(s.transition(), &before);
    assert!(!s.toggle_auto_cycle());
    assert_eq!(s.transition(), &before);
}

#[test]
fn explicit_choice_stops_auto_cycle_even_when_dropped() {
    let mut s = Session::new(params(1000)).unwrap();
    s.toggle_auto_cycle();
    assert!(s.auto_cycle_enabled());
    // Startup morph is running, so the request itself is dropped
    assert!(!s.show_shape(ShapeId::Heart));
    assert!(!s.auto_cycle_enabled());

    run(&mut s, 0.0, 12.0);
    assert_eq!(s.active_shape(), ShapeId::Tree);
}

#[test]
fn twinkle_speed_is_forwarded_untouched() {
    let mut s = Session::new(params(1000)).unwrap();
    assert_eq!(s.twinkle_speed(), DEFAULT_TWINKLE_SPEED);
    s.set_twinkle_speed(9.5);
    assert_eq!(s.twinkle_speed(), 9.5);
    assert_eq!(s.params().twinkle_speed, 9.5);
}

#[test]
fn frame_clock_reports_delta_and_elapsed() {
    let mut clock = FrameClock::new(10.0);
    let f = clock.tick(10.5);
    assert!((f.delta - 0.5).abs() < 1e-6);
    assert!((f.elapsed - 0.5).abs() < 1e-9);
    let f = clock.tick(10.25);
    assert_eq!(f.delta, 0.0);
    assert!((f.elapsed - 0.5).abs() < 1e-9);
}

#[test]
fn fixed_step_scheduler_covers_the_requested_duration() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    FixedStepScheduler::for_duration(0.5, 2.0).on_frame(Box::new(move |t| {
        sink.borrow_mut().push(t);
    }));
    let seen = seen.borrow();
    assert_eq!(seen.len(), 4);
    assert!(seen.iter().all(|t| (t.delta - 0.5).abs() < 1e-6));
    assert!((seen[3].elapsed - 2.0).abs() < 1e-9);
}

#[test]
fn scheduler_drives_a_session_to_rest() {
    let session = Rc::new(RefCell::new(Session::new(params(1000)).unwrap()));
    let driven = session.clone();
    FixedStepScheduler::for_duration(1.0 / 60.0, 6.0).on_frame(Box::new(move |t| {
        driven.borrow_mut().advance(t.delta, t.elapsed);
    }));
    let s = session.borrow();
    assert!(!s.transition().in_transition());
    assert!(s.elapsed() > 5.9);
    let tree = s.targets().get(ShapeId::Tree);
    for (p, target) in s.particles().current().iter().zip(tree) {
        assert!(p.distance(*target) < 1e-3);
    }
}

#[derive(Default)]
struct RecordingAdapter {
    uploads: Vec<(usize, usize, usize)>,
    draws: Vec<(usize, f32, f32)>,
}

impl RenderAdapter for RecordingAdapter {
    type Error = String;

    fn upload_attributes(&mut self, attributes: &ParticleAttributes<'_>) {
        self.uploads.push((
            attributes.colors.len(),
            attributes.sizes.len(),
            attributes.phases.len(),
        ));
    }

    fn draw(&mut self, frame: &RenderFrame<'_>) -> Result<(), Self::Error> {
        if frame.positions.is_empty() {
            return Err("nothing to draw".into());
        }
        self.draws
            .push((frame.positions.len(), frame.elapsed, frame.twinkle_speed));
        Ok(())
    }
}

#[test]
fn presenter_uploads_attributes_once_per_generation() {
    let mut s = Session::new(params(1000)).unwrap();
    let camera = OrbitCamera::default();
    let mut presenter = FramePresenter::new();
    let mut adapter = RecordingAdapter::default();
    assert_eq!(presenter.uploaded_generation(), None);

    for step in 1..=3 {
        s.advance(1.0 / 60.0, step as f64 / 60.0);
        presenter.present(&s, &camera, 16.0 / 9.0, &mut adapter).unwrap();
    }
    assert_eq!(adapter.uploads, vec![(3000, 1000, 1000)]);
    assert_eq!(adapter.draws.len(), 3);
    assert_eq!(adapter.draws[2].0, 3000);
    assert!((adapter.draws[2].1 - 0.05).abs() < 1e-6);
    assert_eq!(adapter.draws[2].2, DEFAULT_TWINKLE_SPEED);

    s.set_particle_count(1500).unwrap();
    s.set_twinkle_speed(2.0);
    presenter.present(&s, &camera, 1.0, &mut adapter).unwrap();
    assert_eq!(presenter.uploaded_generation(), Some(1));
    assert_eq!(adapter.uploads.last(), Some(&(4500, 1500, 1500)));
    assert_eq!(adapter.draws.last().map(|d| (d.0, d.2)), Some((4500, 2.0)));
}
