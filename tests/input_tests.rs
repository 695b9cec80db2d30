// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn drag_reports_movement_since_last_sample() {
    let mut drag = DragState::default();
    assert_eq!(drag.drag_to(1, Vec2::new(5.0, 5.0)), None);

    drag.begin(1, Vec2::new(10.0, 20.0));
    assert_eq!(drag.drag_to(1, Vec2::new(15.0, 18.0)), Some(Vec2::new(5.0, -2.0)));
    assert_eq!(drag.drag_to(1, Vec2::new(15.0, 18.0)), Some(Vec2::ZERO));
    assert_eq!(drag.drag_to(1, Vec2::new(14.0, 28.0)), Some(Vec2::new(-1.0, 10.0)));
}

#[test]
fn drag_ignores_other_pointers() {
    let mut drag = DragState::default();
    drag.begin(7, Vec2::ZERO);
    assert_eq!(drag.drag_to(8, Vec2::new(3.0, 3.0)), None);
    assert!(!drag.end(8));
    assert!(drag.active);
    assert!(drag.end(7));
    assert!(!drag.active);
    assert_eq!(drag.drag_to(7, Vec2::new(3.0, 3.0)), None);
}

#[test]
fn ending_twice_reports_once() {
    let mut drag = DragState::default();
    drag.begin(1, Vec2::ZERO);
    assert!(drag.end(1));
    assert!(!drag.end(1));
}

#[test]
fn wheel_notch_keeps_only_direction() {
    assert_eq!(wheel_notch(120.0), 1.0);
    assert_eq!(wheel_notch(0.5), 1.0);
    assert_eq!(wheel_notch(-3.0), -1.0);
    assert_eq!(wheel_notch(0.0), 0.0);
}

#[test]
fn slider_values_parse_or_are_rejected() {
    assert_eq!(parse_slider("10000"), Some(10_000.0));
    assert_eq!(parse_slider(" 5 "), Some(5.0));
    assert_eq!(parse_slider("2.5"), Some(2.5));
    assert_eq!(parse_slider(""), None);
    assert_eq!(parse_slider("abc"), None);
    assert_eq!(parse_slider("NaN"), None);
    assert_eq!(parse_slider("inf"), None);
}

#[test]
fn twinkle_speed_is_truncated_to_whole_steps() {
    assert_eq!(parse_twinkle_speed("5"), Some(5.0));
    assert_eq!(parse_twinkle_speed("7.5"), Some(7.0));
    assert_eq!(parse_twinkle_speed("0.9"), Some(0.0));
    assert_eq!(parse_twinkle_speed("x"), None);
}
