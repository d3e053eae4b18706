// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn press_and_release_without_travel_is_a_tap() {
    let mut g = GestureTracker::new(5.0);
    g.press(Vec2::new(100.0, 100.0));
    assert_eq!(g.drag_to(Vec2::new(102.0, 101.0)), None);
    assert!(!g.is_dragging());
    g.release();
    assert!(g.was_tap());
}

#[test]
fn travel_past_threshold_becomes_a_drag() {
    let mut g = GestureTracker::new(5.0);
    g.press(Vec2::new(0.0, 0.0));
    let delta = g.drag_to(Vec2::new(10.0, 0.0));
    assert_eq!(delta, Some(Vec2::new(10.0, 0.0)));
    assert!(g.is_dragging());

    // later moves report only the step since the last move
    assert_eq!(g.drag_to(Vec2::new(12.0, 3.0)), Some(Vec2::new(2.0, 3.0)));
    g.release();
    assert!(!g.was_tap());
    assert!(!g.is_dragging());
}

#[test]
fn drag_outcome_survives_until_next_press() {
    let mut g = GestureTracker::new(5.0);
    g.press(Vec2::ZERO);
    g.drag_to(Vec2::new(50.0, 0.0));
    g.release();
    assert!(!g.was_tap());

    g.press(Vec2::new(50.0, 0.0));
    g.release();
    assert!(g.was_tap());
}

#[test]
fn tap_is_not_reported_while_pressed() {
    let mut g = GestureTracker::new(5.0);
    g.press(Vec2::ZERO);
    assert!(!g.was_tap());
}

#[test]
fn moves_without_press_are_ignored() {
    let mut g = GestureTracker::new(5.0);
    assert_eq!(g.drag_to(Vec2::new(40.0, 40.0)), None);
}

#[test]
fn pinch_reports_spread_ratio_and_blocks_orbit() {
    let mut g = GestureTracker::new(5.0);
    g.press(Vec2::new(0.0, 0.0));
    g.pinch_start(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
    assert!(g.is_pinching());

    // spreading to twice the distance halves the camera distance
    let factor = g.pinch_to(Vec2::new(0.0, 0.0), Vec2::new(200.0, 0.0));
    assert_eq!(factor, Some(0.5));
    assert_eq!(g.drag_to(Vec2::new(80.0, 0.0)), None);

    g.pinch_end();
    g.release();
    assert!(!g.is_pinching());
    assert!(!g.was_tap());
}

#[test]
fn pinch_without_start_or_with_collapsed_fingers_is_ignored() {
    let mut g = GestureTracker::new(5.0);
    assert_eq!(g.pinch_to(Vec2::ZERO, Vec2::new(10.0, 0.0)), None);

    g.pinch_start(Vec2::ZERO, Vec2::new(10.0, 0.0));
    assert_eq!(g.pinch_to(Vec2::ONE, Vec2::ONE), None);
}

#[test]
fn press_after_pinch_clears_pinch_outcome() {
    let mut g = GestureTracker::new(5.0);
    g.pinch_start(Vec2::ZERO, Vec2::new(10.0, 0.0));
    g.pinch_end();
    g.press(Vec2::ZERO);
    g.release();
    assert!(g.was_tap());
}

#[test]
fn wheel_zoom_factor_is_clamped() {
    assert_eq!(wheel_zoom_factor(0.0, 0.001, 0.8, 1.25), 1.0);
    assert!((wheel_zoom_factor(100.0, 0.001, 0.8, 1.25) - 1.1).abs() < 1e-6);
    assert!((wheel_zoom_factor(-100.0, 0.001, 0.8, 1.25) - 0.9).abs() < 1e-6);
    assert_eq!(wheel_zoom_factor(10_000.0, 0.001, 0.8, 1.25), 1.25);
    assert_eq!(wheel_zoom_factor(-10_000.0, 0.001, 0.8, 1.25), 0.8);
    assert_eq!(wheel_zoom_factor(f32::NAN, 0.001, 0.8, 1.25), 1.0);
}

#[test]
fn client_coordinates_are_made_canvas_relative() {
    let p = client_to_canvas(Vec2::new(150.0, 90.0), 50.0, 40.0);
    assert_eq!(p, Vec2::new(100.0, 50.0));
}
