//! Unit tests for the measurement display toggle

use crate::common::create_mock_compass;
use led_compass::{SharedState, SubMode};

#[test]
fn test_cycle_returns_after_two_toggles() {
    let state = SharedState::new();
    let (mut compass, _sensor, _matrix) = create_mock_compass(&state);
    assert_eq!(compass.state().submode(), SubMode::Number);

    assert_eq!(compass.toggle_measurement_mode(None), SubMode::Arrow);
    assert_eq!(compass.state().submode(), SubMode::Arrow);

    assert_eq!(compass.toggle_measurement_mode(None), SubMode::Number);
    assert_eq!(compass.state().submode(), SubMode::Number);
}

#[test]
fn test_explicit_request_from_any_state() {
    let state = SharedState::new();
    let (mut compass, _sensor, _matrix) = create_mock_compass(&state);

    assert_eq!(compass.toggle_measurement_mode(Some(SubMode::Number)), SubMode::Number);

    compass.toggle_measurement_mode(Some(SubMode::Arrow));
    assert_eq!(compass.toggle_measurement_mode(Some(SubMode::Number)), SubMode::Number);
    assert_eq!(compass.state().submode(), SubMode::Number);
}

#[test]
fn test_named_toggle() {
    let state = SharedState::new();
    let (mut compass, _sensor, _matrix) = create_mock_compass(&state);

    assert_eq!(compass.toggle_measurement_mode_named(Some("arrow")), SubMode::Arrow);
    assert_eq!(compass.toggle_measurement_mode_named(Some("arrow")), SubMode::Arrow);
    assert_eq!(compass.toggle_measurement_mode_named(Some("number")), SubMode::Number);
}

#[test]
fn test_unrecognized_name_cycles() {
    let state = SharedState::new();
    let (mut compass, _sensor, _matrix) = create_mock_compass(&state);

    assert_eq!(compass.toggle_measurement_mode_named(Some("bogus")), SubMode::Arrow);
    assert_eq!(compass.toggle_measurement_mode_named(None), SubMode::Number);
    assert_eq!(compass.toggle_measurement_mode_named(Some("")), SubMode::Arrow);
}

#[test]
fn test_toggle_leaves_other_state_alone() {
    let state = SharedState::new();
    let (mut compass, sensor, _matrix) = create_mock_compass(&state);
    sensor.set_heading(77.0);
    compass.update_measurement();
    let before = compass.state();

    compass.toggle_measurement_mode(None);

    let after = compass.state();
    assert_eq!(after.mode(), before.mode());
    assert_eq!(after.heading(), before.heading());
    assert_eq!(after.direction(), before.direction());
    assert_eq!(after.is_errored(), before.is_errored());
}
