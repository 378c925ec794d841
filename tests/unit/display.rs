//! Unit tests for the display controller

use crate::common::mock_hal::MockMatrix;
use crate::common::test_utils::{CountingDelay, MockDelay};
use crate::common::{DisplayOp, create_mock_compass};
use led_compass::display::{self, DisplayConfig};
use led_compass::{Direction, Glyph, LedMatrix, SharedState, Status, SubMode};

#[test]
fn test_render_number_by_default() {
    let state = SharedState::new();
    let (mut compass, sensor, matrix) = create_mock_compass(&state);
    sensor.set_heading(42.0);

    compass.update_measurement();
    compass.render(None);

    assert_eq!(matrix.operations(), vec![DisplayOp::ShowNumber(42.0)]);
}

#[test]
fn test_render_arrow_south() {
    let state = SharedState::new();
    let (mut compass, _sensor, matrix) = create_mock_compass(&state);

    compass.toggle_measurement_mode(Some(SubMode::Arrow));
    assert_eq!(compass.update_direction(Some(180.0)), Direction::South);
    compass.render(None);

    assert_eq!(
        matrix.last_operation(),
        Some(DisplayOp::ShowDirection(Direction::South))
    );
    // South arrow tip on the bottom edge
    assert!(matrix.is_lit(2, 4));
}

#[test]
fn test_render_error_regardless_of_mode() {
    let state = SharedState::new();
    let (mut compass, sensor, matrix) = create_mock_compass(&state);
    sensor.fail_next_calibration();
    compass.calibrate();

    for submode in [SubMode::Number, SubMode::Arrow] {
        compass.toggle_measurement_mode(Some(submode));
        matrix.clear_operations();
        compass.render(None);
        assert_eq!(
            matrix.operations(),
            vec![DisplayOp::ShowGlyph(Glyph::EXCLAMATION)]
        );
    }

    // Rendering does not clear the flag
    assert!(compass.state().is_errored());
}

#[test]
fn test_render_override_beats_error() {
    let state = SharedState::new();
    let (mut compass, sensor, matrix) = create_mock_compass(&state);
    sensor.set_heading(12.5);
    sensor.fail_next_calibration();
    compass.calibrate();
    compass.update_measurement();

    compass.render(Some(Status::Measurement));

    assert_eq!(matrix.operations(), vec![DisplayOp::ShowNumber(12.5)]);
}

#[test]
fn test_render_error_override() {
    let state = SharedState::new();
    let (mut compass, _sensor, matrix) = create_mock_compass(&state);

    compass.render(Some(Status::Error));

    assert_eq!(
        matrix.operations(),
        vec![DisplayOp::ShowGlyph(Glyph::EXCLAMATION)]
    );
    assert!(!compass.state().is_errored());
}

#[test]
fn test_render_calibrate_without_loading_draws_nothing() {
    let state = SharedState::new();
    let (mut compass, _sensor, matrix) = create_mock_compass(&state);

    compass.render(Some(Status::Calibrate));

    assert!(matrix.operations().is_empty());
}

#[test]
fn test_busy_animation_idle_returns_immediately() {
    let state = SharedState::new();
    let mut matrix = MockMatrix::new();
    let delay = CountingDelay::default();

    let frames = display::busy_animation(
        &state,
        &mut matrix,
        &mut delay.clone(),
        &DisplayConfig::default(),
    );

    assert_eq!(frames, 0);
    assert_eq!(delay.calls(), 0);
    assert!(matrix.operations().is_empty());
}

#[test]
fn test_render_uses_heading_not_direction_in_number_mode() {
    let state = SharedState::new();
    let (mut compass, sensor, matrix) = create_mock_compass(&state);
    sensor.set_heading(-45.0);

    compass.update_measurement();
    compass.render(None);

    // The raw signed heading is shown, not a normalized one
    assert_eq!(matrix.operations(), vec![DisplayOp::ShowNumber(-45.0)]);
}

/// Matrix that only knows about pixels and glyphs
#[derive(Default)]
struct PixelMatrix {
    last_glyph: Option<Glyph>,
}

impl LedMatrix for PixelMatrix {
    fn show_glyph(&mut self, glyph: Glyph) {
        self.last_glyph = Some(glyph);
    }

    fn show_number(&mut self, _value: f32) {}

    fn plot(&mut self, _x: u8, _y: u8) {}

    fn unplot(&mut self, _x: u8, _y: u8) {}

    fn stop_animation(&mut self) {}
}

#[test]
fn test_default_show_direction_draws_arrow() {
    let state = SharedState::new();
    let mut matrix = PixelMatrix::default();

    matrix.show_direction(Direction::NorthWest);
    assert_eq!(matrix.last_glyph, Some(Glyph::ARROW_NW));

    display::render(
        &state,
        &mut matrix,
        &mut MockDelay,
        &DisplayConfig::default(),
        Some(Status::Error),
    );
    assert_eq!(matrix.last_glyph, Some(Glyph::EXCLAMATION));
}
