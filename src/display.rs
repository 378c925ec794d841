//! Display controller
//!
//! Turns a [`CompassState`] into LED matrix output: an exclamation mark after a
//! failed calibration, the heading or an arrow while measuring, and a sweeping
//! row of pixels while calibration is in progress.

#[cfg(not(feature = "async"))]
use embedded_hal::delay::DelayNs;
#[cfg(feature = "async")]
use embedded_hal_async::delay::DelayNs;

use crate::glyph::Glyph;
use crate::interface::LedMatrix;
use crate::mode::{Mode, SubMode};
use crate::state::{CompassState, SharedState};
use crate::{Error, MATRIX_SIZE};

/// What the display should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Calibration failed at some point
    Error,
    /// Heading or arrow
    Measurement,
    /// Busy animation while calibrating
    Calibrate,
}

impl From<Mode> for Status {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Measurement => Self::Measurement,
            Mode::Calibrate => Self::Calibrate,
        }
    }
}

/// Display timing and layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Number of pixels swept by the busy animation
    pub width: u8,
    /// Row the busy animation runs along
    pub busy_row: u8,
    /// Pause after each animation frame in milliseconds
    pub frame_pause_ms: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: MATRIX_SIZE,
            busy_row: 2,
            frame_pause_ms: 100,
        }
    }
}

impl DisplayConfig {
    /// Check the animation fits on the matrix
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the row or width lies outside the
    /// matrix, or the width is zero.
    pub fn validate<E>(&self) -> Result<(), Error<E>> {
        if self.busy_row >= MATRIX_SIZE || self.width == 0 || self.width > MATRIX_SIZE {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }
}

/// Pick the status to render
///
/// An explicit override wins, then a recorded calibration failure, then the
/// current mode.
#[must_use]
pub fn resolve_status(state: &CompassState, status_override: Option<Status>) -> Status {
    match status_override {
        Some(status) => status,
        None if state.is_errored() => Status::Error,
        None => state.mode().into(),
    }
}

/// Pixel and on/off state for step `step` of the busy sweep
///
/// Steps `0..width` light the row left to right, steps `width..2*width` clear
/// it again.
#[must_use]
pub const fn sweep_frame(step: u32, width: u8) -> (u8, bool) {
    if width == 0 {
        return (0, false);
    }
    let width = width as u32;
    let step = step % (2 * width);
    if step < width {
        (step as u8, true)
    } else {
        ((step - width) as u8, false)
    }
}

/// Show a still frame for `status`
///
/// Returns `false` for [`Status::Calibrate`], which needs the busy animation
/// instead.
fn show_still<D: LedMatrix>(snapshot: &CompassState, display: &mut D, status: Status) -> bool {
    match status {
        Status::Error => display.show_glyph(Glyph::EXCLAMATION),
        Status::Measurement => match snapshot.submode() {
            SubMode::Number => display.show_number(snapshot.heading()),
            SubMode::Arrow => display.show_direction(snapshot.direction()),
        },
        Status::Calibrate => return false,
    }
    true
}

/// Render the state to the display
///
/// For [`Status::Calibrate`] this blocks in [`busy_animation`] until `loading`
/// clears.
#[cfg(not(feature = "async"))]
pub fn render<D, T>(
    state: &SharedState,
    display: &mut D,
    delay: &mut T,
    config: &DisplayConfig,
    status_override: Option<Status>,
) where
    D: LedMatrix,
    T: DelayNs,
{
    let snapshot = state.snapshot();
    let status = resolve_status(&snapshot, status_override);
    if !show_still(&snapshot, display, status) {
        busy_animation(state, display, delay, config);
    }
}

/// Render the state to the display
///
/// For [`Status::Calibrate`] this runs [`busy_animation`] until `loading`
/// clears.
#[cfg(feature = "async")]
pub async fn render<D, T>(
    state: &SharedState,
    display: &mut D,
    delay: &mut T,
    config: &DisplayConfig,
    status_override: Option<Status>,
) where
    D: LedMatrix,
    T: DelayNs,
{
    let snapshot = state.snapshot();
    let status = resolve_status(&snapshot, status_override);
    if !show_still(&snapshot, display, status) {
        busy_animation(state, display, delay, config).await;
    }
}

/// Sweep the busy row on and off for as long as calibration is running
///
/// `loading` is checked before every frame, so the animation stops within one
/// frame pause of it clearing. Returns the number of frames drawn.
#[cfg(not(feature = "async"))]
pub fn busy_animation<D, T>(
    state: &SharedState,
    display: &mut D,
    delay: &mut T,
    config: &DisplayConfig,
) -> u32
where
    D: LedMatrix,
    T: DelayNs,
{
    let mut step = 0;
    while state.is_loading() {
        draw_frame(display, config, step);
        delay.delay_ms(config.frame_pause_ms);
        step = step.wrapping_add(1);
    }
    log_debug!("Busy animation stopped after {} frames", step);
    step
}

/// Sweep the busy row on and off for as long as calibration is running
///
/// `loading` is checked before every frame, so the animation stops within one
/// frame pause of it clearing. Returns the number of frames drawn.
#[cfg(feature = "async")]
pub async fn busy_animation<D, T>(
    state: &SharedState,
    display: &mut D,
    delay: &mut T,
    config: &DisplayConfig,
) -> u32
where
    D: LedMatrix,
    T: DelayNs,
{
    let mut step = 0;
    while state.is_loading() {
        draw_frame(display, config, step);
        delay.delay_ms(config.frame_pause_ms).await;
        step = step.wrapping_add(1);
    }
    log_debug!("Busy animation stopped after {} frames", step);
    step
}

fn draw_frame<D: LedMatrix>(display: &mut D, config: &DisplayConfig, step: u32) {
    match sweep_frame(step, config.width) {
        (x, true) => display.plot(x, config.busy_row),
        (x, false) => display.unplot(x, config.busy_row),
    }
}
