//! Hardware abstraction traits
//!
//! The compass core never touches hardware directly. A board support crate
//! implements [`HeadingSensor`] (or [`AsyncHeadingSensor`] with the `async`
//! feature) for its magnetometer and [`LedMatrix`] for its display, and hands
//! them to [`Compass`](crate::Compass) together with an `embedded-hal` delay.

use crate::Error;
use crate::direction::Direction;
use crate::glyph::Glyph;

/// Source of compass headings
pub trait HeadingSensor {
    /// Bus or driver error type
    type Error;

    /// Current heading in degrees, clockwise from magnetic north
    ///
    /// Values may be signed (e.g. `(-180, 180]`); the compass normalizes them
    /// when quantizing.
    fn read_heading(&mut self) -> f32;

    /// Run the sensor's interactive calibration
    ///
    /// May block for as long as the user takes to complete it.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus fails or calibration does not complete.
    fn calibrate(&mut self) -> Result<(), Error<Self::Error>>;
}

/// Async source of compass headings
#[cfg(feature = "async")]
#[allow(async_fn_in_trait)]
pub trait AsyncHeadingSensor {
    /// Bus or driver error type
    type Error;

    /// Current heading in degrees, clockwise from magnetic north
    async fn read_heading(&mut self) -> f32;

    /// Run the sensor's interactive calibration
    ///
    /// # Errors
    ///
    /// Returns an error if the bus fails or calibration does not complete.
    async fn calibrate(&mut self) -> Result<(), Error<Self::Error>>;
}

/// 5x5 LED matrix output
pub trait LedMatrix {
    /// Replace the screen with a still image
    fn show_glyph(&mut self, glyph: Glyph);

    /// Show a number (typically scrolled)
    fn show_number(&mut self, value: f32);

    /// Show the arrow for a direction
    fn show_direction(&mut self, direction: Direction) {
        self.show_glyph(direction.arrow());
    }

    /// Turn one pixel on
    fn plot(&mut self, x: u8, y: u8);

    /// Turn one pixel off
    fn unplot(&mut self, x: u8, y: u8);

    /// Cancel whatever the display is currently animating (e.g. a scroll)
    fn stop_animation(&mut self);
}

/// Heading in degrees from the horizontal magnetic field components
///
/// `x` is measured along the device's forward axis and `y` along its right
/// axis. The result lies in `(-180, 180]`, 0° when the device faces magnetic
/// north and 90° when it faces east.
#[must_use]
pub fn heading_from_field(x: f32, y: f32) -> f32 {
    libm::atan2f(-y, x).to_degrees()
}
