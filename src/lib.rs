#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

// Must come first so the logging macros are visible to every other module
mod fmt;

pub mod calibration;
pub mod device;
pub mod direction;
pub mod display;
pub mod glyph;
pub mod interface;
pub mod interrupt;
pub mod mode;
pub mod state;

// Re-export main types
pub use device::Compass;
pub use direction::{Direction, quantize};
pub use display::{DisplayConfig, Status};
pub use glyph::Glyph;
pub use interface::{HeadingSensor, LedMatrix, heading_from_field};
pub use interrupt::{ButtonEvent, ButtonLatch};
pub use mode::{Mode, SubMode, toggle};
pub use state::{CompassState, SharedState};

#[cfg(feature = "async")]
pub use interface::AsyncHeadingSensor;

/// Device version tag
pub const VERSION: &str = "2022.1211";

/// Width and height of the LED matrix in pixels
pub const MATRIX_SIZE: u8 = 5;

/// Compass errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the sensor
    Bus(E),
    /// The calibration routine did not complete
    CalibrationFailed,
    /// Invalid configuration parameter
    InvalidConfig,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
