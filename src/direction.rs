//! Heading to compass direction quantization
//!
//! Splits the circle into eight 45° sectors centred on the compass points.
//! Sector boundaries alternate between inclusive and exclusive so that every
//! angle in `[0, 360)` falls into exactly one sector.

use crate::glyph::Glyph;

/// One of the eight compass points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// 0°
    North,
    /// 45°
    NorthEast,
    /// 90°
    East,
    /// 135°
    SouthEast,
    /// 180°
    South,
    /// 225°
    SouthWest,
    /// 270°
    West,
    /// 315°
    NorthWest,
}

impl Direction {
    /// All directions, clockwise from North
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Centre of this direction's sector in degrees
    #[must_use]
    pub const fn bearing(self) -> f32 {
        match self {
            Self::North => 0.0,
            Self::NorthEast => 45.0,
            Self::East => 90.0,
            Self::SouthEast => 135.0,
            Self::South => 180.0,
            Self::SouthWest => 225.0,
            Self::West => 270.0,
            Self::NorthWest => 315.0,
        }
    }

    /// Arrow glyph pointing in this direction
    #[must_use]
    pub const fn arrow(self) -> Glyph {
        match self {
            Self::North => Glyph::ARROW_N,
            Self::NorthEast => Glyph::ARROW_NE,
            Self::East => Glyph::ARROW_E,
            Self::SouthEast => Glyph::ARROW_SE,
            Self::South => Glyph::ARROW_S,
            Self::SouthWest => Glyph::ARROW_SW,
            Self::West => Glyph::ARROW_W,
            Self::NorthWest => Glyph::ARROW_NW,
        }
    }
}

/// Map a heading in degrees to a compass direction
///
/// Negative headings are shifted by a single turn, so inputs are expected in
/// `[-360, 360)`. Anything outside that range (and NaN) reads as North.
///
/// # Example
/// ```
/// use led_compass::{Direction, quantize};
///
/// assert_eq!(quantize(-10.0), Direction::North);
/// assert_eq!(quantize(67.5), Direction::NorthEast);
/// assert_eq!(quantize(100.0), Direction::East);
/// ```
#[must_use]
pub fn quantize(angle: f32) -> Direction {
    let a = if angle < 0.0 { angle + 360.0 } else { angle };

    if a < 22.5 || a > 337.5 {
        Direction::North
    } else if (22.5..=67.5).contains(&a) {
        Direction::NorthEast
    } else if a > 67.5 && a < 112.5 {
        Direction::East
    } else if (112.5..=157.5).contains(&a) {
        Direction::SouthEast
    } else if a > 157.5 && a < 202.5 {
        Direction::South
    } else if (202.5..=247.5).contains(&a) {
        Direction::SouthWest
    } else if a > 247.5 && a < 292.5 {
        Direction::West
    } else if (292.5..=337.5).contains(&a) {
        Direction::NorthWest
    } else {
        // NaN
        Direction::North
    }
}
