//! Operating modes and the measurement display toggle

/// Top-level operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Showing measurements
    Measurement,
    /// Running the interactive sensor calibration
    Calibrate,
}

/// How measurements are rendered while in [`Mode::Measurement`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SubMode {
    /// Heading in degrees as a number
    Number,
    /// Arrow pointing at the quantized direction
    Arrow,
}

impl SubMode {
    /// Sub-modes in toggle order
    pub const CYCLE: [Self; 2] = [Self::Number, Self::Arrow];

    /// Parse a sub-mode tag (`"number"` or `"arrow"`)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "number" => Some(Self::Number),
            "arrow" => Some(Self::Arrow),
            _ => None,
        }
    }

    /// Tag for this sub-mode
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Arrow => "arrow",
        }
    }

    /// The sub-mode after this one, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::CYCLE.iter().position(|m| *m == self).unwrap_or(0);
        Self::CYCLE[(index + 1) % Self::CYCLE.len()]
    }
}

/// Resolve the sub-mode after a toggle request
///
/// An explicit request wins; otherwise the current sub-mode advances one step.
#[must_use]
pub fn toggle(current: SubMode, requested: Option<SubMode>) -> SubMode {
    requested.unwrap_or_else(|| current.next())
}
