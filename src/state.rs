//! Compass state record and its interrupt-safe wrapper
//!
//! [`CompassState`] is plain data. [`SharedState`] guards it with a
//! `critical_section` mutex so the main loop, button interrupts and any
//! concurrent animation all see consistent values. Locks are only held for the
//! duration of a closure, never across a HAL call.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::direction::Direction;
use crate::mode::{Mode, SubMode};

/// Everything the compass knows about itself
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CompassState {
    mode_current: Mode,
    mode_previous: Option<Mode>,
    measurement_submode: SubMode,
    loading: bool,
    errored: bool,
    last_heading: f32,
    last_direction: Direction,
}

impl Default for CompassState {
    fn default() -> Self {
        Self::new()
    }
}

impl CompassState {
    /// Power-on state: measuring, numeric display, no error, heading 0° North
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode_current: Mode::Measurement,
            mode_previous: None,
            measurement_submode: SubMode::Number,
            loading: false,
            errored: false,
            last_heading: 0.0,
            last_direction: Direction::North,
        }
    }

    /// Current operating mode
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode_current
    }

    /// Mode recorded when calibration was last entered
    ///
    /// `None` until the first calibration.
    #[must_use]
    pub const fn previous_mode(&self) -> Option<Mode> {
        self.mode_previous
    }

    /// Active measurement rendering
    #[must_use]
    pub const fn submode(&self) -> SubMode {
        self.measurement_submode
    }

    /// True while a calibration is in progress
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// True once any calibration attempt has failed
    #[must_use]
    pub const fn is_errored(&self) -> bool {
        self.errored
    }

    /// Last heading read from the sensor, in degrees
    #[must_use]
    pub const fn heading(&self) -> f32 {
        self.last_heading
    }

    /// Last quantized direction
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.last_direction
    }

    pub(crate) fn set_heading(&mut self, heading: f32) {
        self.last_heading = heading;
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.last_direction = direction;
    }

    pub(crate) fn set_submode(&mut self, submode: SubMode) {
        self.measurement_submode = submode;
    }

    /// Enter calibration, remembering the mode to come back to
    pub(crate) fn begin_calibration(&mut self) {
        self.mode_previous = Some(self.mode_current);
        self.mode_current = Mode::Calibrate;
        self.loading = true;
    }

    /// Leave calibration, recording a failure if there was one
    ///
    /// `errored` is sticky: a successful run leaves it as it was.
    pub(crate) fn finish_calibration(&mut self, failed: bool) {
        if failed {
            self.errored = true;
        }
        self.loading = false;
        if let Some(previous) = self.mode_previous {
            self.mode_current = previous;
        }
        self.mode_previous = Some(Mode::Calibrate);
    }
}

/// [`CompassState`] behind a critical-section mutex
///
/// `new` is `const`, so the state can live in a `static`:
///
/// ```
/// use led_compass::SharedState;
///
/// static STATE: SharedState = SharedState::new();
/// assert!(!STATE.is_loading());
/// ```
pub struct SharedState {
    inner: Mutex<RefCell<CompassState>>,
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SharedState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("SharedState").field(&self.snapshot()).finish()
    }
}

impl SharedState {
    /// Create a shared record holding the power-on state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(CompassState::new())),
        }
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> CompassState {
        critical_section::with(|cs| *self.inner.borrow(cs).borrow())
    }

    /// Run `f` with exclusive access to the state
    pub fn update<R>(&self, f: impl FnOnce(&mut CompassState) -> R) -> R {
        critical_section::with(|cs| f(&mut *self.inner.borrow(cs).borrow_mut()))
    }

    /// Whether a calibration is in progress
    #[must_use]
    pub fn is_loading(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().loading)
    }
}
