//! High-level compass API
//!
//! [`Compass`] owns the sensor, the display and a delay, and drives them from a
//! [`SharedState`]. It exposes each controller operation on its own, one main
//! loop cycle as [`Compass::step`], and the whole device program as
//! [`Compass::run`].

#[cfg(not(feature = "async"))]
use embedded_hal::delay::DelayNs;
#[cfg(feature = "async")]
use embedded_hal_async::delay::DelayNs;

use crate::direction::{Direction, quantize};
use crate::display::{self, DisplayConfig, Status};
use crate::interface::LedMatrix;
use crate::interrupt::{ButtonEvent, ButtonLatch};
use crate::mode::{SubMode, toggle};
use crate::state::{CompassState, SharedState};
use crate::{Error, VERSION, calibration};

#[cfg(not(feature = "async"))]
use crate::interface::HeadingSensor;

#[cfg(feature = "async")]
use crate::interface::AsyncHeadingSensor;

/// Pause between main loop cycles in milliseconds
pub const CYCLE_PAUSE_MS: u32 = 20;

/// Compass device driver
pub struct Compass<'a, S, D, T> {
    state: &'a SharedState,
    sensor: S,
    display: D,
    delay: T,
    config: DisplayConfig,
}

impl<'a, S, D, T> Compass<'a, S, D, T> {
    /// Create a compass with the default display configuration
    ///
    /// Nothing is read or drawn until the first call into the compass. Call
    /// [`startup`](Self::startup) (or [`run`](Self::run)) to perform the
    /// initial calibration.
    pub fn new(state: &'a SharedState, sensor: S, display: D, delay: T) -> Self {
        Self {
            state,
            sensor,
            display,
            delay,
            config: DisplayConfig::default(),
        }
    }

    /// Copy of the current compass state
    #[must_use]
    pub fn state(&self) -> CompassState {
        self.state.snapshot()
    }

    /// The shared state this compass writes to
    #[must_use]
    pub fn shared_state(&self) -> &'a SharedState {
        self.state
    }

    /// Active display configuration
    #[must_use]
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Quantize a heading and store it as the last direction
    ///
    /// With `None` the last measured heading is used.
    pub fn update_direction(&mut self, angle: Option<f32>) -> Direction {
        self.state.update(|s| {
            let direction = quantize(angle.unwrap_or(s.heading()));
            s.set_direction(direction);
            direction
        })
    }

    /// Switch the measurement display
    ///
    /// `Some` selects a sub-mode directly, `None` cycles to the next one.
    pub fn toggle_measurement_mode(&mut self, requested: Option<SubMode>) -> SubMode {
        let submode = self.state.update(|s| {
            let next = toggle(s.submode(), requested);
            s.set_submode(next);
            next
        });
        log_info!("Measurement display: {:?}", submode);
        submode
    }

    /// Switch the measurement display by tag (`"number"` or `"arrow"`)
    ///
    /// A missing or unrecognized tag cycles like [`None`] does in
    /// [`toggle_measurement_mode`](Self::toggle_measurement_mode).
    pub fn toggle_measurement_mode_named(&mut self, name: Option<&str>) -> SubMode {
        self.toggle_measurement_mode(name.and_then(SubMode::from_name))
    }

    /// Consume the compass and return the sensor, display and delay
    pub fn release(self) -> (S, D, T) {
        (self.sensor, self.display, self.delay)
    }
}

#[cfg(not(feature = "async"))]
impl<'a, S, D, T> Compass<'a, S, D, T>
where
    S: HeadingSensor,
    D: LedMatrix,
    T: DelayNs,
{
    /// Create a compass with a custom display configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the busy animation does not fit on
    /// the matrix.
    pub fn with_config(
        state: &'a SharedState,
        sensor: S,
        display: D,
        delay: T,
        config: DisplayConfig,
    ) -> Result<Self, Error<S::Error>> {
        config.validate::<S::Error>().inspect_err(|_| {
            log_warn!("Rejected display configuration {:?}", config);
        })?;
        let mut compass = Self::new(state, sensor, display, delay);
        compass.config = config;
        Ok(compass)
    }

    /// Read the sensor and store the heading
    pub fn update_measurement(&mut self) -> f32 {
        let heading = self.sensor.read_heading();
        self.state.update(|s| s.set_heading(heading));
        heading
    }

    /// Run the sensor calibration
    ///
    /// Never fails: a failed calibration sets the sticky error flag instead.
    ///
    /// Blocks until the sensor returns, and nothing is drawn meanwhile. To
    /// show the loading sweep, enable the `async` feature or call
    /// [`display::busy_animation`] from another context (a timer interrupt
    /// or a second thread) while [`SharedState::is_loading`] is set.
    pub fn calibrate(&mut self) {
        calibration::calibrate(self.state, &mut self.sensor);
    }

    /// Render the current state, optionally forcing a status
    pub fn render(&mut self, status_override: Option<Status>) {
        display::render(
            self.state,
            &mut self.display,
            &mut self.delay,
            &self.config,
            status_override,
        );
    }

    /// One main loop cycle: measure, quantize in arrow mode, render
    pub fn step(&mut self) {
        self.update_measurement();
        if self.state.snapshot().submode() == SubMode::Arrow {
            self.update_direction(None);
        }
        self.render(None);
    }

    /// React to a button gesture
    pub fn handle_button(&mut self, event: ButtonEvent) {
        log_debug!("Button pressed: {:?}", event);
        self.display.stop_animation();
        match event {
            ButtonEvent::Combo => self.calibrate(),
            ButtonEvent::Single => {
                self.toggle_measurement_mode(None);
            }
        }
    }

    /// Initial calibration at power-on
    pub fn startup(&mut self) {
        log_info!("Compass {} starting", VERSION);
        self.calibrate();
    }

    /// Handle pending button presses, run one cycle, then pause
    pub fn poll(&mut self, buttons: &ButtonLatch) {
        while let Some(event) = buttons.take() {
            self.handle_button(event);
        }
        self.step();
        self.delay.delay_ms(CYCLE_PAUSE_MS);
    }

    /// Start up and run the compass forever
    ///
    /// Calibrations block the loop (see [`calibrate`](Self::calibrate)), so
    /// the loading sweep never appears from here.
    pub fn run(&mut self, buttons: &ButtonLatch) -> ! {
        self.startup();
        loop {
            self.poll(buttons);
        }
    }
}

#[cfg(feature = "async")]
impl<'a, S, D, T> Compass<'a, S, D, T>
where
    S: AsyncHeadingSensor,
    D: LedMatrix,
    T: DelayNs,
{
    /// Create a compass with a custom display configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the busy animation does not fit on
    /// the matrix.
    pub fn with_config(
        state: &'a SharedState,
        sensor: S,
        display: D,
        delay: T,
        config: DisplayConfig,
    ) -> Result<Self, Error<S::Error>> {
        config.validate::<S::Error>().inspect_err(|_| {
            log_warn!("Rejected display configuration {:?}", config);
        })?;
        let mut compass = Self::new(state, sensor, display, delay);
        compass.config = config;
        Ok(compass)
    }

    /// Read the sensor and store the heading
    pub async fn update_measurement(&mut self) -> f32 {
        let heading = self.sensor.read_heading().await;
        self.state.update(|s| s.set_heading(heading));
        heading
    }

    /// Run the sensor calibration with the busy animation alongside
    ///
    /// The animation is dropped as soon as calibration finishes. Never fails:
    /// a failed calibration sets the sticky error flag instead.
    pub async fn calibrate(&mut self) {
        use embassy_futures::select::{Either, select};

        let mut calibrating =
            core::pin::pin!(calibration::calibrate(self.state, &mut self.sensor));
        let animation =
            display::busy_animation(self.state, &mut self.display, &mut self.delay, &self.config);

        if let Either::Second(_) = select(calibrating.as_mut(), animation).await {
            // Loading was cleared from elsewhere; the cleanup must still run
            calibrating.await;
        }
    }

    /// Render the current state, optionally forcing a status
    pub async fn render(&mut self, status_override: Option<Status>) {
        display::render(
            self.state,
            &mut self.display,
            &mut self.delay,
            &self.config,
            status_override,
        )
        .await;
    }

    /// One main loop cycle: measure, quantize in arrow mode, render
    pub async fn step(&mut self) {
        self.update_measurement().await;
        if self.state.snapshot().submode() == SubMode::Arrow {
            self.update_direction(None);
        }
        self.render(None).await;
    }

    /// React to a button gesture
    pub async fn handle_button(&mut self, event: ButtonEvent) {
        log_debug!("Button pressed: {:?}", event);
        self.display.stop_animation();
        match event {
            ButtonEvent::Combo => self.calibrate().await,
            ButtonEvent::Single => {
                self.toggle_measurement_mode(None);
            }
        }
    }

    /// Initial calibration at power-on
    pub async fn startup(&mut self) {
        log_info!("Compass {} starting", VERSION);
        self.calibrate().await;
    }

    /// Handle pending button presses, run one cycle, then pause
    pub async fn poll(&mut self, buttons: &ButtonLatch) {
        while let Some(event) = buttons.take() {
            self.handle_button(event).await;
        }
        self.step().await;
        self.delay.delay_ms(CYCLE_PAUSE_MS).await;
    }

    /// Start up and run the compass forever
    ///
    /// The returned future never completes.
    pub async fn run(&mut self, buttons: &ButtonLatch) {
        self.startup().await;
        loop {
            self.poll(buttons).await;
        }
    }
}
