//! Calibration controller
//!
//! Wraps the sensor's calibration routine in the mode bookkeeping: the compass
//! switches to [`Mode::Calibrate`](crate::Mode::Calibrate) with `loading` set
//! while the routine runs, then restores the previous mode whatever the
//! outcome. A failure is never returned to the caller; it only sets the sticky
//! `errored` flag that the display picks up.

use crate::state::{CompassState, SharedState};

#[cfg(not(feature = "async"))]
use crate::interface::HeadingSensor;

#[cfg(feature = "async")]
use crate::interface::AsyncHeadingSensor;

/// Calibrate `sensor`, recording the result in `state`
#[cfg(not(feature = "async"))]
pub fn calibrate<S>(state: &SharedState, sensor: &mut S)
where
    S: HeadingSensor,
{
    state.update(CompassState::begin_calibration);
    log_info!("Calibration started");

    let failed = sensor.calibrate().is_err();

    finish(state, failed);
}

/// Calibrate `sensor`, recording the result in `state`
#[cfg(feature = "async")]
pub async fn calibrate<S>(state: &SharedState, sensor: &mut S)
where
    S: AsyncHeadingSensor,
{
    state.update(CompassState::begin_calibration);
    log_info!("Calibration started");

    let failed = sensor.calibrate().await.is_err();

    finish(state, failed);
}

fn finish(state: &SharedState, failed: bool) {
    let restored = state.update(|s| {
        s.finish_calibration(failed);
        s.mode()
    });

    if failed {
        log_warn!("Calibration failed, restored {:?} mode", restored);
    } else {
        log_info!("Calibration complete, restored {:?} mode", restored);
    }
}
