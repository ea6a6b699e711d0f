//! Zoom scale bounds and stepping.
//!
//! Every zoom operation in the lightbox funnels through [`step`], which adds a
//! delta, snaps the result to hundredths and clamps it into
//! [`MIN_SCALE`]..=[`MAX_SCALE`]. Snapping keeps the reachable scales on a
//! fixed grid, so `zoom in` followed by `zoom out` lands on the exact value it
//! started from instead of drifting by a few ULPs.

/// Smallest scale the viewer will display (image fits the frame).
pub const MIN_SCALE: f64 = 1.0;

/// Largest scale the viewer will display.
pub const MAX_SCALE: f64 = 3.0;

/// Scale change for the zoom-in / zoom-out buttons.
pub const BUTTON_STEP: f64 = 0.25;

/// Scale change per wheel notch.
pub const WHEEL_STEP: f64 = 0.1;

/// Scales are kept on a grid of `1 / SCALE_GRID`.
const SCALE_GRID: f64 = 100.0;

/// Clamp a scale into `[MIN_SCALE, MAX_SCALE]`.
///
/// Total over finite inputs. NaN must be rejected by the caller; it is not a
/// valid scale and this function does not sanitize it.
pub fn clamp(value: f64) -> f64 {
    MAX_SCALE.min(MIN_SCALE.max(value))
}

/// Apply `delta` to `current`, snap to the scale grid, then clamp.
pub fn step(current: f64, delta: f64) -> f64 {
    clamp(snap(current + delta))
}

fn snap(value: f64) -> f64 {
    (value * SCALE_GRID).round() / SCALE_GRID
}
