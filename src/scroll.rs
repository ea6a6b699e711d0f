//! Scroll progress → background visual parameters.
//!
//! The page background is a fixed, full-viewport gradient layer whose hue
//! rotation and opacity follow how far the visitor has scrolled. [`map`] is the
//! whole mapping: a pure function of progress with no memory of earlier
//! calls, invoked once per scroll event.

use serde::Serialize;

/// Hue rotation control points, `(progress, degrees)`.
pub const HUE_STOPS: [(f64, f64); 2] = [(0.0, 0.0), (1.0, 220.0)];

/// Overlay opacity control points, `(progress, opacity)`.
pub const OPACITY_STOPS: [(f64, f64); 3] = [(0.0, 0.5), (0.2, 0.6), (1.0, 0.8)];

/// Derived render parameters for the background layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualParams {
    pub hue_degrees: f64,
    pub overlay_opacity: f64,
}

impl VisualParams {
    /// CSS `filter` value for the background layer.
    pub fn filter_css(&self) -> String {
        format!("hue-rotate({:.2}deg)", self.hue_degrees)
    }

    /// Inline style applying both parameters.
    pub fn style_css(&self) -> String {
        format!(
            "filter: {}; opacity: {:.3};",
            self.filter_css(),
            self.overlay_opacity
        )
    }
}

/// Map scroll progress in `[0, 1]` to visual parameters.
///
/// Progress outside the unit interval is clamped to it.
pub fn map(progress: f64) -> VisualParams {
    let progress = progress.clamp(0.0, 1.0);
    VisualParams {
        hue_degrees: interpolate(&HUE_STOPS, progress),
        overlay_opacity: interpolate(&OPACITY_STOPS, progress),
    }
}

/// Piecewise-linear interpolation over `stops`, sorted by input.
///
/// A progress equal to a stop's input falls in the segment that stop ends,
/// so every stop's output is reproduced exactly.
fn interpolate(stops: &[(f64, f64)], progress: f64) -> f64 {
    let segment = stops
        .windows(2)
        .find(|pair| progress <= pair[1].0)
        .unwrap_or(&stops[stops.len() - 2..]);
    let (x0, y0) = segment[0];
    let (x1, y1) = segment[1];
    let t = (progress - x0) / (x1 - x0);
    y0 * (1.0 - t) + y1 * t
}
