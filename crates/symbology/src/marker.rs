use serde::Serialize;

use crate::depth_scale::depth_color;

/// Radius used when magnitude is missing, zero, or negative.
///
/// Zero is folded into the missing case: a zero-radius marker would not be
/// renderable, and negative magnitudes (valid for very small events) get the
/// same floor.
pub const FALLBACK_RADIUS: f64 = 4.0;

/// Pixels of radius per unit of magnitude.
const RADIUS_PER_MAGNITUDE: f64 = 4.0;

/// Complete circle-marker style for one earthquake feature.
///
/// Derived fresh per feature; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_color: &'static str,
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

/// Scale magnitude to a marker radius.
///
/// Returns `mag * 4` for positive magnitudes and [`FALLBACK_RADIUS`]
/// otherwise. Never returns zero or a negative radius.
pub fn magnitude_radius(mag: Option<f64>) -> f64 {
    match mag {
        Some(m) if m > 0.0 => m * RADIUS_PER_MAGNITUDE,
        _ => FALLBACK_RADIUS,
    }
}

/// Compose the full marker style for a feature's magnitude and depth.
///
/// Pure and idempotent: identical inputs always yield an identical style.
pub fn marker_style(mag: Option<f64>, depth_km: Option<f64>) -> MarkerStyle {
    MarkerStyle {
        radius: magnitude_radius(mag),
        fill_color: depth_color(depth_km),
        color: "#000",
        weight: 0.5,
        opacity: 1.0,
        fill_opacity: 0.7,
    }
}
