//! Depth classification shared by marker styling and the legend.
//!
//! Both readers consume the same `DEPTH_BANDS` table. Keeping a single copy
//! of the thresholds is the invariant that stops the legend and the marker
//! colors from drifting apart.

/// One band of the depth scale.
///
/// `floor_km` is the exclusive lower edge: a depth belongs to the deepest
/// band whose floor it exceeds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DepthBand {
    pub floor_km: f64,
    pub color: &'static str,
}

impl DepthBand {
    pub const fn new(floor_km: f64, color: &'static str) -> Self {
        Self { floor_km, color }
    }
}

/// Depth bands in ascending floor order.
pub const DEPTH_BANDS: [DepthBand; 6] = [
    DepthBand::new(-10.0, "#a3f600"),
    DepthBand::new(10.0, "#dcf400"),
    DepthBand::new(30.0, "#f7db11"),
    DepthBand::new(50.0, "#fdb72a"),
    DepthBand::new(70.0, "#fca35d"),
    DepthBand::new(90.0, "#ff5f65"),
];

/// Swatch for features that carry no depth value at all.
pub const UNKNOWN_DEPTH_COLOR: &str = "#ffffff";

/// Classify a depth into its band color.
///
/// Scans from the deepest band down; a depth at or below the lowest floor
/// (including negative depths for above-ground events) gets the shallowest
/// color. A missing depth gets [`UNKNOWN_DEPTH_COLOR`], never a severity
/// color. Total over all inputs.
pub fn depth_color(depth_km: Option<f64>) -> &'static str {
    let Some(depth) = depth_km else {
        return UNKNOWN_DEPTH_COLOR;
    };

    for band in DEPTH_BANDS.iter().rev() {
        if depth > band.floor_km {
            return band.color;
        }
    }

    DEPTH_BANDS[0].color
}
