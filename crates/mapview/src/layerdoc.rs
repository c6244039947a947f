use quakefeed::{Earthquake, PlateBoundary, popup_html};
use serde::Serialize;
use symbology::{MarkerStyle, marker_style};

/// Constant stroke for plate boundary polylines.
pub const PLATE_STROKE_COLOR: &str = "#ff7800";
pub const PLATE_STROKE_WEIGHT: f64 = 2.0;

/// One styled circle marker, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuakeMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub style: MarkerStyle,
    pub popup_html: String,
}

/// Render-ready earthquake overlay document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuakeLayerDoc {
    pub markers: Vec<QuakeMarker>,
}

/// Style every event through the classifier and attach its popup body.
pub fn build_quake_layer(quakes: &[Earthquake]) -> QuakeLayerDoc {
    let markers = quakes
        .iter()
        .map(|quake| QuakeMarker {
            latitude: quake.latitude,
            longitude: quake.longitude,
            style: marker_style(quake.magnitude, quake.depth_km),
            popup_html: popup_html(quake),
        })
        .collect();

    QuakeLayerDoc { markers }
}

/// Render-ready plate boundary overlay document.
///
/// All boundaries share one stroke, so the color and weight sit on the
/// document instead of repeating per line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateLayerDoc {
    pub color: &'static str,
    pub weight: f64,
    pub lines: Vec<Vec<[f64; 2]>>,
}

pub fn build_plate_layer(boundaries: &[PlateBoundary]) -> PlateLayerDoc {
    PlateLayerDoc {
        color: PLATE_STROKE_COLOR,
        weight: PLATE_STROKE_WEIGHT,
        lines: boundaries.iter().map(|b| b.vertices.clone()).collect(),
    }
}
