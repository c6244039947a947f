use geojson::{Feature, Value};

use crate::collection::parse_feature_collection;
use crate::error::FeedError;

/// One earthquake event as carried by the USGS summary feed.
///
/// Read-only input per render; magnitude, depth, place, and time may all be
/// absent in real feed data and stay optional here.
#[derive(Debug, Clone, PartialEq)]
pub struct Earthquake {
    pub longitude: f64,
    pub latitude: f64,
    /// Depth in kilometers, third coordinate of the Point geometry.
    pub depth_km: Option<f64>,
    pub magnitude: Option<f64>,
    pub place: Option<String>,
    /// Event time in epoch milliseconds.
    pub time_ms: Option<i64>,
}

/// Decode a USGS-style GeoJSON document into earthquake events.
///
/// Features without a Point geometry or without both horizontal coordinates
/// are skipped; nothing in a single feature can fail the whole document.
pub fn parse_earthquakes(text: &str) -> Result<Vec<Earthquake>, FeedError> {
    let collection = parse_feature_collection(text)?;

    let mut out = Vec::with_capacity(collection.features.len());
    for feature in &collection.features {
        if let Some(quake) = earthquake_from_feature(feature) {
            out.push(quake);
        }
    }

    Ok(out)
}

fn earthquake_from_feature(feature: &Feature) -> Option<Earthquake> {
    let geometry = feature.geometry.as_ref()?;
    let Value::Point(ref position) = geometry.value else {
        return None;
    };
    let longitude = *position.first()?;
    let latitude = *position.get(1)?;
    let depth_km = position.get(2).copied();

    let properties = feature.properties.as_ref();
    let magnitude = properties
        .and_then(|p| p.get("mag"))
        .and_then(|v| v.as_f64());
    let place = properties
        .and_then(|p| p.get("place"))
        .and_then(|v| v.as_str())
        .map(str::to_string);
    let time_ms = properties
        .and_then(|p| p.get("time"))
        .and_then(|v| v.as_i64());

    Some(Earthquake {
        longitude,
        latitude,
        depth_km,
        magnitude,
        place,
        time_ms,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Earthquake, parse_earthquakes};

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "mag": 5.2,
                    "place": "42 km SSW of Adak, Alaska",
                    "time": 1738713600000
                },
                "geometry": {"type": "Point", "coordinates": [12.0, 34.0, 15.0]}
            },
            {
                "type": "Feature",
                "properties": {"mag": null, "place": "Fiji region", "time": 1738713700000},
                "geometry": {"type": "Point", "coordinates": [178.1, -17.8, 540.3]}
            },
            {
                "type": "Feature",
                "properties": {"mag": 1.1},
                "geometry": {"type": "Point", "coordinates": [-120.5, 36.2]}
            }
        ]
    }"#;

    #[test]
    fn parses_the_usgs_shape() {
        let quakes = parse_earthquakes(SAMPLE).unwrap();
        assert_eq!(quakes.len(), 3);
        assert_eq!(
            quakes[0],
            Earthquake {
                longitude: 12.0,
                latitude: 34.0,
                depth_km: Some(15.0),
                magnitude: Some(5.2),
                place: Some("42 km SSW of Adak, Alaska".to_string()),
                time_ms: Some(1738713600000),
            }
        );
    }

    #[test]
    fn null_magnitude_stays_absent() {
        let quakes = parse_earthquakes(SAMPLE).unwrap();
        assert_eq!(quakes[1].magnitude, None);
        assert_eq!(quakes[1].depth_km, Some(540.3));
    }

    #[test]
    fn two_element_coordinates_leave_depth_absent() {
        let quakes = parse_earthquakes(SAMPLE).unwrap();
        assert_eq!(quakes[2].depth_km, None);
        assert_eq!(quakes[2].place, None);
        assert_eq!(quakes[2].time_ms, None);
    }

    #[test]
    fn non_point_features_are_skipped() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}
                }
            ]
        }"#;
        let quakes = parse_earthquakes(doc).unwrap();
        assert!(quakes.is_empty());
    }
}
