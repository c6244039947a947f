use geojson::Value;

use crate::collection::parse_feature_collection;
use crate::error::FeedError;

/// One tectonic plate boundary as a lon/lat polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateBoundary {
    pub vertices: Vec<[f64; 2]>,
}

/// Decode the PB2002 boundaries document into polylines.
///
/// `LineString` features yield one boundary each, `MultiLineString` one per
/// member line. Other geometries are skipped; the dataset is line-only, so
/// anything else is noise rather than an error.
pub fn parse_plate_boundaries(text: &str) -> Result<Vec<PlateBoundary>, FeedError> {
    let collection = parse_feature_collection(text)?;

    let mut out = Vec::new();
    for feature in &collection.features {
        let Some(geometry) = feature.geometry.as_ref() else {
            continue;
        };
        match &geometry.value {
            Value::LineString(line) => push_line(&mut out, line),
            Value::MultiLineString(lines) => {
                for line in lines {
                    push_line(&mut out, line);
                }
            }
            _ => {}
        }
    }

    Ok(out)
}

fn push_line(out: &mut Vec<PlateBoundary>, line: &[Vec<f64>]) {
    let vertices: Vec<[f64; 2]> = line
        .iter()
        .filter_map(|position| Some([*position.first()?, *position.get(1)?]))
        .collect();

    if vertices.len() >= 2 {
        out.push(PlateBoundary { vertices });
    }
}
