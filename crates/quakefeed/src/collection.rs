//! Shared GeoJSON decoding for both upstream feeds.

use geojson::{FeatureCollection, GeoJson};

use crate::error::FeedError;

pub(crate) fn parse_feature_collection(text: &str) -> Result<FeatureCollection, FeedError> {
    let geojson = text
        .parse::<GeoJson>()
        .map_err(|e| FeedError::Parse(e.to_string()))?;

    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        GeoJson::Feature(_) | GeoJson::Geometry(_) => Err(FeedError::NotACollection),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_feature_collection;
    use crate::error::FeedError;

    #[test]
    fn rejects_non_json() {
        let err = parse_feature_collection("not json").unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
    }

    #[test]
    fn rejects_bare_geometry() {
        let doc = r#"{"type":"Point","coordinates":[1.0,2.0]}"#;
        let err = parse_feature_collection(doc).unwrap_err();
        assert_eq!(err, FeedError::NotACollection);
    }

    #[test]
    fn accepts_an_empty_collection() {
        let doc = r#"{"type":"FeatureCollection","features":[]}"#;
        let collection = parse_feature_collection(doc).unwrap();
        assert!(collection.features.is_empty());
    }
}
