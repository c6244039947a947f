#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// The document was not valid GeoJSON.
    Parse(String),
    /// The document parsed, but was not a FeatureCollection.
    NotACollection,
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Parse(msg) => write!(f, "feed is not valid GeoJSON: {msg}"),
            FeedError::NotACollection => write!(f, "feed is not a GeoJSON FeatureCollection"),
        }
    }
}

impl std::error::Error for FeedError {}
