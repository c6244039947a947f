use serde::Serialize;

/// Map camera state: center in WGS84 plus a web-mercator zoom level.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: f64,
}

impl Viewport {
    pub const fn new(center_lat: f64, center_lon: f64, zoom: f64) -> Self {
        Self {
            center_lat,
            center_lon,
            zoom,
        }
    }

    /// Whole-world view used at startup.
    pub const fn world() -> Self {
        Self::new(20.0, 0.0, 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::world()
    }
}

#[cfg(test)]
mod tests {
    use super::Viewport;

    #[test]
    fn default_is_the_global_view() {
        let v = Viewport::default();
        assert_eq!(v.center_lat, 20.0);
        assert_eq!(v.center_lon, 0.0);
        assert_eq!(v.zoom, 2.0);
    }
}
