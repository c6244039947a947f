use serde::Serialize;

/// One togglable base tile layer.
///
/// `url_template` uses `{s}`/`{z}`/`{x}`/`{y}` placeholders the way XYZ tile
/// providers publish them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseMap {
    pub id: String,
    pub name: String,
    pub url_template: String,
    pub subdomains: Vec<String>,
    pub attribution: String,
    pub max_zoom: u8,
}

impl BaseMap {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url_template: impl Into<String>,
        attribution: impl Into<String>,
        max_zoom: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url_template: url_template.into(),
            subdomains: Vec::new(),
            attribution: attribution.into(),
            max_zoom,
        }
    }

    pub fn with_subdomains(mut self, subdomains: &[&str]) -> Self {
        self.subdomains = subdomains.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Resolve the template for one tile coordinate.
    ///
    /// Subdomain rotation is deterministic per coordinate so repeated
    /// requests for the same tile hit the same host.
    pub fn tile_url(&self, z: u8, x: u32, y: u32) -> String {
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            let idx = (x as usize + y as usize) % self.subdomains.len();
            self.subdomains[idx].as_str()
        };

        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

/// The four stock base layers: terrain, satellite, grayscale, topographic.
///
/// The satellite style needs a Mapbox token; an empty token keeps the layer
/// listed but unusable, which mirrors how the tile provider itself behaves.
pub fn default_basemaps(mapbox_token: &str) -> Vec<BaseMap> {
    vec![
        BaseMap::new(
            "terrain",
            "Terrain",
            "http://{s}.google.com/vt/lyrs=p&x={x}&y={y}&z={z}",
            "Map data &copy; Google",
            20,
        )
        .with_subdomains(&["mt0", "mt1", "mt2", "mt3"]),
        BaseMap::new(
            "satellite",
            "Satellite",
            format!(
                "https://api.mapbox.com/styles/v1/mapbox/satellite-v9/tiles/{{z}}/{{x}}/{{y}}?access_token={mapbox_token}"
            ),
            "&copy; Mapbox contributors",
            19,
        ),
        BaseMap::new(
            "grayscale",
            "Grayscale",
            "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png",
            "&copy; OpenStreetMap contributors",
            19,
        )
        .with_subdomains(&["a", "b", "c"]),
        BaseMap::new(
            "topographic",
            "Topographic",
            "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
            "&copy; OpenTopoMap contributors",
            17,
        )
        .with_subdomains(&["a", "b", "c"]),
    ]
}
