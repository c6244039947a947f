use serde::Serialize;
use symbology::{LegendRow, legend_rows};

/// One togglable overlay layer and where its document is served from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    pub id: String,
    pub name: String,
    pub url: String,
    pub visible: bool,
}

impl Overlay {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            visible: true,
        }
    }
}

/// Base/overlay toggle control state.
///
/// Holds ids only; the entries are derived from the map's own basemap and
/// overlay lists so the control cannot reference layers that do not exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerControl {
    pub collapsed: bool,
    pub base_layers: Vec<String>,
    pub overlays: Vec<String>,
}

/// Depth legend control, anchored bottom-right like the reference viewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendControl {
    pub position: String,
    pub title: String,
    pub rows: Vec<LegendRow>,
}

impl LegendControl {
    /// Legend wired to the shared depth band table.
    pub fn depth() -> Self {
        Self {
            position: "bottomright".to_string(),
            title: "Depth (km)".to_string(),
            rows: legend_rows(),
        }
    }
}
