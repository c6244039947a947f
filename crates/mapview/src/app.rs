use serde::Serialize;

use crate::basemap::{BaseMap, default_basemaps};
use crate::control::{LayerControl, LegendControl, Overlay};
use crate::viewport::Viewport;

/// Construction options for [`MapApp`].
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub viewport: Viewport,
    /// Basemap id shown before the user toggles anything.
    pub default_basemap: String,
    /// Token for the Mapbox satellite style; empty disables it upstream.
    pub mapbox_token: String,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::world(),
            default_basemap: "terrain".to_string(),
            mapbox_token: String::new(),
        }
    }
}

/// The whole map as one explicitly constructed value.
///
/// Owns its viewport, base layers, overlay registry, and controls. Built
/// once at startup and shared read-only from then on; serializes directly
/// into the client bootstrap document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapApp {
    pub viewport: Viewport,
    pub basemaps: Vec<BaseMap>,
    pub default_basemap: String,
    pub overlays: Vec<Overlay>,
    pub layer_control: LayerControl,
    pub legend: LegendControl,
}

impl MapApp {
    pub fn new(options: MapOptions) -> Self {
        let basemaps = default_basemaps(&options.mapbox_token);

        let default_basemap = if basemaps.iter().any(|b| b.id == options.default_basemap) {
            options.default_basemap
        } else {
            // Fall back to the first stock basemap rather than pointing the
            // client at an id it cannot resolve.
            basemaps[0].id.clone()
        };

        let overlays = vec![
            Overlay::new("earthquakes", "Earthquakes", "/layers/earthquakes.json"),
            Overlay::new("plates", "Tectonic Plates", "/layers/plates.json"),
        ];

        let layer_control = LayerControl {
            collapsed: false,
            base_layers: basemaps.iter().map(|b| b.id.clone()).collect(),
            overlays: overlays.iter().map(|o| o.id.clone()).collect(),
        };

        Self {
            viewport: options.viewport,
            basemaps,
            default_basemap,
            overlays,
            layer_control,
            legend: LegendControl::depth(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{MapApp, MapOptions};

    #[test]
    fn stock_map_has_four_basemaps_and_two_overlays() {
        let map = MapApp::new(MapOptions::default());
        assert_eq!(map.basemaps.len(), 4);
        assert_eq!(map.overlays.len(), 2);
        assert_eq!(map.default_basemap, "terrain");
        assert!(!map.layer_control.collapsed);
    }

    #[test]
    fn control_entries_track_the_layer_lists() {
        let map = MapApp::new(MapOptions::default());
        let base_ids: Vec<String> = map.basemaps.iter().map(|b| b.id.clone()).collect();
        let overlay_ids: Vec<String> = map.overlays.iter().map(|o| o.id.clone()).collect();
        assert_eq!(map.layer_control.base_layers, base_ids);
        assert_eq!(map.layer_control.overlays, overlay_ids);
    }

    #[test]
    fn unknown_default_basemap_falls_back_to_the_first() {
        let map = MapApp::new(MapOptions {
            default_basemap: "does-not-exist".to_string(),
            ..MapOptions::default()
        });
        assert_eq!(map.default_basemap, "terrain");
    }

    #[test]
    fn bootstrap_document_serializes() {
        let map = MapApp::new(MapOptions::default());
        let doc = serde_json::to_value(&map).unwrap();
        assert_eq!(doc["viewport"]["zoom"], 2.0);
        assert_eq!(doc["defaultBasemap"], "terrain");
        assert_eq!(doc["legend"]["position"], "bottomright");
        assert_eq!(doc["layerControl"]["collapsed"], false);
    }
}
