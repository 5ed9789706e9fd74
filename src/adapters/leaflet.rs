use crate::constants::LEAFLET_VERSION;
use crate::core::MapHost;
use crate::domain::model::{Legend, MapView, Marker, TileLayer};
use crate::utils::error::Result;
use serde::Serialize;

/// Map host that keeps everything it is given and renders it as a standalone
/// Leaflet page.
#[derive(Debug, Clone, Default)]
pub struct LeafletMap {
    view: Option<MapView>,
    tile_layers: Vec<TileLayer>,
    marker_layers: Vec<Vec<Marker>>,
    legends: Vec<Legend>,
}

#[derive(Serialize)]
struct LegendControl {
    position: crate::domain::model::ControlPosition,
    html: String,
}

impl LeafletMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<&MapView> {
        self.view.as_ref()
    }

    pub fn tile_layers(&self) -> &[TileLayer] {
        &self.tile_layers
    }

    pub fn marker_layers(&self) -> &[Vec<Marker>] {
        &self.marker_layers
    }

    pub fn legends(&self) -> &[Legend] {
        &self.legends
    }

    pub fn marker_count(&self) -> usize {
        self.marker_layers.iter().map(Vec::len).sum()
    }

    pub fn to_html(&self) -> Result<String> {
        let view = self.view.clone().unwrap_or_else(MapView::world);
        let legends: Vec<LegendControl> = self
            .legends
            .iter()
            .map(|legend| LegendControl {
                position: legend.position,
                html: legend.to_html(),
            })
            .collect();

        let html = MAP_HTML
            .replace("__LEAFLET_VERSION__", LEAFLET_VERSION)
            .replace("__VIEW__", &script_json(&view)?)
            .replace("__TILE_LAYERS__", &script_json(&self.tile_layers)?)
            .replace("__MARKER_LAYERS__", &script_json(&self.marker_layers)?)
            .replace("__LEGENDS__", &script_json(&legends)?);
        Ok(html)
    }
}

impl MapHost for LeafletMap {
    fn set_view(&mut self, view: MapView) {
        self.view = Some(view);
    }

    fn add_tile_layer(&mut self, layer: TileLayer) {
        self.tile_layers.push(layer);
    }

    fn add_marker_layer(&mut self, markers: Vec<Marker>) {
        self.marker_layers.push(markers);
    }

    fn add_legend(&mut self, legend: Legend) {
        self.legends.push(legend);
    }
}

// 嵌入 <script> 時不能出現 "</"
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

const MAP_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Earthquakes - Past Week</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@__LEAFLET_VERSION__/dist/leaflet.css" />
    <style>
        body { margin: 0; padding: 0; font-family: Arial, sans-serif; }
        #map { height: 100vh; width: 100%; }
        .info {
            padding: 6px 8px;
            font: 14px/16px Arial, Helvetica, sans-serif;
            background: white;
            background: rgba(255,255,255,0.9);
            box-shadow: 0 0 15px rgba(0,0,0,0.2);
            border-radius: 5px;
        }
        .info h4 {
            margin: 0 0 5px;
            color: #777;
        }
        .legend {
            line-height: 18px;
            color: #555;
        }
        .legend .color-square {
            display: inline-block;
            width: 18px;
            height: 18px;
            margin-right: 8px;
            vertical-align: middle;
            opacity: 0.8;
        }
    </style>
</head>
<body>
    <div id="map"></div>

    <script src="https://unpkg.com/leaflet@__LEAFLET_VERSION__/dist/leaflet.js"></script>
    <script>
        const view = __VIEW__;
        const map = L.map('map').setView([view.center.lat, view.center.lng], view.zoom);

        __TILE_LAYERS__.forEach(layer => {
            L.tileLayer(layer.url_template, { attribution: layer.attribution }).addTo(map);
        });

        __MARKER_LAYERS__.forEach(markers => {
            L.layerGroup(markers.map(marker =>
                L.circleMarker([marker.position.lat, marker.position.lng], marker.style)
                    .bindPopup(marker.popup_html)
            )).addTo(map);
        });

        __LEGENDS__.forEach(legend => {
            const control = L.control({ position: legend.position });
            control.onAdd = () => {
                const div = L.DomUtil.create('div', 'info legend');
                div.innerHTML = legend.html;
                return div;
            };
            control.addTo(map);
        });
    </script>
</body>
</html>
"#;
