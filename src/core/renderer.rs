use crate::core::visual::{depth_legend, marker_color, marker_radius};
use crate::core::MapHost;
use crate::domain::model::{
    escape_html, CircleStyle, EarthquakeFeature, FeatureCollection, MapView, Marker, TileLayer,
};
use crate::utils::error::{QuakeMapError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub markers: usize,
    pub legend_entries: usize,
}

/// 設定初始視角與底圖
pub fn init_map<H: MapHost + ?Sized>(host: &mut H) {
    host.set_view(MapView::world());
    host.add_tile_layer(TileLayer::openstreetmap());
}

/// Adds one marker per feature (input order) and the depth legend.
///
/// Every feature is converted before the host is touched, so a malformed
/// feature leaves the host unchanged.
pub fn render<H: MapHost + ?Sized>(
    collection: &FeatureCollection,
    host: &mut H,
) -> Result<RenderSummary> {
    let markers = collection
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| marker_for(index, feature))
        .collect::<Result<Vec<_>>>()?;

    let legend = depth_legend();
    let summary = RenderSummary {
        markers: markers.len(),
        legend_entries: legend.entries.len(),
    };

    tracing::debug!("Adding marker layer with {} markers", summary.markers);
    host.add_marker_layer(markers);
    host.add_legend(legend);

    Ok(summary)
}

pub fn marker_for(index: usize, feature: &EarthquakeFeature) -> Result<Marker> {
    let magnitude = feature
        .magnitude()
        .ok_or_else(|| malformed(index, "missing properties.mag"))?;
    let position = feature
        .position()
        .ok_or_else(|| malformed(index, "missing geometry coordinates"))?;
    let depth = feature
        .depth()
        .ok_or_else(|| malformed(index, "missing depth coordinate"))?;

    Ok(Marker {
        position,
        style: CircleStyle::new(marker_radius(magnitude), marker_color(depth)),
        popup_html: popup_html(feature.place(), magnitude, depth),
    })
}

pub fn popup_html(place: Option<&str>, magnitude: f64, depth: f64) -> String {
    format!(
        "<strong>Location:</strong> {}<br><strong>Magnitude:</strong> {}<br><strong>Depth:</strong> {}",
        escape_html(place.unwrap_or("Unknown location")),
        magnitude,
        depth
    )
}

fn malformed(index: usize, reason: &str) -> QuakeMapError {
    QuakeMapError::MalformedFeature {
        index,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Legend, QuakeProperties, PointGeometry};

    #[derive(Default)]
    struct RecordingHost {
        views: Vec<MapView>,
        tile_layers: Vec<TileLayer>,
        marker_layers: Vec<Vec<Marker>>,
        legends: Vec<Legend>,
    }

    impl MapHost for RecordingHost {
        fn set_view(&mut self, view: MapView) {
            self.views.push(view);
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

    fn feature(mag: Option<f64>, place: Option<&str>, coordinates: Vec<f64>) -> EarthquakeFeature {
        EarthquakeFeature {
            id: None,
            properties: QuakeProperties {
                mag,
                place: place.map(str::to_string),
                time: None,
            },
            geometry: Some(PointGeometry { coordinates }),
        }
    }

    #[test]
    fn test_init_map_sets_world_view_and_osm_tiles() {
        let mut host = RecordingHost::default();
        init_map(&mut host);

        assert_eq!(host.views, vec![MapView::world()]);
        assert_eq!(host.tile_layers, vec![TileLayer::openstreetmap()]);
        assert!(host.marker_layers.is_empty());
    }

    #[test]
    fn test_render_single_feature() {
        let collection = FeatureCollection {
            metadata: None,
            features: vec![feature(Some(4.0), Some("Test"), vec![10.0, 20.0, 5.0])],
        };
        let mut host = RecordingHost::default();

        let summary = render(&collection, &mut host).unwrap();

        assert_eq!(summary.markers, 1);
        assert_eq!(host.marker_layers.len(), 1);
        let marker = &host.marker_layers[0][0];
        assert_eq!(marker.position.lat, 20.0);
        assert_eq!(marker.position.lng, 10.0);
        assert_eq!(marker.style.radius, 10.0);
        assert_eq!(marker.style.fill_color, "#32CD32");
        assert!(marker.popup_html.contains("Test"));
        assert!(marker.popup_html.contains("<strong>Magnitude:</strong> 4"));
        assert!(marker.popup_html.contains("<strong>Depth:</strong> 5"));
    }

    #[test]
    fn test_render_empty_collection_still_adds_legend() {
        let mut host = RecordingHost::default();
        let summary = render(&FeatureCollection::default(), &mut host).unwrap();

        assert_eq!(summary, RenderSummary { markers: 0, legend_entries: 6 });
        assert_eq!(host.marker_layers, vec![Vec::<Marker>::new()]);
        assert_eq!(host.legends.len(), 1);
        assert_eq!(host.legends[0].entries.len(), 6);
    }

    #[test]
    fn test_render_preserves_feature_order() {
        let collection = FeatureCollection {
            metadata: None,
            features: vec![
                feature(Some(1.0), Some("first"), vec![1.0, 1.0, 100.0]),
                feature(Some(9.0), Some("second"), vec![2.0, 2.0, 40.0]),
            ],
        };
        let mut host = RecordingHost::default();
        render(&collection, &mut host).unwrap();

        let markers = &host.marker_layers[0];
        assert!(markers[0].popup_html.contains("first"));
        assert_eq!(markers[0].style.fill_color, "#00FF00");
        assert!(markers[1].popup_html.contains("second"));
        assert_eq!(markers[1].style.radius, 15.0);
        assert_eq!(markers[1].style.fill_color, "#FFA500");
    }

    #[test]
    fn test_malformed_feature_leaves_host_untouched() {
        let collection = FeatureCollection {
            metadata: None,
            features: vec![
                feature(Some(2.0), Some("ok"), vec![0.0, 0.0, 1.0]),
                feature(None, Some("no magnitude"), vec![0.0, 0.0, 1.0]),
            ],
        };
        let mut host = RecordingHost::default();

        let err = render(&collection, &mut host).unwrap_err();
        match err {
            QuakeMapError::MalformedFeature { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other}"),
        }
        assert!(host.marker_layers.is_empty());
        assert!(host.legends.is_empty());
    }

    #[test]
    fn test_missing_depth_is_malformed() {
        let err = marker_for(0, &feature(Some(2.0), None, vec![1.0, 2.0])).unwrap_err();
        assert!(err.to_string().contains("depth"));
    }

    #[test]
    fn test_popup_escapes_place_and_defaults() {
        let html = popup_html(Some("<b>x</b>"), 2.5, -1.0);
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(html.contains("2.5"));
        assert!(html.contains("-1"));

        assert!(popup_html(None, 1.0, 1.0).contains("Unknown location"));
    }

    #[test]
    fn test_render_twice_adds_second_layer() {
        let mut host = RecordingHost::default();
        render(&FeatureCollection::default(), &mut host).unwrap();
        render(&FeatureCollection::default(), &mut host).unwrap();

        assert_eq!(host.marker_layers.len(), 2);
        assert_eq!(host.legends.len(), 2);
    }
}
