use crate::core::renderer::{render, RenderSummary};
use crate::core::{FeedSource, MapHost};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Runs fetch then render once. A failure is logged a single time and the
/// host is left as it was.
pub struct QuakeMapEngine<F: FeedSource> {
    source: F,
    monitor: SystemMonitor,
}

impl<F: FeedSource> QuakeMapEngine<F> {
    pub fn new(source: F) -> Self {
        Self::new_with_monitoring(source, false)
    }

    pub fn new_with_monitoring(source: F, monitor_enabled: bool) -> Self {
        Self {
            source,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run<H: MapHost + ?Sized>(&self, host: &mut H) -> Result<RenderSummary> {
        tracing::info!("🌍 Fetching earthquake feed from {}", self.source.endpoint());

        let collection = match self.source.fetch().await {
            Ok(collection) => collection,
            Err(e) => {
                tracing::error!("❌ Error fetching data: {}", e);
                return Err(e);
            }
        };
        self.monitor.log_stats("Fetch");

        let summary = match render(&collection, host) {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!("❌ Error rendering earthquakes: {}", e);
                return Err(e);
            }
        };
        self.monitor.log_stats("Render");

        tracing::info!(
            "🗺️ Added {} markers and a {}-entry depth legend",
            summary.markers,
            summary.legend_entries
        );
        self.monitor.log_final_stats();

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::leaflet::LeafletMap;
    use crate::domain::model::{
        EarthquakeFeature, FeatureCollection, PointGeometry, QuakeProperties,
    };
    use crate::utils::error::QuakeMapError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticSource {
        collection: Option<FeatureCollection>,
        calls: AtomicUsize,
    }

    impl StaticSource {
        fn ok(collection: FeatureCollection) -> Self {
            Self {
                collection: Some(collection),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                collection: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl FeedSource for StaticSource {
        async fn fetch(&self) -> Result<FeatureCollection> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.collection
                .clone()
                .ok_or_else(|| QuakeMapError::HttpStatus {
                    status: 500,
                    url: "mock://feed".to_string(),
                })
        }

        fn endpoint(&self) -> &str {
            "mock://feed"
        }
    }

    #[tokio::test]
    async fn test_run_renders_fetched_features() {
        let collection = FeatureCollection {
            metadata: None,
            features: vec![EarthquakeFeature {
                id: None,
                properties: QuakeProperties {
                    mag: Some(2.25),
                    place: Some("Offshore".to_string()),
                    time: None,
                },
                geometry: Some(PointGeometry {
                    coordinates: vec![140.0, 35.0, 60.0],
                }),
            }],
        };
        let engine = QuakeMapEngine::new(StaticSource::ok(collection));
        let mut map = LeafletMap::new();

        let summary = engine.run(&mut map).await.unwrap();

        assert_eq!(summary.markers, 1);
        assert_eq!(summary.legend_entries, 6);
        assert_eq!(map.marker_layers()[0][0].style.fill_color, "#FF4500");
        assert_eq!(map.marker_layers()[0][0].style.radius, 7.5);
        assert_eq!(engine.source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_failure_leaves_map_untouched() {
        let engine = QuakeMapEngine::new(StaticSource::failing());
        let mut map = LeafletMap::new();

        let result = engine.run(&mut map).await;

        assert!(result.is_err());
        assert_eq!(map.marker_count(), 0);
        assert!(map.legends().is_empty());
        // 不重試
        assert_eq!(engine.source.calls.load(Ordering::SeqCst), 1);
    }
}
