use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CENTER, DEFAULT_ZOOM, OSM_ATTRIBUTION, OSM_TILE_URL};

/// GeoJSON feature collection as published by the USGS summary feeds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub metadata: Option<FeedMetadata>,
    #[serde(default)]
    pub features: Vec<EarthquakeFeature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedMetadata {
    /// 產生時間 (epoch 毫秒)
    pub generated: Option<i64>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub count: Option<usize>,
}

impl FeedMetadata {
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated.and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarthquakeFeature {
    #[serde(default)]
    pub id: Option<String>,
    pub properties: QuakeProperties,
    #[serde(default)]
    pub geometry: Option<PointGeometry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuakeProperties {
    #[serde(default)]
    pub mag: Option<f64>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub time: Option<i64>,
}

/// GeoJSON point: `[lon, lat, depth]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointGeometry {
    pub coordinates: Vec<f64>,
}

impl EarthquakeFeature {
    pub fn magnitude(&self) -> Option<f64> {
        self.properties.mag
    }

    pub fn place(&self) -> Option<&str> {
        self.properties.place.as_deref()
    }

    pub fn position(&self) -> Option<LatLng> {
        let coords = &self.geometry.as_ref()?.coordinates;
        match coords.as_slice() {
            [lng, lat, ..] => Some(LatLng::new(*lat, *lng)),
            _ => None,
        }
    }

    /// 深度 (公里)，負值代表高於參考面
    pub fn depth(&self) -> Option<f64> {
        self.geometry.as_ref()?.coordinates.get(2).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

impl MapView {
    pub fn world() -> Self {
        Self {
            center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            zoom: DEFAULT_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

impl TileLayer {
    pub fn openstreetmap() -> Self {
        Self {
            url_template: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
        }
    }
}

/// Leaflet path options for a circle marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleStyle {
    pub radius: f64,
    pub fill_color: String,
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl CircleStyle {
    pub fn new(radius: f64, fill_color: &str) -> Self {
        Self {
            radius,
            fill_color: fill_color.to_string(),
            color: "#000".to_string(),
            weight: 1.0,
            opacity: 1.0,
            fill_opacity: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: LatLng,
    pub style: CircleStyle,
    pub popup_html: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: ControlPosition,
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// 圖例面板內容，色塊加上深度區間
    pub fn to_html(&self) -> String {
        let rows: Vec<String> = self
            .entries
            .iter()
            .map(|entry| {
                format!(
                    r#"<span class="color-square" style="background: {};"></span>{}"#,
                    entry.color,
                    escape_html(&entry.label)
                )
            })
            .collect();

        format!("<h4>{}</h4>{}", escape_html(&self.title), rows.join("<br>"))
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
