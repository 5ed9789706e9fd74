// USGS 過去一週所有地震
pub const FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

// 底圖
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";

// 初始視角
pub const DEFAULT_CENTER: (f64, f64) = (0.0, 0.0);
pub const DEFAULT_ZOOM: u8 = 2;

pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const OUTPUT_FILENAME: &str = "index.html";

pub const LEAFLET_VERSION: &str = "1.9.4";
