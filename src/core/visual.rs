use crate::domain::model::{ControlPosition, Legend, LegendEntry};

pub const RADIUS_SCALE: f64 = 5.0;

#[derive(Debug, Clone, Copy)]
pub struct DepthBucket {
    pub upper_bound: f64,
    pub color: &'static str,
}

/// 由淺 (綠) 到深 (紅)，上界含等號
pub const DEPTH_SCALE: [DepthBucket; 6] = [
    DepthBucket { upper_bound: -10.0, color: "#00FF00" },
    DepthBucket { upper_bound: 10.0, color: "#32CD32" },
    DepthBucket { upper_bound: 30.0, color: "#FFFF00" },
    DepthBucket { upper_bound: 50.0, color: "#FFA500" },
    DepthBucket { upper_bound: 70.0, color: "#FF4500" },
    DepthBucket { upper_bound: 90.0, color: "#FF0000" },
];

/// Bucket used when a depth is past the last breakpoint (or NaN).
/// This keeps the published map's colors: quakes deeper than 90 km are drawn
/// in the shallowest color.
pub const BEYOND_LAST_BREAKPOINT_INDEX: usize = 0;

pub fn marker_radius(magnitude: f64) -> f64 {
    magnitude.sqrt() * RADIUS_SCALE
}

/// First bucket whose upper bound is >= depth.
pub fn depth_bucket(depth: f64) -> Option<usize> {
    DEPTH_SCALE
        .iter()
        .position(|bucket| depth <= bucket.upper_bound)
}

pub fn marker_color(depth: f64) -> &'static str {
    let index = match depth_bucket(depth) {
        Some(index) => index,
        None => {
            tracing::trace!("Depth {} beyond last breakpoint, using fallback color", depth);
            BEYOND_LAST_BREAKPOINT_INDEX
        }
    };
    DEPTH_SCALE[index].color
}

pub fn legend_entries() -> Vec<LegendEntry> {
    DEPTH_SCALE
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let label = match DEPTH_SCALE.get(i + 1) {
                Some(next) => format!("{}\u{2013}{}", bucket.upper_bound, next.upper_bound),
                None => format!("{}+", bucket.upper_bound),
            };
            LegendEntry {
                color: bucket.color,
                label,
            }
        })
        .collect()
}

pub fn depth_legend() -> Legend {
    Legend {
        position: ControlPosition::BottomRight,
        title: "Depth".to_string(),
        entries: legend_entries(),
    }
}
