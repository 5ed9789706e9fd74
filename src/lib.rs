pub mod adapters;
pub mod config;
pub mod constants;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};

pub use adapters::{http::HttpFeedSource, leaflet::LeafletMap};
pub use core::{engine::QuakeMapEngine, renderer::RenderSummary};
pub use utils::error::{QuakeMapError, Result};
