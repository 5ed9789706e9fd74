pub mod engine;
pub mod renderer;
pub mod visual;

pub use crate::domain::model::{FeatureCollection, Legend, Marker};
pub use crate::domain::ports::{ConfigProvider, FeedSource, MapHost, Storage};
pub use crate::utils::error::Result;
