use crate::domain::model::{FeatureCollection, Legend, MapView, Marker, TileLayer};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn feed_url(&self) -> &str;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self) -> Result<FeatureCollection>;
    fn endpoint(&self) -> &str;
}

/// 地圖宿主：只會被加入東西，不會移除
pub trait MapHost {
    fn set_view(&mut self, view: MapView);
    fn add_tile_layer(&mut self, layer: TileLayer);
    fn add_marker_layer(&mut self, markers: Vec<Marker>);
    fn add_legend(&mut self, legend: Legend);
}
