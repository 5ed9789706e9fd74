use crate::core::{ConfigProvider, FeatureCollection, FeedSource};
use crate::utils::error::{QuakeMapError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// 透過 HTTP 取得 GeoJSON feed，只發一次請求，不重試
pub struct HttpFeedSource {
    client: Client,
    endpoint: String,
}

impl HttpFeedSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.feed_url())
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<FeatureCollection> {
        tracing::debug!("Making feed request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("Feed response status: {}", status);
        if !status.is_success() {
            return Err(QuakeMapError::HttpStatus {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.text().await?;
        let collection: FeatureCollection = serde_json::from_str(&body)?;

        if let Some(metadata) = &collection.metadata {
            if let Some(generated) = metadata.generated_at() {
                tracing::info!(
                    "🕒 Feed '{}' generated at {}",
                    metadata.title.as_deref().unwrap_or("untitled"),
                    generated.to_rfc3339()
                );
            }
        }
        tracing::info!("📊 Fetched {} earthquakes", collection.features.len());

        Ok(collection)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
