use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tracing::info;

use nordpool_model::PriceResponse;

use crate::config::FetcherConfig;
use crate::errors::FetchError;
use crate::source::PriceSource;

/// [`PriceSource`] backed by the control-room HTTP API.
///
/// Holds a single `reqwest::Client` so connections are pooled across scrapes.
#[derive(Debug, Clone)]
pub struct HttpPriceFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPriceFetcher {
    pub fn new(cfg: FetcherConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            client,
            endpoint: cfg.endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PriceSource for HttpPriceFetcher {
    async fn fetch(&self) -> Result<PriceResponse, FetchError> {
        let url = request_url(&self.endpoint, now_millis());
        info!("fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(FetchError::Network)?;

        let body = response.text().await.map_err(FetchError::Read)?;
        info!("{}", body);

        decode(&body)
    }
}

/// Append the cache-busting `ticks` parameter to `endpoint`.
pub fn request_url(endpoint: &str, ticks_ms: u128) -> String {
    let sep = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{sep}ticks={ticks_ms}")
}

pub fn decode(body: &str) -> Result<PriceResponse, FetchError> {
    Ok(serde_json::from_str(body)?)
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
