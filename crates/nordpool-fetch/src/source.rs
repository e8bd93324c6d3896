use async_trait::async_trait;
use nordpool_model::PriceResponse;

use crate::errors::FetchError;

/// Source of current spot prices.
///
/// The collector only depends on this trait, so tests and alternative
/// upstreams can plug in without touching the scrape cycle.
#[async_trait]
pub trait PriceSource: Send + Sync + 'static {
    /// Fetch the current price set. One call is one upstream request.
    async fn fetch(&self) -> Result<PriceResponse, FetchError>;
}
