//! Prometheus collector for nordpool spot prices.
//!
//! [`PriceCollector`] owns its own [`Registry`] (no process-wide default
//! registry) and rebuilds the price gauges on every scrape from a
//! [`nordpool_fetch::PriceSource`].
//!
//! ## Example
//! ```rust,no_run
//! use std::sync::Arc;
//! use nordpool_fetch::{FetcherConfig, HttpPriceFetcher};
//! use nordpool_prometheus::PriceCollector;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = HttpPriceFetcher::new(FetcherConfig::default())?;
//! let collector = PriceCollector::new(Arc::new(fetcher))?;
//!
//! let body = collector.scrape().await?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `nordpool_price_price{id}` - Gauge, one series per price zone in the latest response
//! - `nordpool_price_scrapes_failed` - Counter, scrapes where fetch or decode failed

mod collector;
pub use collector::{NAMESPACE, PriceCollector};

pub use prometheus::{Encoder, Registry, TextEncoder};
