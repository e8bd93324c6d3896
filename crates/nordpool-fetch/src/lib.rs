//! Outbound side of the exporter: one HTTP GET per scrape against the
//! control-room price API.

mod config;
pub use config::{DEFAULT_ENDPOINT, FetcherConfig};

mod errors;
pub use errors::FetchError;

mod source;
pub use source::PriceSource;

mod http;
pub use http::{HttpPriceFetcher, decode, request_url};

pub use nordpool_model::{PriceRecord, PriceResponse};
