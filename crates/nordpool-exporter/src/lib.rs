//! HTTP surface of the nordpool exporter: CLI options, the `/` landing page
//! and the `/metrics` scrape endpoint.

mod cli;
pub use cli::{Args, parse_listen_addr};

mod error;
pub use error::ExporterError;

mod http;
pub use http::{DEFAULT_REQUEST_TIMEOUT, ExporterApi, LANDING_PAGE, serve};
