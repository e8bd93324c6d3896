use std::{future::Future, sync::Arc, time::Duration};

use axum::{
    Router,
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;

use nordpool_prometheus::PriceCollector;

use crate::error::ExporterError;

/// Deadline for a whole inbound request, upstream fetch included.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const LANDING_PAGE: &str = r#"<html>
<head><title>Nordpool Exporter</title></head>
<body>
<h1>Nordpool Exporter</h1>
<p><a href="/metrics">Metrics</a></p>
</body>
</html>"#;

/// HTTP service builder.
pub struct ExporterApi {
    collector: Arc<PriceCollector>,
    request_timeout: Duration,
}

impl ExporterApi {
    pub fn new(collector: Arc<PriceCollector>) -> Self {
        Self {
            collector,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Answer `408 Request Timeout` once a request runs longer than `timeout`.
    ///
    /// An expired scrape is dropped, which also releases the collector's
    /// cycle lock for the next scrape.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build axum router with mounted endpoints.
    ///
    /// Routes:
    /// - GET / - Landing page
    /// - GET /metrics - Prometheus scrape
    pub fn router(self) -> Router {
        Router::new()
            .route("/", get(landing_page))
            .route("/metrics", get(metrics))
            .layer(TimeoutLayer::new(self.request_timeout))
            .with_state(self.collector)
    }
}

/// Serve `api` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    api: ExporterApi,
    shutdown: F,
) -> Result<(), ExporterError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, api.router())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ExporterError::Serve)
}

/// GET /
async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// GET /metrics
///
/// Upstream failures still answer 200; they only show up in
/// `nordpool_price_scrapes_failed`.
async fn metrics(
    State(collector): State<Arc<PriceCollector>>,
) -> Result<impl IntoResponse, ExporterError> {
    let body = collector.scrape().await?;
    Ok(([(header::CONTENT_TYPE, collector.format_type())], body))
}
