use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

use nordpool_exporter::{Args, ExporterApi, ExporterError, parse_listen_addr, serve};
use nordpool_fetch::HttpPriceFetcher;
use nordpool_observe::logger_init;
use nordpool_prometheus::PriceCollector;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 1) Logger
    logger_init(&args.logger_config())?;
    info!("starting nordpool_exporter");

    // 2) Collector
    let fetcher = HttpPriceFetcher::new(args.fetcher_config())?;
    info!(
        "upstream configured: endpoint={}, timeout_ms={:?}",
        fetcher.endpoint(),
        args.upstream_timeout_ms
    );
    let collector = Arc::new(PriceCollector::new(Arc::new(fetcher))?);

    // 3) Listener
    let addr = parse_listen_addr(&args.addr)?;
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(source) => {
            let err = ExporterError::Bind { addr, source };
            error!("failed to start server: {}", err);
            return Err(err.into());
        }
    };
    info!("listening on {}", addr);

    // 4) Serve until Ctrl+C
    let api = ExporterApi::new(collector).with_request_timeout(args.request_timeout());
    serve(listener, api, shutdown_signal()).await?;
    info!("shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
