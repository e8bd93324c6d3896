use std::sync::Arc;

use prometheus::{
    Encoder, GaugeVec, IntCounter, Opts, Registry, TextEncoder, core::Collector, core::Desc,
    proto::MetricFamily,
};
use tokio::sync::Mutex;
use tracing::{debug, error};

use nordpool_fetch::PriceSource;

pub const NAMESPACE: &str = "nordpool";
const SUBSYSTEM: &str = "price";
const LABEL_ID: &str = "id";

/// Scrape-driven collector: every [`scrape`](Self::scrape) fetches fresh
/// prices and republishes them.
///
/// The price gauges are reset at the start of each cycle, so zones missing
/// from the latest response disappear instead of keeping a stale value.
pub struct PriceCollector {
    source: Arc<dyn PriceSource>,
    registry: Registry,
    price: GaugeVec,
    scrapes_failed: IntCounter,
    /// Serializes reset, populate and gather across concurrent scrapes.
    cycle: Mutex<()>,
}

impl PriceCollector {
    pub fn new(source: Arc<dyn PriceSource>) -> Result<Self, prometheus::Error> {
        let price = GaugeVec::new(
            Opts::new("price", "Prices")
                .namespace(NAMESPACE)
                .subsystem(SUBSYSTEM),
            &[LABEL_ID],
        )?;
        let scrapes_failed = IntCounter::with_opts(
            Opts::new(
                "scrapes_failed",
                "Count of scrapes of group data from NordPool that have failed",
            )
            .namespace(NAMESPACE)
            .subsystem(SUBSYSTEM),
        )?;

        let registry = Registry::new();
        registry.register(Box::new(price.clone()))?;
        registry.register(Box::new(scrapes_failed.clone()))?;

        Ok(Self {
            source,
            registry,
            price,
            scrapes_failed,
            cycle: Mutex::new(()),
        })
    }

    /// Static descriptors of every exported metric. Does not touch upstream.
    pub fn describe(&self) -> Vec<Desc> {
        self.price
            .desc()
            .into_iter()
            .chain(self.scrapes_failed.desc())
            .cloned()
            .collect()
    }

    /// Run one fetch-publish cycle and return the gathered families.
    pub async fn collect(&self) -> Vec<MetricFamily> {
        let _guard = self.cycle.lock().await;
        self.refresh().await;
        self.registry.gather()
    }

    /// Run one fetch-publish cycle and encode it in the text exposition format.
    ///
    /// Upstream failures are absorbed into `scrapes_failed`; the only error
    /// left is encoding.
    pub async fn scrape(&self) -> Result<String, prometheus::Error> {
        let families = self.collect().await;

        let mut buf = Vec::new();
        TextEncoder::new().encode(&families, &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    /// Content type matching [`scrape`](Self::scrape) output.
    pub fn format_type(&self) -> &'static str {
        prometheus::TEXT_FORMAT
    }

    pub fn scrapes_failed(&self) -> u64 {
        self.scrapes_failed.get()
    }

    async fn refresh(&self) {
        self.price.reset();

        match self.source.fetch().await {
            Ok(prices) => {
                debug!("publishing {} prices", prices.len());
                for record in prices.iter() {
                    self.price
                        .with_label_values(&[record.id.as_str()])
                        .set(record.value);
                }
            }
            Err(e) => {
                error!("failed to update prices: {}", e);
                self.scrapes_failed.inc();
            }
        }
    }
}
