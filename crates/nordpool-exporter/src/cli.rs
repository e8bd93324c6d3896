use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use clap::Parser;

use nordpool_fetch::{DEFAULT_ENDPOINT, FetcherConfig};
use nordpool_observe::{DEFAULT_LEVEL, LoggerConfig, LoggerFormat};

use crate::error::ExporterError;

/// Prometheus exporter for Nord Pool spot prices.
#[derive(Parser, Debug, Clone)]
#[command(name = "nordpool_exporter", author, version, about)]
pub struct Args {
    /// The address to listen on for HTTP requests.
    #[arg(long, default_value = ":9367")]
    pub addr: String,

    /// Price API endpoint; `ticks=<unix-millis>` is appended per request.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Deadline for each upstream request. No deadline when unset.
    #[arg(long)]
    pub upstream_timeout_ms: Option<u64>,

    /// Deadline for a whole inbound request, upstream fetch included.
    #[arg(long, default_value_t = 10_000)]
    pub request_timeout_ms: u64,

    /// Log filter directive
    #[arg(long, default_value = DEFAULT_LEVEL)]
    pub log_level: String,

    /// Log format: text, json or journald
    #[arg(long, default_value = "text")]
    pub log_format: LoggerFormat,
}

impl Args {
    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            endpoint: self.endpoint.clone(),
            timeout: self.upstream_timeout_ms.map(Duration::from_millis),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            format: self.log_format,
            level: self.log_level.clone(),
            ..Default::default()
        }
    }
}

/// Resolve a listen address. A bare `:port` binds every interface.
pub fn parse_listen_addr(addr: &str) -> Result<SocketAddr, ExporterError> {
    let addr = addr.trim();
    let full = match addr.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{port}"),
        None => addr.to_string(),
    };

    if let Ok(sock) = full.parse::<SocketAddr>() {
        return Ok(sock);
    }
    full.to_socket_addrs()
        .ok()
        .and_then(|mut it| it.next())
        .ok_or_else(|| ExporterError::InvalidAddr(addr.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upstream_exporter() {
        let args = Args::parse_from(["nordpool_exporter"]);
        assert_eq!(args.addr, ":9367");
        assert_eq!(args.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(args.log_format, LoggerFormat::Text);
        assert!(args.fetcher_config().timeout.is_none());
        assert_eq!(args.request_timeout(), crate::DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(args.log_level, DEFAULT_LEVEL);
    }

    #[test]
    fn timeout_flag_sets_deadline() {
        let args = Args::parse_from(["nordpool_exporter", "--upstream-timeout-ms", "2500"]);
        assert_eq!(args.fetcher_config().timeout, Some(Duration::from_millis(2500)));
    }

    #[test]
    fn bad_log_format_is_rejected() {
        assert!(Args::try_parse_from(["nordpool_exporter", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn bare_port_binds_all_interfaces() {
        let addr = parse_listen_addr(":9367").unwrap();
        assert_eq!(addr, "0.0.0.0:9367".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn explicit_host_is_kept() {
        let addr = parse_listen_addr("127.0.0.1:8080").unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_loopback());

        let v6 = parse_listen_addr("[::1]:9367").unwrap();
        assert!(v6.is_ipv6());
    }

    #[test]
    fn garbage_addr_is_rejected() {
        assert!(matches!(
            parse_listen_addr("not an address"),
            Err(ExporterError::InvalidAddr(_))
        ));
        assert!(parse_listen_addr(":notaport").is_err());
    }
}
