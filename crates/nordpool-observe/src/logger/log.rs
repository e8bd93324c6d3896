use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::OffsetTime, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::logger::{config::LoggerConfig, error::LoggerError};

pub struct Logger;

impl Logger {
    pub fn text(cfg: &LoggerConfig) -> Result<(), LoggerError> {
        let filter = resolve_filter(&cfg.level)?;
        let fmt_layer = fmt::layer()
            .with_ansi(cfg.use_color)
            .with_target(cfg.with_targets)
            .with_timer(mk_timer());

        init_with(tracing_subscriber::registry().with(filter).with(fmt_layer))
    }

    pub fn json(cfg: &LoggerConfig) -> Result<(), LoggerError> {
        let filter = resolve_filter(&cfg.level)?;
        let fmt_layer = fmt::layer()
            .json()
            .with_ansi(false)
            .with_target(cfg.with_targets)
            .with_timer(mk_timer());

        init_with(tracing_subscriber::registry().with(filter).with(fmt_layer))
    }

    pub fn journald(cfg: &LoggerConfig) -> Result<(), LoggerError> {
        let filter = resolve_filter(&cfg.level)?;
        mk_journald(filter)
    }
}

/// A valid `RUST_LOG` wins over the configured directive.
fn resolve_filter(level: &str) -> Result<EnvFilter, LoggerError> {
    EnvFilter::try_from_default_env().or_else(|_| mk_filter(level))
}

fn mk_filter(level: &str) -> Result<EnvFilter, LoggerError> {
    EnvFilter::try_new(level).map_err(|_| LoggerError::InvalidLogLevel(level.to_string()))
}

// Local offset lookup can fail once threads exist; fall back to UTC.
fn mk_timer() -> OffsetTime<Rfc3339> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}

fn as_error(e: impl std::fmt::Display) -> LoggerError {
    let s = e.to_string();
    if s.contains("already") {
        LoggerError::AlreadyInitialized
    } else {
        LoggerError::InitializationFailed(s)
    }
}

fn init_with<S>(subscriber: S) -> Result<(), LoggerError>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber.try_init().map_err(as_error)
}

#[cfg(all(target_os = "linux", feature = "journald"))]
fn mk_journald(filter: EnvFilter) -> Result<(), LoggerError> {
    let journald = tracing_journald::layer()
        .map_err(|e| LoggerError::InitializationFailed(format!("journald: {e}")))?;
    init_with(tracing_subscriber::registry().with(filter).with(journald))
}

#[cfg(not(all(target_os = "linux", feature = "journald")))]
fn mk_journald(_filter: EnvFilter) -> Result<(), LoggerError> {
    Err(LoggerError::JournaldNotSupported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::format::LoggerFormat;

    #[test]
    fn filter_accepts_directives() {
        assert!(mk_filter("info").is_ok());
        assert!(mk_filter("nordpool_fetch=debug,warn").is_ok());
    }

    #[test]
    fn default_level_is_a_valid_filter() {
        assert!(mk_filter(crate::DEFAULT_LEVEL).is_ok());
        assert_eq!(LoggerConfig::default().level, crate::DEFAULT_LEVEL);
    }

    #[test]
    fn filter_rejects_garbage() {
        let err = mk_filter("nordpool_fetch=loud").unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLogLevel(_)));
    }

    #[test]
    fn second_init_is_reported() {
        let cfg = LoggerConfig {
            format: LoggerFormat::Text,
            ..Default::default()
        };
        // Other tests in this binary never install a subscriber, so the first
        // call wins and the second must fail.
        Logger::text(&cfg).unwrap();
        assert!(matches!(
            Logger::json(&cfg),
            Err(LoggerError::AlreadyInitialized)
        ));
    }
}
