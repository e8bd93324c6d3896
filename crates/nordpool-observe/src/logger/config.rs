use std::io::IsTerminal;

use crate::logger::format::LoggerFormat;

/// Exporter crates log at `info`, dependencies (hyper, reqwest) only at `warn`.
pub const DEFAULT_LEVEL: &str =
    "warn,nordpool_exporter=info,nordpool_fetch=info,nordpool_prometheus=info";

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// `EnvFilter` directive. `RUST_LOG` overrides it when set.
    pub level: String,
    pub with_targets: bool,
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let use_color = cfg!(test) || std::io::stdout().is_terminal();
        Self {
            format: LoggerFormat::Text,
            level: DEFAULT_LEVEL.to_string(),
            with_targets: true,
            use_color,
        }
    }
}
