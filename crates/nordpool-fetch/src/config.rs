use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://www.svk.se/services/controlroom/v2/map/price";

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Price endpoint without the `ticks` parameter.
    pub endpoint: String,
    /// Whole-request deadline. `None` leaves the client default (no deadline).
    pub timeout: Option<Duration>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}
