use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to get prices: {0}")]
    Network(#[source] reqwest::Error),

    #[error("failed to read prices: {0}")]
    Read(#[source] reqwest::Error),

    #[error("failed to unmarshal prices: {0}")]
    Decode(#[from] serde_json::Error),
}
