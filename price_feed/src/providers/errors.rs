use thiserror::Error;

/// Errors that can occur during the creation of a source instance.
#[derive(Debug, Error)]
pub enum SourceInitError {
    /// The base URL could not be parsed.
    #[error("Invalid upstream base URL: {0}")]
    InvalidBaseUrl(String),

    /// The bearer token contains characters that are not valid in an HTTP
    /// header.
    #[error("Invalid bearer token format: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    /// Failed to build the underlying HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Errors that can occur within a `PriceSource` implementation.
///
/// Messages may carry the upstream failure reason but must never contain
/// the credential.
#[derive(Debug, Error)]
pub enum SourceError {
    /// An error during the request itself (network failure, timeout,
    /// malformed response body).
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream API answered with a non-success status.
    #[error("Upstream API error: {0}")]
    Api(String),

    /// An error during source configuration or initialization.
    #[error("Source initialization error: {0}")]
    Init(#[from] SourceInitError),
}
