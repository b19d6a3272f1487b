//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required identifier was not supplied. Detected before any request
    /// is sent; carries the parameter name.
    #[error("required parameter `{0}` is missing")]
    MissingParameter(&'static str),
    /// The API returned a status outside the operation's accepted set. The
    /// response body is logged, not carried here.
    #[error("unexpected response status {status}")]
    UnexpectedStatus { status: u16 },
    /// The underlying HTTP call failed (DNS, connection, I/O).
    #[error("request failed")]
    Transport(#[from] reqwest::Error),
    /// The response body did not parse as the expected shape.
    #[error("failed to decode response body")]
    Decode(#[from] serde_json::Error),
}
