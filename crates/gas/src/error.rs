/// Result type for [`AxelarQueryClient`] operations.
///
/// [`AxelarQueryClient`]: crate::client::AxelarQueryClient
pub type Result<T> = std::result::Result<T, FeeError>;

/// Errors returned by the [`AxelarQueryClient`].
///
/// [`AxelarQueryClient`]: crate::client::AxelarQueryClient
#[derive(thiserror::Error, Debug)]
pub enum FeeError {
    /// The fee-estimation endpoint was not found.
    #[error("Fee estimation endpoint not found")]
    NotFound,
    /// The fee-estimation service is rate limiting this client.
    #[error("Fee estimation request was rate limited")]
    RateLimited,
    /// The service rejected the request, e.g. for an unknown chain name.
    #[error("Fee estimation request rejected: {0}")]
    Rejected(reqwest::Error),

    /// The service returned a fee that is not a decimal integer.
    #[error("Fee estimation service returned an invalid fee: {0}")]
    InvalidFee(String),

    /// An error occurred while parsing the URL.
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// An error occurred while contacting the Axelar query API.
    #[error("Error contacting Axelar query API: {0}")]
    Reqwest(reqwest::Error),
}

impl From<reqwest::Error> for FeeError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(reqwest::StatusCode::NOT_FOUND) => FeeError::NotFound,
            Some(reqwest::StatusCode::TOO_MANY_REQUESTS) => FeeError::RateLimited,
            Some(status) if status.is_client_error() => FeeError::Rejected(err),
            _ => FeeError::Reqwest(err),
        }
    }
}
