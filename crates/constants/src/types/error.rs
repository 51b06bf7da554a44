/// Error type for the [`crate::config`] module. Captures errors related to
/// loading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error loading from environment variable
    #[error("missing or non-unicode environment variable: {0}")]
    Var(String),
    /// Error parsing an integer environment variable
    #[error("failed to parse environment variable: {0}")]
    Parse(#[from] std::num::ParseIntError),
    /// Error parsing a decimal environment variable
    #[error("failed to parse decimal environment variable: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
    /// Error parsing a URL environment variable
    #[error("failed to parse URL: {0}")]
    Url(#[from] url::ParseError),
    /// Error parsing an address environment variable
    #[error("failed to parse address: {0}")]
    Address(#[from] alloy::primitives::hex::FromHexError),
    /// The environment variable holds a value outside the accepted set.
    #[error("invalid value for environment variable {key}: {value}")]
    Invalid {
        /// The environment variable.
        key: String,
        /// The rejected value.
        value: String,
    },
}

impl ConfigError {
    /// Missing or non-unicode env var.
    pub fn missing(s: &str) -> Self {
        ConfigError::Var(s.to_string())
    }

    /// Env var holds an unaccepted value.
    pub fn invalid(key: &str, value: &str) -> Self {
        ConfigError::Invalid { key: key.to_string(), value: value.to_string() }
    }
}
