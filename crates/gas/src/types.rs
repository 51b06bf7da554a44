use crate::FeeError;
use alloy::primitives::{Bytes, U256};
use serde::{Deserialize, Serialize};

/// A request to estimate the fee for executing a call on a remote chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GasFeeRequest {
    /// The chain the call is sent from.
    pub source_chain: String,
    /// The chain the call is executed on.
    pub destination_chain: String,
    /// The estimated gas limit of the remote execution, as a decimal string.
    pub gas_limit: String,
    /// Multiplier applied by the service to its estimate.
    pub gas_multiplier: f64,
    /// Symbol of the token the fee is paid in.
    pub source_token_symbol: String,
    /// The calldata executed on the remote chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execute_data: Option<Bytes>,
}

impl GasFeeRequest {
    /// Create a new request without execute data.
    pub fn new(
        source_chain: impl Into<String>,
        destination_chain: impl Into<String>,
        gas_limit: u64,
        gas_multiplier: f64,
        source_token_symbol: impl Into<String>,
    ) -> Self {
        Self {
            source_chain: source_chain.into(),
            destination_chain: destination_chain.into(),
            gas_limit: gas_limit.to_string(),
            gas_multiplier,
            source_token_symbol: source_token_symbol.into(),
            execute_data: None,
        }
    }

    /// Attach the remote execute data.
    pub fn with_execute_data(mut self, execute_data: Bytes) -> Self {
        self.execute_data = Some(execute_data);
        self
    }
}

/// A response from the `gmp/estimateGasFee` endpoint.
///
/// The service answers with a bare JSON string holding the fee in wei, or
/// with a JSON object when detailed fees are requested. Only the former
/// counts as a quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum GasFeeResponse {
    /// A fee, in wei, as a decimal string.
    Fee(String),
    /// Any other response body.
    Other(serde_json::Value),
}

impl GasFeeResponse {
    /// Parse the quoted fee. Returns `None` if the response is not a fee
    /// string, and an error if the fee string is not a number.
    pub fn fee(&self) -> Option<Result<U256, FeeError>> {
        match self {
            Self::Fee(fee) => Some(
                U256::from_str_radix(fee.trim(), 10).map_err(|_| FeeError::InvalidFee(fee.clone())),
            ),
            Self::Other(_) => None,
        }
    }
}
