use crate::ChainClient;
use its_constants::{ChainConfig, ChainRegistry};
use tracing::instrument;

/// Errors returned by [`validate_client_network`].
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The client is connected to a chain outside the registry.
    #[error("client network is not supported (chain ID: {chain_id})")]
    UnsupportedNetwork {
        /// The chain ID the client reported.
        chain_id: u64,
    },
    /// The client's chain ID could not be read.
    #[error("failed to read client chain ID: {0}")]
    ChainId(#[source] Box<dyn core::error::Error + Send + Sync>),
}

/// Check that the client is connected to a chain in the registry, returning
/// the chain's registry key and configuration.
#[instrument(skip_all)]
pub async fn validate_client_network<'a, C: ChainClient>(
    client: &C,
    registry: &'a ChainRegistry,
) -> Result<(&'static str, &'a ChainConfig), NetworkError> {
    let chain_id =
        client.chain_id().await.map_err(|err| NetworkError::ChainId(Box::new(err)))?;
    registry.by_chain_id(chain_id).ok_or(NetworkError::UnsupportedNetwork { chain_id })
}
