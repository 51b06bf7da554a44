use crate::ChainClient;
use alloy::primitives::Address;
use tracing::{debug, instrument};

/// ERC-20 metadata of a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenDetails {
    /// The token name.
    pub name: String,
    /// The token symbol.
    pub symbol: String,
    /// The token decimals.
    pub decimals: u8,
}

/// Read the token's ERC-20 metadata. Returns `None` if any read fails.
///
/// This is a heuristic. A contract answering `name`, `symbol` and
/// `decimals` is not necessarily a conforming ERC-20.
#[instrument(skip(client))]
pub async fn valid_erc20_token<C: ChainClient>(client: &C, token: Address) -> Option<TokenDetails> {
    client
        .token_metadata(token)
        .await
        .inspect_err(|err| debug!(%err, "token metadata unavailable"))
        .ok()
}

/// True if the contract at `token` answers the ERC-20 metadata reads.
pub async fn is_erc20_token<C: ChainClient>(client: &C, token: Address) -> bool {
    valid_erc20_token(client, token).await.is_some()
}
