mod chains;
pub use chains::{KnownChains, ParseChainError};

mod error;
pub use error::ConfigError;

mod registry;
pub use registry::ChainRegistry;

use alloy::primitives::Address;
use std::str::FromStr;

/// Configuration for a single chain on which the Interchain Token Factory is
/// deployed.
///
/// These are constants which may vary between chains, and are used to decide
/// which contract to call and how much gas to request for remote executions
/// targeting the chain.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    /// Human-readable chain name.
    name: &'static str,
    /// Chain ID.
    chain_id: u64,
    /// Public RPC endpoint.
    rpc_url: &'static str,
    /// Address of the Interchain Token Factory on this chain.
    contract_address: Address,
    /// Base gas estimate for remote executions targeting this chain.
    base_gas_estimate: u64,
    /// Extra gas to add on top of the base estimate.
    gas_buffer: u64,
}

impl core::fmt::Display for ChainConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (chain ID: {})", self.name, self.chain_id)
    }
}

impl ChainConfig {
    /// Create a new chain configuration.
    pub const fn new(
        name: &'static str,
        chain_id: u64,
        rpc_url: &'static str,
        contract_address: Address,
        base_gas_estimate: u64,
        gas_buffer: u64,
    ) -> Self {
        Self { name, chain_id, rpc_url, contract_address, base_gas_estimate, gas_buffer }
    }

    /// Get the human-readable chain name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the chain ID.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the public RPC endpoint.
    pub const fn rpc_url(&self) -> &'static str {
        self.rpc_url
    }

    /// Get the public RPC endpoint, parsed as a URL.
    pub fn parsed_rpc_url(&self) -> Result<url::Url, url::ParseError> {
        self.rpc_url.parse()
    }

    /// Get the Interchain Token Factory address.
    pub const fn contract_address(&self) -> Address {
        self.contract_address
    }

    /// Get the base gas estimate for remote executions.
    pub const fn base_gas_estimate(&self) -> u64 {
        self.base_gas_estimate
    }

    /// Get the gas buffer.
    pub const fn gas_buffer(&self) -> u64 {
        self.gas_buffer
    }

    /// Get the base gas estimate plus the gas buffer.
    pub const fn buffered_gas_estimate(&self) -> u64 {
        self.base_gas_estimate.saturating_add(self.gas_buffer)
    }
}

impl FromStr for ChainConfig {
    type Err = ParseChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chain: KnownChains = s.parse()?;
        Ok(chain.config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base_sepolia;

    #[test]
    fn parse_chain_config() {
        let config: ChainConfig = "Base-Sepolia".parse().unwrap();
        assert_eq!(config, base_sepolia::CONFIG);
        assert_eq!(config.to_string(), "Base Sepolia (chain ID: 84532)");
    }

    #[test]
    fn buffered_estimate() {
        assert_eq!(base_sepolia::CONFIG.buffered_gas_estimate(), 600_000);
    }

    #[test]
    fn rpc_urls_parse() {
        for (_, config) in crate::TESTNET_CHAINS {
            let url = config.parsed_rpc_url().unwrap();
            assert_eq!(url.scheme(), "https");
            assert_eq!(url.as_str().trim_end_matches('/'), config.rpc_url());
        }
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(base_sepolia::CONFIG).unwrap();
        assert_eq!(json["chainId"], 84532);
        assert_eq!(json["baseGasEstimate"], 500_000);
        assert_eq!(json["rpcUrl"], "https://sepolia.base.org");
    }
}
