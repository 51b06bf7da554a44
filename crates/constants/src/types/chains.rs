use crate::{arbitrum_sepolia, base_sepolia, optimism_sepolia, ChainConfig, TESTNET_CHAINS};
use std::str::FromStr;

/// Error type for parsing a chain from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseChainError {
    /// The chain name is not supported.
    #[error("chain {name} is not supported. supported chains: {supported}")]
    ChainNotSupported {
        /// The name that was looked up.
        name: String,
        /// Comma-separated list of the supported chain names.
        supported: String,
    },
}

impl ParseChainError {
    /// Create a new [`ParseChainError::ChainNotSupported`], listing the given
    /// keys as the supported chains.
    pub fn not_supported<'a>(name: &str, keys: impl IntoIterator<Item = &'a str>) -> Self {
        Self::ChainNotSupported {
            name: name.to_string(),
            supported: keys.into_iter().collect::<Vec<_>>().join(", "),
        }
    }

    /// Get the chain name that failed to parse.
    pub fn name(&self) -> &str {
        match self {
            Self::ChainNotSupported { name, .. } => name,
        }
    }
}

/// Known chains on which the Interchain Token Factory is deployed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KnownChains {
    /// Base Sepolia testnet.
    BaseSepolia,
    /// Optimism Sepolia testnet.
    OptimismSepolia,
    /// Arbitrum Sepolia testnet.
    ArbitrumSepolia,
}

impl KnownChains {
    /// All known chains, in registry order.
    pub const ALL: [Self; 3] = [Self::BaseSepolia, Self::OptimismSepolia, Self::ArbitrumSepolia];

    /// Get the registry key for the chain.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::BaseSepolia => base_sepolia::KEY,
            Self::OptimismSepolia => optimism_sepolia::KEY,
            Self::ArbitrumSepolia => arbitrum_sepolia::KEY,
        }
    }

    /// Get the hard-coded configuration for the chain.
    pub const fn config(&self) -> ChainConfig {
        match self {
            Self::BaseSepolia => base_sepolia::CONFIG,
            Self::OptimismSepolia => optimism_sepolia::CONFIG,
            Self::ArbitrumSepolia => arbitrum_sepolia::CONFIG,
        }
    }

    /// Get the known chain with the given chain ID, if any.
    pub const fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            base_sepolia::CHAIN_ID => Some(Self::BaseSepolia),
            optimism_sepolia::CHAIN_ID => Some(Self::OptimismSepolia),
            arbitrum_sepolia::CHAIN_ID => Some(Self::ArbitrumSepolia),
            _ => None,
        }
    }
}

impl core::fmt::Display for KnownChains {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for KnownChains {
    type Err = ParseChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            base_sepolia::KEY => Ok(Self::BaseSepolia),
            optimism_sepolia::KEY => Ok(Self::OptimismSepolia),
            arbitrum_sepolia::KEY => Ok(Self::ArbitrumSepolia),
            _ => Err(ParseChainError::not_supported(s, TESTNET_CHAINS.iter().map(|(k, _)| *k))),
        }
    }
}
