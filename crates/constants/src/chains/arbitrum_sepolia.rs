//! Constants for the Arbitrum Sepolia testnet.

use crate::{ChainConfig, INTERCHAIN_TOKEN_FACTORY};
use alloy::primitives::Address;

/// Registry key for the chain.
pub const KEY: &str = "arbitrum-sepolia";
/// Display name for the chain.
pub const NAME: &str = "Arbitrum Sepolia";
/// Chain ID for Arbitrum Sepolia.
pub const CHAIN_ID: u64 = 421614;
/// Public RPC endpoint.
pub const RPC_URL: &str = "https://sepolia-rollup.arbitrum.io/rpc";
/// Interchain Token Factory address on Arbitrum Sepolia.
pub const FACTORY: Address = INTERCHAIN_TOKEN_FACTORY;
/// Base gas estimate for executing a remote deployment on this chain.
pub const BASE_GAS_ESTIMATE: u64 = 500_000;
/// Extra gas added on top of the base estimate.
pub const GAS_BUFFER: u64 = 100_000;

/// Chain configuration for Arbitrum Sepolia.
pub const CONFIG: ChainConfig =
    ChainConfig::new(NAME, CHAIN_ID, RPC_URL, FACTORY, BASE_GAS_ESTIMATE, GAS_BUFFER);
