//! Constants for the Base Sepolia testnet.

use crate::{ChainConfig, INTERCHAIN_TOKEN_FACTORY};
use alloy::primitives::Address;

/// Registry key for the chain.
pub const KEY: &str = "base-sepolia";
/// Display name for the chain.
pub const NAME: &str = "Base Sepolia";
/// Chain ID for Base Sepolia.
pub const CHAIN_ID: u64 = 84532;
/// Public RPC endpoint.
pub const RPC_URL: &str = "https://sepolia.base.org";
/// Interchain Token Factory address on Base Sepolia.
pub const FACTORY: Address = INTERCHAIN_TOKEN_FACTORY;
/// Base gas estimate for executing a remote deployment on this chain.
pub const BASE_GAS_ESTIMATE: u64 = 500_000;
/// Extra gas added on top of the base estimate.
pub const GAS_BUFFER: u64 = 100_000;

/// Chain configuration for Base Sepolia.
pub const CONFIG: ChainConfig =
    ChainConfig::new(NAME, CHAIN_ID, RPC_URL, FACTORY, BASE_GAS_ESTIMATE, GAS_BUFFER);
