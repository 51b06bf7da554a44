//! Constants for the Optimism Sepolia testnet.

use crate::{ChainConfig, INTERCHAIN_TOKEN_FACTORY};
use alloy::primitives::Address;

/// Registry key for the chain.
pub const KEY: &str = "optimism-sepolia";
/// Display name for the chain.
pub const NAME: &str = "Optimism Sepolia";
/// Chain ID for Optimism Sepolia.
pub const CHAIN_ID: u64 = 11155420;
/// Public RPC endpoint.
pub const RPC_URL: &str = "https://sepolia.optimism.io";
/// Interchain Token Factory address on Optimism Sepolia.
pub const FACTORY: Address = INTERCHAIN_TOKEN_FACTORY;
/// Base gas estimate for executing a remote deployment on this chain.
pub const BASE_GAS_ESTIMATE: u64 = 500_000;
/// Extra gas added on top of the base estimate.
pub const GAS_BUFFER: u64 = 100_000;

/// Chain configuration for Optimism Sepolia.
pub const CONFIG: ChainConfig =
    ChainConfig::new(NAME, CHAIN_ID, RPC_URL, FACTORY, BASE_GAS_ESTIMATE, GAS_BUFFER);
