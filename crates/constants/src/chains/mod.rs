use crate::ChainConfig;

/// Arbitrum Sepolia testnet constants.
pub mod arbitrum_sepolia;

/// Base Sepolia testnet constants.
pub mod base_sepolia;

/// Optimism Sepolia testnet constants.
pub mod optimism_sepolia;

/// The built-in testnet registry entries, keyed by lowercase chain name.
///
/// Ordering is significant: it is the order in which supported chains are
/// listed in error messages.
pub const TESTNET_CHAINS: [(&str, ChainConfig); 3] = [
    (base_sepolia::KEY, base_sepolia::CONFIG),
    (optimism_sepolia::KEY, optimism_sepolia::CONFIG),
    (arbitrum_sepolia::KEY, arbitrum_sepolia::CONFIG),
];
