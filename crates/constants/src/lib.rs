//! Interchain token system constants.
//!
//! This crate contains the chain registry for the networks on which the
//! Interchain Token Factory is deployed, including chain ids, RPC URLs,
//! factory addresses and gas constants, plus helpers for loading
//! configuration from the environment.
//!

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod chains;
pub use chains::{arbitrum_sepolia, base_sepolia, optimism_sepolia, TESTNET_CHAINS};

pub mod config;

mod types;
pub use types::{ChainConfig, ChainRegistry, ConfigError, KnownChains, ParseChainError};

use alloy::primitives::{address, Address};

/// Address of the Interchain Token Factory proxy. The factory is deployed at
/// the same address on every supported testnet.
pub const INTERCHAIN_TOKEN_FACTORY: Address =
    address!("0x83a93500d23Fbc3e82B410aD07A6a9F7A0670D66");
