//! Contract bindings for the Interchain Token Factory.
//!
//! The factory ABI is fixed and external. These bindings cover the functions
//! used to deploy and register interchain tokens, the `multicall` batching
//! entry point, and the `InterchainTokenDeployed` event. ERC-20 metadata
//! bindings are included for token introspection.
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
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod bindings;
pub use bindings::{InterchainTokenFactory, IERC20Metadata};

use alloy::primitives::Address;

/// Placeholder minter used by remote deployments. The remote token has no
/// minter of its own.
pub const NO_MINTER: Address = Address::ZERO;

/// Placeholder original chain name for remote deployments. An empty string
/// means "the chain the factory call is made on".
pub const CURRENT_CHAIN: &str = "";
