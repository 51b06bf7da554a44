//! Interchain Token Factory client.
//!
//! Contains utilities for deploying new interchain tokens, and registering
//! existing ERC-20 tokens as canonical interchain tokens, through the
//! Interchain Token Factory contract.
//!
//! The entry point is [`InterchainTokenDeployer`], which drives a
//! [`ChainClient`] through the simulate, submit and confirm steps of each
//! flow. The call builders in [`call`] are usable on their own for callers
//! that manage submission themselves.

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

pub mod call;
pub use call::{ContractCall, EncodedCall};

mod deployer;
pub use deployer::{scale_supply, DeployerError, DeploymentOutcome, InterchainTokenDeployer};

mod erc20;
pub use erc20::{is_erc20_token, valid_erc20_token, TokenDetails};

mod events;
pub use events::{
    interchain_token_deployed_from_logs, interchain_token_deployed_from_receipt, EventLookup,
    TokenDeployed,
};

mod impls;
pub use impls::{ProviderClient, ProviderClientError};

mod network;
pub use network::{validate_client_network, NetworkError};

mod salt;
pub use salt::generate_salt;

mod traits;
pub use traits::ChainClient;
