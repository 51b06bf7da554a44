//! Cross-chain gas estimation for interchain token deployments.
//!
//! Remote deployments pay for execution on the destination chain up front.
//! This crate asks the Axelar fee-estimation API for that price, and resolves
//! any failure to a usable fallback value so that callers always get a gas
//! value back.

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

/// The [`AxelarQueryClient`] fee-estimation client.
pub mod client;
pub use client::{AxelarEnvironment, AxelarQueryClient};

mod error;
pub use error::{FeeError, Result};

mod estimator;
pub use estimator::{
    FallbackGas, FallbackReason, GasEstimate, GasPolicy, GasSource, RemoteGasEstimator,
    DEFAULT_BUFFER_PERCENT, DEFAULT_FALLBACK_GAS, DEFAULT_FEE_TOKEN, DEFAULT_GAS_MULTIPLIER,
};

mod traits;
pub use traits::GasFeeEstimator;

/// Request and response types for the fee-estimation API.
pub mod types;
pub use types::{GasFeeRequest, GasFeeResponse};
