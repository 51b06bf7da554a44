//! Common utilities for testing interchain token deployments.

pub mod fixtures;
pub mod mocks;
pub mod provider;

pub use its_constants::{arbitrum_sepolia, base_sepolia, optimism_sepolia};

/// Install a `tracing` subscriber that honours `RUST_LOG`. Safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
