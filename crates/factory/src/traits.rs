use crate::{ContractCall, TokenDetails};
use alloy::{
    primitives::{Address, Bytes, TxHash},
    rpc::types::TransactionReceipt,
    sol_types::SolCall,
};
use core::future::Future;

/// A trait for clients of the chain the factory is called on.
///
/// Implementors own the transport and the signer. [`ProviderClient`]
/// implements this for any alloy [`Provider`].
///
/// [`ProviderClient`]: crate::ProviderClient
/// [`Provider`]: alloy::providers::Provider
pub trait ChainClient {
    /// The error type returned by client operations.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Get the ID of the chain the client is connected to.
    fn chain_id(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Dry-run the call against the latest state, returning the raw output.
    /// Reverts are errors.
    fn simulate<C>(
        &self,
        call: &ContractCall<C>,
    ) -> impl Future<Output = Result<Bytes, Self::Error>> + Send
    where
        C: SolCall + Sync;

    /// Sign and broadcast the call as a transaction, returning its hash.
    fn submit<C>(
        &self,
        call: &ContractCall<C>,
    ) -> impl Future<Output = Result<TxHash, Self::Error>> + Send
    where
        C: SolCall + Sync;

    /// Wait for the transaction to be included, returning its receipt.
    fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
    ) -> impl Future<Output = Result<TransactionReceipt, Self::Error>> + Send;

    /// Read the ERC-20 metadata of the token at `token`.
    fn token_metadata(
        &self,
        token: Address,
    ) -> impl Future<Output = Result<TokenDetails, Self::Error>> + Send;
}
