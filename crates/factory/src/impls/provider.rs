use crate::{ChainClient, ContractCall, TokenDetails};
use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash},
    providers::{
        MulticallError, PendingTransactionBuilder, PendingTransactionError, Provider,
        WalletProvider,
    },
    rpc::types::{TransactionReceipt, TransactionRequest},
    sol_types::SolCall,
    transports::TransportError,
};
use its_bindings::IERC20Metadata;
use tracing::{debug, instrument};

/// Errors returned by [`ProviderClient`].
#[derive(Debug, thiserror::Error)]
pub enum ProviderClientError {
    /// RPC call failed.
    #[error("RPC error: {0}")]
    Rpc(#[from] TransportError),
    /// Waiting for the transaction failed.
    #[error("failed to await transaction: {0}")]
    PendingTransaction(#[from] PendingTransactionError),
    /// The batched metadata read failed.
    #[error("multicall failed: {0}")]
    Multicall(#[from] MulticallError),
}

/// A [`ChainClient`] backed by an alloy [`Provider`].
///
/// The provider must be configured to sign for `sender` (e.g. via
/// `ProviderBuilder::wallet()`), with fillers for gas, nonce and chain ID.
#[derive(Debug, Clone)]
pub struct ProviderClient<P> {
    provider: P,
    sender: Address,
}

impl<P> ProviderClient<P> {
    /// Create a new client sending transactions from `sender`.
    pub const fn new(provider: P, sender: Address) -> Self {
        Self { provider, sender }
    }

    /// Get a reference to the provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Get the address transactions are sent from.
    pub const fn sender(&self) -> Address {
        self.sender
    }

    /// Build the transaction request for a call.
    pub fn transaction_request<C: SolCall>(&self, call: &ContractCall<C>) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(self.sender)
            .with_to(call.address())
            .with_input(call.calldata())
            .with_value(call.value())
    }
}

impl<P: WalletProvider> ProviderClient<P> {
    /// Create a new client sending from the wallet's default signer.
    pub fn from_wallet(provider: P) -> Self {
        let sender = provider.default_signer_address();
        Self::new(provider, sender)
    }
}

impl<P: Provider> ChainClient for ProviderClient<P> {
    type Error = ProviderClientError;

    async fn chain_id(&self) -> Result<u64, Self::Error> {
        self.provider.get_chain_id().await.map_err(Into::into)
    }

    #[instrument(skip_all, fields(function = call.signature(), to = %call.address()))]
    async fn simulate<C>(&self, call: &ContractCall<C>) -> Result<Bytes, Self::Error>
    where
        C: SolCall + Sync,
    {
        let request = self.transaction_request(call);
        let output = self.provider.call(request).await?;
        debug!(output_len = output.len(), "simulation succeeded");
        Ok(output)
    }

    #[instrument(skip_all, fields(function = call.signature(), to = %call.address()))]
    async fn submit<C>(&self, call: &ContractCall<C>) -> Result<TxHash, Self::Error>
    where
        C: SolCall + Sync,
    {
        let request = self.transaction_request(call);
        let pending = self.provider.send_transaction(request).await?;
        Ok(*pending.tx_hash())
    }

    #[instrument(skip(self))]
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TransactionReceipt, Self::Error> {
        PendingTransactionBuilder::new(self.provider.root().clone(), tx_hash)
            .get_receipt()
            .await
            .map_err(Into::into)
    }

    #[instrument(skip(self))]
    async fn token_metadata(&self, token: Address) -> Result<TokenDetails, Self::Error> {
        let erc20 = IERC20Metadata::new(token, &self.provider);
        let (name, symbol, decimals) = self
            .provider
            .multicall()
            .add(erc20.name())
            .add(erc20.symbol())
            .add(erc20.decimals())
            .aggregate()
            .await?;
        Ok(TokenDetails { name, symbol, decimals })
    }
}
