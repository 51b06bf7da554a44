use crate::{
    call::{
        deploy_interchain_token_call, deploy_remote_canonical_interchain_token_call,
        deploy_remote_interchain_token_call, multicall_call,
        register_canonical_interchain_token_call,
    },
    generate_salt, interchain_token_deployed_from_receipt, valid_erc20_token, validate_client_network,
    ChainClient, ContractCall, EventLookup, NetworkError,
};
use alloy::{
    network::ReceiptResponse,
    primitives::{Address, TxHash, B256, U256},
    rpc::types::TransactionReceipt,
    sol_types::SolCall,
};
use futures_util::future::join_all;
use its_constants::{ChainRegistry, ParseChainError};
use its_gas::{GasFeeEstimator, RemoteGasEstimator};
use tracing::{debug, info, instrument};

/// Errors returned by [`InterchainTokenDeployer`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DeployerError {
    /// A destination chain is not in the registry.
    #[error(transparent)]
    Chain(#[from] ParseChainError),
    /// The client is connected to an unsupported network.
    #[error(transparent)]
    Network(#[from] NetworkError),
    /// The token does not answer ERC-20 metadata reads.
    #[error("token {token} not found on chain {chain}")]
    TokenNotFound {
        /// The token address.
        token: Address,
        /// The registry key of the chain the client is connected to.
        chain: &'static str,
    },
    /// Scaling the initial supply by the token decimals overflowed.
    #[error("initial supply {initial_supply} overflows with {decimals} decimals")]
    SupplyOverflow {
        /// The unscaled initial supply.
        initial_supply: U256,
        /// The token decimals.
        decimals: u8,
    },
    /// Simulation reverted or failed.
    #[error("simulation failed: {0}")]
    Simulation(#[source] Box<dyn core::error::Error + Send + Sync>),
    /// Transaction submission failed.
    #[error("failed to submit transaction: {0}")]
    Submission(#[source] Box<dyn core::error::Error + Send + Sync>),
    /// Waiting for the receipt failed.
    #[error("failed to get receipt: {0}")]
    Receipt(#[source] Box<dyn core::error::Error + Send + Sync>),
    /// The transaction was included but reverted.
    #[error("transaction {0} reverted")]
    Reverted(TxHash),
}

impl DeployerError {
    fn simulation<E: core::error::Error + Send + Sync + 'static>(err: E) -> Self {
        Self::Simulation(Box::new(err))
    }

    fn submission<E: core::error::Error + Send + Sync + 'static>(err: E) -> Self {
        Self::Submission(Box::new(err))
    }

    fn receipt<E: core::error::Error + Send + Sync + 'static>(err: E) -> Self {
        Self::Receipt(Box::new(err))
    }
}

/// The result of a confirmed token deployment.
#[derive(Debug)]
pub struct DeploymentOutcome {
    /// The transaction hash.
    pub tx_hash: TxHash,
    /// The transaction receipt.
    pub receipt: TransactionReceipt,
    /// The salt the deployment was made with.
    pub salt: B256,
    /// The `InterchainTokenDeployed` event, if the receipt carries one.
    pub event: EventLookup,
}

/// Scale a whole-token supply to the token's smallest unit. Returns `None`
/// on overflow.
pub fn scale_supply(initial_supply: U256, decimals: u8) -> Option<U256> {
    U256::from(10u64)
        .checked_pow(U256::from(decimals))
        .and_then(|unit| initial_supply.checked_mul(unit))
}

/// Deploys and registers interchain tokens.
///
/// Every flow checks that the client is connected to a chain in the
/// registry, simulates the call, submits it, and waits for the receipt.
/// Calls target the factory address the registry holds for the connected
/// chain. Remote deployments attach gas estimated by the
/// [`RemoteGasEstimator`], whose registry is the single list of supported
/// chains.
#[derive(Debug, Clone)]
pub struct InterchainTokenDeployer<C, E> {
    client: C,
    gas: RemoteGasEstimator<E>,
}

impl<C, E> InterchainTokenDeployer<C, E> {
    /// Create a new deployer.
    pub const fn new(client: C, gas: RemoteGasEstimator<E>) -> Self {
        Self { client, gas }
    }

    /// Create a new deployer over the testnet registry, with the default gas
    /// policy.
    pub fn testnet(client: C, estimator: E) -> Self {
        Self::new(client, RemoteGasEstimator::testnet(estimator))
    }

    /// Get a reference to the chain client.
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Get a reference to the remote gas estimator.
    pub const fn gas(&self) -> &RemoteGasEstimator<E> {
        &self.gas
    }

    /// Get a reference to the chain registry.
    pub const fn registry(&self) -> &ChainRegistry {
        self.gas.registry()
    }

    /// Resolve the destinations to their registry keys, in order, dropping
    /// `current` and repeated chains.
    fn remote_destinations<S: AsRef<str>>(
        &self,
        current: &str,
        destination_chains: &[S],
    ) -> Result<Vec<&'static str>, ParseChainError> {
        let mut keys = Vec::with_capacity(destination_chains.len());
        for chain in destination_chains {
            let key = self.registry().key_for(chain.as_ref())?;
            if key != current && !keys.contains(&key) {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}

impl<C, E> InterchainTokenDeployer<C, E>
where
    C: ChainClient,
    E: GasFeeEstimator,
{
    /// Simulate, submit and confirm a call.
    async fn execute<Call: SolCall + Sync>(
        &self,
        call: &ContractCall<Call>,
    ) -> Result<(TxHash, TransactionReceipt), DeployerError> {
        debug!(function = call.signature(), value = %call.value(), "built call");

        self.client.simulate(call).await.map_err(DeployerError::simulation)?;
        let tx_hash = self.client.submit(call).await.map_err(DeployerError::submission)?;
        info!(%tx_hash, "submitted transaction");

        let receipt =
            self.client.wait_for_receipt(tx_hash).await.map_err(DeployerError::receipt)?;
        if !ReceiptResponse::status(&receipt) {
            return Err(DeployerError::Reverted(tx_hash));
        }
        Ok((tx_hash, receipt))
    }

    async fn execute_deployment<Call: SolCall + Sync>(
        &self,
        call: &ContractCall<Call>,
        salt: B256,
    ) -> Result<DeploymentOutcome, DeployerError> {
        let (tx_hash, receipt) = self.execute(call).await?;
        let event = interchain_token_deployed_from_receipt(&receipt, salt);
        Ok(DeploymentOutcome { tx_hash, receipt, salt, event })
    }

    /// Estimate the gas for one remote call per destination, concurrently.
    /// Results are in destination order.
    async fn estimate_remote_calls<Call, F>(
        &self,
        source: &str,
        destinations: &[&'static str],
        build: F,
    ) -> Vec<ContractCall<Call>>
    where
        Call: SolCall,
        F: Fn(&'static str, U256) -> ContractCall<Call>,
    {
        let build = &build;
        join_all(destinations.iter().map(|&destination| async move {
            let execute_data = build(destination, U256::ZERO).calldata();
            let gas = self
                .gas
                .estimate_remote_deployment_gas(source, destination, &execute_data)
                .await;
            build(destination, gas.value())
        }))
        .await
    }

    /// Deploy a new interchain token on the connected chain.
    ///
    /// `initial_supply` is passed through unscaled, in the token's smallest
    /// unit.
    #[instrument(skip_all, fields(name = %name, symbol = %symbol, decimals = decimals))]
    pub async fn deploy_interchain_token(
        &self,
        name: &str,
        symbol: &str,
        decimals: u8,
        initial_supply: U256,
        minter: Address,
    ) -> Result<DeploymentOutcome, DeployerError> {
        let (_, config) = validate_client_network(&self.client, self.registry()).await?;

        let salt = generate_salt();
        let call = deploy_interchain_token_call(salt, name, symbol, decimals, initial_supply, minter)
            .with_address(config.contract_address());
        self.execute_deployment(&call, salt).await
    }

    /// Deploy the interchain token created with `salt` on a remote chain,
    /// attaching `gas_value` for the remote execution.
    #[instrument(skip_all, fields(salt = %salt, destination_chain = %destination_chain))]
    pub async fn deploy_remote_interchain_token(
        &self,
        salt: B256,
        destination_chain: &str,
        gas_value: U256,
    ) -> Result<DeploymentOutcome, DeployerError> {
        let (_, config) = validate_client_network(&self.client, self.registry()).await?;
        let destination = self.registry().key_for(destination_chain)?;

        let call = deploy_remote_interchain_token_call(salt, destination, gas_value)
            .with_address(config.contract_address());
        self.execute_deployment(&call, salt).await
    }

    /// Deploy a new interchain token on the connected chain and on each
    /// destination chain, in one multicall transaction.
    ///
    /// `initial_supply` is in whole tokens, and is scaled by `decimals`.
    /// Destinations naming the connected chain, and repeated destinations, are
    /// dropped.
    #[instrument(skip_all, fields(
        name = %name,
        symbol = %symbol,
        decimals = decimals,
        destinations = destination_chains.len(),
    ))]
    pub async fn deploy_interchain_token_multicall<S: AsRef<str>>(
        &self,
        name: &str,
        symbol: &str,
        decimals: u8,
        initial_supply: U256,
        minter: Address,
        destination_chains: &[S],
    ) -> Result<DeploymentOutcome, DeployerError> {
        let (source, config) = validate_client_network(&self.client, self.registry()).await?;
        let destinations = self.remote_destinations(source, destination_chains)?;
        let supply = scale_supply(initial_supply, decimals)
            .ok_or(DeployerError::SupplyOverflow { initial_supply, decimals })?;

        let salt = generate_salt();
        let local = deploy_interchain_token_call(salt, name, symbol, decimals, supply, minter);
        let remotes = self
            .estimate_remote_calls(source, &destinations, |destination, gas| {
                deploy_remote_interchain_token_call(salt, destination, gas)
            })
            .await;

        let batch = multicall_call(
            core::iter::once(local.encode()).chain(remotes.iter().map(ContractCall::encode)),
        )
        .with_address(config.contract_address());
        self.execute_deployment(&batch, salt).await
    }

    /// Register an existing ERC-20 token as a canonical interchain token.
    ///
    /// Fails with [`DeployerError::TokenNotFound`] if the token does not
    /// answer ERC-20 metadata reads.
    #[instrument(skip_all, fields(token = %token))]
    pub async fn register_canonical_interchain_token(
        &self,
        token: Address,
    ) -> Result<TxHash, DeployerError> {
        let (chain, config) = validate_client_network(&self.client, self.registry()).await?;
        self.ensure_token(token, chain).await?;

        let call = register_canonical_interchain_token_call(token)
            .with_address(config.contract_address());
        self.execute(&call).await.map(|(tx_hash, _)| tx_hash)
    }

    /// Deploy a registered canonical token on a remote chain, attaching
    /// `gas_value` for the remote execution.
    #[instrument(skip_all, fields(token = %token, destination_chain = %destination_chain))]
    pub async fn deploy_remote_canonical_interchain_token(
        &self,
        token: Address,
        destination_chain: &str,
        gas_value: U256,
    ) -> Result<TxHash, DeployerError> {
        let (_, config) = validate_client_network(&self.client, self.registry()).await?;
        let destination = self.registry().key_for(destination_chain)?;

        let call = deploy_remote_canonical_interchain_token_call(token, destination, gas_value)
            .with_address(config.contract_address());
        self.execute(&call).await.map(|(tx_hash, _)| tx_hash)
    }

    /// Register an existing ERC-20 token as a canonical interchain token and
    /// deploy it on each destination chain, in one multicall transaction.
    #[instrument(skip_all, fields(token = %token, destinations = destination_chains.len()))]
    pub async fn register_and_deploy_canonical_multicall<S: AsRef<str>>(
        &self,
        token: Address,
        destination_chains: &[S],
    ) -> Result<TxHash, DeployerError> {
        let (source, config) = validate_client_network(&self.client, self.registry()).await?;
        let destinations = self.remote_destinations(source, destination_chains)?;
        self.ensure_token(token, source).await?;

        let register = register_canonical_interchain_token_call(token);
        let remotes = self
            .estimate_remote_calls(source, &destinations, |destination, gas| {
                deploy_remote_canonical_interchain_token_call(token, destination, gas)
            })
            .await;

        let batch = multicall_call(
            core::iter::once(register.encode()).chain(remotes.iter().map(ContractCall::encode)),
        )
        .with_address(config.contract_address());
        self.execute(&batch).await.map(|(tx_hash, _)| tx_hash)
    }

    async fn ensure_token(&self, token: Address, chain: &'static str) -> Result<(), DeployerError> {
        match valid_erc20_token(&self.client, token).await {
            Some(details) => {
                debug!(name = %details.name, symbol = %details.symbol, "token found");
                Ok(())
            }
            None => Err(DeployerError::TokenNotFound { token, chain }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn scales_supply() {
        assert_eq!(
            scale_supply(U256::from(10_000_000u64), 18),
            Some(U256::from(10_000_000u64) * U256::from(10u64).pow(U256::from(18)))
        );
        assert_eq!(scale_supply(U256::from(5), 0), Some(U256::from(5)));
        // 10^77 < 2^256 < 10^78
        assert_eq!(scale_supply(U256::from(1), 77), Some(U256::from(10u64).pow(U256::from(77))));
        assert_eq!(scale_supply(U256::from(1), 78), None);
        assert_eq!(scale_supply(U256::from(2), 77), None);
        assert_eq!(scale_supply(U256::MAX, 1), None);
    }

    #[test]
    fn error_display() {
        let err = DeployerError::TokenNotFound { token: Address::ZERO, chain: "base-sepolia" };
        assert_eq!(
            err.to_string(),
            "token 0x0000000000000000000000000000000000000000 not found on chain base-sepolia"
        );
        let err = DeployerError::from(NetworkError::UnsupportedNetwork { chain_id: 1 });
        assert_eq!(err.to_string(), "client network is not supported (chain ID: 1)");
    }

    proptest! {
        #[test]
        fn scaling_multiplies_by_unit(supply in any::<u64>(), decimals in 0u8..=18) {
            let scaled = scale_supply(U256::from(supply), decimals).unwrap();
            prop_assert_eq!(scaled / U256::from(10u64).pow(U256::from(decimals)), U256::from(supply));
        }
    }
}
