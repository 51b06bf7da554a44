//! Integration tests for canonical token registration and remote deployment.

use alloy::{
    primitives::{Address, U256},
    sol_types::SolCall,
};
use its_bindings::InterchainTokenFactory::{
    deployRemoteCanonicalInterchainTokenCall, multicallCall, registerCanonicalInterchainTokenCall,
};
use its_constants::{arbitrum_sepolia, base_sepolia, optimism_sepolia};
use its_factory::{
    is_erc20_token, valid_erc20_token, DeployerError, InterchainTokenDeployer, TokenDetails,
};
use its_test_utils::mocks::{MockChainClient, MockFeeEstimator};

const TOKEN: Address = Address::repeat_byte(0x70);

fn usdc() -> TokenDetails {
    TokenDetails { name: "USD Coin".into(), symbol: "USDC".into(), decimals: 6 }
}

fn client_with_token() -> MockChainClient {
    MockChainClient::new(base_sepolia::CHAIN_ID).with_token(TOKEN, usdc())
}

// =============================================================================
// ERC-20 probe
// =============================================================================

#[tokio::test]
async fn probes_token_metadata() {
    let client = client_with_token();
    assert_eq!(valid_erc20_token(&client, TOKEN).await, Some(usdc()));
    assert!(is_erc20_token(&client, TOKEN).await);

    assert_eq!(valid_erc20_token(&client, Address::ZERO).await, None);
    assert!(!is_erc20_token(&client, Address::ZERO).await);
}

// =============================================================================
// register_canonical_interchain_token
// =============================================================================

#[tokio::test]
async fn registers_token() {
    let client = client_with_token();
    let deployer = InterchainTokenDeployer::testnet(client.clone(), MockFeeEstimator::quoting(1));

    let tx_hash = deployer.register_canonical_interchain_token(TOKEN).await.unwrap();
    assert_eq!(tx_hash, client.tx_hash());
    assert_eq!(client.metadata_reads(), [TOKEN]);

    let submitted = &client.submitted()[0];
    assert_eq!(submitted.value, U256::ZERO);
    let call: registerCanonicalInterchainTokenCall = submitted.decode();
    assert_eq!(call.tokenAddress, TOKEN);
}

#[tokio::test]
async fn rejects_non_token_before_simulation() {
    let client = MockChainClient::new(arbitrum_sepolia::CHAIN_ID);
    let deployer = InterchainTokenDeployer::testnet(client.clone(), MockFeeEstimator::quoting(1));

    let err = deployer.register_canonical_interchain_token(TOKEN).await.unwrap_err();
    assert!(matches!(
        err,
        DeployerError::TokenNotFound { token, chain: "arbitrum-sepolia" } if token == TOKEN
    ));
    assert!(client.simulated().is_empty());
    assert!(client.submitted().is_empty());
}

#[tokio::test]
async fn reverted_registration_is_an_error() {
    let client = client_with_token().with_reverting_receipts();
    let deployer = InterchainTokenDeployer::testnet(client.clone(), MockFeeEstimator::quoting(1));

    let err = deployer.register_canonical_interchain_token(TOKEN).await.unwrap_err();
    assert!(matches!(err, DeployerError::Reverted(_)));
}

// =============================================================================
// deploy_remote_canonical_interchain_token
// =============================================================================

#[tokio::test]
async fn deploys_remote_canonical_token() {
    let client = client_with_token();
    let deployer = InterchainTokenDeployer::testnet(client.clone(), MockFeeEstimator::quoting(1));
    let gas = U256::from(123_456);

    let tx_hash = deployer
        .deploy_remote_canonical_interchain_token(TOKEN, "arbitrum-sepolia", gas)
        .await
        .unwrap();
    assert_eq!(tx_hash, client.tx_hash());

    let submitted = &client.submitted()[0];
    assert_eq!(submitted.value, gas);
    let call: deployRemoteCanonicalInterchainTokenCall = submitted.decode();
    assert_eq!(call.originalTokenAddress, TOKEN);
    assert_eq!(call.destinationChain, "arbitrum-sepolia");
    assert_eq!(call.gasValue, gas);
}

#[tokio::test]
async fn remote_canonical_rejects_unknown_destination() {
    let client = client_with_token();
    let deployer = InterchainTokenDeployer::testnet(client.clone(), MockFeeEstimator::quoting(1));

    let err = deployer
        .deploy_remote_canonical_interchain_token(TOKEN, "polygon-amoy", U256::from(1))
        .await
        .unwrap_err();
    assert!(matches!(err, DeployerError::Chain(_)));
    assert!(client.simulated().is_empty());
}

#[tokio::test]
async fn remote_canonical_rejects_unsupported_network() {
    let client = MockChainClient::new(11_155_111).with_token(TOKEN, usdc());
    let deployer = InterchainTokenDeployer::testnet(client.clone(), MockFeeEstimator::quoting(1));

    let err = deployer
        .deploy_remote_canonical_interchain_token(TOKEN, "base-sepolia", U256::from(1))
        .await
        .unwrap_err();
    assert!(matches!(err, DeployerError::Network(_)));
}

// =============================================================================
// register_and_deploy_canonical_multicall
// =============================================================================

#[tokio::test]
async fn registers_and_deploys_in_one_transaction() {
    let client = client_with_token();
    let estimator = MockFeeEstimator::quoting(0)
        .with_quote(optimism_sepolia::KEY, 11)
        .with_quote(arbitrum_sepolia::KEY, 22);
    let deployer = InterchainTokenDeployer::testnet(client.clone(), estimator.clone());

    let tx_hash = deployer
        .register_and_deploy_canonical_multicall(
            TOKEN,
            &["base-sepolia", "optimism-sepolia", "arbitrum-sepolia"],
        )
        .await
        .unwrap();
    assert_eq!(tx_hash, client.tx_hash());

    let submitted = client.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].value, U256::from(33));

    let multicall: multicallCall = submitted[0].decode();
    assert_eq!(multicall.data.len(), 3);

    let register = registerCanonicalInterchainTokenCall::abi_decode(&multicall.data[0]).unwrap();
    assert_eq!(register.tokenAddress, TOKEN);

    let remotes: Vec<_> = multicall.data[1..]
        .iter()
        .map(|data| deployRemoteCanonicalInterchainTokenCall::abi_decode(data).unwrap())
        .collect();
    assert_eq!(remotes[0].destinationChain, "optimism-sepolia");
    assert_eq!(remotes[0].gasValue, U256::from(11));
    assert_eq!(remotes[1].destinationChain, "arbitrum-sepolia");
    assert_eq!(remotes[1].gasValue, U256::from(22));
    assert!(remotes.iter().all(|call| call.originalTokenAddress == TOKEN));

    // Estimates use the gas-less remote call as execute data.
    for request in estimator.requests() {
        let data = request.execute_data.unwrap();
        let remote = deployRemoteCanonicalInterchainTokenCall::abi_decode(&data).unwrap();
        assert_eq!(remote.gasValue, U256::ZERO);
        assert_eq!(remote.destinationChain, request.destination_chain);
    }
}

#[tokio::test]
async fn canonical_multicall_requires_a_token() {
    let client = MockChainClient::new(base_sepolia::CHAIN_ID);
    let estimator = MockFeeEstimator::quoting(1);
    let deployer = InterchainTokenDeployer::testnet(client.clone(), estimator.clone());

    let err = deployer
        .register_and_deploy_canonical_multicall(TOKEN, &["optimism-sepolia"])
        .await
        .unwrap_err();
    assert!(matches!(err, DeployerError::TokenNotFound { chain: "base-sepolia", .. }));
    assert!(estimator.requests().is_empty());
    assert!(client.submitted().is_empty());
}
