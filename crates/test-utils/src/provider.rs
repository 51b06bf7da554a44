//! [`ProviderClient`]s over alloy's mocked transport.
use alloy::{
    network::EthereumWallet,
    primitives::{b256, Address},
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::local::PrivateKeySigner,
    transports::mock::Asserter,
};
use its_factory::ProviderClient;

/// Sender used by [`read_only_client`].
pub const READ_ONLY_SENDER: Address = Address::repeat_byte(0x5e);

/// The signer of [`wallet_client`].
pub fn test_signer() -> PrivateKeySigner {
    PrivateKeySigner::from_bytes(&b256!(
        "0x0000000000000000000000000000000000000000000000000000000000000001"
    ))
    .unwrap()
}

/// A client with a wallet and the recommended fillers, over a mocked
/// transport. Push responses to the returned [`Asserter`] in request order.
pub fn wallet_client(
    chain_id: u64,
) -> (ProviderClient<impl Provider + WalletProvider + Clone>, Asserter) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new()
        .with_chain_id(chain_id)
        .wallet(EthereumWallet::new(test_signer()))
        .connect_mocked_client(asserter.clone());
    (ProviderClient::from_wallet(provider), asserter)
}

/// A client without fillers, over a mocked transport. Every client call
/// maps to exactly one RPC request.
pub fn read_only_client() -> (ProviderClient<impl Provider + Clone>, Asserter) {
    let asserter = Asserter::new();
    let provider =
        ProviderBuilder::new().disable_recommended_fillers().connect_mocked_client(asserter.clone());
    (ProviderClient::new(provider, READ_ONLY_SENDER), asserter)
}
