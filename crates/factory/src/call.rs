//! Call builders for the Interchain Token Factory.
//!
//! These are pure functions. They do no validation and no I/O, and every
//! call they build targets [`INTERCHAIN_TOKEN_FACTORY`]. Use
//! [`ContractCall::with_address`] to target the factory of another registry
//! entry.

use alloy::{
    primitives::{Address, Bytes, B256, U256},
    sol_types::SolCall,
};
use its_bindings::{InterchainTokenFactory as Factory, CURRENT_CHAIN, NO_MINTER};
use its_constants::INTERCHAIN_TOKEN_FACTORY;

/// A typed call to a contract function, with the native value to attach.
///
/// The function and its ABI are fixed by the call type `C`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall<C> {
    address: Address,
    call: C,
    value: U256,
}

impl<C> ContractCall<C> {
    /// Create a new call with no attached value.
    pub const fn new(address: Address, call: C) -> Self {
        Self { address, call, value: U256::ZERO }
    }

    /// Set the native value to attach to the call.
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Target a different contract address.
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    /// Get the target contract address.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Get the call arguments.
    pub const fn call(&self) -> &C {
        &self.call
    }

    /// Get the native value attached to the call.
    pub const fn value(&self) -> U256 {
        self.value
    }
}

impl<C: SolCall> ContractCall<C> {
    /// The signature of the called function.
    pub const fn signature(&self) -> &'static str {
        C::SIGNATURE
    }

    /// ABI-encode the call, selector included.
    pub fn calldata(&self) -> Bytes {
        self.call.abi_encode().into()
    }

    /// Encode the call for batching in a multicall.
    pub fn encode(&self) -> EncodedCall {
        EncodedCall { calldata: self.calldata(), value: self.value }
    }
}

/// An ABI-encoded call and the native value it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCall {
    /// The encoded calldata.
    pub calldata: Bytes,
    /// The native value attached to the call.
    pub value: U256,
}

impl<C: SolCall> From<ContractCall<C>> for EncodedCall {
    fn from(call: ContractCall<C>) -> Self {
        call.encode()
    }
}

/// Build a call deploying a new interchain token on the current chain.
///
/// `initial_supply` is in the token's smallest unit, and is minted to the
/// caller.
pub fn deploy_interchain_token_call(
    salt: B256,
    name: impl Into<String>,
    symbol: impl Into<String>,
    decimals: u8,
    initial_supply: U256,
    minter: Address,
) -> ContractCall<Factory::deployInterchainTokenCall> {
    ContractCall::new(
        INTERCHAIN_TOKEN_FACTORY,
        Factory::deployInterchainTokenCall {
            salt,
            name: name.into(),
            symbol: symbol.into(),
            decimals,
            initialSupply: initial_supply,
            minter,
        },
    )
}

/// Build a call deploying the interchain token with the given salt on a
/// remote chain.
///
/// The original chain is always the current chain, and the remote token has
/// no minter. `gas_value` is attached as the call value.
pub fn deploy_remote_interchain_token_call(
    salt: B256,
    destination_chain: impl Into<String>,
    gas_value: U256,
) -> ContractCall<Factory::deployRemoteInterchainTokenCall> {
    ContractCall::new(
        INTERCHAIN_TOKEN_FACTORY,
        Factory::deployRemoteInterchainTokenCall {
            originalChainName: CURRENT_CHAIN.to_string(),
            salt,
            minter: NO_MINTER,
            destinationChain: destination_chain.into(),
            gasValue: gas_value,
        },
    )
    .with_value(gas_value)
}

/// Build a call registering an existing ERC-20 token as a canonical
/// interchain token.
pub fn register_canonical_interchain_token_call(
    token_address: Address,
) -> ContractCall<Factory::registerCanonicalInterchainTokenCall> {
    ContractCall::new(
        INTERCHAIN_TOKEN_FACTORY,
        Factory::registerCanonicalInterchainTokenCall { tokenAddress: token_address },
    )
}

/// Build a call deploying a canonical interchain token on a remote chain.
/// `gas_value` is attached as the call value.
pub fn deploy_remote_canonical_interchain_token_call(
    token_address: Address,
    destination_chain: impl Into<String>,
    gas_value: U256,
) -> ContractCall<Factory::deployRemoteCanonicalInterchainTokenCall> {
    ContractCall::new(
        INTERCHAIN_TOKEN_FACTORY,
        Factory::deployRemoteCanonicalInterchainTokenCall {
            originalTokenAddress: token_address,
            destinationChain: destination_chain.into(),
            gasValue: gas_value,
        },
    )
    .with_value(gas_value)
}

/// Batch calls into a single factory `multicall`. The batch carries the sum
/// of the values of its calls.
pub fn multicall_call<I>(calls: I) -> ContractCall<Factory::multicallCall>
where
    I: IntoIterator,
    I::Item: Into<EncodedCall>,
{
    let (data, value) = calls.into_iter().map(Into::into).fold(
        (Vec::new(), U256::ZERO),
        |(mut data, value), call: EncodedCall| {
            data.push(call.calldata);
            (data, value.saturating_add(call.value))
        },
    );
    ContractCall::new(INTERCHAIN_TOKEN_FACTORY, Factory::multicallCall { data }).with_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, b256};

    const SALT: B256 = b256!("0x0101010101010101010101010101010101010101010101010101010101010101");
    const MINTER: Address = address!("0x00000000000000000000000000000000000000aa");
    const TOKEN: Address = address!("0x00000000000000000000000000000000000000bb");

    #[test]
    fn deploy_args_in_order() {
        let call = deploy_interchain_token_call(SALT, "Test", "TST", 18, U256::from(1000), MINTER);
        assert_eq!(call.address(), INTERCHAIN_TOKEN_FACTORY);
        assert_eq!(call.value(), U256::ZERO);
        assert_eq!(
            call.call(),
            &Factory::deployInterchainTokenCall {
                salt: SALT,
                name: "Test".into(),
                symbol: "TST".into(),
                decimals: 18,
                initialSupply: U256::from(1000),
                minter: MINTER,
            }
        );

        let decoded = Factory::deployInterchainTokenCall::abi_decode(&call.calldata()).unwrap();
        assert_eq!(&decoded, call.call());
    }

    #[test]
    fn remote_deploy_defaults() {
        let gas = U256::from(600_000);
        let call = deploy_remote_interchain_token_call(SALT, "optimism-sepolia", gas);
        let args = call.call();
        assert_eq!(args.originalChainName, "");
        assert_eq!(args.salt, SALT);
        assert_eq!(args.minter, Address::ZERO);
        assert_eq!(args.destination_chain(), "optimism-sepolia");
        assert_eq!(args.gas_value(), gas);
        assert_eq!(call.value(), gas);
    }

    #[test]
    fn canonical_calls() {
        let register = register_canonical_interchain_token_call(TOKEN);
        assert_eq!(register.call().tokenAddress, TOKEN);
        assert_eq!(register.value(), U256::ZERO);
        assert_eq!(register.signature(), "registerCanonicalInterchainToken(address)");

        let remote = deploy_remote_canonical_interchain_token_call(
            TOKEN,
            "arbitrum-sepolia",
            U256::from(7),
        );
        assert_eq!(remote.call().originalTokenAddress, TOKEN);
        assert_eq!(remote.call().destination_chain(), "arbitrum-sepolia");
        assert_eq!(remote.value(), U256::from(7));
    }

    #[test]
    fn multicall_sums_values() {
        let local = deploy_interchain_token_call(SALT, "Test", "TST", 6, U256::from(1), MINTER);
        let remote_a = deploy_remote_interchain_token_call(SALT, "optimism-sepolia", U256::from(3));
        let remote_b = deploy_remote_interchain_token_call(SALT, "arbitrum-sepolia", U256::from(4));

        let batch = multicall_call([local.encode(), remote_a.encode(), remote_b.encode()]);
        assert_eq!(batch.value(), U256::from(7));
        assert_eq!(
            batch.call().data,
            vec![local.calldata(), remote_a.calldata(), remote_b.calldata()]
        );
    }

    #[test]
    fn empty_multicall() {
        let batch = multicall_call(Vec::<EncodedCall>::new());
        assert!(batch.call().data.is_empty());
        assert_eq!(batch.value(), U256::ZERO);
    }

    #[test]
    fn retarget() {
        let call = register_canonical_interchain_token_call(TOKEN).with_address(MINTER);
        assert_eq!(call.address(), MINTER);
    }
}
