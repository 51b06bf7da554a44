#![allow(clippy::too_many_arguments)]
#![allow(missing_docs)]
use alloy::primitives::{Address, FixedBytes, U256};

mod factory {
    use super::*;

    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[sol(rpc)]
        contract InterchainTokenFactory {
            event InterchainTokenDeployed(
                bytes32 indexed tokenId,
                address tokenAddress,
                address indexed minter,
                string name,
                string symbol,
                uint8 decimals
            );

            function deployInterchainToken(
                bytes32 salt,
                string calldata name,
                string calldata symbol,
                uint8 decimals,
                uint256 initialSupply,
                address minter
            ) external payable returns (bytes32 tokenId);

            function deployRemoteInterchainToken(
                string calldata originalChainName,
                bytes32 salt,
                address minter,
                string memory destinationChain,
                uint256 gasValue
            ) external payable returns (bytes32 tokenId);

            function registerCanonicalInterchainToken(
                address tokenAddress
            ) external payable returns (bytes32 tokenId);

            function deployRemoteCanonicalInterchainToken(
                address originalTokenAddress,
                string memory destinationChain,
                uint256 gasValue
            ) external payable returns (bytes32 tokenId);

            function multicall(bytes[] calldata data) external payable returns (bytes[] memory results);
        }
    );

    impl InterchainTokenFactory::InterchainTokenDeployed {
        /// Get the interchain token ID.
        pub const fn token_id(&self) -> FixedBytes<32> {
            self.tokenId
        }

        /// Get the address of the deployed token.
        pub const fn token_address(&self) -> Address {
            self.tokenAddress
        }

        /// Get the minter of the deployed token.
        pub const fn minter(&self) -> Address {
            self.minter
        }

        /// Get the token decimals.
        pub const fn decimals(&self) -> u8 {
            self.decimals
        }
    }

    impl InterchainTokenFactory::deployRemoteInterchainTokenCall {
        /// Get the gas value paid for the remote execution.
        pub const fn gas_value(&self) -> U256 {
            self.gasValue
        }

        /// Get the destination chain name.
        pub fn destination_chain(&self) -> &str {
            &self.destinationChain
        }
    }

    impl InterchainTokenFactory::deployRemoteCanonicalInterchainTokenCall {
        /// Get the gas value paid for the remote execution.
        pub const fn gas_value(&self) -> U256 {
            self.gasValue
        }

        /// Get the destination chain name.
        pub fn destination_chain(&self) -> &str {
            &self.destinationChain
        }
    }
}

mod erc20 {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface IERC20Metadata {
            function name() external view returns (string memory);
            function symbol() external view returns (string memory);
            function decimals() external view returns (uint8);
        }
    );
}

pub use erc20::IERC20Metadata;
pub use factory::InterchainTokenFactory;
