//! Receipt and log fixtures.
use alloy::{
    primitives::{Address, Bloom, Bytes, LogData, TxHash, B256},
    rpc::types::{Log, TransactionReceipt},
    sol_types::SolEvent,
};
use its_bindings::InterchainTokenFactory::InterchainTokenDeployed;
use its_constants::INTERCHAIN_TOKEN_FACTORY;

/// Token ID used by [`deployed_event`].
pub const TEST_TOKEN_ID: B256 = B256::repeat_byte(0x11);

/// Token address used by [`deployed_event`].
pub const TEST_TOKEN: Address = Address::repeat_byte(0xcc);

/// Minter used by [`deployed_event`].
pub const TEST_MINTER: Address = Address::repeat_byte(0xdd);

/// Sender of the fixture transactions.
pub const TEST_SENDER: Address = Address::repeat_byte(0xee);

/// An `InterchainTokenDeployed` event for the given name, symbol and
/// decimals.
pub fn deployed_event(name: &str, symbol: &str, decimals: u8) -> InterchainTokenDeployed {
    InterchainTokenDeployed {
        tokenId: TEST_TOKEN_ID,
        tokenAddress: TEST_TOKEN,
        minter: TEST_MINTER,
        name: name.to_string(),
        symbol: symbol.to_string(),
        decimals,
    }
}

/// Wrap log data emitted by the factory in an RPC log.
pub fn factory_log(data: LogData) -> Log {
    Log {
        inner: alloy::primitives::Log { address: INTERCHAIN_TOKEN_FACTORY, data },
        ..Default::default()
    }
}

/// An RPC log carrying the given event.
pub fn deployed_log(event: &InterchainTokenDeployed) -> Log {
    factory_log(event.encode_log_data())
}

/// A log that carries the event signature but undecodable data.
pub fn malformed_deployed_log() -> Log {
    let mut data = deployed_event("Bad", "BAD", 18).encode_log_data();
    data.data = Bytes::from_static(&[0xba, 0xad]);
    factory_log(data)
}

/// A log of some unrelated event.
pub fn unrelated_log() -> Log {
    factory_log(LogData::new_unchecked(
        vec![B256::repeat_byte(0x42), B256::repeat_byte(0x43)],
        Bytes::from_static(&[0x01]),
    ))
}

/// Build a transaction receipt with the given status and logs.
pub fn receipt(tx_hash: TxHash, success: bool, logs: Vec<Log>) -> TransactionReceipt {
    let json = serde_json::json!({
        "type": "0x2",
        "status": if success { "0x1" } else { "0x0" },
        "cumulativeGasUsed": "0x5208",
        "logs": logs,
        "logsBloom": Bloom::ZERO,
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": B256::repeat_byte(0xbb),
        "blockNumber": "0x1",
        "gasUsed": "0x5208",
        "effectiveGasPrice": "0x3b9aca00",
        "from": TEST_SENDER,
        "to": INTERCHAIN_TOKEN_FACTORY,
        "contractAddress": null,
    });
    serde_json::from_value(json).expect("valid receipt fixture")
}
