use alloy::{
    primitives::{Address, B256},
    rpc::types::{Log, TransactionReceipt},
    sol_types::SolEvent,
};
use its_bindings::InterchainTokenFactory::InterchainTokenDeployed;
use tracing::warn;

/// A deployed interchain token, as reported by the factory's
/// `InterchainTokenDeployed` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDeployed {
    /// The interchain token ID.
    pub token_id: B256,
    /// The address of the token contract.
    pub token_address: Address,
    /// The minter of the token. Zero if the token has none.
    pub minter: Address,
    /// The token name.
    pub name: String,
    /// The token symbol.
    pub symbol: String,
    /// The token decimals.
    pub decimals: u8,
    /// The salt the deployment was made with.
    pub salt: B256,
}

impl TokenDeployed {
    /// Project a decoded event, attaching the deployment salt.
    pub fn from_event(event: InterchainTokenDeployed, salt: B256) -> Self {
        Self {
            token_id: event.token_id(),
            token_address: event.token_address(),
            minter: event.minter(),
            decimals: event.decimals(),
            name: event.name,
            symbol: event.symbol,
            salt,
        }
    }
}

/// The result of looking for an `InterchainTokenDeployed` event.
#[derive(Debug)]
pub enum EventLookup {
    /// The event was found and decoded.
    Found(TokenDeployed),
    /// No log carried the event.
    NotFound,
    /// A log carried the event signature, but its data did not decode.
    Malformed(alloy::sol_types::Error),
}

impl EventLookup {
    /// Get the deployed token, if the event was found.
    pub const fn found(&self) -> Option<&TokenDeployed> {
        match self {
            Self::Found(deployed) => Some(deployed),
            _ => None,
        }
    }

    /// Consume the lookup, returning the deployed token if found.
    pub fn into_found(self) -> Option<TokenDeployed> {
        match self {
            Self::Found(deployed) => Some(deployed),
            _ => None,
        }
    }

    /// True if the event was found.
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// True if no log carried the event.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// True if a log carried the event but did not decode.
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

/// Find the first `InterchainTokenDeployed` event in `logs`, and attach
/// `salt` to it.
///
/// Only the first log with the event signature is considered.
pub fn interchain_token_deployed_from_logs(logs: &[Log], salt: B256) -> EventLookup {
    let Some(log) =
        logs.iter().find(|log| log.topics().first() == Some(&InterchainTokenDeployed::SIGNATURE_HASH))
    else {
        return EventLookup::NotFound;
    };

    match InterchainTokenDeployed::decode_log_data(log.data()) {
        Ok(event) => EventLookup::Found(TokenDeployed::from_event(event, salt)),
        Err(err) => {
            warn!(%err, address = %log.address(), "malformed InterchainTokenDeployed log");
            EventLookup::Malformed(err)
        }
    }
}

/// Find the first `InterchainTokenDeployed` event in a transaction receipt.
/// See [`interchain_token_deployed_from_logs`].
pub fn interchain_token_deployed_from_receipt(
    receipt: &TransactionReceipt,
    salt: B256,
) -> EventLookup {
    interchain_token_deployed_from_logs(receipt.inner.logs(), salt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, b256, Bytes, Log as PrimitiveLog, LogData};
    use its_constants::INTERCHAIN_TOKEN_FACTORY;

    const SALT: B256 = b256!("0x0202020202020202020202020202020202020202020202020202020202020202");
    const TOKEN_ID: B256 =
        b256!("0x1111111111111111111111111111111111111111111111111111111111111111");

    fn event() -> InterchainTokenDeployed {
        InterchainTokenDeployed {
            tokenId: TOKEN_ID,
            tokenAddress: address!("0x00000000000000000000000000000000000000cc"),
            minter: address!("0x00000000000000000000000000000000000000dd"),
            name: "Test Token".into(),
            symbol: "TT".into(),
            decimals: 18,
        }
    }

    fn rpc_log(data: LogData) -> Log {
        Log {
            inner: PrimitiveLog { address: INTERCHAIN_TOKEN_FACTORY, data },
            ..Default::default()
        }
    }

    fn other_log() -> Log {
        rpc_log(LogData::new_unchecked(vec![B256::repeat_byte(0x42)], Bytes::from_static(&[1, 2])))
    }

    #[test]
    fn finds_event_and_attaches_salt() {
        let logs = [other_log(), rpc_log(event().encode_log_data())];
        let deployed = interchain_token_deployed_from_logs(&logs, SALT).into_found().unwrap();

        assert_eq!(deployed.salt, SALT);
        assert_eq!(deployed.token_id, TOKEN_ID);
        assert_eq!(deployed.name, "Test Token");
        assert_eq!(deployed.symbol, "TT");
        assert_eq!(deployed.decimals, 18u8);
        assert_eq!(deployed.minter, address!("0x00000000000000000000000000000000000000dd"));
    }

    #[test]
    fn first_matching_log_wins() {
        let mut second = event();
        second.symbol = "SECOND".into();
        let logs = [rpc_log(event().encode_log_data()), rpc_log(second.encode_log_data())];
        let lookup = interchain_token_deployed_from_logs(&logs, SALT);
        assert_eq!(lookup.found().unwrap().symbol, "TT");
    }

    #[test]
    fn no_event_is_not_an_error() {
        assert!(interchain_token_deployed_from_logs(&[], SALT).is_not_found());
        assert!(interchain_token_deployed_from_logs(&[other_log()], SALT).is_not_found());
    }

    #[test]
    fn malformed_event() {
        let mut data = event().encode_log_data();
        data.data = Bytes::from_static(&[0xde, 0xad]);
        let lookup = interchain_token_deployed_from_logs(&[rpc_log(data)], SALT);
        assert!(lookup.is_malformed());
        assert!(lookup.found().is_none());
    }
}
