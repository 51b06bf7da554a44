use crate::{ChainConfig, ParseChainError, TESTNET_CHAINS};
use std::borrow::Cow;

/// The set of chains supported by a deployment client.
///
/// The registry is the single source of truth for "supported networks". Chain
/// name lookups, chain ID lookups and client network validation all consult
/// the same registry. Keys are chain names, and lookups ignore ASCII case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRegistry {
    chains: Cow<'static, [(&'static str, ChainConfig)]>,
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::testnet()
    }
}

impl ChainRegistry {
    /// Create a registry from a static list of entries.
    pub const fn from_static(chains: &'static [(&'static str, ChainConfig)]) -> Self {
        Self { chains: Cow::Borrowed(chains) }
    }

    /// Create a registry from an owned list of entries.
    pub fn new(chains: Vec<(&'static str, ChainConfig)>) -> Self {
        Self { chains: Cow::Owned(chains) }
    }

    /// The built-in testnet registry.
    pub const fn testnet() -> Self {
        Self::from_static(&TESTNET_CHAINS)
    }

    /// Add a chain, replacing any existing entry with the same key.
    pub fn with_chain(mut self, key: &'static str, config: ChainConfig) -> Self {
        let chains = self.chains.to_mut();
        match chains.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
            Some(entry) => entry.1 = config,
            None => chains.push((key, config)),
        }
        self
    }

    /// Iterate over the registry keys, in registry order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.chains.iter().map(|(key, _)| *key)
    }

    /// Iterate over the registry entries, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ChainConfig)> + '_ {
        self.chains.iter().map(|(key, config)| (*key, config))
    }

    /// Number of chains in the registry.
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// True if the registry has no chains.
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    fn lookup(&self, name: &str) -> Option<&(&'static str, ChainConfig)> {
        let name = name.trim();
        self.chains.iter().find(|(key, _)| key.eq_ignore_ascii_case(name))
    }

    fn not_supported(&self, name: &str) -> ParseChainError {
        ParseChainError::not_supported(name, self.keys())
    }

    /// Get the configuration for the named chain.
    ///
    /// Fails with an error enumerating the registry keys when the chain is
    /// not in the registry.
    pub fn get(&self, name: &str) -> Result<&ChainConfig, ParseChainError> {
        self.lookup(name).map(|(_, config)| config).ok_or_else(|| self.not_supported(name))
    }

    /// Check that the named chain is in the registry.
    pub fn validate(&self, name: &str) -> Result<(), ParseChainError> {
        self.get(name).map(drop)
    }

    /// Get the registry key of the named chain. This normalizes the name.
    pub fn key_for(&self, name: &str) -> Result<&'static str, ParseChainError> {
        self.lookup(name).map(|(key, _)| *key).ok_or_else(|| self.not_supported(name))
    }

    /// True if the named chain is in the registry.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Get the registry key and configuration for the given chain ID.
    pub fn by_chain_id(&self, chain_id: u64) -> Option<(&'static str, &ChainConfig)> {
        self.iter().find(|(_, config)| config.chain_id() == chain_id)
    }

    /// True if the chain ID belongs to a chain in the registry.
    pub fn contains_chain_id(&self, chain_id: u64) -> bool {
        self.by_chain_id(chain_id).is_some()
    }

    /// Render the registry as a list of `key (chain ID: id)` items, for
    /// error messages.
    pub fn describe(&self) -> String {
        self.iter()
            .map(|(key, config)| format!("{key} (chain ID: {})", config.chain_id()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
