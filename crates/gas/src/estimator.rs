use crate::{FeeError, GasFeeEstimator, GasFeeRequest};
use alloy::primitives::{Bytes, U256};
use its_constants::{config, ChainRegistry, ConfigError, ParseChainError};
use tracing::{debug, instrument, warn};

/// Gas value used when no estimate can be obtained.
pub const DEFAULT_FALLBACK_GAS: u64 = 600_000;

/// Default multiplier sent to the fee-estimation service.
pub const DEFAULT_GAS_MULTIPLIER: f64 = 1.2;

/// Default buffer, in percent of the base estimate, applied when the service
/// answers without a quote.
pub const DEFAULT_BUFFER_PERCENT: u64 = 120;

/// Default symbol of the token remote gas is paid in.
pub const DEFAULT_FEE_TOKEN: &str = "ETH";

const FALLBACK_ENV: &str = "ITS_GAS_FALLBACK";
const MULTIPLIER_ENV: &str = "ITS_GAS_MULTIPLIER";
const BUFFER_PERCENT_ENV: &str = "ITS_GAS_BUFFER_PERCENT";
const FEE_TOKEN_ENV: &str = "ITS_GAS_FEE_TOKEN";

/// How to pick a gas value when estimation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackGas {
    /// Use a fixed amount regardless of the destination.
    Fixed(u64),
    /// Use the destination chain's buffered base estimate. Destinations the
    /// registry does not know get [`DEFAULT_FALLBACK_GAS`].
    ChainBase,
}

impl Default for FallbackGas {
    fn default() -> Self {
        Self::Fixed(DEFAULT_FALLBACK_GAS)
    }
}

impl core::str::FromStr for FallbackGas {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("chain") {
            return Ok(Self::ChainBase);
        }
        s.parse::<u64>().map(Self::Fixed).map_err(|_| ConfigError::invalid(FALLBACK_ENV, s))
    }
}

/// Parameters for remote gas estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct GasPolicy {
    multiplier: f64,
    buffer_percent: u64,
    fee_token: String,
    fallback: FallbackGas,
}

impl Default for GasPolicy {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_GAS_MULTIPLIER,
            buffer_percent: DEFAULT_BUFFER_PERCENT,
            fee_token: DEFAULT_FEE_TOKEN.to_string(),
            fallback: FallbackGas::default(),
        }
    }
}

impl GasPolicy {
    /// Load the policy from the environment. Unset variables keep their
    /// defaults.
    ///
    /// Reads `ITS_GAS_FALLBACK` (an integer, or `chain`),
    /// `ITS_GAS_MULTIPLIER`, `ITS_GAS_BUFFER_PERCENT` and `ITS_GAS_FEE_TOKEN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut policy = Self::default();
        if let Some(fallback) = config::load_string_opt(FALLBACK_ENV) {
            policy.fallback = fallback.parse()?;
        }
        if let Some(multiplier) = config::load_f64_opt(MULTIPLIER_ENV)? {
            policy.multiplier = multiplier;
        }
        if let Some(buffer_percent) = config::load_u64_opt(BUFFER_PERCENT_ENV)? {
            policy.buffer_percent = buffer_percent;
        }
        if let Some(fee_token) = config::load_string_opt(FEE_TOKEN_ENV) {
            policy.fee_token = fee_token;
        }
        Ok(policy)
    }

    /// Set the multiplier sent to the fee-estimation service.
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Set the buffer applied to unquoted estimates, in percent.
    pub fn with_buffer_percent(mut self, buffer_percent: u64) -> Self {
        self.buffer_percent = buffer_percent;
        self
    }

    /// Set the symbol of the token remote gas is paid in.
    pub fn with_fee_token(mut self, fee_token: impl Into<String>) -> Self {
        self.fee_token = fee_token.into();
        self
    }

    /// Set the fallback strategy.
    pub fn with_fallback(mut self, fallback: FallbackGas) -> Self {
        self.fallback = fallback;
        self
    }

    /// Get the multiplier sent to the fee-estimation service.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Get the buffer applied to unquoted estimates, in percent.
    pub const fn buffer_percent(&self) -> u64 {
        self.buffer_percent
    }

    /// Get the symbol of the token remote gas is paid in.
    pub fn fee_token(&self) -> &str {
        &self.fee_token
    }

    /// Get the fallback strategy.
    pub const fn fallback(&self) -> FallbackGas {
        self.fallback
    }

    /// Apply the buffer to a base gas estimate.
    pub const fn buffered(&self, base: u64) -> u64 {
        base.saturating_mul(self.buffer_percent) / 100
    }
}

/// Why an estimate fell back to the fallback value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FallbackReason {
    /// The destination chain is not in the registry.
    #[error(transparent)]
    UnsupportedChain(#[from] ParseChainError),
    /// The fee-estimation service could not be reached or returned an error.
    #[error("fee estimation failed: {0}")]
    Service(String),
    /// The service returned a fee that is not a number.
    #[error("invalid fee returned by estimation service: {0}")]
    InvalidFee(String),
}

/// Where an estimated gas value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GasSource {
    /// The fee-estimation service quoted the value.
    Quoted,
    /// The service answered without a quote, and the value is the buffered
    /// base estimate of the destination chain.
    Buffered,
    /// Estimation failed, and the value is the fallback.
    Fallback(FallbackReason),
}

/// A gas value for a remote deployment, with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GasEstimate {
    value: U256,
    source: GasSource,
}

impl GasEstimate {
    /// Create a new estimate.
    pub const fn new(value: U256, source: GasSource) -> Self {
        Self { value, source }
    }

    /// Get the gas value, in wei of the fee token.
    pub const fn value(&self) -> U256 {
        self.value
    }

    /// Get the provenance of the value.
    pub const fn source(&self) -> &GasSource {
        &self.source
    }

    /// True if the value is the fallback.
    pub const fn is_fallback(&self) -> bool {
        matches!(self.source, GasSource::Fallback(_))
    }
}

/// Estimates the gas to attach to remote deployments.
///
/// Wraps a [`GasFeeEstimator`] and resolves every failure to a usable
/// value, so callers never see an estimation error.
#[derive(Debug, Clone)]
pub struct RemoteGasEstimator<E> {
    estimator: E,
    registry: ChainRegistry,
    policy: GasPolicy,
}

impl<E> RemoteGasEstimator<E> {
    /// Create a new estimator.
    pub const fn new(estimator: E, registry: ChainRegistry, policy: GasPolicy) -> Self {
        Self { estimator, registry, policy }
    }

    /// Create a new estimator over the testnet registry with the default
    /// policy.
    pub fn testnet(estimator: E) -> Self {
        Self::new(estimator, ChainRegistry::testnet(), GasPolicy::default())
    }

    /// Get a reference to the fee-estimation service.
    pub const fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Get a reference to the chain registry.
    pub const fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    /// Get a reference to the gas policy.
    pub const fn policy(&self) -> &GasPolicy {
        &self.policy
    }

    /// The fallback gas value for the given destination.
    pub fn fallback_value(&self, destination_chain: &str) -> U256 {
        let gas = match self.policy.fallback {
            FallbackGas::Fixed(gas) => gas,
            FallbackGas::ChainBase => self
                .registry
                .get(destination_chain)
                .map(|config| config.buffered_gas_estimate())
                .unwrap_or(DEFAULT_FALLBACK_GAS),
        };
        U256::from(gas)
    }
}

impl<E> RemoteGasEstimator<E>
where
    E: GasFeeEstimator,
{
    /// Estimate the gas to attach to a remote deployment from
    /// `source_chain` to `destination_chain`.
    ///
    /// Never fails. If the destination is unknown, or the service errors or
    /// returns garbage, the fallback value is returned and the reason is
    /// recorded in the [`GasSource`].
    #[instrument(skip_all, fields(source = source_chain, destination = destination_chain))]
    pub async fn estimate_remote_deployment_gas(
        &self,
        source_chain: &str,
        destination_chain: &str,
        execute_data: &Bytes,
    ) -> GasEstimate {
        match self.try_estimate(source_chain, destination_chain, execute_data).await {
            Ok(estimate) => {
                debug!(value = %estimate.value, source = ?estimate.source, "estimated remote gas");
                estimate
            }
            Err(reason) => {
                let value = self.fallback_value(destination_chain);
                warn!(%reason, %value, "gas estimation failed, using fallback");
                GasEstimate::new(value, GasSource::Fallback(reason))
            }
        }
    }

    async fn try_estimate(
        &self,
        source_chain: &str,
        destination_chain: &str,
        execute_data: &Bytes,
    ) -> Result<GasEstimate, FallbackReason> {
        let config = self.registry.get(destination_chain)?;
        let base = config.base_gas_estimate();

        let request = GasFeeRequest::new(
            source_chain,
            destination_chain,
            base,
            self.policy.multiplier,
            self.policy.fee_token.as_str(),
        )
        .with_execute_data(execute_data.clone());

        let response = self
            .estimator
            .estimate_gas_fee(&request)
            .await
            .map_err(|err| FallbackReason::Service(err.to_string()))?;

        match response.fee() {
            Some(Ok(value)) => Ok(GasEstimate::new(value, GasSource::Quoted)),
            Some(Err(FeeError::InvalidFee(fee))) => Err(FallbackReason::InvalidFee(fee)),
            Some(Err(err)) => Err(FallbackReason::Service(err.to_string())),
            None => {
                Ok(GasEstimate::new(U256::from(self.policy.buffered(base)), GasSource::Buffered))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GasFeeResponse;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    /// Answers every request with the same result, counting calls.
    #[derive(Debug, Clone)]
    struct Fixed {
        fee: Option<GasFeeResponse>,
        calls: Arc<AtomicUsize>,
    }

    impl Fixed {
        fn new(fee: Option<GasFeeResponse>) -> Self {
            Self { fee, calls: Default::default() }
        }
    }

    impl GasFeeEstimator for Fixed {
        type Error = FeeError;

        async fn estimate_gas_fee(
            &self,
            _request: &GasFeeRequest,
        ) -> Result<GasFeeResponse, FeeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.fee.clone().ok_or(FeeError::NotFound)
        }
    }

    fn estimator(fee: Option<GasFeeResponse>) -> RemoteGasEstimator<Fixed> {
        RemoteGasEstimator::testnet(Fixed::new(fee))
    }

    #[tokio::test]
    async fn quoted_fee() {
        let est = estimator(Some(GasFeeResponse::Fee("42000".into())));
        let gas = est
            .estimate_remote_deployment_gas("base-sepolia", "optimism-sepolia", &Bytes::new())
            .await;
        assert_eq!(gas, GasEstimate::new(U256::from(42_000), GasSource::Quoted));
    }

    #[tokio::test]
    async fn unquoted_response_is_buffered() {
        let est = estimator(Some(GasFeeResponse::Other(serde_json::json!({"baseFee": "1"}))));
        let gas = est
            .estimate_remote_deployment_gas("base-sepolia", "arbitrum-sepolia", &Bytes::new())
            .await;
        // 120% of the 500_000 base estimate.
        assert_eq!(gas, GasEstimate::new(U256::from(600_000), GasSource::Buffered));
    }

    #[tokio::test]
    async fn service_error_falls_back() {
        let est = estimator(None);
        let gas = est
            .estimate_remote_deployment_gas("base-sepolia", "optimism-sepolia", &Bytes::new())
            .await;
        assert!(gas.is_fallback());
        assert_eq!(gas.value(), U256::from(DEFAULT_FALLBACK_GAS));
        assert!(matches!(gas.source(), GasSource::Fallback(FallbackReason::Service(_))));
    }

    #[tokio::test]
    async fn garbage_fee_falls_back() {
        let est = estimator(Some(GasFeeResponse::Fee("lots".into())));
        let gas = est
            .estimate_remote_deployment_gas("base-sepolia", "optimism-sepolia", &Bytes::new())
            .await;
        assert_eq!(
            gas.source(),
            &GasSource::Fallback(FallbackReason::InvalidFee("lots".into()))
        );
    }

    #[tokio::test]
    async fn unknown_destination_skips_service() {
        let est = estimator(Some(GasFeeResponse::Fee("1".into())));
        let gas =
            est.estimate_remote_deployment_gas("base-sepolia", "avalanche", &Bytes::new()).await;
        assert_eq!(gas.value(), U256::from(DEFAULT_FALLBACK_GAS));
        assert!(matches!(
            gas.source(),
            GasSource::Fallback(FallbackReason::UnsupportedChain(ref e)) if e.name() == "avalanche"
        ));
        assert_eq!(est.estimator().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn chain_base_fallback() {
        let policy = GasPolicy::default().with_fallback(FallbackGas::ChainBase);
        let est = RemoteGasEstimator::new(Fixed::new(None), ChainRegistry::testnet(), policy);

        let gas = est
            .estimate_remote_deployment_gas("base-sepolia", "optimism-sepolia", &Bytes::new())
            .await;
        // base estimate plus the chain's gas buffer
        assert_eq!(gas.value(), U256::from(600_000));

        assert_eq!(est.fallback_value("unknown"), U256::from(DEFAULT_FALLBACK_GAS));
    }

    #[test]
    fn parse_fallback() {
        assert_eq!("chain".parse::<FallbackGas>().unwrap(), FallbackGas::ChainBase);
        assert_eq!(" 700000 ".parse::<FallbackGas>().unwrap(), FallbackGas::Fixed(700_000));
        assert!(matches!(
            "plenty".parse::<FallbackGas>().unwrap_err(),
            ConfigError::Invalid { ref key, .. } if key == FALLBACK_ENV
        ));
    }

    #[test]
    fn policy_from_env() {
        // The only test in this crate that touches these variables.
        std::env::set_var(FALLBACK_ENV, "chain");
        std::env::set_var(BUFFER_PERCENT_ENV, "150");
        std::env::set_var(FEE_TOKEN_ENV, "AVAX");
        let policy = GasPolicy::from_env().unwrap();
        assert_eq!(policy.fallback(), FallbackGas::ChainBase);
        assert_eq!(policy.buffer_percent(), 150);
        assert_eq!(policy.fee_token(), "AVAX");
        assert_eq!(policy.multiplier(), DEFAULT_GAS_MULTIPLIER);

        std::env::set_var(FALLBACK_ENV, "lots");
        assert!(GasPolicy::from_env().is_err());

        for key in [FALLBACK_ENV, BUFFER_PERCENT_ENV, FEE_TOKEN_ENV] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn policy_defaults() {
        let policy = GasPolicy::default();
        assert_eq!(policy.multiplier(), 1.2);
        assert_eq!(policy.buffer_percent(), 120);
        assert_eq!(policy.fee_token(), "ETH");
        assert_eq!(policy.fallback(), FallbackGas::Fixed(600_000));
        assert_eq!(policy.buffered(500_000), 600_000);
    }
}
