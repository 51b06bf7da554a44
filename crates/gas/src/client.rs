use crate::{FeeError, GasFeeEstimator, GasFeeRequest, GasFeeResponse};
use its_constants::{config, ConfigError};
use tracing::{instrument, warn};

/// The fee-estimation endpoint, relative to the API base URL.
const ESTIMATE_GAS_FEE: &str = "gmp/estimateGasFee";

/// Environment variable overriding the Axelar query API base URL.
pub const AXELAR_QUERY_API_URL_ENV: &str = "AXELAR_QUERY_API_URL";

/// Base URL of the testnet Axelar query API.
pub const TESTNET_API_URL: &str = "https://testnet.api.axelarscan.io";

/// Base URL of the mainnet Axelar query API.
pub const MAINNET_API_URL: &str = "https://api.axelarscan.io";

/// The Axelar network environment the query API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxelarEnvironment {
    /// The Axelar testnet.
    #[default]
    Testnet,
    /// The Axelar mainnet.
    Mainnet,
}

impl AxelarEnvironment {
    /// The base URL of the query API for this environment.
    pub const fn api_url(&self) -> &'static str {
        match self {
            Self::Testnet => TESTNET_API_URL,
            Self::Mainnet => MAINNET_API_URL,
        }
    }
}

/// Client for the Axelar query API.
/// Posts fee-estimation requests to the API and parses the quotes.
#[derive(Debug, Clone)]
pub struct AxelarQueryClient {
    /// The base URL of the query API.
    url: reqwest::Url,
    /// The reqwest client used to send requests.
    client: reqwest::Client,
}

impl AxelarQueryClient {
    /// Create a new client with the given URL and reqwest client.
    pub const fn new_with_client(url: reqwest::Url, client: reqwest::Client) -> Self {
        Self { url, client }
    }

    /// Instantiate a new client with the given URL and a new reqwest client.
    pub fn new(url: reqwest::Url) -> Self {
        Self { url, client: reqwest::Client::new() }
    }

    /// Create a new client given a string URL.
    pub fn new_from_string(url: &str) -> Result<Self, FeeError> {
        let url = reqwest::Url::parse(url)?;
        Ok(Self::new(url))
    }

    /// Connect to the query API of the given environment.
    pub fn for_environment(env: AxelarEnvironment) -> Self {
        Self::new_from_string(env.api_url()).expect("axelar query API URL invalid")
    }

    /// Connect to the testnet query API.
    pub fn testnet() -> Self {
        Self::for_environment(AxelarEnvironment::Testnet)
    }

    /// Connect to the mainnet query API.
    pub fn mainnet() -> Self {
        Self::for_environment(AxelarEnvironment::Mainnet)
    }

    /// Connect to the query API at `AXELAR_QUERY_API_URL`, or the testnet
    /// API if the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = config::load_url_opt(AXELAR_QUERY_API_URL_ENV)?;
        Ok(url.map(Self::new).unwrap_or_else(Self::testnet))
    }

    /// Get the base URL of the query API.
    pub const fn url(&self) -> &reqwest::Url {
        &self.url
    }

    /// Get the client used to send requests
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Request a fee estimate for the described remote execution.
    #[instrument(skip_all, fields(
        source = %request.source_chain,
        destination = %request.destination_chain,
        gas_limit = %request.gas_limit,
    ))]
    pub async fn estimate_gas_fee(
        &self,
        request: &GasFeeRequest,
    ) -> Result<GasFeeResponse, FeeError> {
        // Append the path to the URL.
        let url = self
            .url
            .join(ESTIMATE_GAS_FEE)
            .inspect_err(|e| warn!(%e, "Failed to join URL. Not requesting fee estimate."))?;

        self.client
            .post(url)
            .json(request)
            .send()
            .await?
            .error_for_status()
            .inspect_err(|e| warn!(%e, "Fee estimation request failed"))?
            .json::<GasFeeResponse>()
            .await
            .inspect_err(|e| warn!(%e, "Failed to parse response from fee estimation API"))
            .map_err(Into::into)
    }
}

impl GasFeeEstimator for AxelarQueryClient {
    type Error = FeeError;

    async fn estimate_gas_fee(&self, request: &GasFeeRequest) -> Result<GasFeeResponse, FeeError> {
        AxelarQueryClient::estimate_gas_fee(self, request).await
    }
}
