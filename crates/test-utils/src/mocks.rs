//! Mock implementations of the chain client and fee-estimation traits.
use crate::fixtures;
use alloy::{
    primitives::{Address, Bytes, TxHash, U256},
    rpc::types::{Log, TransactionReceipt},
    sol_types::SolCall,
};
use its_factory::{ChainClient, ContractCall, TokenDetails};
use its_gas::{GasFeeEstimator, GasFeeRequest, GasFeeResponse};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// Error returned by the mocks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("mock error: {0}")]
pub struct MockError(pub String);

/// A call captured by [`MockChainClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// The target address.
    pub to: Address,
    /// The encoded calldata.
    pub input: Bytes,
    /// The attached value.
    pub value: U256,
}

impl RecordedCall {
    fn new<C: SolCall>(call: &ContractCall<C>) -> Self {
        Self { to: call.address(), input: call.calldata(), value: call.value() }
    }

    /// Decode the calldata as the given call.
    pub fn decode<C: SolCall>(&self) -> C {
        C::abi_decode(&self.input).unwrap()
    }
}

/// A mock [`ChainClient`] that captures simulated and submitted calls, and
/// answers with canned chain ID, receipts and token metadata.
#[derive(Debug, Clone)]
pub struct MockChainClient {
    chain_id: u64,
    tx_hash: TxHash,
    receipt_status: bool,
    receipt_logs: Vec<Log>,
    simulation_error: Option<String>,
    tokens: HashMap<Address, TokenDetails>,

    simulated: Arc<Mutex<Vec<RecordedCall>>>,
    submitted: Arc<Mutex<Vec<RecordedCall>>>,
    metadata_reads: Arc<Mutex<Vec<Address>>>,
}

impl MockChainClient {
    /// Create a new mock connected to `chain_id`, whose transactions
    /// succeed with no logs.
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            tx_hash: TxHash::repeat_byte(0xab),
            receipt_status: true,
            receipt_logs: vec![],
            simulation_error: None,
            tokens: HashMap::new(),
            simulated: Default::default(),
            submitted: Default::default(),
            metadata_reads: Default::default(),
        }
    }

    /// Set the logs of every receipt.
    pub fn with_logs(mut self, logs: Vec<Log>) -> Self {
        self.receipt_logs = logs;
        self
    }

    /// Make every receipt report a revert.
    pub fn with_reverting_receipts(mut self) -> Self {
        self.receipt_status = false;
        self
    }

    /// Make every simulation fail with the given message.
    pub fn with_simulation_error(mut self, message: &str) -> Self {
        self.simulation_error = Some(message.to_string());
        self
    }

    /// Register a token that answers ERC-20 metadata reads.
    pub fn with_token(mut self, token: Address, details: TokenDetails) -> Self {
        self.tokens.insert(token, details);
        self
    }

    /// The hash of every submitted transaction.
    pub const fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    /// Get all simulated calls.
    pub fn simulated(&self) -> Vec<RecordedCall> {
        self.simulated.lock().unwrap().clone()
    }

    /// Get all submitted calls.
    pub fn submitted(&self) -> Vec<RecordedCall> {
        self.submitted.lock().unwrap().clone()
    }

    /// Get all tokens whose metadata was read.
    pub fn metadata_reads(&self) -> Vec<Address> {
        self.metadata_reads.lock().unwrap().clone()
    }
}

impl ChainClient for MockChainClient {
    type Error = MockError;

    async fn chain_id(&self) -> Result<u64, Self::Error> {
        Ok(self.chain_id)
    }

    async fn simulate<C>(&self, call: &ContractCall<C>) -> Result<Bytes, Self::Error>
    where
        C: SolCall + Sync,
    {
        self.simulated.lock().unwrap().push(RecordedCall::new(call));
        match &self.simulation_error {
            Some(message) => Err(MockError(message.clone())),
            None => Ok(Bytes::new()),
        }
    }

    async fn submit<C>(&self, call: &ContractCall<C>) -> Result<TxHash, Self::Error>
    where
        C: SolCall + Sync,
    {
        self.submitted.lock().unwrap().push(RecordedCall::new(call));
        Ok(self.tx_hash)
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TransactionReceipt, Self::Error> {
        Ok(fixtures::receipt(tx_hash, self.receipt_status, self.receipt_logs.clone()))
    }

    async fn token_metadata(&self, token: Address) -> Result<TokenDetails, Self::Error> {
        self.metadata_reads.lock().unwrap().push(token);
        self.tokens
            .get(&token)
            .cloned()
            .ok_or_else(|| MockError(format!("execution reverted: {token} has no code")))
    }
}

/// A mock [`GasFeeEstimator`] that captures requests, and answers per
/// destination chain.
#[derive(Debug, Clone)]
pub struct MockFeeEstimator {
    default: Result<GasFeeResponse, MockError>,
    by_destination: HashMap<String, Result<GasFeeResponse, MockError>>,
    requests: Arc<Mutex<Vec<GasFeeRequest>>>,
}

impl MockFeeEstimator {
    /// Quote `fee` wei for every destination.
    pub fn quoting(fee: u64) -> Self {
        Self::answering(Ok(GasFeeResponse::Fee(fee.to_string())))
    }

    /// Fail every request.
    pub fn failing() -> Self {
        Self::answering(Err(MockError("service unavailable".to_string())))
    }

    /// Answer every request with the given result.
    pub fn answering(response: Result<GasFeeResponse, MockError>) -> Self {
        Self { default: response, by_destination: HashMap::new(), requests: Default::default() }
    }

    /// Quote `fee` wei for the given destination.
    pub fn with_quote(mut self, destination: &str, fee: u64) -> Self {
        self.by_destination
            .insert(destination.to_string(), Ok(GasFeeResponse::Fee(fee.to_string())));
        self
    }

    /// Fail requests for the given destination.
    pub fn with_failure(mut self, destination: &str) -> Self {
        self.by_destination
            .insert(destination.to_string(), Err(MockError(format!("no route to {destination}"))));
        self
    }

    /// Get all received requests.
    pub fn requests(&self) -> Vec<GasFeeRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl GasFeeEstimator for MockFeeEstimator {
    type Error = MockError;

    async fn estimate_gas_fee(
        &self,
        request: &GasFeeRequest,
    ) -> Result<GasFeeResponse, Self::Error> {
        self.requests.lock().unwrap().push(request.clone());
        self.by_destination.get(&request.destination_chain).unwrap_or(&self.default).clone()
    }
}
