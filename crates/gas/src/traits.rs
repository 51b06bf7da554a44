use crate::{GasFeeRequest, GasFeeResponse};
use core::future::Future;

/// A trait for fee-estimation services.
///
/// Implementors quote the fee for executing a call on a remote chain. The
/// default implementation is [`AxelarQueryClient`]; tests and alternative
/// environments substitute their own.
///
/// [`AxelarQueryClient`]: crate::AxelarQueryClient
pub trait GasFeeEstimator {
    /// The error type returned by estimation.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Estimate the fee for the described remote execution.
    fn estimate_gas_fee(
        &self,
        request: &GasFeeRequest,
    ) -> impl Future<Output = Result<GasFeeResponse, Self::Error>> + Send;
}

impl<T> GasFeeEstimator for &T
where
    T: GasFeeEstimator + Sync,
{
    type Error = T::Error;

    fn estimate_gas_fee(
        &self,
        request: &GasFeeRequest,
    ) -> impl Future<Output = Result<GasFeeResponse, Self::Error>> + Send {
        T::estimate_gas_fee(self, request)
    }
}
