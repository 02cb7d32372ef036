//! Read access to deployed contracts.
//!
//! The SDK never signs or submits transactions. Everything on-chain it needs
//! is a view call that returns a flat felt array.

use async_trait::async_trait;

use crate::domain::call::Call;
use crate::error::Result;

/// Executes view calls against the chain.
///
/// Implementations resolve the entrypoint name to its selector, send the
/// calldata as felts and return the raw result felts in order.
#[async_trait]
pub trait ContractReader: Send + Sync {
    /// Call a view entrypoint and return its raw result felts.
    async fn call(&self, call: &Call) -> Result<Vec<String>>;

    /// Reader name for logging.
    fn name(&self) -> &'static str;
}
