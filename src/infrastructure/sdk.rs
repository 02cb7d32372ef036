//! Process-wide SDK handle.
//!
//! A thin resettable wrapper around one [`SdkContext`] for callers that do
//! not thread a context through. Libraries should prefer passing an
//! [`SdkContext`] explicitly.

use std::sync::Arc;

use parking_lot::{const_rwlock, RwLock};
use tracing::info;

use super::config::Config;
use super::context::SdkContext;
use crate::error::{ConfigError, Result};

static CONTEXT: RwLock<Option<Arc<SdkContext>>> = const_rwlock(None);

/// Install `config` as the process-wide configuration, replacing any
/// earlier one.
pub fn init(config: Config) -> Arc<SdkContext> {
    info!(
        rpc_url = %config.starknet.rpc_url,
        api_url = %config.api.api_url,
        "Initializing Carmine SDK"
    );
    let context = Arc::new(SdkContext::new(config));
    *CONTEXT.write() = Some(Arc::clone(&context));
    context
}

/// The installed context.
///
/// # Errors
///
/// Returns [`ConfigError::NotInitialized`] before [`init`].
pub fn context() -> Result<Arc<SdkContext>> {
    CONTEXT
        .read()
        .clone()
        .ok_or_else(|| ConfigError::NotInitialized.into())
}

/// The installed configuration.
///
/// # Errors
///
/// Returns [`ConfigError::NotInitialized`] before [`init`].
pub fn config() -> Result<Config> {
    Ok(context()?.config().clone())
}

/// Forget the installed context.
pub fn reset() {
    *CONTEXT.write() = None;
}
