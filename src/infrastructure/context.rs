//! Dependency-injected SDK context.
//!
//! Holds the configuration and lazily creates the network clients. Clients
//! are created once and shared until [`SdkContext::reset`].

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

use super::config::Config;
use crate::adapter::outbound::carmine::CarmineApi;
use crate::adapter::outbound::starknet::RpcProvider;
use crate::application::Contracts;

/// Configuration plus memoized network clients.
pub struct SdkContext {
    config: Config,
    provider: Mutex<Option<Arc<RpcProvider>>>,
    api: Mutex<Option<Arc<CarmineApi>>>,
}

impl SdkContext {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            provider: Mutex::new(None),
            api: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The Starknet provider, created on first use.
    #[must_use]
    pub fn provider(&self) -> Arc<RpcProvider> {
        let mut slot = self.provider.lock();
        Arc::clone(slot.get_or_insert_with(|| {
            info!(url = %self.config.starknet.rpc_url, "Creating Starknet provider");
            Arc::new(RpcProvider::from_config(&self.config.starknet))
        }))
    }

    /// Contract bindings over [`Self::provider`].
    #[must_use]
    pub fn contracts(&self) -> Contracts {
        Contracts::new(self.provider())
    }

    /// The REST client, created on first use.
    #[must_use]
    pub fn api(&self) -> Arc<CarmineApi> {
        let mut slot = self.api.lock();
        Arc::clone(slot.get_or_insert_with(|| {
            info!(url = %self.config.api.api_url, "Creating Carmine API client");
            Arc::new(CarmineApi::from_config(&self.config.api))
        }))
    }

    /// Drop memoized clients; the next access creates fresh ones.
    pub fn reset(&self) {
        *self.provider.lock() = None;
        *self.api.lock() = None;
    }
}

impl std::fmt::Debug for SdkContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkContext")
            .field("rpc_url", &self.config.starknet.rpc_url)
            .field("api_url", &self.config.api.api_url)
            .finish()
    }
}
