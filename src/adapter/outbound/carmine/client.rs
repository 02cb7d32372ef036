//! Carmine backend REST client.
//!
//! Two API surfaces:
//! - **Legacy** (`/state`, `/live-prices`) returns bare JSON. A non-2xx
//!   response is an error.
//! - **Versioned** (`/v{n}/{network}/...`) wraps payloads in a
//!   `{status, data}` envelope. A non-2xx response, a failure status or an
//!   undecodable body yields `None`.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use super::dto::{
    ApiResponse, LiquidityEvent, LivePrices, PaginatedResponse, StateResponse, TopUsers,
    TradeEvent, UserPoints, VoteEvent,
};
use super::settings::CarmineApiConfig;
use super::state::PoolState;
use super::url::{versioned_url, UrlBuilder};
use crate::domain::address::sanitize_address;
use crate::domain::option::{decode_options_with_premia, OptionWithPremia};
use crate::error::Result;

/// Filters for paginated event feeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// Only events emitted by this address.
    pub address: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageQuery {
    #[must_use]
    pub fn for_address(address: &str) -> Self {
        Self {
            address: Some(address.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(address) = &self.address {
            params.push(("address", sanitize_address(address)));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        params
    }
}

/// HTTP client for the Carmine backend.
pub struct CarmineApi {
    http: HttpClient,
    config: CarmineApiConfig,
}

impl CarmineApi {
    /// Client for `api_url` with default settings.
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            config: CarmineApiConfig {
                api_url: api_url.into(),
                ..CarmineApiConfig::default()
            },
        }
    }

    #[must_use]
    pub fn from_config(config: &CarmineApiConfig) -> Self {
        let mut builder = HttpClient::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let http = builder.build().unwrap_or_else(|err| {
            warn!(error = %err, "Failed to build HTTP client, using defaults");
            HttpClient::new()
        });

        Self {
            http,
            config: config.clone(),
        }
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    async fn send_request<T>(&self, url: Url) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!(url = %url, "GET");
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    /// GET a versioned endpoint and unwrap its envelope.
    ///
    /// # Errors
    ///
    /// Only an invalid URL or a transport failure is an error.
    pub async fn api_call<T>(&self, path: &str, params: &[(&str, &str)]) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = versioned_url(
            &self.config.api_url,
            self.config.version,
            self.config.network,
            path,
            params,
        )?;
        debug!(url = %url, "GET");

        let response = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(path, status = status.as_u16(), "API request failed");
            return Ok(None);
        }

        let envelope = match response.json::<ApiResponse<T>>().await {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(path, error = %err, "Undecodable API response");
                return Ok(None);
            }
        };

        if !envelope.is_success() {
            warn!(
                path,
                status = %envelope.status,
                message = envelope.message.as_deref().unwrap_or_default(),
                "API returned failure"
            );
        }
        Ok(envelope.into_data())
    }

    async fn paginated<T>(
        &self,
        path: &str,
        query: &PageQuery,
    ) -> Result<Option<PaginatedResponse<T>>>
    where
        T: DeserializeOwned,
    {
        let owned = query.params();
        let params: Vec<(&str, &str)> = owned.iter().map(|(k, v)| (*k, v.as_str())).collect();
        self.api_call(path, &params).await
    }

    /// Indexed state of the pool behind `lp_address`.
    pub async fn pool_state(&self, lp_address: &str) -> Result<PoolState> {
        let url = UrlBuilder::new(&self.config.api_url, "/state")?
            .set_query("lp_address", &sanitize_address(lp_address))
            .into_url();
        let state: StateResponse = self.send_request(url).await?;
        Ok(state.into())
    }

    /// Current spot prices.
    pub async fn live_prices(&self) -> Result<LivePrices> {
        let url = UrlBuilder::new(&self.config.api_url, "/live-prices")?.into_url();
        self.send_request(url).await
    }

    /// Every live option with its premium, as indexed by the backend.
    ///
    /// `None` when the backend fails or any record does not decode.
    pub async fn live_options(&self) -> Result<Option<Vec<OptionWithPremia>>> {
        let Some(felts) = self.api_call::<Vec<String>>("live-options", &[]).await? else {
            return Ok(None);
        };

        match decode_options_with_premia(&felts) {
            Ok(options) => {
                info!(count = options.len(), "Fetched live options");
                Ok(Some(options))
            }
            Err(err) => {
                warn!(felts = felts.len(), error = %err, "Malformed live options");
                Ok(None)
            }
        }
    }

    /// Option trades, newest first.
    pub async fn trades(&self, query: &PageQuery) -> Result<Option<PaginatedResponse<TradeEvent>>> {
        self.paginated("trades", query).await
    }

    /// Liquidity deposits and withdrawals, newest first.
    pub async fn liquidity(
        &self,
        query: &PageQuery,
    ) -> Result<Option<PaginatedResponse<LiquidityEvent>>> {
        self.paginated("liquidity", query).await
    }

    /// Governance votes, newest first.
    pub async fn votes(&self, query: &PageQuery) -> Result<Option<PaginatedResponse<VoteEvent>>> {
        self.paginated("votes", query).await
    }

    /// Points leaderboard; includes `user`'s own entry when given.
    pub async fn top_user_points(&self, user: Option<&str>) -> Result<Option<TopUsers>> {
        match user {
            Some(user) => {
                let user = sanitize_address(user);
                self.api_call("top-user-points", &[("user_address", user.as_str())])
                    .await
            }
            None => self.api_call("top-user-points", &[]).await,
        }
    }

    /// Points of a single user.
    pub async fn user_points(&self, user: &str) -> Result<Option<UserPoints>> {
        let user = sanitize_address(user);
        self.api_call("user-points", &[("user_address", user.as_str())])
            .await
    }
}

impl std::fmt::Debug for CarmineApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarmineApi")
            .field("api_url", &self.config.api_url)
            .finish()
    }
}
