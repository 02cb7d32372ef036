//! URL construction for the backend.
//!
//! Legacy endpoints resolve a path against the base URL. Versioned endpoints
//! live under `{base}/v{version}/{network}/`.

use url::Url;

use super::settings::Network;
use crate::error::Result;

/// Builds a legacy endpoint URL.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base: String,
    url: Url,
}

impl UrlBuilder {
    /// Resolve `path` against `base`.
    ///
    /// An absolute `path` replaces any path on `base`, matching browser URL
    /// resolution.
    pub fn new(base: &str, path: &str) -> Result<Self> {
        let url = Url::parse(base)?.join(path)?;
        Ok(Self {
            base: base.to_string(),
            url,
        })
    }

    /// The base URL as configured.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Set `key` to `value`, replacing any earlier value for the key.
    #[must_use]
    pub fn set_query(mut self, key: &str, value: &str) -> Self {
        let mut pairs: Vec<(String, String)> = self.url.query_pairs().into_owned().collect();

        let mut replaced = false;
        pairs.retain_mut(|(k, v)| {
            if k.as_str() != key {
                return true;
            }
            if replaced {
                return false;
            }
            value.clone_into(v);
            replaced = true;
            true
        });
        if !replaced {
            pairs.push((key.to_string(), value.to_string()));
        }

        self.url.query_pairs_mut().clear().extend_pairs(pairs.iter());
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    #[must_use]
    pub fn into_url(self) -> Url {
        self.url
    }
}

/// `{api_url}/v{version}/{network}/{path}` with `params` appended in order.
pub fn versioned_url(
    api_url: &str,
    version: u32,
    network: Network,
    path: &str,
    params: &[(&str, &str)],
) -> Result<Url> {
    let api_url = api_url.trim_end_matches('/');
    let mut url = Url::parse(&format!("{api_url}/v{version}/{network}/{path}"))?;
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params);
    }
    Ok(url)
}
