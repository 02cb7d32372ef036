//! Canonical test configurations.

use crate::infrastructure::config::Config;

/// Config pointing both endpoints at `server_url`, typically a mockito
/// server.
pub fn local(server_url: &str) -> Config {
    Config::with_urls(Some(server_url.to_string()), Some(server_url.to_string()))
}
