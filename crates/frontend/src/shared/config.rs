//! Remote API configuration.
//!
//! The network-asset API lives on a fixed external host, but the base URL
//! is injected through context instead of being compiled into call sites,
//! so staging builds and tests can substitute their own origin.

use leptos::prelude::*;

/// Production network-asset API host.
const DEFAULT_API_BASE: &str = "https://networkasset-conductor.link-labs.com";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Hook to read the injected API configuration
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().expect("ApiConfig not found in component tree")
}
