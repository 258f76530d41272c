//! Client configuration

use serde::{Deserialize, Serialize};

use crate::shared::constants::{API_PORT, DEFAULT_API_BASE_URL};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the fileserver admin API, without trailing slash
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            api_base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// In the browser the API is expected on the page's host at the API port.
    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Self {
        let location = web_sys::window().map(|window| window.location());
        let origin = location.and_then(|location| {
            let protocol = location.protocol().ok()?;
            let hostname = location.hostname().ok()?;
            Some(format!("{}//{}:{}", protocol, hostname, API_PORT))
        });

        match origin {
            Some(base_url) if !base_url.contains("//:") => Self::with_base_url(base_url),
            _ => Self::default(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect() -> Self {
        Self::default()
    }

    /// Join the base URL and an endpoint path with a single slash
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}
