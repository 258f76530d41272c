use thiserror::Error;

/// Error produced by the concrete transports.
///
/// `Network` carries the platform client's error untouched: it covers both
/// transport failures and bodies that are not valid JSON.
#[derive(Debug, Error)]
pub enum FetchError {
    #[cfg(target_arch = "wasm32")]
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Invalid route table. Always fatal at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteConfigError {
    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),

    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    #[error("Invalid route path (must start with '/'): {0:?}")]
    InvalidPath(String),
}
