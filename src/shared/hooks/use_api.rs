use dioxus::prelude::*;

use crate::config::ClientConfig;
use crate::shared::services::FileserverApi;

/// Provide the API client to the component tree
pub fn use_provide_api(config: ClientConfig) -> FileserverApi {
    use_context_provider(move || {
        tracing::info!("Fileserver API at {}", config.api_base_url);
        FileserverApi::new(config)
    })
}

pub fn use_api() -> FileserverApi {
    use_context::<FileserverApi>()
}
