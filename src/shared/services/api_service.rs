use serde::de::DeserializeOwned;
use serde_json::Value;

use super::fetch_wrapper::{FetchWrapper, Transport};
use super::transport::DefaultTransport;
use crate::config::ClientConfig;
use crate::domain::models::{Channel, SendFileRequest, SendFileResponse, ServerStats};
use crate::shared::constants::{CHANNELS_LIST_ENDPOINT, CHANNELS_SEND_ENDPOINT, STATS_ENDPOINT};

/// Typed client for the fileserver admin API
#[derive(Debug, Clone)]
pub struct FileserverApi<T = DefaultTransport> {
    config: ClientConfig,
    fetch: FetchWrapper<T>,
}

impl FileserverApi<DefaultTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, DefaultTransport::default())
    }
}

impl<T> FileserverApi<T>
where
    T: Transport,
    T::Error: From<serde_json::Error>,
{
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            fetch: FetchWrapper::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn fetch(&self) -> &FetchWrapper<T> {
        &self.fetch
    }

    pub async fn get_stats(&self) -> Result<ServerStats, T::Error> {
        let value = self.fetch.get(&self.config.endpoint(STATS_ENDPOINT)).await?;
        decode(value)
    }

    pub async fn list_channels(&self) -> Result<Vec<Channel>, T::Error> {
        let value = self
            .fetch
            .get(&self.config.endpoint(CHANNELS_LIST_ENDPOINT))
            .await?;
        decode(value)
    }

    /// The server answers rejected uploads with `error: true` (and a 400);
    /// that is still an `Ok` here.
    pub async fn send_file(&self, request: &SendFileRequest) -> Result<SendFileResponse, T::Error> {
        let value = self
            .fetch
            .post(&self.config.endpoint(CHANNELS_SEND_ENDPOINT), request)
            .await?;
        decode(value)
    }
}

fn decode<R: DeserializeOwned, E: From<serde_json::Error>>(value: Value) -> Result<R, E> {
    Ok(serde_json::from_value(value)?)
}
