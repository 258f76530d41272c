//! Minimal JSON-over-HTTP wrapper
//!
//! `get` and `post` issue exactly one request through a [`Transport`] and
//! decode the response body as JSON. The status code is never inspected: a
//! 404 or 500 with a JSON body resolves with that body. Failures are the
//! transport's own error values, returned as-is.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::shared::constants::{CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE};
use crate::shared::logging::{log_http_request, log_http_response};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Method, headers and body of one outbound call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestDescriptor {
    /// GET with no headers and no body
    pub fn get() -> Self {
        Self {
            method: Method::Get,
            headers: Vec::new(),
            body: None,
        }
    }

    /// POST carrying `body` as JSON text
    pub fn post_json<B: Serialize + ?Sized>(body: &B) -> Result<Self, serde_json::Error> {
        Ok(Self {
            method: Method::Post,
            headers: vec![(CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string())],
            body: Some(serde_json::to_string(body)?),
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Response handed back by a [`Transport`]
#[async_trait(?Send)]
pub trait TransportResponse {
    type Error;

    fn status(&self) -> u16;

    /// Consume the body and decode it as JSON
    async fn json(self) -> Result<Value, Self::Error>;
}

/// Platform fetch primitive: `(url, descriptor) -> response`
#[async_trait(?Send)]
pub trait Transport {
    type Error;
    type Response: TransportResponse<Error = Self::Error>;

    async fn fetch(
        &self,
        url: &str,
        request: RequestDescriptor,
    ) -> Result<Self::Response, Self::Error>;
}

/// `get`/`post` helpers over a transport
#[derive(Debug, Clone, Default)]
pub struct FetchWrapper<T> {
    transport: T,
}

impl<T: Transport> FetchWrapper<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn get(&self, url: &str) -> Result<Value, T::Error> {
        self.send(url, RequestDescriptor::get()).await
    }

    /// Serialization failures are reported before anything goes on the wire.
    pub async fn post<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<Value, T::Error>
    where
        T::Error: From<serde_json::Error>,
    {
        let request = RequestDescriptor::post_json(body)?;
        self.send(url, request).await
    }

    async fn send(&self, url: &str, request: RequestDescriptor) -> Result<Value, T::Error> {
        let method = request.method;
        log_http_request(method.as_str(), url);

        let response = self.transport.fetch(url, request).await?;
        log_http_response(method.as_str(), url, response.status());

        response.json().await
    }
}
