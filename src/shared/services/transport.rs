//! Platform transports: gloo-net in the browser, reqwest elsewhere

use async_trait::async_trait;
use serde_json::Value;

use super::fetch_wrapper::{Method, RequestDescriptor, Transport, TransportResponse};
use crate::shared::errors::FetchError;

#[cfg(target_arch = "wasm32")]
pub type DefaultTransport = GlooTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultTransport = ReqwestTransport;

// ============================================
// Browser (window.fetch through gloo-net)
// ============================================

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[cfg(target_arch = "wasm32")]
pub struct GlooResponse(gloo_net::http::Response);

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl TransportResponse for GlooResponse {
    type Error = FetchError;

    fn status(&self) -> u16 {
        self.0.status()
    }

    async fn json(self) -> Result<Value, FetchError> {
        Ok(self.0.json::<Value>().await?)
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport for GlooTransport {
    type Error = FetchError;
    type Response = GlooResponse;

    async fn fetch(&self, url: &str, request: RequestDescriptor) -> Result<GlooResponse, FetchError> {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = match request.body {
            Some(body) => builder.body(body)?.send().await?,
            None => builder.send().await?,
        };
        Ok(GlooResponse(response))
    }
}

// ============================================
// Native (reqwest)
// ============================================

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestTransport {
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub struct ReqwestResponse(reqwest::Response);

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl TransportResponse for ReqwestResponse {
    type Error = FetchError;

    fn status(&self) -> u16 {
        self.0.status().as_u16()
    }

    async fn json(self) -> Result<Value, FetchError> {
        Ok(self.0.json::<Value>().await?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    type Error = FetchError;
    type Response = ReqwestResponse;

    async fn fetch(&self, url: &str, request: RequestDescriptor) -> Result<ReqwestResponse, FetchError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        Ok(ReqwestResponse(builder.send().await?))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::shared::services::FetchWrapper;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Answer exactly one request with `status` and `body`; the handle yields
    /// the raw request text.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/stats", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            request
        });

        (url, handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut data = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let read = socket.read(&mut chunk).await.unwrap();
            if read == 0 {
                break;
            }
            data.extend_from_slice(&chunk[..read]);

            let text = String::from_utf8_lossy(&data);
            if let Some(head_end) = text.find("\r\n\r\n") {
                let length = text[..head_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        if name.eq_ignore_ascii_case("content-length") {
                            value.trim().parse::<usize>().ok()
                        } else {
                            None
                        }
                    })
                    .unwrap_or(0);
                if data.len() >= head_end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&data).into_owned()
    }

    #[tokio::test]
    async fn test_malformed_url_surfaces_as_network_error() {
        let transport = ReqwestTransport::default();
        let result = transport.fetch("not a url", RequestDescriptor::get()).await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn test_not_found_with_json_body_resolves() {
        let (url, server) = serve_once("404 Not Found", r#"{"error":"missing"}"#).await;
        let wrapper = FetchWrapper::new(ReqwestTransport::default());

        let value = wrapper.get(&url).await.unwrap();
        assert_eq!(value, json!({ "error": "missing" }));

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /stats HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_rejected() {
        let (url, server) = serve_once("200 OK", "<html>oops</html>").await;
        let wrapper = FetchWrapper::new(ReqwestTransport::default());

        let result = wrapper.get(&url).await;
        assert!(matches!(result, Err(FetchError::Network(_))));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_post_sends_json_body_and_header() {
        let (url, server) = serve_once("200 OK", r#"{"error":false,"message":"ok"}"#).await;
        let wrapper = FetchWrapper::new(ReqwestTransport::default());

        let value = wrapper.post(&url, &json!({ "channel": "docs" })).await.unwrap();
        assert_eq!(value["message"], "ok");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /stats HTTP/1.1"));
        assert!(request.to_lowercase().contains("content-type: application/json"));
        assert!(request.ends_with(r#"{"channel":"docs"}"#));
    }
}
