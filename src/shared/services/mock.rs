//! Recording transport for tests

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;

use super::fetch_wrapper::{RequestDescriptor, Transport, TransportResponse};

#[derive(Debug, Clone, PartialEq)]
pub enum MockError {
    Transport(u32),
    Decode(String),
}

impl From<serde_json::Error> for MockError {
    fn from(err: serde_json::Error) -> Self {
        MockError::Decode(err.to_string())
    }
}

pub struct MockResponse {
    status: u16,
    body: String,
}

#[async_trait(?Send)]
impl TransportResponse for MockResponse {
    type Error = MockError;

    fn status(&self) -> u16 {
        self.status
    }

    async fn json(self) -> Result<Value, MockError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Replays queued outcomes in order and records every request
#[derive(Default)]
pub struct MockTransport {
    requests: RefCell<Vec<(String, RequestDescriptor)>>,
    outcomes: RefCell<VecDeque<Result<(u16, String), MockError>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.outcomes
            .borrow_mut()
            .push_back(Ok((status, body.to_string())));
    }

    pub fn fail(&self, error: MockError) {
        self.outcomes.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<(String, RequestDescriptor)> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    type Error = MockError;
    type Response = MockResponse;

    async fn fetch(&self, url: &str, request: RequestDescriptor) -> Result<MockResponse, MockError> {
        self.requests.borrow_mut().push((url.to_string(), request));
        let outcome = self
            .outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(MockError::Transport(0)));
        outcome.map(|(status, body)| MockResponse { status, body })
    }
}
