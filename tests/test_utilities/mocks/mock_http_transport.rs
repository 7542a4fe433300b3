use async_trait::async_trait;
use container_cli::prelude::*;
use reqwest::header::CONTENT_TYPE;
use std::sync::{Arc, Mutex};

/// A request as seen by the transport
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// Mock HttpTransport for testing
///
/// Answers every request with the same canned response, or fails as an
/// unreachable host would.
pub struct MockHttpTransport {
    status: u16,
    content_type: String,
    body: Vec<u8>,
    should_fail: bool,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockHttpTransport {
    pub fn replying(status: u16, content_type: &str, body: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            status,
            content_type: content_type.to_string(),
            body: body.to_vec(),
            should_fail: false,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn with_failure() -> Arc<Self> {
        Arc::new(Self {
            status: 0,
            content_type: String::new(),
            body: Vec::new(),
            should_fail: true,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: request.method().to_string(),
            url: request.url().to_string(),
            content_type: request
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string),
            body: request
                .body()
                .and_then(|body| body.as_bytes())
                .map(<[u8]>::to_vec)
                .unwrap_or_default(),
        });

        if self.should_fail {
            anyhow::bail!("Mock transport failure: connection refused");
        }

        let response = http::Response::builder()
            .status(self.status)
            .header(CONTENT_TYPE, self.content_type.as_str())
            .body(self.body.clone())
            .unwrap();
        Ok(reqwest::Response::from(response))
    }
}
