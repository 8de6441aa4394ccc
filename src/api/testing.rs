//! Recording transport for endpoint tests.

use super::client::HttpClient;
use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::config::ApiConfig;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Answers every request with a success envelope around `data` and
/// records what was sent.
pub(crate) struct StubTransport {
    data: serde_json::Value,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub(crate) fn new(data: serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            data,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn last(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }

    pub(crate) fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        let body = json!({"code": 200, "msg": "success", "data": self.data});
        Ok(HttpResponse::new(200, body.to_string()))
    }
}

pub(crate) const BASE: &str = "http://backend.test/api";

pub(crate) fn stub_client(data: serde_json::Value) -> (HttpClient, Arc<StubTransport>) {
    let transport = StubTransport::new(data);
    let client = HttpClient::builder()
        .config(ApiConfig {
            base_url: BASE.to_string(),
            ..ApiConfig::default()
        })
        .transport(transport.clone())
        .build()
        .unwrap();
    (client, transport)
}

/// Query pairs as borrowed tuples, for compact assertions.
pub(crate) fn query(request: &HttpRequest) -> Vec<(&str, &str)> {
    request
        .query
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

pub(crate) fn url(path: &str) -> String {
    format!("{BASE}{path}")
}
