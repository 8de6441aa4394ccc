//! HTTP client wrapper: single point of egress for backend calls.
//!
//! Every call runs the same pipeline:
//!
//! 1. build the URL from the configured base URL and apply the timeout
//!    (per-call override or the global default)
//! 2. attach `Authorization: Bearer <token>` when a token is stored
//! 3. send through the [`Transport`]
//! 4. on 2xx, unwrap the `{code, msg, data}` envelope and return `data`
//! 5. on any failure, emit exactly one error notification and return the
//!    error; HTTP 401 additionally clears the token and navigates to
//!    [`LOGIN_PATH`]

use super::feedback::{LogFeedback, Navigator, Notifier};
use super::token::{MemoryTokenStore, TokenStore};
use super::transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::models::is_success_code;
use crate::state::Notification;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Route the user is sent to after an HTTP 401.
pub const LOGIN_PATH: &str = "/login";

/// Message used when the backend supplies none.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Request failed";

/// User-facing message for a non-2xx HTTP status.
pub fn status_message(status: u16) -> String {
    match status {
        401 => "Not logged in or session expired".to_string(),
        403 => "Access denied".to_string(),
        404 => "Requested resource not found".to_string(),
        500 => "Server error".to_string(),
        other => format!("Request failed with status code {other}"),
    }
}

/// Per-call request options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Append a query parameter only when present.
    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Append several query parameters.
    pub fn query_pairs(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Set a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Override the client's default timeout for this call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Builder for creating an HTTP client.
pub struct HttpClientBuilder {
    config: ApiConfig,
    transport: Option<Arc<dyn Transport>>,
    tokens: Option<Arc<dyn TokenStore>>,
    notifier: Option<Arc<dyn Notifier>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl HttpClientBuilder {
    /// Create a new builder with default config.
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
            transport: None,
            tokens: None,
            notifier: None,
            navigator: None,
        }
    }

    /// Set the API configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the transport (defaults to `reqwest`).
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the token store (defaults to an in-memory store).
    pub fn token_store(mut self, tokens: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Set the notification sink (defaults to the log).
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Set the navigation sink (defaults to the log).
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Build the HTTP client.
    pub fn build(self) -> Result<HttpClient> {
        let base_url = self.config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::config("API base URL is empty"));
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let client = reqwest::Client::builder()
                    .build()
                    .map_err(|e| Error::network(e.to_string()))?;
                Arc::new(ReqwestTransport::with_client(client))
            }
        };

        Ok(HttpClient {
            base_url,
            timeout: self.config.timeout(),
            backtest_timeout: self.config.backtest_timeout(),
            transport,
            tokens: self
                .tokens
                .unwrap_or_else(|| Arc::new(MemoryTokenStore::new())),
            notifier: self.notifier.unwrap_or_else(|| Arc::new(LogFeedback)),
            navigator: self.navigator.unwrap_or_else(|| Arc::new(LogFeedback)),
        })
    }
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Backend client with unified envelope and error handling.
///
/// Cheap to clone; clones share the transport and collaborators. Calls are
/// independent and complete in no particular order.
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    timeout: Duration,
    backtest_timeout: Duration,
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("backtest_timeout", &self.backtest_timeout)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Default timeout applied to every call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Timeout for the long-running backtest call.
    pub fn backtest_timeout(&self) -> Duration {
        self.backtest_timeout
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        self.request(Method::Get, path, options).await
    }

    pub async fn post<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        self.request(Method::Post, path, options).await
    }

    pub async fn put<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        self.request(Method::Put, path, options).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.request(Method::Delete, path, options).await
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        self.request(Method::Patch, path, options).await
    }

    /// Run one call through the full pipeline.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let request = self.prepare(method, path, options);
        let started = Instant::now();

        match self.transport.send(request).await {
            Ok(response) => {
                tracing::debug!(
                    %method,
                    path,
                    status = response.status,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Backend responded"
                );
                self.interpret(method, path, response)
            }
            Err(err) => {
                tracing::warn!(%method, path, "Request failed: {}", err);
                Err(self.fail(err))
            }
        }
    }

    /// Request stage: URL, headers, timeout.
    fn prepare(&self, method: Method, path: &str, options: RequestOptions) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.tokens.get() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        HttpRequest {
            method,
            url: self.url(path),
            query: options.query,
            headers,
            body: options.body,
            timeout: options.timeout.unwrap_or(self.timeout),
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Response stage: status check, then envelope unwrapping.
    fn interpret<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        response: HttpResponse,
    ) -> Result<T> {
        if !response.is_success() {
            tracing::warn!(%method, path, status = response.status, "HTTP error");
            return Err(self.fail(Error::http(
                response.status,
                status_message(response.status),
            )));
        }

        let envelope: RawEnvelope = match serde_json::from_str(&response.body) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(%method, path, "Malformed response envelope: {}", e);
                self.notify_error(DEFAULT_FAILURE_MESSAGE);
                return Err(Error::Serialization(e));
            }
        };

        if !is_success_code(envelope.code) {
            let message = envelope
                .msg
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
            tracing::warn!(%method, path, code = envelope.code, "Backend rejected request: {}", message);
            return Err(self.fail(Error::business(envelope.code, message)));
        }

        serde_json::from_value(envelope.data).map_err(|e| {
            tracing::warn!(%method, path, "Unexpected payload shape: {}", e);
            self.notify_error(DEFAULT_FAILURE_MESSAGE);
            Error::Serialization(e)
        })
    }

    /// Surface a failure to the user exactly once and hand it back.
    fn fail(&self, err: Error) -> Error {
        self.notify_error(err.user_message());

        if err.is_unauthorized() {
            if let Err(e) = self.tokens.clear() {
                tracing::warn!("Failed to clear stored token: {}", e);
            }
            self.navigator.navigate(LOGIN_PATH);
        }

        err
    }

    fn notify_error(&self, message: impl Into<String>) {
        self.notifier.notify(Notification::error(message));
    }
}

/// Envelope as read off the wire; `data` may be absent or null.
#[derive(serde::Deserialize)]
struct RawEnvelope {
    code: i32,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::super::feedback::{MockNavigator, MockNotifier};
    use super::super::token::MockTokenStore;
    use super::super::transport::MockTransport;
    use super::*;
    use crate::state::NotificationLevel;
    use mockall::Sequence;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn respond(status: u16, body: serde_json::Value) -> MockTransport {
        let body = body.to_string();
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(move |_| Ok(HttpResponse::new(status, body.clone())));
        transport
    }

    fn no_token() -> MockTokenStore {
        let mut tokens = MockTokenStore::new();
        tokens.expect_get().returning(|| None);
        tokens
    }

    fn silent_navigator() -> MockNavigator {
        let mut navigator = MockNavigator::new();
        navigator.expect_navigate().never();
        navigator
    }

    fn client(
        transport: MockTransport,
        tokens: MockTokenStore,
        notifier: MockNotifier,
        navigator: MockNavigator,
    ) -> HttpClient {
        HttpClient::builder()
            .config(ApiConfig {
                base_url: "http://localhost:8080/api/".into(),
                ..ApiConfig::default()
            })
            .transport(Arc::new(transport))
            .token_store(Arc::new(tokens))
            .notifier(Arc::new(notifier))
            .navigator(Arc::new(navigator))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_success_codes_return_data_unchanged() {
        for code in [200, 0] {
            let data = json!({"records": [{"issue": "24001"}], "total": 1, "nested": {"x": [1, 2]}});
            let transport = respond(200, json!({"code": code, "msg": "ok", "data": data.clone()}));
            let mut notifier = MockNotifier::new();
            notifier.expect_notify().never();

            let client = client(transport, no_token(), notifier, silent_navigator());
            let got: serde_json::Value = client.get("/anything", RequestOptions::new()).await.unwrap();
            assert_eq!(got, data);
        }
    }

    #[tokio::test]
    async fn test_null_data_for_unit_payload() {
        let transport = respond(200, json!({"code": 200, "msg": "done", "data": null}));
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();

        let client = client(transport, no_token(), notifier, silent_navigator());
        let result: Result<()> = client.put("/learning/weights/1", RequestOptions::new()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_business_failure_notifies_backend_message_once() {
        let transport = respond(200, json!({"code": 500, "msg": "Draw not found", "data": null}));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.message == "Draw not found" && n.level == NotificationLevel::Error)
            .times(1)
            .return_const(());

        let client = client(transport, no_token(), notifier, silent_navigator());
        let err = client
            .get::<serde_json::Value>("/lottery/latest", RequestOptions::new())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Business { code: 500, .. }));
        assert_eq!(err.user_message(), "Draw not found");
    }

    #[tokio::test]
    async fn test_business_failure_without_message_uses_default() {
        for msg in [json!(""), json!(null)] {
            let transport = respond(200, json!({"code": 2000, "msg": msg, "data": null}));
            let mut notifier = MockNotifier::new();
            notifier
                .expect_notify()
                .withf(|n| n.message == DEFAULT_FAILURE_MESSAGE)
                .times(1)
                .return_const(());

            let client = client(transport, no_token(), notifier, silent_navigator());
            let err = client
                .get::<serde_json::Value>("/x", RequestOptions::new())
                .await
                .unwrap_err();
            assert_eq!(err.user_message(), DEFAULT_FAILURE_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_unauthorized_clears_token_then_redirects() {
        let transport = respond(401, json!({"error": "Unauthorized"}));
        let mut seq = Sequence::new();

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.message == "Not logged in or session expired")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut tokens = MockTokenStore::new();
        tokens
            .expect_get()
            .returning(|| Some("stale".to_string()));
        tokens
            .expect_clear()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate()
            .withf(|path| path == LOGIN_PATH)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let client = client(transport, tokens, notifier, navigator);
        let err = client
            .get::<serde_json::Value>("/learning/weights", RequestOptions::new())
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_mapped_statuses_do_not_navigate() {
        for (status, expected) in [
            (403, "Access denied"),
            (404, "Requested resource not found"),
            (500, "Server error"),
            (502, "Request failed with status code 502"),
        ] {
            let transport = respond(status, json!({}));
            let mut notifier = MockNotifier::new();
            notifier
                .expect_notify()
                .withf(move |n| n.message == expected)
                .times(1)
                .return_const(());
            let mut tokens = no_token();
            tokens.expect_clear().never();

            let client = client(transport, tokens, notifier, silent_navigator());
            let err = client
                .get::<serde_json::Value>("/x", RequestOptions::new())
                .await
                .unwrap_err();
            assert_eq!(err.status(), Some(status));
        }
    }

    #[tokio::test]
    async fn test_network_failure_shows_raw_message() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Err(Error::network("connection refused")));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.message == "connection refused")
            .times(1)
            .return_const(());

        let client = client(transport, no_token(), notifier, silent_navigator());
        let err = client
            .get::<serde_json::Value>("/x", RequestOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_a_transport_failure() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|req| Err(Error::Timeout(req.timeout)));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.message == "timeout of 30000ms exceeded")
            .times(1)
            .return_const(());

        let client = client(transport, no_token(), notifier, silent_navigator());
        let err = client
            .get::<serde_json::Value>("/x", RequestOptions::new())
            .await
            .unwrap_err();
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_malformed_envelope_is_rejected() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Ok(HttpResponse::new(200, "<html>gateway</html>")));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.message == DEFAULT_FAILURE_MESSAGE)
            .times(1)
            .return_const(());

        let client = client(transport, no_token(), notifier, silent_navigator());
        let err = client
            .get::<serde_json::Value>("/x", RequestOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[tokio::test]
    async fn test_request_stage_headers_url_and_timeout() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.method == Method::Post
                    && req.url == "http://localhost:8080/api/prediction/score"
                    && req.header("Authorization") == Some("Bearer abc")
                    && req.header("Content-Type") == Some("application/json")
                    && req.timeout == Duration::from_millis(30_000)
                    && req.body == Some(json!([1, 2]))
            })
            .times(1)
            .returning(|_| Ok(HttpResponse::new(200, r#"{"code":200,"msg":"","data":true}"#)));

        let mut tokens = MockTokenStore::new();
        tokens.expect_get().returning(|| Some("abc".to_string()));
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();

        let client = client(transport, tokens, notifier, silent_navigator());
        let options = RequestOptions::new().json(&[1, 2]).unwrap();
        let ok: bool = client.post("/prediction/score", options).await.unwrap();
        assert!(ok);
    }

    #[tokio::test]
    async fn test_no_authorization_header_without_token() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.header("Authorization").is_none())
            .times(1)
            .returning(|_| Ok(HttpResponse::new(200, r#"{"code":0,"msg":"","data":1}"#)));
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();

        let client = client(transport, no_token(), notifier, silent_navigator());
        let n: u32 = client.delete("/lottery/delete/1", RequestOptions::new()).await.unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn test_request_options_builder() {
        let options = RequestOptions::new()
            .query("count", 5)
            .query_opt("method", None::<String>)
            .query_opt("targetIssue", Some("24010"))
            .timeout(Duration::from_secs(120));
        assert_eq!(
            options.query,
            vec![
                ("count".to_string(), "5".to_string()),
                ("targetIssue".to_string(), "24010".to_string())
            ]
        );
        assert_eq!(options.timeout, Some(Duration::from_millis(120_000)));
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let result = HttpClient::builder()
            .config(ApiConfig {
                base_url: "  ".into(),
                ..ApiConfig::default()
            })
            .transport(Arc::new(MockTransport::new()))
            .build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_patch_uses_patch_verb() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.method == Method::Patch)
            .times(1)
            .returning(|_| Ok(HttpResponse::new(200, r#"{"code":200,"msg":"","data":null}"#)));
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();

        let client = client(transport, no_token(), notifier, silent_navigator());
        let result: Result<()> =
            tokio_test::block_on(client.patch("/learning/weights/1", RequestOptions::new()));
        assert!(result.is_ok());
    }
}
