use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

/// Outgoing request description. The vendor API is GET-only; authentication
/// travels as a query parameter, so there is no auth machinery here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub timeout: Duration,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Raw response as seen on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok_json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport-level failure, before any HTTP status exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    message: String,
    retryable: bool,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            retryable: true,
        }
    }

    pub fn non_retryable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            retryable: false,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}

/// Transport contract. Object safe so endpoint tests can swap in canned
/// responses without a network.
pub trait HttpClient: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>>;
}

/// Production transport backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Arc<reqwest::Client>,
}

impl ReqwestClient {
    pub fn new(user_agent: &str) -> Self {
        Self {
            client: Arc::new(
                reqwest::Client::builder()
                    .user_agent(user_agent)
                    .build()
                    .unwrap_or_else(|_| reqwest::Client::new()),
            ),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new(concat!("marketprep/", env!("CARGO_PKG_VERSION")))
    }
}

impl HttpClient for ReqwestClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            let mut builder = self.client.get(&request.url).timeout(request.timeout);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            tracing::debug!(url = %request.url, "dispatching GET");

            let response = builder.send().await.map_err(|e| {
                if e.is_timeout() {
                    HttpError::new(format!("request timeout: {e}"))
                } else if e.is_connect() {
                    HttpError::new(format!("connection failed: {e}"))
                } else {
                    HttpError::non_retryable(format!("request failed: {e}"))
                }
            })?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| HttpError::new(format!("failed to read response body: {e}")))?;

            Ok(HttpResponse { status, body })
        })
    }
}

/// Canned-response transport for deterministic offline tests. Records every
/// request so assertions can inspect the URLs the client built.
#[derive(Debug)]
pub struct StaticClient {
    response: Result<HttpResponse, HttpError>,
    requests: std::sync::Mutex<Vec<HttpRequest>>,
}

impl StaticClient {
    pub fn json(body: impl Into<String>) -> Self {
        Self::with_response(Ok(HttpResponse::ok_json(body)))
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::with_response(Ok(HttpResponse {
            status,
            body: body.into(),
        }))
    }

    pub fn failing(error: HttpError) -> Self {
        Self::with_response(Err(error))
    }

    pub fn with_response(response: Result<HttpResponse, HttpError>) -> Self {
        Self {
            response,
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    /// URL of the only recorded request. Panics when zero or many were made.
    pub fn sole_url(&self) -> String {
        let requests = self.recorded_requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].url.clone()
    }
}

impl HttpClient for StaticClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_lowercased() {
        let request = HttpRequest::get("https://example.test/quote")
            .with_header("X-Custom", "demo");
        assert_eq!(
            request.headers.get("x-custom").map(String::as_str),
            Some("demo")
        );
    }

    #[tokio::test]
    async fn static_client_records_requests() {
        let client = StaticClient::json("[]");
        let _ = client
            .execute(HttpRequest::get("https://example.test/a"))
            .await;
        let _ = client
            .execute(HttpRequest::get("https://example.test/b"))
            .await;

        let urls: Vec<_> = client
            .recorded_requests()
            .into_iter()
            .map(|r| r.url)
            .collect();
        assert_eq!(urls, ["https://example.test/a", "https://example.test/b"]);
    }
}
