use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::{ApiVersion, ClientConfig};
use crate::http::{HttpClient, HttpRequest, ReqwestClient};
use crate::request::QueryParams;
use crate::FmpError;

/// Low-level shared client: URL assembly, API-key injection, and JSON
/// decoding. Endpoint groups hold a clone and add nothing but path/parameter
/// mapping on top.
#[derive(Clone)]
pub struct FmpClient {
    http: Arc<dyn HttpClient>,
    config: Arc<ClientConfig>,
}

impl FmpClient {
    pub fn builder() -> FmpClientBuilder {
        FmpClientBuilder::default()
    }

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Arc::new(ReqwestClient::default()),
            config: Arc::new(ClientConfig::new(api_key)),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn build_url(&self, version: ApiVersion, path: &str, params: &QueryParams) -> String {
        let base = self.config.base_for(version);
        let path = path.trim_start_matches('/');
        let mut url = format!("{base}/{path}");
        url.push('?');
        if !params.is_empty() {
            url.push_str(&params.encode());
            url.push('&');
        }
        url.push_str("apikey=");
        url.push_str(&urlencoding::encode(&self.config.api_key));
        url
    }

    async fn get_body(
        &self,
        version: ApiVersion,
        path: &str,
        params: &QueryParams,
    ) -> Result<String, FmpError> {
        if self.config.api_key.is_empty() {
            return Err(FmpError::MissingApiKey);
        }

        let url = self.build_url(version, path, params);
        let request = HttpRequest::get(&url).with_timeout(self.config.timeout);

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| FmpError::transport(e.message(), e.retryable()))?;

        if !response.is_success() {
            tracing::warn!(status = response.status, path, "upstream returned error status");
            return Err(FmpError::status(
                response.status,
                truncate_body(&response.body),
            ));
        }

        Ok(response.body)
    }

    /// GET and decode a JSON array.
    pub async fn fetch_list<T: DeserializeOwned>(
        &self,
        version: ApiVersion,
        path: &str,
        params: QueryParams,
    ) -> Result<Vec<T>, FmpError> {
        let body = self.get_body(version, path, &params).await?;
        serde_json::from_str(&body).map_err(|e| FmpError::decode(e.to_string()))
    }

    /// GET an array endpoint that semantically returns one record, and
    /// substitute the sole element. An empty array maps to `NotFound`; extra
    /// elements beyond the first are discarded, matching the vendor's habit
    /// of wrapping scalar answers in arrays.
    pub async fn fetch_one<T: DeserializeOwned>(
        &self,
        version: ApiVersion,
        path: &str,
        params: QueryParams,
        what: &str,
    ) -> Result<T, FmpError> {
        let mut items: Vec<T> = self.fetch_list(version, path, params).await?;
        if items.is_empty() {
            return Err(FmpError::not_found(what));
        }
        Ok(items.swap_remove(0))
    }

    /// GET and decode a bare JSON object.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        version: ApiVersion,
        path: &str,
        params: QueryParams,
    ) -> Result<T, FmpError> {
        let body = self.get_body(version, path, &params).await?;
        serde_json::from_str(&body).map_err(|e| FmpError::decode(e.to_string()))
    }

    /// GET and return the raw JSON value. Debug escape hatch for endpoints
    /// whose shapes have drifted from the typed models.
    pub async fn fetch_value(
        &self,
        version: ApiVersion,
        path: &str,
        params: QueryParams,
    ) -> Result<serde_json::Value, FmpError> {
        self.fetch(version, path, params).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    let trimmed = body.trim();
    if trimmed.len() <= MAX {
        trimmed.to_owned()
    } else {
        let mut end = MAX;
        while !trimmed.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &trimmed[..end])
    }
}

/// Builder for [`FmpClient`].
#[derive(Default)]
pub struct FmpClientBuilder {
    api_key: Option<String>,
    timeout: Option<Duration>,
    base_override: Option<String>,
    http: Option<Arc<dyn HttpClient>>,
}

impl FmpClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Point every API surface at a different host. Intended for tests.
    pub fn base_url(mut self, base: impl Into<String>) -> Self {
        self.base_override = Some(base.into());
        self
    }

    pub fn http_client(mut self, http: Arc<dyn HttpClient>) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Result<FmpClient, FmpError> {
        let mut config = match self.api_key {
            Some(key) => ClientConfig::new(key),
            None => ClientConfig::from_env().ok_or(FmpError::MissingApiKey)?,
        };
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        config.base_override = self.base_override;

        let user_agent = config.user_agent.clone();
        Ok(FmpClient {
            http: self
                .http
                .unwrap_or_else(|| Arc::new(ReqwestClient::new(&user_agent))),
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StaticClient;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        symbol: String,
    }

    fn client_with(http: Arc<StaticClient>) -> FmpClient {
        FmpClient::builder()
            .api_key("test-key")
            .http_client(http)
            .build()
            .expect("builder should succeed")
    }

    #[tokio::test]
    async fn appends_api_key_after_parameters() {
        let http = Arc::new(StaticClient::json("[]"));
        let client = client_with(http.clone());

        let _: Vec<Row> = client
            .fetch_list(
                ApiVersion::V3,
                "quote/AAPL",
                QueryParams::new().set("limit", 1),
            )
            .await
            .expect("fetch should succeed");

        assert_eq!(
            http.sole_url(),
            "https://financialmodelingprep.com/api/v3/quote/AAPL?limit=1&apikey=test-key"
        );
    }

    #[tokio::test]
    async fn api_key_is_sole_parameter_when_none_given() {
        let http = Arc::new(StaticClient::json("[]"));
        let client = client_with(http.clone());

        let _: Vec<Row> = client
            .fetch_list(ApiVersion::Stable, "senate-trades", QueryParams::new())
            .await
            .expect("fetch should succeed");

        assert_eq!(
            http.sole_url(),
            "https://financialmodelingprep.com/stable/senate-trades?apikey=test-key"
        );
    }

    #[tokio::test]
    async fn unwraps_single_element_arrays() {
        let http = Arc::new(StaticClient::json(r#"[{"symbol":"AAPL"}]"#));
        let client = client_with(http);

        let row: Row = client
            .fetch_one(ApiVersion::V3, "profile/AAPL", QueryParams::new(), "profile")
            .await
            .expect("fetch should succeed");
        assert_eq!(row.symbol, "AAPL");
    }

    #[tokio::test]
    async fn empty_array_maps_to_not_found() {
        let http = Arc::new(StaticClient::json("[]"));
        let client = client_with(http);

        let err = client
            .fetch_one::<Row>(
                ApiVersion::V3,
                "profile/ZZZZ",
                QueryParams::new(),
                "profile for ZZZZ",
            )
            .await
            .expect_err("empty response should error");
        assert_eq!(err, FmpError::not_found("profile for ZZZZ"));
    }

    #[tokio::test]
    async fn non_2xx_maps_to_status_error() {
        let http = Arc::new(StaticClient::status(403, "Invalid API key"));
        let client = client_with(http);

        let err = client
            .fetch_list::<Row>(ApiVersion::V3, "quote/AAPL", QueryParams::new())
            .await
            .expect_err("403 should error");
        assert_eq!(err.status_code(), 403);
    }

    #[tokio::test]
    async fn malformed_json_maps_to_decode_error() {
        let http = Arc::new(StaticClient::json("{not json"));
        let client = client_with(http);

        let err = client
            .fetch_list::<Row>(ApiVersion::V3, "quote/AAPL", QueryParams::new())
            .await
            .expect_err("bad body should error");
        assert!(matches!(err, FmpError::Decode(_)));
    }

    #[tokio::test]
    async fn empty_api_key_is_rejected_before_dispatch() {
        let http = Arc::new(StaticClient::json("[]"));
        let client = FmpClient::builder()
            .api_key("")
            .http_client(http.clone())
            .build()
            .expect("builder should succeed");

        let err = client
            .fetch_list::<Row>(ApiVersion::V3, "quote/AAPL", QueryParams::new())
            .await
            .expect_err("missing key should error");
        assert_eq!(err, FmpError::MissingApiKey);
        assert!(http.recorded_requests().is_empty());
    }
}
