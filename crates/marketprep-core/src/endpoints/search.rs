use crate::config::ApiVersion;
use crate::models::SearchMatch;
use crate::request::{validate_limit, validate_query, QueryParams};
use crate::{FmpClient, FmpError};

/// Instrument search endpoints.
#[derive(Clone)]
pub struct SearchEndpoint {
    client: FmpClient,
}

impl SearchEndpoint {
    pub(crate) fn new(client: FmpClient) -> Self {
        Self { client }
    }

    async fn search_path(
        &self,
        path: &str,
        query: &str,
        limit: usize,
        exchange: Option<&str>,
    ) -> Result<Vec<SearchMatch>, FmpError> {
        let query = validate_query(query)?;
        let limit = validate_limit(limit)?;
        let params = QueryParams::new()
            .set("query", query)
            .set("limit", limit)
            .set_opt("exchange", exchange);
        self.client.fetch_list(ApiVersion::V3, path, params).await
    }

    /// Match against both tickers and company names (`v3/search`).
    pub async fn general(
        &self,
        query: &str,
        limit: usize,
        exchange: Option<&str>,
    ) -> Result<Vec<SearchMatch>, FmpError> {
        self.search_path("search", query, limit, exchange).await
    }

    /// Ticker-only match (`v3/search-ticker`).
    pub async fn ticker(
        &self,
        query: &str,
        limit: usize,
        exchange: Option<&str>,
    ) -> Result<Vec<SearchMatch>, FmpError> {
        self.search_path("search-ticker", query, limit, exchange).await
    }

    /// Company-name-only match (`v3/search-name`).
    pub async fn name(
        &self,
        query: &str,
        limit: usize,
        exchange: Option<&str>,
    ) -> Result<Vec<SearchMatch>, FmpError> {
        self.search_path("search-name", query, limit, exchange).await
    }
}
