use crate::config::ApiVersion;
use crate::models::{IndustryClassification, SecFiling, SecRssItem};
use crate::request::{normalize_symbol, QueryParams};
use crate::{FmpClient, FmpError};

/// SEC filing and classification endpoints.
#[derive(Clone)]
pub struct SecEndpoint {
    client: FmpClient,
}

impl SecEndpoint {
    pub(crate) fn new(client: FmpClient) -> Self {
        Self { client }
    }

    /// Filings for a symbol (`v3/sec_filings/{symbol}`), optionally
    /// restricted to a form type such as `10-K`.
    pub async fn filings(
        &self,
        symbol: &str,
        form_type: Option<&str>,
        page: usize,
    ) -> Result<Vec<SecFiling>, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let params = QueryParams::new()
            .set_opt("type", form_type)
            .set("page", page);
        self.client
            .fetch_list(ApiVersion::V3, &format!("sec_filings/{symbol}"), params)
            .await
    }

    /// Live feed of filings as they land on EDGAR (`v4/rss_feed`).
    pub async fn rss_feed(&self, page: usize) -> Result<Vec<SecRssItem>, FmpError> {
        let params = QueryParams::new().set("page", page);
        self.client
            .fetch_list(ApiVersion::V4, "rss_feed", params)
            .await
    }

    /// SIC code and industry title for a symbol
    /// (`v4/standard_industrial_classification`).
    pub async fn industry_classification(
        &self,
        symbol: &str,
    ) -> Result<Vec<IndustryClassification>, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let params = QueryParams::new().set("symbol", symbol);
        self.client
            .fetch_list(
                ApiVersion::V4,
                "standard_industrial_classification",
                params,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StaticClient;
    use std::sync::Arc;

    fn endpoint(http: Arc<StaticClient>) -> SecEndpoint {
        let client = FmpClient::builder()
            .api_key("k")
            .http_client(http)
            .build()
            .expect("client");
        SecEndpoint::new(client)
    }

    #[tokio::test]
    async fn form_type_filter_is_optional() {
        let http = Arc::new(StaticClient::json("[]"));
        let sec = endpoint(http.clone());

        let _ = sec.filings("AAPL", None, 0).await.expect("ok");
        assert_eq!(
            http.sole_url(),
            "https://financialmodelingprep.com/api/v3/sec_filings/AAPL?page=0&apikey=k"
        );
    }

    #[tokio::test]
    async fn form_type_filter_is_forwarded() {
        let http = Arc::new(StaticClient::json("[]"));
        let sec = endpoint(http.clone());

        let _ = sec.filings("AAPL", Some("10-K"), 1).await.expect("ok");
        assert_eq!(
            http.sole_url(),
            "https://financialmodelingprep.com/api/v3/sec_filings/AAPL?type=10-K&page=1&apikey=k"
        );
    }
}
