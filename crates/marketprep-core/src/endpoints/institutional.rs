use time::Date;

use crate::config::ApiVersion;
use crate::models::{CikSearchResult, Form13FEntry, InstitutionalHolder};
use crate::request::{normalize_symbol, validate_query, QueryParams};
use crate::{FmpClient, FmpError};

/// Institutional-ownership endpoints (13F filings and holder rollups).
#[derive(Clone)]
pub struct InstitutionalEndpoint {
    client: FmpClient,
}

impl InstitutionalEndpoint {
    pub(crate) fn new(client: FmpClient) -> Self {
        Self { client }
    }

    /// Institutions holding a symbol (`v3/institutional-holder/{symbol}`).
    pub async fn holders(&self, symbol: &str) -> Result<Vec<InstitutionalHolder>, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        self.client
            .fetch_list(
                ApiVersion::V3,
                &format!("institutional-holder/{symbol}"),
                QueryParams::new(),
            )
            .await
    }

    /// A manager's 13F portfolio as of a quarter-end date
    /// (`v4/form-thirteen/{cik}`).
    pub async fn form_13f(&self, cik: &str, date: Date) -> Result<Vec<Form13FEntry>, FmpError> {
        let cik = cik.trim();
        if cik.is_empty() {
            return Err(FmpError::invalid_request("CIK must not be empty"));
        }
        let params = QueryParams::new().set_date("date", Some(date));
        self.client
            .fetch_list(ApiVersion::V4, &format!("form-thirteen/{cik}"), params)
            .await
    }

    /// Resolve an institution name to CIK numbers (`v3/cik-search/{name}`).
    pub async fn cik_search(&self, name: &str) -> Result<Vec<CikSearchResult>, FmpError> {
        let name = validate_query(name)?;
        self.client
            .fetch_list(
                ApiVersion::V3,
                &format!("cik-search/{}", urlencoding::encode(&name)),
                QueryParams::new(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StaticClient;
    use std::sync::Arc;
    use time::macros::date;

    fn endpoint(http: Arc<StaticClient>) -> InstitutionalEndpoint {
        let client = FmpClient::builder()
            .api_key("k")
            .http_client(http)
            .build()
            .expect("client");
        InstitutionalEndpoint::new(client)
    }

    #[tokio::test]
    async fn form_13f_url_carries_cik_and_date() {
        let http = Arc::new(StaticClient::json("[]"));
        let institutional = endpoint(http.clone());

        let _ = institutional
            .form_13f("0001067983", date!(2024 - 06 - 30))
            .await
            .expect("ok");
        assert_eq!(
            http.sole_url(),
            "https://financialmodelingprep.com/api/v4/form-thirteen/0001067983?date=2024-06-30&apikey=k"
        );
    }

    #[tokio::test]
    async fn cik_search_encodes_the_name_segment() {
        let http = Arc::new(StaticClient::json("[]"));
        let institutional = endpoint(http.clone());

        let _ = institutional
            .cik_search("Berkshire Hathaway")
            .await
            .expect("ok");
        assert_eq!(
            http.sole_url(),
            "https://financialmodelingprep.com/api/v3/cik-search/Berkshire%20Hathaway?apikey=k"
        );
    }

    #[tokio::test]
    async fn blank_cik_fails_before_dispatch() {
        let http = Arc::new(StaticClient::json("[]"));
        let institutional = endpoint(http.clone());

        let err = institutional
            .form_13f("  ", date!(2024 - 06 - 30))
            .await
            .expect_err("should fail");
        assert!(matches!(err, FmpError::InvalidRequest(_)));
        assert!(http.recorded_requests().is_empty());
    }
}
