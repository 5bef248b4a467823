use crate::config::ApiVersion;
use crate::models::{InsiderRosterEntry, InsiderStatistic, InsiderTrade};
use crate::request::{normalize_symbol, QueryParams};
use crate::{FmpClient, FmpError};

/// Insider-trading disclosure endpoints (all `v4`).
#[derive(Clone)]
pub struct InsiderEndpoint {
    client: FmpClient,
}

impl InsiderEndpoint {
    pub(crate) fn new(client: FmpClient) -> Self {
        Self { client }
    }

    /// Form 3/4/5 transactions for a symbol, paginated.
    pub async fn trades(&self, symbol: &str, page: usize) -> Result<Vec<InsiderTrade>, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let params = QueryParams::new().set("symbol", symbol).set("page", page);
        self.client
            .fetch_list(ApiVersion::V4, "insider-trading", params)
            .await
    }

    /// Transactions filed by a specific reporting CIK, paginated.
    pub async fn trades_by_reporting_cik(
        &self,
        cik: &str,
        page: usize,
    ) -> Result<Vec<InsiderTrade>, FmpError> {
        let cik = cik.trim();
        if cik.is_empty() {
            return Err(FmpError::invalid_request("reporting CIK must not be empty"));
        }
        let params = QueryParams::new()
            .set("reportingCik", cik)
            .set("page", page);
        self.client
            .fetch_list(ApiVersion::V4, "insider-trading", params)
            .await
    }

    /// Aggregate quarterly buy/sell statistics.
    pub async fn statistics(&self, symbol: &str) -> Result<Vec<InsiderStatistic>, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let params = QueryParams::new().set("symbol", symbol);
        self.client
            .fetch_list(ApiVersion::V4, "insider-roaster-statistic", params)
            .await
    }

    /// Current roster of reporting insiders. Path keeps the vendor's
    /// "roaster" spelling.
    pub async fn roster(&self, symbol: &str) -> Result<Vec<InsiderRosterEntry>, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let params = QueryParams::new().set("symbol", symbol);
        self.client
            .fetch_list(ApiVersion::V4, "insider-roaster", params)
            .await
    }

    /// The vendor's catalogue of transaction-type codes.
    pub async fn transaction_types(&self) -> Result<Vec<String>, FmpError> {
        self.client
            .fetch_list(
                ApiVersion::V4,
                "insider-trading-transaction-type",
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

    #[tokio::test]
    async fn trades_url_carries_symbol_and_page() {
        let http = Arc::new(StaticClient::json("[]"));
        let client = FmpClient::builder()
            .api_key("k")
            .http_client(http.clone())
            .build()
            .expect("client");
        let insider = InsiderEndpoint::new(client);

        let _ = insider.trades("aapl", 2).await.expect("ok");
        assert_eq!(
            http.sole_url(),
            "https://financialmodelingprep.com/api/v4/insider-trading?symbol=AAPL&page=2&apikey=k"
        );
    }

    #[tokio::test]
    async fn vendor_transaction_record_decodes() {
        let http = Arc::new(StaticClient::json(
            r#"[{"symbol":"AAPL","transactionType":"S-Sale","reportingName":"COOK TIMOTHY D","acquistionOrDisposition":"D","securitiesTransacted":51111,"price":223.36}]"#,
        ));
        let client = FmpClient::builder()
            .api_key("k")
            .http_client(http)
            .build()
            .expect("client");
        let insider = InsiderEndpoint::new(client);

        let trades = insider.trades("AAPL", 0).await.expect("ok");
        assert_eq!(trades[0].acquisition_or_disposition.as_deref(), Some("D"));
    }
}
