use crate::config::ApiVersion;
use crate::models::{
    CompanyProfile, EmployeeCount, Executive, MarketCap, SharesFloat, StockPeers,
};
use crate::request::{normalize_symbol, QueryParams};
use crate::{FmpClient, FmpError};

/// Company reference-data endpoints.
#[derive(Clone)]
pub struct CompanyEndpoint {
    client: FmpClient,
}

impl CompanyEndpoint {
    pub(crate) fn new(client: FmpClient) -> Self {
        Self { client }
    }

    /// Company profile (`v3/profile/{symbol}`).
    pub async fn profile(&self, symbol: &str) -> Result<CompanyProfile, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        self.client
            .fetch_one(
                ApiVersion::V3,
                &format!("profile/{symbol}"),
                QueryParams::new(),
                &format!("profile for {symbol}"),
            )
            .await
    }

    pub async fn executives(&self, symbol: &str) -> Result<Vec<Executive>, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        self.client
            .fetch_list(
                ApiVersion::V3,
                &format!("key-executives/{symbol}"),
                QueryParams::new(),
            )
            .await
    }

    pub async fn market_cap(&self, symbol: &str) -> Result<MarketCap, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        self.client
            .fetch_one(
                ApiVersion::V3,
                &format!("market-capitalization/{symbol}"),
                QueryParams::new(),
                &format!("market cap for {symbol}"),
            )
            .await
    }

    /// Head-count history as filed (`v4/employee_count`).
    pub async fn employee_count(&self, symbol: &str) -> Result<Vec<EmployeeCount>, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let params = QueryParams::new().set("symbol", symbol);
        self.client
            .fetch_list(ApiVersion::V4, "employee_count", params)
            .await
    }

    /// Exchange/sector peer group (`v4/stock_peers`).
    pub async fn peers(&self, symbol: &str) -> Result<StockPeers, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let params = QueryParams::new().set("symbol", &symbol);
        self.client
            .fetch_one(
                ApiVersion::V4,
                "stock_peers",
                params,
                &format!("peers for {symbol}"),
            )
            .await
    }

    /// Free-float breakdown (`v4/shares_float`).
    pub async fn shares_float(&self, symbol: &str) -> Result<SharesFloat, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let params = QueryParams::new().set("symbol", &symbol);
        self.client
            .fetch_one(
                ApiVersion::V4,
                "shares_float",
                params,
                &format!("shares float for {symbol}"),
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
    async fn v4_endpoints_pass_symbol_as_query_parameter() {
        let http = Arc::new(StaticClient::json(
            r#"[{"symbol":"AAPL","peersList":["MSFT","GOOGL"]}]"#,
        ));
        let client = FmpClient::builder()
            .api_key("k")
            .http_client(http.clone())
            .build()
            .expect("client");
        let company = CompanyEndpoint::new(client);

        let peers = company.peers("aapl").await.expect("ok");
        assert_eq!(peers.peers_list, ["MSFT", "GOOGL"]);
        assert_eq!(
            http.sole_url(),
            "https://financialmodelingprep.com/api/v4/stock_peers?symbol=AAPL&apikey=k"
        );
    }
}
