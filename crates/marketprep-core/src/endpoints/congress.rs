use crate::config::ApiVersion;
use crate::models::{HouseTrade, SenateTrade};
use crate::request::{normalize_symbol, QueryParams};
use crate::{FmpClient, FmpError};

/// Congressional trading disclosures. These ride the vendor's `stable`
/// surface rather than the versioned ones.
#[derive(Clone)]
pub struct CongressEndpoint {
    client: FmpClient,
}

impl CongressEndpoint {
    pub(crate) fn new(client: FmpClient) -> Self {
        Self { client }
    }

    /// Senate disclosures mentioning a symbol.
    pub async fn senate_trades(&self, symbol: &str) -> Result<Vec<SenateTrade>, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let params = QueryParams::new().set("symbol", symbol);
        self.client
            .fetch_list(ApiVersion::Stable, "senate-trades", params)
            .await
    }

    /// House disclosures mentioning a symbol.
    pub async fn house_trades(&self, symbol: &str) -> Result<Vec<HouseTrade>, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let params = QueryParams::new().set("symbol", symbol);
        self.client
            .fetch_list(ApiVersion::Stable, "house-trades", params)
            .await
    }

    /// Most recent Senate filings across all symbols, paginated.
    pub async fn senate_latest(&self, page: usize) -> Result<Vec<SenateTrade>, FmpError> {
        let params = QueryParams::new().set("page", page);
        self.client
            .fetch_list(ApiVersion::Stable, "senate-latest", params)
            .await
    }

    /// Most recent House filings across all symbols, paginated.
    pub async fn house_latest(&self, page: usize) -> Result<Vec<HouseTrade>, FmpError> {
        let params = QueryParams::new().set("page", page);
        self.client
            .fetch_list(ApiVersion::Stable, "house-latest", params)
            .await
    }
}
