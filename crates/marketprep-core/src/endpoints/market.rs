use crate::config::ApiVersion;
use crate::models::{MarketHours, Mover, SectorPerformance};
use crate::request::QueryParams;
use crate::{FmpClient, FmpError};

/// Market-wide snapshot endpoints.
#[derive(Clone)]
pub struct MarketEndpoint {
    client: FmpClient,
}

impl MarketEndpoint {
    pub(crate) fn new(client: FmpClient) -> Self {
        Self { client }
    }

    pub async fn gainers(&self) -> Result<Vec<Mover>, FmpError> {
        self.client
            .fetch_list(ApiVersion::V3, "stock_market/gainers", QueryParams::new())
            .await
    }

    pub async fn losers(&self) -> Result<Vec<Mover>, FmpError> {
        self.client
            .fetch_list(ApiVersion::V3, "stock_market/losers", QueryParams::new())
            .await
    }

    pub async fn most_actives(&self) -> Result<Vec<Mover>, FmpError> {
        self.client
            .fetch_list(ApiVersion::V3, "stock_market/actives", QueryParams::new())
            .await
    }

    pub async fn sector_performance(&self) -> Result<Vec<SectorPerformance>, FmpError> {
        self.client
            .fetch_list(ApiVersion::V3, "sectors-performance", QueryParams::new())
            .await
    }

    /// Exchange open/closed snapshot. Bare object response.
    pub async fn hours(&self) -> Result<MarketHours, FmpError> {
        self.client
            .fetch(ApiVersion::V3, "is-the-market-open", QueryParams::new())
            .await
    }
}
