use crate::config::ApiVersion;
use crate::models::{CountryWeighting, EtfHolding, EtfInfo, SectorWeighting};
use crate::request::{normalize_symbol, QueryParams};
use crate::{FmpClient, FmpError};

/// ETF composition endpoints.
#[derive(Clone)]
pub struct EtfEndpoint {
    client: FmpClient,
}

impl EtfEndpoint {
    pub(crate) fn new(client: FmpClient) -> Self {
        Self { client }
    }

    /// Constituents of an ETF (`v3/etf-holder/{symbol}`).
    pub async fn holdings(&self, symbol: &str) -> Result<Vec<EtfHolding>, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        self.client
            .fetch_list(
                ApiVersion::V3,
                &format!("etf-holder/{symbol}"),
                QueryParams::new(),
            )
            .await
    }

    /// Fund profile: expense ratio, AUM, inception (`v4/etf-info`).
    pub async fn info(&self, symbol: &str) -> Result<EtfInfo, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let params = QueryParams::new().set("symbol", &symbol);
        self.client
            .fetch_one(
                ApiVersion::V4,
                "etf-info",
                params,
                &format!("ETF info for {symbol}"),
            )
            .await
    }

    /// Sector weights (`v3/etf-sector-weightings/{symbol}`).
    pub async fn sector_weightings(&self, symbol: &str) -> Result<Vec<SectorWeighting>, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        self.client
            .fetch_list(
                ApiVersion::V3,
                &format!("etf-sector-weightings/{symbol}"),
                QueryParams::new(),
            )
            .await
    }

    /// Country weights (`v3/etf-country-weightings/{symbol}`).
    pub async fn country_weightings(
        &self,
        symbol: &str,
    ) -> Result<Vec<CountryWeighting>, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        self.client
            .fetch_list(
                ApiVersion::V3,
                &format!("etf-country-weightings/{symbol}"),
                QueryParams::new(),
            )
            .await
    }
}
