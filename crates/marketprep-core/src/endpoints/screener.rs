use crate::config::ApiVersion;
use crate::models::ScreenerMatch;
use crate::request::QueryParams;
use crate::{FmpClient, FmpError};

/// Typed filter set for `v3/stock-screener`. Unset fields are omitted from
/// the query string entirely; the vendor treats absence as "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenerQuery {
    pub market_cap_more_than: Option<f64>,
    pub market_cap_lower_than: Option<f64>,
    pub price_more_than: Option<f64>,
    pub price_lower_than: Option<f64>,
    pub beta_more_than: Option<f64>,
    pub beta_lower_than: Option<f64>,
    pub volume_more_than: Option<u64>,
    pub volume_lower_than: Option<u64>,
    pub dividend_more_than: Option<f64>,
    pub dividend_lower_than: Option<f64>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub exchange: Option<String>,
    pub country: Option<String>,
    pub is_etf: Option<bool>,
    pub is_actively_trading: Option<bool>,
    pub limit: Option<usize>,
}

impl ScreenerQuery {
    fn into_params(self) -> QueryParams {
        QueryParams::new()
            .set_opt("marketCapMoreThan", self.market_cap_more_than)
            .set_opt("marketCapLowerThan", self.market_cap_lower_than)
            .set_opt("priceMoreThan", self.price_more_than)
            .set_opt("priceLowerThan", self.price_lower_than)
            .set_opt("betaMoreThan", self.beta_more_than)
            .set_opt("betaLowerThan", self.beta_lower_than)
            .set_opt("volumeMoreThan", self.volume_more_than)
            .set_opt("volumeLowerThan", self.volume_lower_than)
            .set_opt("dividendMoreThan", self.dividend_more_than)
            .set_opt("dividendLowerThan", self.dividend_lower_than)
            .set_opt("sector", self.sector)
            .set_opt("industry", self.industry)
            .set_opt("exchange", self.exchange)
            .set_opt("country", self.country)
            .set_bool("isEtf", self.is_etf)
            .set_bool("isActivelyTrading", self.is_actively_trading)
            .set_opt("limit", self.limit)
    }
}

/// Stock screener endpoint.
#[derive(Clone)]
pub struct ScreenerEndpoint {
    client: FmpClient,
}

impl ScreenerEndpoint {
    pub(crate) fn new(client: FmpClient) -> Self {
        Self { client }
    }

    pub async fn run(&self, query: ScreenerQuery) -> Result<Vec<ScreenerMatch>, FmpError> {
        self.client
            .fetch_list(ApiVersion::V3, "stock-screener", query.into_params())
            .await
    }
}
