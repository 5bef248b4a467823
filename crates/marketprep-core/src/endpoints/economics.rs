use time::Date;

use crate::config::ApiVersion;
use crate::models::{EconomicIndicatorPoint, MarketRiskPremium, TreasuryRates};
use crate::request::QueryParams;
use crate::{FmpClient, FmpError};

/// Named series accepted by `v4/economic`. The vendor keys series by these
/// exact strings; an enum keeps typos out of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EconomicIndicator {
    Gdp,
    RealGdp,
    CpiIndex,
    InflationRate,
    UnemploymentRate,
    FederalFunds,
    RetailSales,
    ConsumerSentiment,
    DurableGoods,
    MortgageRate30Year,
}

impl EconomicIndicator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gdp => "GDP",
            Self::RealGdp => "realGDP",
            Self::CpiIndex => "CPI",
            Self::InflationRate => "inflationRate",
            Self::UnemploymentRate => "unemploymentRate",
            Self::FederalFunds => "federalFunds",
            Self::RetailSales => "retailSales",
            Self::ConsumerSentiment => "consumerSentimentIndex",
            Self::DurableGoods => "durableGoods",
            Self::MortgageRate30Year => "30YearFixedRateMortgageAverage",
        }
    }
}

/// Macro-economics endpoints (all `v4`).
#[derive(Clone)]
pub struct EconomicsEndpoint {
    client: FmpClient,
}

impl EconomicsEndpoint {
    pub(crate) fn new(client: FmpClient) -> Self {
        Self { client }
    }

    /// Treasury yield curve rows over a date window (`v4/treasury`).
    pub async fn treasury_rates(
        &self,
        from: Option<Date>,
        to: Option<Date>,
    ) -> Result<Vec<TreasuryRates>, FmpError> {
        let params = QueryParams::new().set_date("from", from).set_date("to", to);
        self.client
            .fetch_list(ApiVersion::V4, "treasury", params)
            .await
    }

    /// A named macro series, optionally windowed (`v4/economic`).
    pub async fn indicator(
        &self,
        name: EconomicIndicator,
        from: Option<Date>,
        to: Option<Date>,
    ) -> Result<Vec<EconomicIndicatorPoint>, FmpError> {
        let params = QueryParams::new()
            .set("name", name.as_str())
            .set_date("from", from)
            .set_date("to", to);
        self.client
            .fetch_list(ApiVersion::V4, "economic", params)
            .await
    }

    /// Country equity risk premiums (`v4/market_risk_premium`).
    pub async fn market_risk_premium(&self) -> Result<Vec<MarketRiskPremium>, FmpError> {
        self.client
            .fetch_list(ApiVersion::V4, "market_risk_premium", QueryParams::new())
            .await
    }
}
