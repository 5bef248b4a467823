use serde::{Deserialize, Serialize};

/// Daily treasury curve from `v4/treasury`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreasuryRates {
    pub date: String,
    pub month1: Option<f64>,
    pub month2: Option<f64>,
    pub month3: Option<f64>,
    pub month6: Option<f64>,
    pub year1: Option<f64>,
    pub year2: Option<f64>,
    pub year3: Option<f64>,
    pub year5: Option<f64>,
    pub year7: Option<f64>,
    pub year10: Option<f64>,
    pub year20: Option<f64>,
    pub year30: Option<f64>,
}

/// Time-series point from `v4/economic?name=...`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicIndicatorPoint {
    pub date: String,
    pub value: Option<f64>,
}

/// Per-country premium from `v4/market_risk_premium`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketRiskPremium {
    pub country: String,
    pub continent: Option<String>,
    pub total_equity_risk_premium: Option<f64>,
    pub country_risk_premium: Option<f64>,
}
