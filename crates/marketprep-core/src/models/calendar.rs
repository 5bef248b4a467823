use serde::{Deserialize, Serialize};

/// Row from `v3/earning_calendar`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EarningsEvent {
    pub date: String,
    pub symbol: String,
    pub eps: Option<f64>,
    pub eps_estimated: Option<f64>,
    /// "bmo" (before market open), "amc" (after market close), or "--".
    pub time: Option<String>,
    pub revenue: Option<f64>,
    pub revenue_estimated: Option<f64>,
    pub fiscal_date_ending: Option<String>,
    pub updated_from_date: Option<String>,
}

/// Row from `v3/stock_dividend_calendar`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DividendEvent {
    pub date: String,
    pub label: Option<String>,
    pub adj_dividend: Option<f64>,
    pub symbol: String,
    pub dividend: Option<f64>,
    pub record_date: Option<String>,
    pub payment_date: Option<String>,
    pub declaration_date: Option<String>,
}

/// Row from `v3/stock_split_calendar`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SplitEvent {
    pub date: String,
    pub label: Option<String>,
    pub symbol: String,
    pub numerator: Option<f64>,
    pub denominator: Option<f64>,
}

/// Row from `v3/ipo_calendar`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IpoEvent {
    pub date: String,
    pub company: String,
    pub symbol: String,
    pub exchange: Option<String>,
    pub actions: Option<String>,
    pub shares: Option<f64>,
    pub price_range: Option<String>,
    pub market_cap: Option<f64>,
}
