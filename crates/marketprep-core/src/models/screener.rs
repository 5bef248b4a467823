use serde::{Deserialize, Serialize};

/// Row from `v3/stock-screener`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreenerMatch {
    pub symbol: String,
    pub company_name: String,
    pub market_cap: Option<f64>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub beta: Option<f64>,
    pub price: Option<f64>,
    pub last_annual_dividend: Option<f64>,
    pub volume: Option<u64>,
    pub exchange: Option<String>,
    pub exchange_short_name: Option<String>,
    pub country: Option<String>,
    pub is_etf: Option<bool>,
    pub is_actively_trading: Option<bool>,
}
