use serde::{Deserialize, Serialize};

/// Company profile from `v3/profile/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyProfile {
    pub symbol: String,
    pub price: Option<f64>,
    pub beta: Option<f64>,
    pub vol_avg: Option<u64>,
    pub mkt_cap: Option<f64>,
    pub last_div: Option<f64>,
    pub range: Option<String>,
    pub changes: Option<f64>,
    pub company_name: String,
    pub currency: Option<String>,
    pub cik: Option<String>,
    pub isin: Option<String>,
    pub cusip: Option<String>,
    pub exchange: Option<String>,
    pub exchange_short_name: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub ceo: Option<String>,
    pub sector: Option<String>,
    pub country: Option<String>,
    /// The vendor serializes the head count as a string.
    pub full_time_employees: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub image: Option<String>,
    pub ipo_date: Option<String>,
    pub is_etf: Option<bool>,
    pub is_actively_trading: Option<bool>,
}

/// Key executive record from `v3/key-executives/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Executive {
    pub title: String,
    pub name: String,
    pub pay: Option<f64>,
    pub currency_pay: Option<String>,
    pub gender: Option<String>,
    pub year_born: Option<i32>,
    pub title_since: Option<i64>,
}

/// Point-in-time market capitalization, `v3/market-capitalization/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketCap {
    pub symbol: String,
    pub date: String,
    pub market_cap: f64,
}

/// Filed employee count from `v4/employee_count`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeCount {
    pub symbol: String,
    pub cik: Option<String>,
    pub acceptance_time: Option<String>,
    pub period_of_report: Option<String>,
    pub company_name: Option<String>,
    pub form_type: Option<String>,
    pub filing_date: Option<String>,
    pub employee_count: Option<u64>,
    pub source: Option<String>,
}

/// Peer list from `v4/stock_peers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockPeers {
    pub symbol: String,
    pub peers_list: Vec<String>,
}

/// Float breakdown from `v4/shares_float`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SharesFloat {
    pub symbol: String,
    pub free_float: Option<f64>,
    pub float_shares: Option<f64>,
    pub outstanding_shares: Option<f64>,
    pub source: Option<String>,
    pub date: Option<String>,
}
