use serde::{Deserialize, Serialize};

/// Constituent from `v3/etf-holder/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EtfHolding {
    pub asset: String,
    pub name: Option<String>,
    pub isin: Option<String>,
    pub cusip: Option<String>,
    pub shares_number: Option<f64>,
    pub weight_percentage: Option<f64>,
    pub market_value: Option<f64>,
    pub updated: Option<String>,
}

/// Fund profile from `v4/etf-info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EtfInfo {
    pub symbol: String,
    pub name: Option<String>,
    pub asset_class: Option<String>,
    pub aum: Option<f64>,
    pub avg_volume: Option<f64>,
    pub cusip: Option<String>,
    pub isin: Option<String>,
    pub description: Option<String>,
    pub domicile: Option<String>,
    pub etf_company: Option<String>,
    pub expense_ratio: Option<f64>,
    pub inception_date: Option<String>,
    pub nav: Option<f64>,
    pub nav_currency: Option<String>,
    pub website: Option<String>,
}

/// Row from `v3/etf-sector-weightings/{symbol}`. Percentage arrives as a
/// string like `"27.18%"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectorWeighting {
    pub sector: String,
    pub weight_percentage: String,
}

/// Row from `v3/etf-country-weightings/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountryWeighting {
    pub country: String,
    pub weight_percentage: String,
}
