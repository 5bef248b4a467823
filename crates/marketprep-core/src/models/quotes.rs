use serde::{Deserialize, Serialize};

/// Full quote record from `v3/quote/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub changes_percentage: f64,
    pub change: f64,
    pub day_low: f64,
    pub day_high: f64,
    pub year_high: f64,
    pub year_low: f64,
    pub market_cap: Option<f64>,
    pub price_avg50: Option<f64>,
    pub price_avg200: Option<f64>,
    pub exchange: String,
    pub volume: Option<u64>,
    pub avg_volume: Option<u64>,
    pub open: Option<f64>,
    pub previous_close: Option<f64>,
    pub eps: Option<f64>,
    pub pe: Option<f64>,
    pub earnings_announcement: Option<String>,
    pub shares_outstanding: Option<f64>,
    pub timestamp: Option<i64>,
}

/// Compact quote from `v3/quote-short/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShortQuote {
    pub symbol: String,
    pub price: f64,
    pub volume: Option<u64>,
}

/// Trailing price change over fixed horizons, `v3/stock-price-change/{symbol}`.
/// The vendor keys these by bare horizon labels, hence the renames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceChange {
    pub symbol: String,
    #[serde(rename = "1D")]
    pub day_1: Option<f64>,
    #[serde(rename = "5D")]
    pub day_5: Option<f64>,
    #[serde(rename = "1M")]
    pub month_1: Option<f64>,
    #[serde(rename = "3M")]
    pub month_3: Option<f64>,
    #[serde(rename = "6M")]
    pub month_6: Option<f64>,
    #[serde(rename = "ytd")]
    pub ytd: Option<f64>,
    #[serde(rename = "1Y")]
    pub year_1: Option<f64>,
    #[serde(rename = "3Y")]
    pub year_3: Option<f64>,
    #[serde(rename = "5Y")]
    pub year_5: Option<f64>,
    #[serde(rename = "10Y")]
    pub year_10: Option<f64>,
    #[serde(rename = "max")]
    pub max: Option<f64>,
}

/// Most recent extended-hours trade, `v4/pre-post-market-trade/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AftermarketTrade {
    pub symbol: String,
    pub price: f64,
    pub size: Option<u64>,
    pub timestamp: Option<i64>,
}
