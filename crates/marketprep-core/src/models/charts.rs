use serde::{Deserialize, Serialize};

/// Daily bar inside `v3/historical-price-full/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricalBar {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adj_close: Option<f64>,
    pub volume: Option<u64>,
    pub unadjusted_volume: Option<u64>,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    pub vwap: Option<f64>,
    pub label: Option<String>,
    pub change_over_time: Option<f64>,
}

/// Wrapper object the EOD endpoint returns; bars are newest-first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalPrices {
    pub symbol: String,
    pub historical: Vec<HistoricalBar>,
}

/// Bar from `v3/historical-chart/{interval}/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntradayBar {
    pub date: String,
    pub open: f64,
    pub low: f64,
    pub high: f64,
    pub close: f64,
    pub volume: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wrapped_historical_response() {
        let body = r#"{
            "symbol": "AAPL",
            "historical": [
                {"date":"2024-08-29","open":230.1,"high":233.0,"low":229.9,"close":231.5,"adjClose":231.5,"volume":51220000,"changePercent":0.61},
                {"date":"2024-08-28","open":228.9,"high":231.2,"low":228.2,"close":230.1,"adjClose":230.1,"volume":43800000,"changePercent":0.52}
            ]
        }"#;

        let prices: HistoricalPrices = serde_json::from_str(body).expect("should decode");
        assert_eq!(prices.symbol, "AAPL");
        assert_eq!(prices.historical.len(), 2);
        assert_eq!(prices.historical[0].date, "2024-08-29");
    }
}
