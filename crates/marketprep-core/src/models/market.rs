use serde::{Deserialize, Serialize};

/// Gainer/loser/most-active row from `v3/stock_market/*`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mover {
    pub symbol: String,
    pub name: String,
    pub change: f64,
    pub price: f64,
    pub changes_percentage: f64,
}

/// Row from `v3/sectors-performance`. The vendor serializes the percentage
/// as a string like `"1.2345%"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectorPerformance {
    pub sector: String,
    pub changes_percentage: String,
}

impl SectorPerformance {
    /// Parses the percentage string into a fraction-of-one-hundred value.
    pub fn change_percent(&self) -> Option<f64> {
        self.changes_percentage.trim_end_matches('%').parse().ok()
    }
}

/// Trading-hours snapshot from `v3/is-the-market-open`. This endpoint
/// returns a bare object rather than an array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketHours {
    pub stock_exchange_name: String,
    pub is_the_stock_market_open: bool,
    pub is_the_euronext_market_open: Option<bool>,
    pub is_the_forex_market_open: Option<bool>,
    pub is_the_crypto_market_open: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_percent_suffixed_sector_change() {
        let row = SectorPerformance {
            sector: "Technology".to_owned(),
            changes_percentage: "-0.8342%".to_owned(),
        };
        assert_eq!(row.change_percent(), Some(-0.8342));

        let junk = SectorPerformance {
            sector: "Energy".to_owned(),
            changes_percentage: "n/a".to_owned(),
        };
        assert_eq!(junk.change_percent(), None);
    }
}
