use serde::{Deserialize, Serialize};

/// Senate financial-disclosure trade from `stable/senate-trades`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SenateTrade {
    pub symbol: String,
    pub disclosure_date: Option<String>,
    pub transaction_date: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub office: Option<String>,
    pub district: Option<String>,
    pub owner: Option<String>,
    pub asset_description: Option<String>,
    pub asset_type: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// Bracketed dollar range, e.g. `"$15,001 - $50,000"`.
    pub amount: Option<String>,
    pub comment: Option<String>,
    pub link: Option<String>,
}

/// House financial-disclosure trade from `stable/house-trades`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HouseTrade {
    pub symbol: String,
    pub disclosure_date: Option<String>,
    pub transaction_date: Option<String>,
    pub representative: Option<String>,
    pub district: Option<String>,
    pub owner: Option<String>,
    pub asset_description: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub amount: Option<String>,
    pub capital_gains_over200_usd: Option<bool>,
    pub link: Option<String>,
}
