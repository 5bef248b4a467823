use serde::{Deserialize, Serialize};

/// Hit from the `v3/search*` family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchMatch {
    pub symbol: String,
    pub name: String,
    pub currency: Option<String>,
    pub stock_exchange: Option<String>,
    pub exchange_short_name: Option<String>,
}
