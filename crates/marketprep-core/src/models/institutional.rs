use serde::{Deserialize, Serialize};

/// Row from `v3/institutional-holder/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstitutionalHolder {
    pub holder: String,
    pub shares: Option<f64>,
    pub date_reported: Option<String>,
    pub change: Option<f64>,
}

/// Position line from a 13F filing, `v4/form-thirteen/{cik}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Form13FEntry {
    pub date: String,
    pub filling_date: Option<String>,
    pub accepted_date: Option<String>,
    pub cik: String,
    pub cusip: Option<String>,
    pub ticker_cusip: Option<String>,
    pub name_of_issuer: Option<String>,
    pub shares: Option<f64>,
    pub title_of_class: Option<String>,
    pub value: Option<f64>,
    pub link: Option<String>,
    pub final_link: Option<String>,
}

/// Hit from `v3/cik-search/{name}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CikSearchResult {
    pub cik: String,
    pub name: String,
}
