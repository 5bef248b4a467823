use serde::{Deserialize, Serialize};

/// Filing index entry from `v3/sec_filings/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecFiling {
    pub symbol: String,
    pub filling_date: Option<String>,
    pub accepted_date: Option<String>,
    pub cik: Option<String>,
    #[serde(rename = "type")]
    pub form_type: Option<String>,
    pub link: Option<String>,
    pub final_link: Option<String>,
}

/// Entry from the live filings feed, `v4/rss_feed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecRssItem {
    pub title: String,
    pub date: Option<String>,
    pub link: Option<String>,
    pub cik: Option<String>,
    pub form_type: Option<String>,
    pub ticker: Option<String>,
}

/// SIC record from `v4/standard_industrial_classification`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndustryClassification {
    pub symbol: String,
    pub name: Option<String>,
    pub cik: Option<String>,
    pub sic_code: Option<String>,
    pub industry_title: Option<String>,
    pub phone_number: Option<String>,
}
