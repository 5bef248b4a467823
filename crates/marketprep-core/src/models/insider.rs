use serde::{Deserialize, Serialize};

/// Form 3/4/5 transaction from `v4/insider-trading`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsiderTrade {
    pub symbol: String,
    pub filing_date: Option<String>,
    pub transaction_date: Option<String>,
    pub reporting_cik: Option<String>,
    pub transaction_type: Option<String>,
    pub securities_owned: Option<f64>,
    pub company_cik: Option<String>,
    pub reporting_name: Option<String>,
    pub type_of_owner: Option<String>,
    /// "A" or "D". Field name preserves the vendor's spelling.
    #[serde(rename = "acquistionOrDisposition")]
    pub acquisition_or_disposition: Option<String>,
    pub form_type: Option<String>,
    pub securities_transacted: Option<f64>,
    pub price: Option<f64>,
    pub security_name: Option<String>,
    pub link: Option<String>,
}

/// Aggregate buy/sell statistics from `v4/insider-roaster-statistic`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsiderStatistic {
    pub symbol: String,
    pub cik: Option<String>,
    pub year: Option<i32>,
    pub quarter: Option<i32>,
    pub purchases: Option<u64>,
    pub sales: Option<u64>,
    pub buy_sell_ratio: Option<f64>,
    pub total_bought: Option<f64>,
    pub total_sold: Option<f64>,
    pub average_bought: Option<f64>,
    pub average_sold: Option<f64>,
}

/// Current insider roster from `v4/insider-roaster`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsiderRosterEntry {
    pub type_of_owner: Option<String>,
    pub transaction_date: Option<String>,
    pub owner: String,
}
