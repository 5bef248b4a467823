use serde::{Deserialize, Serialize};

/// Row from `v3/stock_news`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockNewsArticle {
    pub symbol: String,
    pub published_date: String,
    pub title: String,
    pub image: Option<String>,
    pub site: Option<String>,
    pub text: Option<String>,
    pub url: Option<String>,
}

/// Row from `v4/general_news`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralNewsArticle {
    pub published_date: String,
    pub title: String,
    pub image: Option<String>,
    pub site: Option<String>,
    pub text: Option<String>,
    pub url: Option<String>,
}

/// Row from `v3/press-releases/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PressRelease {
    pub symbol: String,
    pub date: String,
    pub title: String,
    pub text: Option<String>,
}

/// In-house editorial article from `v3/fmp/articles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FmpArticle {
    pub title: String,
    pub date: String,
    pub content: Option<String>,
    pub tickers: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub author: Option<String>,
    pub site: Option<String>,
}

/// The articles endpoint wraps its rows in a page object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FmpArticlesPage {
    pub content: Vec<FmpArticle>,
}
