use crate::config::ApiVersion;
use crate::models::{
    FmpArticle, FmpArticlesPage, GeneralNewsArticle, PressRelease, StockNewsArticle,
};
use crate::request::{join_symbols, normalize_symbol, validate_limit, QueryParams};
use crate::{FmpClient, FmpError};

/// News and press-release endpoints.
#[derive(Clone)]
pub struct NewsEndpoint {
    client: FmpClient,
}

impl NewsEndpoint {
    pub(crate) fn new(client: FmpClient) -> Self {
        Self { client }
    }

    /// Stock news, optionally filtered to a ticker list (`v3/stock_news`).
    pub async fn stock_news(
        &self,
        tickers: &[&str],
        limit: usize,
    ) -> Result<Vec<StockNewsArticle>, FmpError> {
        let limit = validate_limit(limit)?;
        let mut params = QueryParams::new();
        if !tickers.is_empty() {
            params = params.set("tickers", join_symbols(tickers)?);
        }
        params = params.set("limit", limit);
        self.client
            .fetch_list(ApiVersion::V3, "stock_news", params)
            .await
    }

    /// Macro and market headlines (`v4/general_news`), paginated.
    pub async fn general_news(&self, page: usize) -> Result<Vec<GeneralNewsArticle>, FmpError> {
        let params = QueryParams::new().set("page", page);
        self.client
            .fetch_list(ApiVersion::V4, "general_news", params)
            .await
    }

    /// Company press releases (`v3/press-releases/{symbol}`), paginated.
    pub async fn press_releases(
        &self,
        symbol: &str,
        page: usize,
    ) -> Result<Vec<PressRelease>, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let params = QueryParams::new().set("page", page);
        self.client
            .fetch_list(ApiVersion::V3, &format!("press-releases/{symbol}"), params)
            .await
    }

    /// The vendor's own editorial articles (`v3/fmp/articles`). Rows arrive
    /// wrapped in a page object; this unwraps them.
    pub async fn articles(&self, page: usize, size: usize) -> Result<Vec<FmpArticle>, FmpError> {
        let size = validate_limit(size)?;
        let params = QueryParams::new().set("page", page).set("size", size);
        let page: FmpArticlesPage = self
            .client
            .fetch(ApiVersion::V3, "fmp/articles", params)
            .await?;
        Ok(page.content)
    }
}
