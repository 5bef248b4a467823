use crate::config::ApiVersion;
use crate::models::{AftermarketTrade, PriceChange, Quote, ShortQuote};
use crate::request::{join_symbols, normalize_symbol, QueryParams};
use crate::{FmpClient, FmpError};

/// Real-time and extended-hours quote endpoints.
#[derive(Clone)]
pub struct QuotesEndpoint {
    client: FmpClient,
}

impl QuotesEndpoint {
    pub(crate) fn new(client: FmpClient) -> Self {
        Self { client }
    }

    /// Full quote for a single symbol (`v3/quote/{symbol}`).
    pub async fn quote(&self, symbol: &str) -> Result<Quote, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        self.client
            .fetch_one(
                ApiVersion::V3,
                &format!("quote/{symbol}"),
                QueryParams::new(),
                &format!("quote for {symbol}"),
            )
            .await
    }

    /// Full quotes for several symbols in one request.
    pub async fn quotes(&self, symbols: &[&str]) -> Result<Vec<Quote>, FmpError> {
        let joined = join_symbols(symbols)?;
        self.client
            .fetch_list(ApiVersion::V3, &format!("quote/{joined}"), QueryParams::new())
            .await
    }

    /// Price and volume only (`v3/quote-short/{symbol}`).
    pub async fn short_quote(&self, symbol: &str) -> Result<ShortQuote, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        self.client
            .fetch_one(
                ApiVersion::V3,
                &format!("quote-short/{symbol}"),
                QueryParams::new(),
                &format!("short quote for {symbol}"),
            )
            .await
    }

    /// Trailing price change across standard horizons.
    pub async fn price_change(&self, symbol: &str) -> Result<PriceChange, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        self.client
            .fetch_one(
                ApiVersion::V3,
                &format!("stock-price-change/{symbol}"),
                QueryParams::new(),
                &format!("price change for {symbol}"),
            )
            .await
    }

    /// Latest pre/post-market trade (`v4/pre-post-market-trade/{symbol}`).
    /// Returns a bare object, not an array.
    pub async fn aftermarket_trade(&self, symbol: &str) -> Result<AftermarketTrade, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        self.client
            .fetch(
                ApiVersion::V4,
                &format!("pre-post-market-trade/{symbol}"),
                QueryParams::new(),
            )
            .await
    }
}
