//! Typed async client for the Financial Modeling Prep REST API.
//!
//! This crate contains:
//! - A shared low-level client: URL assembly, API-key injection, JSON decoding
//! - Endpoint groups mirroring the vendor's documentation categories
//! - A response envelope and structured errors
//! - Retry and batch helpers for bulk workloads
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use marketprep_core::Fmp;
//!
//! let fmp = Fmp::new("demo");
//! let quote = fmp.quotes().quote("AAPL").await?;
//! println!("{} trades at {}", quote.symbol, quote.price);
//! ```
//!
//! Every endpoint method issues one parameterized GET and returns
//! `Result<T, FmpError>`. [`ApiEnvelope`] is available for surfaces that need
//! a machine-readable success/error shape instead.

pub mod batch;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod http;
pub mod models;
pub mod request;
pub mod retry;

pub use batch::{run_batch, BatchOptions};
pub use client::{FmpClient, FmpClientBuilder};
pub use config::{ApiVersion, ClientConfig, API_KEY_ENV};
pub use endpoints::{
    CalendarEndpoint, ChartInterval, ChartsEndpoint, CompanyEndpoint, CongressEndpoint,
    EconomicIndicator, EconomicsEndpoint, EtfEndpoint, FinancialsEndpoint, InsiderEndpoint,
    InstitutionalEndpoint, MarketEndpoint, NewsEndpoint, QuotesEndpoint, ScreenerEndpoint,
    ScreenerQuery, SearchEndpoint, SecEndpoint,
};
pub use envelope::ApiEnvelope;
pub use error::FmpError;
pub use request::Period;
pub use retry::{retry_with_backoff, Backoff, RetryPolicy};

/// Entry point tying the endpoint groups to one shared [`FmpClient`].
///
/// Cloning is cheap; all clones share the underlying transport and
/// configuration.
#[derive(Clone)]
pub struct Fmp {
    client: FmpClient,
}

impl Fmp {
    /// Client with the given API key and default transport.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: FmpClient::new(api_key),
        }
    }

    /// Builder for custom timeouts, base URLs, or transports. The API key
    /// falls back to the `FMP_API_KEY` environment variable.
    pub fn builder() -> FmpClientBuilder {
        FmpClient::builder()
    }

    /// Wraps an already-built client.
    pub fn with_client(client: FmpClient) -> Self {
        Self { client }
    }

    /// The shared low-level client, for raw [`FmpClient::fetch_value`] calls.
    pub fn client(&self) -> &FmpClient {
        &self.client
    }

    pub fn quotes(&self) -> QuotesEndpoint {
        QuotesEndpoint::new(self.client.clone())
    }

    pub fn charts(&self) -> ChartsEndpoint {
        ChartsEndpoint::new(self.client.clone())
    }

    pub fn financials(&self) -> FinancialsEndpoint {
        FinancialsEndpoint::new(self.client.clone())
    }

    pub fn company(&self) -> CompanyEndpoint {
        CompanyEndpoint::new(self.client.clone())
    }

    pub fn search(&self) -> SearchEndpoint {
        SearchEndpoint::new(self.client.clone())
    }

    pub fn screener(&self) -> ScreenerEndpoint {
        ScreenerEndpoint::new(self.client.clone())
    }

    pub fn market(&self) -> MarketEndpoint {
        MarketEndpoint::new(self.client.clone())
    }

    pub fn calendar(&self) -> CalendarEndpoint {
        CalendarEndpoint::new(self.client.clone())
    }

    pub fn news(&self) -> NewsEndpoint {
        NewsEndpoint::new(self.client.clone())
    }

    pub fn insider(&self) -> InsiderEndpoint {
        InsiderEndpoint::new(self.client.clone())
    }

    pub fn institutional(&self) -> InstitutionalEndpoint {
        InstitutionalEndpoint::new(self.client.clone())
    }

    pub fn congress(&self) -> CongressEndpoint {
        CongressEndpoint::new(self.client.clone())
    }

    pub fn sec(&self) -> SecEndpoint {
        SecEndpoint::new(self.client.clone())
    }

    pub fn etf(&self) -> EtfEndpoint {
        EtfEndpoint::new(self.client.clone())
    }

    pub fn economics(&self) -> EconomicsEndpoint {
        EconomicsEndpoint::new(self.client.clone())
    }
}

impl From<FmpClient> for Fmp {
    fn from(client: FmpClient) -> Self {
        Self::with_client(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StaticClient;
    use std::sync::Arc;

    #[tokio::test]
    async fn facade_groups_share_one_transport() {
        let http = Arc::new(StaticClient::json("[]"));
        let client = FmpClient::builder()
            .api_key("k")
            .http_client(http.clone())
            .build()
            .expect("client");
        let fmp = Fmp::with_client(client);

        let _ = fmp.market().gainers().await.expect("ok");
        let _ = fmp.congress().senate_latest(0).await.expect("ok");

        let urls: Vec<String> = http
            .recorded_requests()
            .iter()
            .map(|r| r.url.clone())
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://financialmodelingprep.com/api/v3/stock_market/gainers?apikey=k",
                "https://financialmodelingprep.com/stable/senate-latest?page=0&apikey=k",
            ]
        );
    }
}
