use std::fmt::{Display, Formatter};

use time::Date;

use crate::config::ApiVersion;
use crate::models::{HistoricalPrices, IntradayBar};
use crate::request::{normalize_symbol, QueryParams};
use crate::{FmpClient, FmpError};

/// Intraday bar spacing accepted by the chart endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartInterval {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    FourHours,
}

impl ChartInterval {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMinute => "1min",
            Self::FiveMinutes => "5min",
            Self::FifteenMinutes => "15min",
            Self::ThirtyMinutes => "30min",
            Self::OneHour => "1hour",
            Self::FourHours => "4hour",
        }
    }
}

impl Display for ChartInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Historical price endpoints.
#[derive(Clone)]
pub struct ChartsEndpoint {
    client: FmpClient,
}

impl ChartsEndpoint {
    pub(crate) fn new(client: FmpClient) -> Self {
        Self { client }
    }

    /// Full daily history (`v3/historical-price-full/{symbol}`), optionally
    /// windowed. Bars come back newest-first.
    pub async fn daily(
        &self,
        symbol: &str,
        from: Option<Date>,
        to: Option<Date>,
    ) -> Result<HistoricalPrices, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let params = QueryParams::new().set_date("from", from).set_date("to", to);
        self.client
            .fetch(
                ApiVersion::V3,
                &format!("historical-price-full/{symbol}"),
                params,
            )
            .await
    }

    /// Daily close-only series, the vendor's lighter payload variant.
    pub async fn daily_light(
        &self,
        symbol: &str,
        from: Option<Date>,
        to: Option<Date>,
    ) -> Result<HistoricalPrices, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let params = QueryParams::new()
            .set("serietype", "line")
            .set_date("from", from)
            .set_date("to", to);
        self.client
            .fetch(
                ApiVersion::V3,
                &format!("historical-price-full/{symbol}"),
                params,
            )
            .await
    }

    /// Intraday bars (`v3/historical-chart/{interval}/{symbol}`).
    pub async fn intraday(
        &self,
        symbol: &str,
        interval: ChartInterval,
        from: Option<Date>,
        to: Option<Date>,
    ) -> Result<Vec<IntradayBar>, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let params = QueryParams::new().set_date("from", from).set_date("to", to);
        self.client
            .fetch_list(
                ApiVersion::V3,
                &format!("historical-chart/{interval}/{symbol}"),
                params,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StaticClient;
    use std::sync::Arc;
    use time::macros::date;

    fn endpoint(http: Arc<StaticClient>) -> ChartsEndpoint {
        let client = FmpClient::builder()
            .api_key("k")
            .http_client(http)
            .build()
            .expect("client");
        ChartsEndpoint::new(client)
    }

    #[tokio::test]
    async fn daily_window_renders_iso_dates() {
        let http = Arc::new(StaticClient::json(r#"{"symbol":"AAPL","historical":[]}"#));
        let charts = endpoint(http.clone());

        let _ = charts
            .daily("AAPL", Some(date!(2024 - 01 - 02)), Some(date!(2024 - 02 - 01)))
            .await
            .expect("ok");

        assert_eq!(
            http.sole_url(),
            "https://financialmodelingprep.com/api/v3/historical-price-full/AAPL?from=2024-01-02&to=2024-02-01&apikey=k"
        );
    }

    #[tokio::test]
    async fn intraday_path_embeds_interval() {
        let http = Arc::new(StaticClient::json("[]"));
        let charts = endpoint(http.clone());

        let _ = charts
            .intraday("msft", ChartInterval::FiveMinutes, None, None)
            .await
            .expect("ok");

        assert_eq!(
            http.sole_url(),
            "https://financialmodelingprep.com/api/v3/historical-chart/5min/MSFT?apikey=k"
        );
    }
}
