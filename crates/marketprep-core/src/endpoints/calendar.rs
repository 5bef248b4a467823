use time::Date;

use crate::config::ApiVersion;
use crate::models::{DividendEvent, EarningsEvent, IpoEvent, SplitEvent};
use crate::request::{validate_calendar_window, QueryParams};
use crate::{FmpClient, FmpError};

/// Corporate event calendars. All four share the same `from`/`to` window
/// convention and the vendor's three-month window ceiling.
#[derive(Clone)]
pub struct CalendarEndpoint {
    client: FmpClient,
}

impl CalendarEndpoint {
    pub(crate) fn new(client: FmpClient) -> Self {
        Self { client }
    }

    async fn windowed<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        from: Option<Date>,
        to: Option<Date>,
    ) -> Result<Vec<T>, FmpError> {
        validate_calendar_window(from, to)?;
        let params = QueryParams::new().set_date("from", from).set_date("to", to);
        self.client.fetch_list(ApiVersion::V3, path, params).await
    }

    pub async fn earnings(
        &self,
        from: Option<Date>,
        to: Option<Date>,
    ) -> Result<Vec<EarningsEvent>, FmpError> {
        self.windowed("earning_calendar", from, to).await
    }

    pub async fn dividends(
        &self,
        from: Option<Date>,
        to: Option<Date>,
    ) -> Result<Vec<DividendEvent>, FmpError> {
        self.windowed("stock_dividend_calendar", from, to).await
    }

    pub async fn splits(
        &self,
        from: Option<Date>,
        to: Option<Date>,
    ) -> Result<Vec<SplitEvent>, FmpError> {
        self.windowed("stock_split_calendar", from, to).await
    }

    pub async fn ipos(
        &self,
        from: Option<Date>,
        to: Option<Date>,
    ) -> Result<Vec<IpoEvent>, FmpError> {
        self.windowed("ipo_calendar", from, to).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StaticClient;
    use std::sync::Arc;
    use time::macros::date;

    fn endpoint(http: Arc<StaticClient>) -> CalendarEndpoint {
        let client = FmpClient::builder()
            .api_key("k")
            .http_client(http)
            .build()
            .expect("client");
        CalendarEndpoint::new(client)
    }

    #[tokio::test]
    async fn earnings_window_is_forwarded() {
        let http = Arc::new(StaticClient::json("[]"));
        let calendar = endpoint(http.clone());

        let _ = calendar
            .earnings(Some(date!(2024 - 09 - 01)), Some(date!(2024 - 09 - 30)))
            .await
            .expect("ok");

        assert_eq!(
            http.sole_url(),
            "https://financialmodelingprep.com/api/v3/earning_calendar?from=2024-09-01&to=2024-09-30&apikey=k"
        );
    }

    #[tokio::test]
    async fn oversized_window_fails_before_dispatch() {
        let http = Arc::new(StaticClient::json("[]"));
        let calendar = endpoint(http.clone());

        let err = calendar
            .dividends(Some(date!(2024 - 01 - 01)), Some(date!(2024 - 12 - 31)))
            .await
            .expect_err("should fail");
        assert!(matches!(err, FmpError::InvalidRequest(_)));
        assert!(http.recorded_requests().is_empty());
    }
}
