//! Tool dispatch: argument decoding, endpoint invocation, envelope wrapping.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;
use uuid::Uuid;

use marketprep_core::{ApiEnvelope, Fmp, FmpError, Period, ScreenerQuery};

use crate::tool::{definitions, ToolDef};

const DATE_FORMAT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Tool-layer failures, distinct from upstream API errors. Both kinds end up
/// flattened into the response envelope; this type exists so callers that
/// want to branch on "your call was malformed" can do so before serializing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },
}

/// One executed tool call: the envelope plus tracking metadata an agent
/// framework can log or thread through a conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResponse {
    pub request_id: Uuid,
    pub tool: String,
    #[serde(flatten)]
    pub envelope: ApiEnvelope<Value>,
}

/// Executes tool calls against a shared [`Fmp`] client.
#[derive(Clone)]
pub struct ToolRegistry {
    fmp: Fmp,
}

impl ToolRegistry {
    pub fn new(fmp: Fmp) -> Self {
        Self { fmp }
    }

    /// The tool catalogue to advertise to the model.
    pub fn definitions(&self) -> Vec<ToolDef> {
        definitions()
    }

    /// Runs one tool call. Malformed calls and upstream failures both come
    /// back as error envelopes; this never returns `Err` so agent loops can
    /// always hand the model a well-formed JSON verdict.
    pub async fn execute(&self, tool: &str, args: Value) -> ToolResponse {
        let request_id = Uuid::new_v4();
        let envelope = match self.dispatch(tool, args).await {
            Ok(envelope) => envelope,
            Err(err) => ApiEnvelope::fail(err.to_string(), 400),
        };
        ToolResponse {
            request_id,
            tool: tool.to_owned(),
            envelope,
        }
    }

    async fn dispatch(&self, tool: &str, args: Value) -> Result<ApiEnvelope<Value>, ToolError> {
        match tool {
            "get_quote" => {
                let args: SymbolArgs = decode(tool, args)?;
                Ok(to_envelope(self.fmp.quotes().quote(&args.symbol).await))
            }
            "get_company_profile" => {
                let args: SymbolArgs = decode(tool, args)?;
                Ok(to_envelope(self.fmp.company().profile(&args.symbol).await))
            }
            "search_tickers" => {
                let args: SearchArgs = decode(tool, args)?;
                Ok(to_envelope(
                    self.fmp
                        .search()
                        .ticker(&args.query, args.limit, None)
                        .await,
                ))
            }
            "screen_stocks" => {
                let args: ScreenArgs = decode(tool, args)?;
                Ok(to_envelope(self.fmp.screener().run(args.into_query()).await))
            }
            "get_income_statement" => {
                let args: StatementArgs = decode(tool, args)?;
                let period = args.period()?;
                Ok(to_envelope(
                    self.fmp
                        .financials()
                        .income_statement(&args.symbol, period, args.limit)
                        .await,
                ))
            }
            "get_stock_news" => {
                let args: NewsArgs = decode(tool, args)?;
                let tickers: Vec<&str> = args.tickers.iter().map(String::as_str).collect();
                Ok(to_envelope(
                    self.fmp.news().stock_news(&tickers, args.limit).await,
                ))
            }
            "get_insider_trades" => {
                let args: InsiderArgs = decode(tool, args)?;
                Ok(to_envelope(
                    self.fmp.insider().trades(&args.symbol, args.page).await,
                ))
            }
            "get_senate_trades" => {
                let args: SymbolArgs = decode(tool, args)?;
                Ok(to_envelope(
                    self.fmp.congress().senate_trades(&args.symbol).await,
                ))
            }
            "get_market_gainers" => Ok(to_envelope(self.fmp.market().gainers().await)),
            "get_earnings_calendar" => {
                let args: CalendarArgs = decode(tool, args)?;
                let from = args.date(tool, args.from.as_deref())?;
                let to = args.date(tool, args.to.as_deref())?;
                Ok(to_envelope(self.fmp.calendar().earnings(from, to).await))
            }
            other => Err(ToolError::UnknownTool(other.to_owned())),
        }
    }
}

fn decode<T: for<'de> Deserialize<'de>>(tool: &str, args: Value) -> Result<T, ToolError> {
    serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments {
        tool: tool.to_owned(),
        message: e.to_string(),
    })
}

/// Serializes the typed result and flattens it into an envelope. A result
/// that cannot serialize is reported as a decode failure rather than a panic.
fn to_envelope<T: Serialize>(result: Result<T, FmpError>) -> ApiEnvelope<Value> {
    match result {
        Ok(data) => match serde_json::to_value(data) {
            Ok(value) => ApiEnvelope::ok(value),
            Err(e) => ApiEnvelope::fail(format!("failed to serialize response: {e}"), 500),
        },
        Err(err) => ApiEnvelope::fail(err.to_string(), err.status_code()),
    }
}

#[derive(Debug, Deserialize)]
struct SymbolArgs {
    symbol: String,
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
    #[serde(default = "default_search_limit")]
    limit: usize,
}

fn default_search_limit() -> usize {
    10
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ScreenArgs {
    market_cap_more_than: Option<f64>,
    market_cap_lower_than: Option<f64>,
    price_more_than: Option<f64>,
    price_lower_than: Option<f64>,
    sector: Option<String>,
    exchange: Option<String>,
    limit: Option<usize>,
}

impl ScreenArgs {
    fn into_query(self) -> ScreenerQuery {
        ScreenerQuery {
            market_cap_more_than: self.market_cap_more_than,
            market_cap_lower_than: self.market_cap_lower_than,
            price_more_than: self.price_more_than,
            price_lower_than: self.price_lower_than,
            sector: self.sector,
            exchange: self.exchange,
            limit: Some(self.limit.unwrap_or(50)),
            ..ScreenerQuery::default()
        }
    }
}

#[derive(Debug, Deserialize)]
struct StatementArgs {
    symbol: String,
    #[serde(default)]
    period: Option<String>,
    #[serde(default = "default_statement_limit")]
    limit: usize,
}

fn default_statement_limit() -> usize {
    5
}

impl StatementArgs {
    fn period(&self) -> Result<Period, ToolError> {
        match self.period.as_deref() {
            None | Some("annual") => Ok(Period::Annual),
            Some("quarter") => Ok(Period::Quarter),
            Some(other) => Err(ToolError::InvalidArguments {
                tool: "get_income_statement".to_owned(),
                message: format!("period must be 'annual' or 'quarter', got '{other}'"),
            }),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct NewsArgs {
    tickers: Vec<String>,
    #[serde(default = "default_news_limit")]
    limit: usize,
}

fn default_news_limit() -> usize {
    20
}

#[derive(Debug, Deserialize)]
struct InsiderArgs {
    symbol: String,
    #[serde(default)]
    page: usize,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CalendarArgs {
    from: Option<String>,
    to: Option<String>,
}

impl CalendarArgs {
    fn date(&self, tool: &str, value: Option<&str>) -> Result<Option<Date>, ToolError> {
        value
            .map(|raw| {
                Date::parse(raw, DATE_FORMAT).map_err(|_| ToolError::InvalidArguments {
                    tool: tool.to_owned(),
                    message: format!("'{raw}' is not a YYYY-MM-DD date"),
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketprep_core::http::StaticClient;
    use marketprep_core::FmpClient;
    use serde_json::json;
    use std::sync::Arc;

    fn registry(http: Arc<StaticClient>) -> ToolRegistry {
        let client = FmpClient::builder()
            .api_key("k")
            .http_client(http)
            .build()
            .expect("client");
        ToolRegistry::new(Fmp::with_client(client))
    }

    #[tokio::test]
    async fn quote_tool_returns_success_envelope() {
        let http = Arc::new(StaticClient::json(
            r#"[{"symbol":"AAPL","price":225.12}]"#,
        ));
        let registry = registry(http.clone());

        let response = registry
            .execute("get_quote", json!({ "symbol": "AAPL" }))
            .await;

        assert!(response.envelope.success);
        let data = response.envelope.data.expect("data present");
        assert_eq!(data["symbol"], "AAPL");
        assert_eq!(
            http.sole_url(),
            "https://financialmodelingprep.com/api/v3/quote/AAPL?apikey=k"
        );
    }

    #[tokio::test]
    async fn unknown_tool_maps_to_400_envelope() {
        let http = Arc::new(StaticClient::json("[]"));
        let registry = registry(http.clone());

        let response = registry.execute("get_weather", json!({})).await;

        assert!(!response.envelope.success);
        assert_eq!(response.envelope.status, Some(400));
        assert!(response
            .envelope
            .error
            .as_deref()
            .expect("error present")
            .contains("unknown tool"));
        assert!(http.recorded_requests().is_empty());
    }

    #[tokio::test]
    async fn malformed_arguments_map_to_400_envelope() {
        let http = Arc::new(StaticClient::json("[]"));
        let registry = registry(http.clone());

        let response = registry.execute("get_quote", json!({ "ticker": "AAPL" })).await;

        assert!(!response.envelope.success);
        assert_eq!(response.envelope.status, Some(400));
        assert!(http.recorded_requests().is_empty());
    }

    #[tokio::test]
    async fn upstream_status_flows_into_the_envelope() {
        let http = Arc::new(StaticClient::status(429, "Limit Reach"));
        let registry = registry(http);

        let response = registry
            .execute("get_quote", json!({ "symbol": "AAPL" }))
            .await;

        assert!(!response.envelope.success);
        assert_eq!(response.envelope.status, Some(429));
    }

    #[tokio::test]
    async fn income_statement_rejects_unknown_period() {
        let http = Arc::new(StaticClient::json("[]"));
        let registry = registry(http.clone());

        let response = registry
            .execute(
                "get_income_statement",
                json!({ "symbol": "AAPL", "period": "monthly" }),
            )
            .await;

        assert!(!response.envelope.success);
        assert_eq!(response.envelope.status, Some(400));
        assert!(response
            .envelope
            .error
            .as_deref()
            .expect("error present")
            .contains("period"));
        assert!(http.recorded_requests().is_empty());
    }

    #[tokio::test]
    async fn earnings_calendar_rejects_malformed_dates() {
        let http = Arc::new(StaticClient::json("[]"));
        let registry = registry(http.clone());

        let response = registry
            .execute("get_earnings_calendar", json!({ "from": "next tuesday" }))
            .await;

        assert_eq!(response.envelope.status, Some(400));
        assert!(http.recorded_requests().is_empty());
    }

    #[tokio::test]
    async fn responses_serialize_with_flattened_envelope() {
        let http = Arc::new(StaticClient::json(r#"[{"symbol":"AAPL"}]"#));
        let registry = registry(http);

        let response = registry
            .execute("get_quote", json!({ "symbol": "AAPL" }))
            .await;
        let value = serde_json::to_value(&response).expect("serializable");

        assert_eq!(value["tool"], "get_quote");
        assert_eq!(value["success"], true);
        assert!(value["request_id"].is_string());
    }
}
