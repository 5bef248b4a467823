//! Tool definitions in the JSON-schema shape agent frameworks expect.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A callable tool: name, human-readable description, and a JSON schema for
/// its arguments. Serializes directly into the function-calling format most
/// LLM providers accept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDef {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolDef {
    pub fn new(name: &str, description: &str, parameters: Value) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            parameters,
        }
    }
}

fn symbol_only(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "symbol": { "type": "string", "description": description }
        },
        "required": ["symbol"]
    })
}

/// The bundled tool catalogue, in a stable order.
pub fn definitions() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "get_quote",
            "Latest price, volume, and day range for a stock ticker.",
            symbol_only("Ticker symbol, e.g. AAPL"),
        ),
        ToolDef::new(
            "get_company_profile",
            "Company description, sector, industry, CEO, and market cap.",
            symbol_only("Ticker symbol, e.g. MSFT"),
        ),
        ToolDef::new(
            "search_tickers",
            "Find ticker symbols matching a free-text query.",
            json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "Company name or partial symbol" },
                    "limit": { "type": "integer", "minimum": 1, "default": 10 }
                },
                "required": ["query"]
            }),
        ),
        ToolDef::new(
            "screen_stocks",
            "Screen stocks by market cap, price, sector, and exchange filters.",
            json!({
                "type": "object",
                "properties": {
                    "market_cap_more_than": { "type": "number" },
                    "market_cap_lower_than": { "type": "number" },
                    "price_more_than": { "type": "number" },
                    "price_lower_than": { "type": "number" },
                    "sector": { "type": "string" },
                    "exchange": { "type": "string" },
                    "limit": { "type": "integer", "minimum": 1, "default": 50 }
                }
            }),
        ),
        ToolDef::new(
            "get_income_statement",
            "Annual or quarterly income statements for a ticker.",
            json!({
                "type": "object",
                "properties": {
                    "symbol": { "type": "string", "description": "Ticker symbol" },
                    "period": { "type": "string", "enum": ["annual", "quarter"], "default": "annual" },
                    "limit": { "type": "integer", "minimum": 1, "default": 5 }
                },
                "required": ["symbol"]
            }),
        ),
        ToolDef::new(
            "get_stock_news",
            "Recent news articles, optionally filtered to specific tickers.",
            json!({
                "type": "object",
                "properties": {
                    "tickers": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Ticker symbols to filter by; empty for all"
                    },
                    "limit": { "type": "integer", "minimum": 1, "default": 20 }
                }
            }),
        ),
        ToolDef::new(
            "get_insider_trades",
            "Recent insider (Form 3/4/5) transactions for a ticker.",
            json!({
                "type": "object",
                "properties": {
                    "symbol": { "type": "string", "description": "Ticker symbol" },
                    "page": { "type": "integer", "minimum": 0, "default": 0 }
                },
                "required": ["symbol"]
            }),
        ),
        ToolDef::new(
            "get_senate_trades",
            "US Senate trading disclosures mentioning a ticker.",
            symbol_only("Ticker symbol, e.g. NVDA"),
        ),
        ToolDef::new(
            "get_market_gainers",
            "Today's top gaining stocks across the market.",
            json!({ "type": "object", "properties": {} }),
        ),
        ToolDef::new(
            "get_earnings_calendar",
            "Upcoming earnings announcements in a date window (max 3 months).",
            json!({
                "type": "object",
                "properties": {
                    "from": { "type": "string", "format": "date", "description": "Window start, YYYY-MM-DD" },
                    "to": { "type": "string", "format": "date", "description": "Window end, YYYY-MM-DD" }
                }
            }),
        ),
    ]
}
