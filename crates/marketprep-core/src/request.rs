use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;

use crate::FmpError;

const DATE_FORMAT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Ordered query-parameter builder.
///
/// Parameters render in insertion order, values are percent-encoded, and the
/// `apikey` parameter is appended by the client after everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl ToString) -> Self {
        self.entries.push((key.to_owned(), value.to_string()));
        self
    }

    pub fn set_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    pub fn set_date(self, key: &str, value: Option<Date>) -> Self {
        self.set_opt(key, value.and_then(|d| d.format(DATE_FORMAT).ok()))
    }

    pub fn set_bool(self, key: &str, value: Option<bool>) -> Self {
        self.set_opt(key, value)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders `key=value&...` with encoded values, without a leading `?`.
    pub fn encode(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Normalizes a ticker symbol: trims whitespace and uppercases.
///
/// The vendor is case-sensitive about nothing except that lowercase symbols
/// quietly return empty arrays, so normalization happens before every call.
pub fn normalize_symbol(symbol: &str) -> Result<String, FmpError> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(FmpError::invalid_request("symbol must not be empty"));
    }
    if trimmed.len() > 24 {
        return Err(FmpError::invalid_request(format!(
            "symbol '{trimmed}' exceeds 24 characters"
        )));
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// Joins and normalizes a symbol list into the vendor's comma form.
pub fn join_symbols(symbols: &[&str]) -> Result<String, FmpError> {
    if symbols.is_empty() {
        return Err(FmpError::invalid_request(
            "at least one symbol is required",
        ));
    }
    let normalized = symbols
        .iter()
        .map(|s| normalize_symbol(s))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(normalized.join(","))
}

pub fn validate_limit(limit: usize) -> Result<usize, FmpError> {
    if limit == 0 {
        return Err(FmpError::invalid_request("limit must be greater than zero"));
    }
    Ok(limit)
}

pub fn validate_query(query: &str) -> Result<&str, FmpError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(FmpError::invalid_request("search query must not be empty"));
    }
    Ok(trimmed)
}

/// Reporting period accepted by the statement endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Annual,
    Quarter,
}

impl Period {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
        }
    }
}

/// Calendar endpoints reject windows much wider than a quarter; the client
/// enforces the documented three-month ceiling up front.
pub fn validate_calendar_window(from: Option<Date>, to: Option<Date>) -> Result<(), FmpError> {
    if let (Some(from), Some(to)) = (from, to) {
        if to < from {
            return Err(FmpError::invalid_request(
                "'to' date precedes 'from' date",
            ));
        }
        if (to - from).whole_days() > 92 {
            return Err(FmpError::invalid_request(
                "calendar window exceeds the 3-month maximum",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn encodes_in_insertion_order() {
        let params = QueryParams::new()
            .set("symbol", "AAPL")
            .set("limit", 10)
            .set_opt("exchange", None::<&str>)
            .set("query", "Apple Inc");
        assert_eq!(params.encode(), "symbol=AAPL&limit=10&query=Apple%20Inc");
    }

    #[test]
    fn formats_dates_as_iso() {
        let params = QueryParams::new()
            .set_date("from", Some(date!(2024 - 01 - 05)))
            .set_date("to", None);
        assert_eq!(params.encode(), "from=2024-01-05");
    }

    #[test]
    fn normalizes_symbols() {
        assert_eq!(normalize_symbol(" aapl ").expect("valid"), "AAPL");
        assert!(normalize_symbol("   ").is_err());
        assert!(normalize_symbol(&"X".repeat(25)).is_err());
    }

    #[test]
    fn joins_symbol_lists() {
        assert_eq!(
            join_symbols(&["aapl", "MSFT"]).expect("valid"),
            "AAPL,MSFT"
        );
        assert!(join_symbols(&[]).is_err());
    }

    #[test]
    fn rejects_wide_calendar_windows() {
        let from = date!(2024 - 01 - 01);
        assert!(validate_calendar_window(Some(from), Some(date!(2024 - 03 - 01))).is_ok());
        assert!(validate_calendar_window(Some(from), Some(date!(2024 - 06 - 01))).is_err());
        assert!(validate_calendar_window(Some(from), Some(date!(2023 - 12 - 31))).is_err());
        assert!(validate_calendar_window(None, Some(date!(2024 - 06 - 01))).is_ok());
    }
}
