use crate::config::ApiVersion;
use crate::models::{
    BalanceSheet, CashFlowStatement, FinancialGrowth, FinancialRatios, IncomeStatement,
    KeyMetrics,
};
use crate::request::{normalize_symbol, validate_limit, Period, QueryParams};
use crate::{FmpClient, FmpError};

/// Financial statement and derived-metric endpoints. Every method accepts a
/// reporting period and a row limit; the vendor orders rows newest-first.
#[derive(Clone)]
pub struct FinancialsEndpoint {
    client: FmpClient,
}

impl FinancialsEndpoint {
    pub(crate) fn new(client: FmpClient) -> Self {
        Self { client }
    }

    async fn statement<T: serde::de::DeserializeOwned>(
        &self,
        path_prefix: &str,
        symbol: &str,
        period: Period,
        limit: usize,
    ) -> Result<Vec<T>, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let limit = validate_limit(limit)?;
        let params = QueryParams::new()
            .set("period", period.as_str())
            .set("limit", limit);
        self.client
            .fetch_list(ApiVersion::V3, &format!("{path_prefix}/{symbol}"), params)
            .await
    }

    pub async fn income_statement(
        &self,
        symbol: &str,
        period: Period,
        limit: usize,
    ) -> Result<Vec<IncomeStatement>, FmpError> {
        self.statement("income-statement", symbol, period, limit).await
    }

    pub async fn balance_sheet(
        &self,
        symbol: &str,
        period: Period,
        limit: usize,
    ) -> Result<Vec<BalanceSheet>, FmpError> {
        self.statement("balance-sheet-statement", symbol, period, limit)
            .await
    }

    pub async fn cash_flow(
        &self,
        symbol: &str,
        period: Period,
        limit: usize,
    ) -> Result<Vec<CashFlowStatement>, FmpError> {
        self.statement("cash-flow-statement", symbol, period, limit)
            .await
    }

    pub async fn ratios(
        &self,
        symbol: &str,
        period: Period,
        limit: usize,
    ) -> Result<Vec<FinancialRatios>, FmpError> {
        self.statement("ratios", symbol, period, limit).await
    }

    pub async fn key_metrics(
        &self,
        symbol: &str,
        period: Period,
        limit: usize,
    ) -> Result<Vec<KeyMetrics>, FmpError> {
        self.statement("key-metrics", symbol, period, limit).await
    }

    pub async fn growth(
        &self,
        symbol: &str,
        period: Period,
        limit: usize,
    ) -> Result<Vec<FinancialGrowth>, FmpError> {
        self.statement("financial-growth", symbol, period, limit).await
    }
}
