use serde::{Deserialize, Serialize};

/// Income statement line items, `v3/income-statement/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeStatement {
    pub date: String,
    pub symbol: String,
    pub reported_currency: String,
    pub cik: Option<String>,
    pub filling_date: Option<String>,
    pub accepted_date: Option<String>,
    pub calendar_year: Option<String>,
    pub period: String,
    pub revenue: Option<f64>,
    pub cost_of_revenue: Option<f64>,
    pub gross_profit: Option<f64>,
    pub gross_profit_ratio: Option<f64>,
    pub operating_expenses: Option<f64>,
    pub operating_income: Option<f64>,
    pub operating_income_ratio: Option<f64>,
    pub income_before_tax: Option<f64>,
    pub income_tax_expense: Option<f64>,
    pub net_income: Option<f64>,
    pub net_income_ratio: Option<f64>,
    pub eps: Option<f64>,
    pub epsdiluted: Option<f64>,
    pub ebitda: Option<f64>,
    pub weighted_average_shs_out: Option<f64>,
    pub link: Option<String>,
    pub final_link: Option<String>,
}

/// Balance sheet line items, `v3/balance-sheet-statement/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BalanceSheet {
    pub date: String,
    pub symbol: String,
    pub reported_currency: String,
    pub period: String,
    pub cash_and_cash_equivalents: Option<f64>,
    pub short_term_investments: Option<f64>,
    pub net_receivables: Option<f64>,
    pub inventory: Option<f64>,
    pub total_current_assets: Option<f64>,
    pub property_plant_equipment_net: Option<f64>,
    pub goodwill: Option<f64>,
    pub intangible_assets: Option<f64>,
    pub total_assets: Option<f64>,
    pub account_payables: Option<f64>,
    pub short_term_debt: Option<f64>,
    pub total_current_liabilities: Option<f64>,
    pub long_term_debt: Option<f64>,
    pub total_liabilities: Option<f64>,
    pub retained_earnings: Option<f64>,
    pub total_stockholders_equity: Option<f64>,
    pub total_debt: Option<f64>,
    pub net_debt: Option<f64>,
}

/// Cash flow line items, `v3/cash-flow-statement/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CashFlowStatement {
    pub date: String,
    pub symbol: String,
    pub reported_currency: String,
    pub period: String,
    pub net_income: Option<f64>,
    pub depreciation_and_amortization: Option<f64>,
    pub stock_based_compensation: Option<f64>,
    pub change_in_working_capital: Option<f64>,
    pub net_cash_provided_by_operating_activities: Option<f64>,
    pub investments_in_property_plant_and_equipment: Option<f64>,
    pub net_cash_used_for_investing_activites: Option<f64>,
    pub dividends_paid: Option<f64>,
    pub common_stock_repurchased: Option<f64>,
    pub net_cash_used_provided_by_financing_activities: Option<f64>,
    pub net_change_in_cash: Option<f64>,
    pub operating_cash_flow: Option<f64>,
    pub capital_expenditure: Option<f64>,
    pub free_cash_flow: Option<f64>,
}

/// Ratio set from `v3/ratios/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialRatios {
    pub symbol: String,
    pub date: String,
    pub period: String,
    pub current_ratio: Option<f64>,
    pub quick_ratio: Option<f64>,
    pub cash_ratio: Option<f64>,
    pub gross_profit_margin: Option<f64>,
    pub operating_profit_margin: Option<f64>,
    pub net_profit_margin: Option<f64>,
    pub return_on_assets: Option<f64>,
    pub return_on_equity: Option<f64>,
    pub debt_ratio: Option<f64>,
    pub debt_equity_ratio: Option<f64>,
    pub interest_coverage: Option<f64>,
    pub price_earnings_ratio: Option<f64>,
    pub price_to_book_ratio: Option<f64>,
    pub price_to_sales_ratio: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub payout_ratio: Option<f64>,
}

/// Per-share and valuation metrics from `v3/key-metrics/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyMetrics {
    pub symbol: String,
    pub date: String,
    pub period: String,
    pub revenue_per_share: Option<f64>,
    pub net_income_per_share: Option<f64>,
    pub operating_cash_flow_per_share: Option<f64>,
    pub free_cash_flow_per_share: Option<f64>,
    pub book_value_per_share: Option<f64>,
    pub market_cap: Option<f64>,
    pub enterprise_value: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub pb_ratio: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub payout_ratio: Option<f64>,
    pub roic: Option<f64>,
    pub roe: Option<f64>,
    pub graham_number: Option<f64>,
}

/// Year-over-year growth rates from `v3/financial-growth/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialGrowth {
    pub symbol: String,
    pub date: String,
    pub period: String,
    pub revenue_growth: Option<f64>,
    pub gross_profit_growth: Option<f64>,
    pub operating_income_growth: Option<f64>,
    pub net_income_growth: Option<f64>,
    pub epsgrowth: Option<f64>,
    pub free_cash_flow_growth: Option<f64>,
    pub dividends_per_share_growth: Option<f64>,
    pub book_value_per_share_growth: Option<f64>,
}
