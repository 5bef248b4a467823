//! Vendor response shapes.
//!
//! These mirror the JSON records the vendor documents per endpoint category
//! and are passed through with no local reshaping beyond deserialization.
//! Structs use struct-level `default` so fields the vendor omits on some
//! plans or asset classes do not break decoding.

pub mod calendar;
pub mod charts;
pub mod company;
pub mod congress;
pub mod economics;
pub mod etf;
pub mod financials;
pub mod insider;
pub mod institutional;
pub mod market;
pub mod news;
pub mod quotes;
pub mod screener;
pub mod search;
pub mod sec;

pub use calendar::{DividendEvent, EarningsEvent, IpoEvent, SplitEvent};
pub use charts::{HistoricalBar, HistoricalPrices, IntradayBar};
pub use company::{
    CompanyProfile, EmployeeCount, Executive, MarketCap, SharesFloat, StockPeers,
};
pub use congress::{HouseTrade, SenateTrade};
pub use economics::{EconomicIndicatorPoint, MarketRiskPremium, TreasuryRates};
pub use etf::{CountryWeighting, EtfHolding, EtfInfo, SectorWeighting};
pub use financials::{
    BalanceSheet, CashFlowStatement, FinancialGrowth, FinancialRatios, IncomeStatement,
    KeyMetrics,
};
pub use insider::{InsiderRosterEntry, InsiderStatistic, InsiderTrade};
pub use institutional::{CikSearchResult, Form13FEntry, InstitutionalHolder};
pub use market::{MarketHours, Mover, SectorPerformance};
pub use news::{FmpArticle, FmpArticlesPage, GeneralNewsArticle, PressRelease, StockNewsArticle};
pub use quotes::{AftermarketTrade, PriceChange, Quote, ShortQuote};
pub use screener::ScreenerMatch;
pub use search::SearchMatch;
pub use sec::{IndustryClassification, SecFiling, SecRssItem};
