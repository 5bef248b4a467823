//! Endpoint groups, one per vendor documentation category.
//!
//! Each group is a cheap handle over the shared [`FmpClient`](crate::FmpClient);
//! every method maps its arguments onto one parameterized GET and decodes the
//! documented response shape.

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

pub use calendar::CalendarEndpoint;
pub use charts::{ChartInterval, ChartsEndpoint};
pub use company::CompanyEndpoint;
pub use congress::CongressEndpoint;
pub use economics::{EconomicIndicator, EconomicsEndpoint};
pub use etf::EtfEndpoint;
pub use financials::FinancialsEndpoint;
pub use insider::InsiderEndpoint;
pub use institutional::InstitutionalEndpoint;
pub use market::MarketEndpoint;
pub use news::NewsEndpoint;
pub use quotes::QuotesEndpoint;
pub use screener::{ScreenerEndpoint, ScreenerQuery};
pub use search::SearchEndpoint;
pub use sec::SecEndpoint;
