pub mod bar;
pub mod company_overview;
pub mod quote;
pub mod search_match;
pub mod symbol;

pub use bar::{DailyBar, DailySeries, IntradayBar, IntradaySeries};
pub use company_overview::CompanyOverview;
pub use quote::Quote;
pub use search_match::SearchMatch;
