//! Data models for the coincast pipeline
//!
//! Every value here is built once per request and read-only afterwards.

pub mod chart;
pub mod coin;
pub mod dashboard;
pub mod forecast;
pub mod news;

// Re-export commonly used types for convenience
pub use chart::{ChartArtifact, ChartOutcome, PriceHistory, PricePoint};
pub use coin::{lookup_coin, supported_coins, Coin};
pub use dashboard::Dashboard;
pub use forecast::{Forecast, ForecastOutcome, ForecastPoint, TrendLine, FORECAST_HORIZON_DAYS};
pub use news::{NewsFeed, NewsItem};
