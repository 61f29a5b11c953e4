//! Everything the presentation layer needs for one coin page

use super::{ChartOutcome, Coin, ForecastOutcome, NewsFeed, PriceHistory};

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub coin: Coin,
    pub history: PriceHistory,
    pub forecast: ForecastOutcome,
    pub chart: ChartOutcome,
    pub news: NewsFeed,
}
