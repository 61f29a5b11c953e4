use chrono::{TimeZone, Utc};
use serde_json::Value;
use tracing::{info, warn};
use crate::api::coingecko::MarketDataClient;
use crate::models::{Coin, PriceHistory, PricePoint};
use crate::utils::ApiError;

/// Quote currency for every history request
pub const VS_CURRENCY: &str = "usd";
/// Size of the history window in days
pub const HISTORY_WINDOW_DAYS: u32 = 15;
/// Sampling granularity of the history
pub const HISTORY_INTERVAL: &str = "daily";

/// Convert `[timestamp_ms, price]` entries into price points, keeping upstream order
///
/// Entries that are not a pair of numbers, whose timestamp is out of range or
/// whose price is negative are dropped.
pub fn points_from_pairs(entries: &[Value]) -> Vec<PricePoint> {
    let mut points = Vec::with_capacity(entries.len());

    for entry in entries {
        let pair = entry.as_array().filter(|arr| arr.len() >= 2);
        let (Some(timestamp_ms), Some(price)) = (
            pair.and_then(|arr| arr[0].as_f64()),
            pair.and_then(|arr| arr[1].as_f64()),
        ) else {
            warn!("Skipping malformed price entry {}", entry);
            continue;
        };

        if !price.is_finite() || price < 0.0 {
            warn!("Skipping invalid price {} at {}", price, timestamp_ms);
            continue;
        }

        let Some(timestamp) = Utc.timestamp_millis_opt(timestamp_ms as i64).single() else {
            warn!("Skipping invalid timestamp {}", timestamp_ms);
            continue;
        };

        points.push(PricePoint { timestamp, price });
    }

    points
}

/// Fetch the last 15 days of daily USD prices for `coin`
///
/// Never fails: upstream problems are logged and reported as
/// `PriceHistory::Unavailable` so the rest of the page can still be built.
pub async fn fetch_price_history(client: &MarketDataClient, coin: &Coin) -> PriceHistory {
    info!("📈 Fetching {}-day price history for {}", HISTORY_WINDOW_DAYS, coin.id);

    let response = match client
        .market_chart(coin.id, VS_CURRENCY, HISTORY_WINDOW_DAYS, HISTORY_INTERVAL)
        .await
    {
        Ok(r) => r,
        Err(ApiError::Status { status, body }) => {
            warn!("Error fetching price history: {} {}", status, body);
            return PriceHistory::Unavailable(format!("price API returned status {}", status));
        }
        Err(e) => {
            warn!("Error fetching price history: {}", e);
            return PriceHistory::Unavailable(e.to_string());
        }
    };

    let Some(pairs) = response.prices else {
        warn!("No 'prices' key found in market chart response for {}", coin.id);
        return PriceHistory::Unavailable("price API response has no prices".to_string());
    };

    let points = points_from_pairs(&pairs);
    info!("Loaded {} price points for {}", points.len(), coin.id);
    PriceHistory::Loaded(points)
}
