use chrono::{DateTime, Duration, Utc};
use tracing::debug;
use crate::models::{Forecast, ForecastPoint, PricePoint, TrendLine};
use crate::utils::ForecastError;

/// Least-squares line through `(i, prices[i])`
///
/// The regressor is the array position, not elapsed time, so gaps between
/// upstream samples are ignored. A single point yields a flat line.
pub fn fit_trend(prices: &[f64]) -> Result<TrendLine, ForecastError> {
    if prices.is_empty() {
        return Err(ForecastError::NoData);
    }

    let n = prices.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = prices.iter().sum::<f64>() / n;

    let (mut sxy, mut sxx) = (0.0, 0.0);
    for (i, &y) in prices.iter().enumerate() {
        let dx = i as f64 - mean_x;
        sxy += dx * (y - mean_y);
        sxx += dx * dx;
    }

    let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
    let intercept = mean_y - slope * mean_x;

    Ok(TrendLine { slope, intercept })
}

/// The `horizon` consecutive calendar days after `last`
pub fn forecast_dates(last: DateTime<Utc>, horizon: usize) -> Vec<DateTime<Utc>> {
    (1..=horizon as i64).map(|k| last + Duration::days(k)).collect()
}

/// Extrapolate `horizon` daily prices past the end of `history`
///
/// Point `k` (1-based) is dated `last.timestamp + k days` and valued at the
/// fitted line's index `n + k - 1`.
pub fn forecast_prices(history: &[PricePoint], horizon: usize) -> Result<Forecast, ForecastError> {
    let last = history.last().ok_or(ForecastError::NoData)?;
    let prices: Vec<f64> = history.iter().map(|p| p.price).collect();
    let trend = fit_trend(&prices)?;

    debug!(
        "Fitted trend over {} points: slope={:.6}, intercept={:.6}",
        prices.len(),
        trend.slope,
        trend.intercept
    );

    let n = prices.len();
    let points = forecast_dates(last.timestamp, horizon)
        .into_iter()
        .enumerate()
        .map(|(k, date)| ForecastPoint {
            date,
            price: trend.predict(n + k),
        })
        .collect();

    Ok(Forecast { trend, points })
}
