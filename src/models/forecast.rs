//! Forecast models

use chrono::{DateTime, Utc};

/// Number of days extrapolated past the last historical point
pub const FORECAST_HORIZON_DAYS: usize = 7;

/// Fitted `price = slope * index + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    pub fn predict(&self, index: usize) -> f64 {
        self.slope * index as f64 + self.intercept
    }
}

/// One predicted day
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub date: DateTime<Utc>,
    pub price: f64,
}

/// Predicted prices for the days after the last historical point
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub trend: TrendLine,
    pub points: Vec<ForecastPoint>,
}

impl Forecast {
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }
}

/// Whether a forecast could be produced for this request
#[derive(Debug, Clone)]
pub enum ForecastOutcome {
    Ready(Forecast),
    Unavailable(String),
}
