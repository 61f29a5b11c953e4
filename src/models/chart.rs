//! Price history and chart models

use chrono::{DateTime, Datelike, Utc};

/// A single data point on a price chart
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

impl PricePoint {
    /// Calendar day of month, for display only
    pub fn day(&self) -> u32 {
        self.timestamp.day()
    }
}

/// Outcome of a price history fetch
///
/// `Unavailable` is the empty-series sentinel: the upstream failed and the
/// reason has already been logged.
#[derive(Debug, Clone)]
pub enum PriceHistory {
    Loaded(Vec<PricePoint>),
    Unavailable(String),
}

impl PriceHistory {
    /// Points in upstream order; empty when unavailable
    pub fn points(&self) -> &[PricePoint] {
        match self {
            PriceHistory::Loaded(points) => points,
            PriceHistory::Unavailable(_) => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    pub fn len(&self) -> usize {
        self.points().len()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points().last()
    }
}

/// Rendered chart, base64-encoded PNG ready to embed as a data URI
#[derive(Debug, Clone)]
pub struct ChartArtifact {
    pub png_base64: String,
    pub width: u32,
    pub height: u32,
}

impl ChartArtifact {
    /// `data:image/png;base64,...` form for inline `<img>` tags
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", self.png_base64)
    }
}

/// Whether the chart could be drawn for this request
#[derive(Debug, Clone)]
pub enum ChartOutcome {
    Rendered(ChartArtifact),
    Unavailable(String),
}
