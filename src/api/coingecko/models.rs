use serde::Deserialize;

/// Response from GET /coins/{id}/market_chart
///
/// `prices` is `[[timestamp_ms, price], ...]`. It is optional so that an
/// error payload served with a 200 still deserializes and can be reported.
/// Entries stay raw JSON so one malformed pair (e.g. a `null` price) can be
/// dropped without losing the rest of the series.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Option<Vec<serde_json::Value>>,
}
