use thiserror::Error;

/// Errors from the upstream HTTP APIs (CoinGecko, NewsData.io)
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network/request error
    #[error("Request failed: {0}")]
    Request(String),
    /// Any non-2xx response, with the body kept for logging
    #[error("Upstream returned {status}: {body}")]
    Status { status: u16, body: String },
    /// Body was not the JSON we expected
    #[error("Failed to parse response: {0}")]
    Deserialization(String),
}

/// Errors from the trend forecaster
#[derive(Debug, Error, PartialEq)]
pub enum ForecastError {
    #[error("no price data available")]
    NoData,
}

/// Errors from the chart renderer
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no price data to plot")]
    NoData,
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("Chart file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors while reading settings from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    Invalid { key: String, value: String },
}

/// Errors that reach the caller of the dashboard pipeline
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The only request-fatal condition
    #[error("❌ Unknown coin: '{0}'")]
    UnknownAsset(String),
}

/// Trim a reqwest error down to its outermost message
///
/// reqwest chains "error sending request for url (...)" with the cause; the
/// URL carries the news API key, so logs only keep the cause.
pub fn extract_clean_error(error_msg: &str) -> String {
    if error_msg.contains("for url (") {
        if let Some(last_colon) = error_msg.rfind(": ") {
            error_msg[last_colon + 2..].trim().to_string()
        } else {
            error_msg.to_string()
        }
    } else {
        error_msg.to_string()
    }
}
