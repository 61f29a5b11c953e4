pub mod errors;

#[cfg(test)]
pub(crate) mod mock_server;

pub use errors::{extract_clean_error, ApiError, ChartError, ConfigError, DashboardError, ForecastError};
