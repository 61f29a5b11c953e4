pub mod chart_service;
pub mod dashboard_service;
pub mod forecast_service;
pub mod news_service;
pub mod price_service;

pub use dashboard_service::{build_dashboard, DashboardContext};
