//! coincast: recent price history, a 7-day linear trend forecast chart and
//! crypto headlines for one coin at a time.
//!
//! The entry point for a serving layer is [`services::build_dashboard`].

pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Settings;
pub use models::Dashboard;
pub use services::{build_dashboard, DashboardContext};
pub use utils::DashboardError;
