pub mod client;
pub mod models;

pub use client::NewsClient;
pub use models::{NewsArticle, NewsResponse};
