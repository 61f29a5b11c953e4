use tracing::{info, warn};
use crate::api::newsdata::{NewsArticle, NewsClient};
use crate::models::{NewsFeed, NewsItem};
use crate::utils::extract_clean_error;

/// Most headlines shown on a page
pub const MAX_HEADLINES: usize = 5;
pub const NEWS_QUERY: &str = "crypto";
pub const NEWS_LANGUAGE: &str = "en";

const MISSING_TITLE: &str = "No Title";

const FALLBACK_HEADLINES: [&str; MAX_HEADLINES] = [
    "Crypto Market Shows Signs of Recovery",
    "Bitcoin ETF Launch Raises Hopes",
    "Solana Reaches New All-Time High",
    "Ethereum 2.0 Delayed Again",
    "Pi Network Tests Mainnet Rollout",
];

/// The curated list served whenever the live feed can't be used
pub fn fallback_news() -> Vec<NewsItem> {
    FALLBACK_HEADLINES
        .iter()
        .map(|title| NewsItem { title: title.to_string() })
        .collect()
}

/// Keep the first five articles, title only
pub fn headlines_from_results(results: &[NewsArticle]) -> Vec<NewsItem> {
    results
        .iter()
        .take(MAX_HEADLINES)
        .map(|article| NewsItem {
            title: article
                .title
                .clone()
                .unwrap_or_else(|| MISSING_TITLE.to_string()),
        })
        .collect()
}

/// Latest crypto headlines, or the fallback list on any failure
pub async fn fetch_crypto_news(client: &NewsClient) -> NewsFeed {
    if !client.has_api_key() {
        warn!("Fallback news used due to: no NewsData API key configured");
        return NewsFeed::Fallback(fallback_news());
    }

    let response = match client.latest(NEWS_QUERY, NEWS_LANGUAGE).await {
        Ok(r) => r,
        Err(e) => {
            warn!("Fallback news used due to: {}", extract_clean_error(&e.to_string()));
            return NewsFeed::Fallback(fallback_news());
        }
    };

    let Some(results) = response.results else {
        warn!(
            "Fallback news used due to: no results in response (status: {:?})",
            response.status
        );
        return NewsFeed::Fallback(fallback_news());
    };

    let items = headlines_from_results(&results);
    info!("📰 Loaded {} live headlines", items.len());
    NewsFeed::Live(items)
}
