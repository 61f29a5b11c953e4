use serde::Deserialize;

/// Response from GET /latest
#[derive(Debug, Clone, Deserialize)]
pub struct NewsResponse {
    pub status: Option<String>,
    pub results: Option<Vec<NewsArticle>>,
}

/// One article from the feed. Only the title is read; links, descriptions
/// and content are never deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsArticle {
    pub title: Option<String>,
}
