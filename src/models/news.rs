//! Headline models

use serde::Serialize;

/// A headline. Title only: no link, body or source from the remote feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub title: String,
}

/// Headlines for the page, either all live or all fallback
#[derive(Debug, Clone, PartialEq)]
pub enum NewsFeed {
    Live(Vec<NewsItem>),
    Fallback(Vec<NewsItem>),
}

impl NewsFeed {
    pub fn items(&self) -> &[NewsItem] {
        match self {
            NewsFeed::Live(items) | NewsFeed::Fallback(items) => items,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, NewsFeed::Fallback(_))
    }
}
