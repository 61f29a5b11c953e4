use reqwest::Client as HttpClient;
use super::models::NewsResponse;
use crate::utils::ApiError;

/// NewsData.io client
#[derive(Debug, Clone)]
pub struct NewsClient {
    http_client: HttpClient,
    api_key: Option<String>,
    base_url: String,
}

impl NewsClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://newsdata.io/api/1";

    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a new client with custom base URL (for testing)
    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// GET /latest?apikey=...&q={query}&language={language}
    pub async fn latest(&self, query: &str, language: &str) -> Result<NewsResponse, ApiError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ApiError::Request("No NewsData API key configured".to_string()))?;

        let url = format!("{}/latest", self.base_url);
        let params = [("apikey", api_key), ("q", query), ("language", language)];

        let response = self.http_client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("Request failed: {}", e)))?;

        tracing::debug!("NewsData.io status: {}", response.status());

        crate::api::read_json::<NewsResponse>(response).await
    }
}
