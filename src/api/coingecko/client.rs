use reqwest::Client as HttpClient;
use super::models::MarketChartResponse;
use crate::utils::ApiError;

/// CoinGecko market data client
#[derive(Debug, Clone)]
pub struct MarketDataClient {
    http_client: HttpClient,
    base_url: String,
}

impl Default for MarketDataClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketDataClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.coingecko.com/api/v3";

    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a new client with custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /coins/{id}/market_chart
    ///
    /// # Arguments
    /// * `coin_id` - CoinGecko coin id, e.g. `bitcoin`
    /// * `vs_currency` - Quote currency, e.g. `usd`
    /// * `days` - Size of the window ending now
    /// * `interval` - Sampling granularity, e.g. `daily`
    pub async fn market_chart(
        &self,
        coin_id: &str,
        vs_currency: &str,
        days: u32,
        interval: &str,
    ) -> Result<MarketChartResponse, ApiError> {
        let url = format!("{}/coins/{}/market_chart", self.base_url, coin_id);
        let days = days.to_string();
        let params = [
            ("vs_currency", vs_currency),
            ("days", days.as_str()),
            ("interval", interval),
        ];

        let response = self.http_client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("Request failed: {}", e)))?;

        crate::api::read_json::<MarketChartResponse>(response).await
    }
}
