pub mod coingecko;
pub mod newsdata;

use serde::de::DeserializeOwned;
use crate::utils::ApiError;

/// Turn a response into `T`, mapping non-2xx statuses to `ApiError::Status`
pub(crate) async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body_text = response
        .text()
        .await
        .map_err(|e| ApiError::Request(format!("Failed to read body: {}", e)))?;

    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: body_text,
        });
    }

    serde_json::from_str::<T>(&body_text)
        .map_err(|e| ApiError::Deserialization(e.to_string()))
}
