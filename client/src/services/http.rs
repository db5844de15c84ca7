//! HTTP plumbing for the remote API
//!
//! One `ApiClient` is shared by every domain service; it owns the base URL,
//! the timeout, and the mapping from HTTP failures to `AppError`. Each call
//! is stamped with a request id for log correlation. No retries happen
//! here; failures propagate to the caller untouched.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::error::{AppError, Result};

/// Thin wrapper over `reqwest::Client` bound to the platform API
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, path, method = "GET", "calling remote api");
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, path, method = "POST", "calling remote api");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    /// POST where the remote answers with no usable body
    pub async fn post_no_content<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, path, method = "POST", "calling remote api");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, path, method = "PATCH", "calling remote api");
        let response = self.http.patch(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, path, method = "DELETE", "calling remote api");
        let response = self.http.delete(self.url(path)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        error!(status = %status, message = %message, "remote api call failed");

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(message));
        }
        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new(&ApiConfig {
            base_url: "http://localhost:8080/".into(),
            timeout_ms: 1_000,
        })
        .unwrap();
        assert_eq!(client.url("/api/v1/videos"), "http://localhost:8080/api/v1/videos");
    }
}
