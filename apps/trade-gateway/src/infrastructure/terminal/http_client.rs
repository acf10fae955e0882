//! HTTP client wrapper for the terminal bridge.

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api_types::BridgeErrorResponse;
use super::config::BridgeConfig;
use super::error::BridgeError;

/// HTTP client for the terminal automation bridge.
///
/// Requests are never retried: the bridge drives a stateful UI session and a
/// replayed submit could double-enter an order. Every call is bounded by the
/// configured timeout instead.
#[derive(Debug, Clone)]
pub struct BridgeHttpClient {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl BridgeHttpClient {
    /// Create a new HTTP client from config.
    pub fn new(config: &BridgeConfig) -> Result<Self, BridgeError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BridgeError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout.as_secs(),
        })
    }

    /// Make a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BridgeError> {
        self.request("GET", path, None::<&()>).await
    }

    /// Make a POST request with a JSON body.
    #[allow(clippy::future_not_send)]
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BridgeError> {
        self.request("POST", path, Some(body)).await
    }

    /// Make a DELETE request.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, BridgeError> {
        self.request("DELETE", path, None::<&()>).await
    }

    /// Internal request implementation.
    #[allow(clippy::future_not_send)]
    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &str,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, BridgeError> {
        let url = format!("{}{path}", self.base_url);

        let request = match method {
            "GET" => self.client.get(&url),
            "POST" => {
                let mut req = self.client.post(&url);
                if let Some(b) = body {
                    req = req.json(b);
                }
                req
            }
            "DELETE" => self.client.delete(&url),
            _ => {
                return Err(BridgeError::Http(format!("Unsupported method: {method}")));
            }
        };

        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();

        if status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| BridgeError::Http(e.to_string()))?;
            if text.is_empty() {
                // The bridge answers 200 with an empty body on some commands.
                return serde_json::from_str("null")
                    .map_err(|e| BridgeError::JsonParse(e.to_string()));
            }
            return serde_json::from_str(&text).map_err(|e| BridgeError::JsonParse(e.to_string()));
        }

        let error_body = response.text().await.unwrap_or_default();
        let (code, message) = match serde_json::from_str::<BridgeErrorResponse>(&error_body) {
            Ok(err) => (
                err.code.unwrap_or_else(|| status.as_u16().to_string()),
                err.message,
            ),
            Err(_) => (status.as_u16().to_string(), error_body),
        };

        match status {
            StatusCode::NOT_FOUND => {
                let order_id = path.rsplit('/').next().unwrap_or(path).to_string();
                Err(BridgeError::NotFound { order_id })
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(BridgeError::Rejected(message))
            }
            _ => Err(BridgeError::Api { code, message }),
        }
    }

    /// Classify a reqwest transport error.
    fn transport_error(&self, err: &reqwest::Error) -> BridgeError {
        if err.is_timeout() {
            BridgeError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            BridgeError::Http(err.to_string())
        }
    }
}
