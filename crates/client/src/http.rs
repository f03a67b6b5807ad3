//! Thin HTTP wrapper over the backend REST API
//!
//! All network access goes through [`ApiClient`]: it joins paths onto
//! the configured base URL, attaches the bearer token from the session
//! when one is present, and maps every failure into [`ApiError`].
//!
//! A 401 response is special-cased here and nowhere else: the session
//! token is cleared synchronously and a process-wide unauthenticated
//! signal is broadcast so the root layer can force a sign-out screen.
//! The broadcast is fire-and-forget; having no subscriber is fine.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::SessionContext;
use crate::Result;

const UNAUTHENTICATED_CHANNEL_CAPACITY: usize = 8;

/// Error body shape the backend uses for non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client wrapper with bearer auth and centralized 401 handling
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionContext,
    unauthenticated_tx: broadcast::Sender<()>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: SessionContext) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        let (unauthenticated_tx, _) = broadcast::channel(UNAUTHENTICATED_CHANNEL_CAPACITY);

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            unauthenticated_tx,
        }
    }

    /// Receiver for the process-wide unauthenticated signal
    pub fn subscribe_unauthenticated(&self) -> broadcast::Receiver<()> {
        self.unauthenticated_tx.subscribe()
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(self.http.get(self.url(path))).await?;
        Self::decode(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, mut request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        debug!(status = status.as_u16(), "API response");

        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
        }

        if !status.is_success() {
            let message = Self::error_message(response, status).await;
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    /// Clear the token and broadcast the forced sign-out signal
    fn handle_unauthorized(&self) {
        warn!("Received 401, clearing session token");
        self.session.clear_token();
        let _ = self.unauthenticated_tx.send(());
    }

    async fn error_message(response: reqwest::Response, status: StatusCode) -> String {
        match response.json::<ErrorBody>().await {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => format!(
                "Request failed with status {}",
                status.canonical_reason().unwrap_or(status.as_str())
            ),
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else {
                ApiError::Decode(e.to_string())
            }
        })
    }
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Network(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_client() -> ApiClient {
        let config = ClientConfig {
            base_url: "http://api.example.com/".to_string(),
            timeout: Duration::from_secs(10),
            ..ClientConfig::default()
        };
        ApiClient::new(&config, SessionContext::new())
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = test_client();
        assert_eq!(client.url("/rooms"), "http://api.example.com/rooms");
        assert_eq!(client.url("/rooms/3/last"), "http://api.example.com/rooms/3/last");
    }

    #[test]
    fn test_unauthorized_clears_token_and_broadcasts() {
        let client = test_client();
        client.session().set_token("expired".to_string());
        let mut unauthenticated_rx = client.subscribe_unauthenticated();

        client.handle_unauthorized();

        assert!(client.session().token().is_none());
        assert!(unauthenticated_rx.try_recv().is_ok());
    }

    #[test]
    fn test_unauthorized_without_subscriber_does_not_panic() {
        let client = test_client();
        client.session().set_token("expired".to_string());
        client.handle_unauthorized();
        assert!(client.session().token().is_none());
    }
}
