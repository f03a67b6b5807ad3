//! Authentication endpoints

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use roomsense_core::user::{User, UserDto};

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::session::TokenStore;
use crate::Result;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    success: bool,
    #[serde(default)]
    data: Option<LoginData>,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    token: String,
}

/// Exchange credentials for a token, install it on the session, and
/// fetch the authenticated user
///
/// Token persistence is best-effort: a store failure is logged, not
/// surfaced, since the in-memory session is already usable.
pub async fn login(
    client: &ApiClient,
    store: &dyn TokenStore,
    username: &str,
    password: &str,
) -> Result<User> {
    let response: LoginResponse = client
        .post("/login", &LoginRequest { username, password })
        .await?;

    let token = match response.data {
        Some(data) if response.success => data.token,
        _ => {
            return Err(ApiError::Unexpected(
                "Login rejected by server".to_string(),
            ))
        }
    };

    client.session().set_token(token.clone());
    if let Err(error) = store.save(&token).await {
        warn!("Failed to persist auth token: {}", error);
    }

    let user = current_user(client).await?;
    info!(username = %user.username, "Logged in");
    Ok(user)
}

/// `GET /me` — fetch the authenticated user and cache it on the session
pub async fn current_user(client: &ApiClient) -> Result<User> {
    let dto: UserDto = client.get("/me").await?;
    let user = User::from_dto(dto);
    client.session().set_user(user.clone());
    Ok(user)
}

/// Validate a restored token by fetching the user behind it
///
/// A 401 here flows through the client's usual handling, which clears
/// the in-memory token; the persisted copy is purged too so the next
/// launch does not restore a token the server already rejected.
pub async fn validate_session(
    client: &ApiClient,
    store: &dyn TokenStore,
) -> Result<Option<User>> {
    if !client.session().is_authenticated() {
        return Ok(None);
    }
    match current_user(client).await {
        Ok(user) => Ok(Some(user)),
        Err(ApiError::Status { status: 401, .. }) => {
            if let Err(error) = store.clear().await {
                warn!("Failed to clear persisted auth token: {}", error);
            }
            Ok(None)
        }
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::session::{MemoryTokenStore, SessionContext};
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    /// Minimal HTTP server answering 401 to every request
    async fn spawn_unauthorized_server() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let mut buf = [0u8; 1024];
                    loop {
                        match socket.read(&mut buf).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => {
                                if buf[..n].windows(4).any(|w| w == b"\r\n\r\n") {
                                    break;
                                }
                            }
                        }
                    }
                    let body = r#"{"message":"Expired token"}"#;
                    let response = format!(
                        "HTTP/1.1 401 Unauthorized\r\nContent-Type: application/json\r\n\
                         Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_rejected_token_is_purged_everywhere() {
        let base_url = spawn_unauthorized_server().await;
        let config = ClientConfig {
            base_url,
            timeout: Duration::from_secs(5),
            ..ClientConfig::default()
        };

        let store = MemoryTokenStore::new();
        store.save("expired").await.unwrap();
        let session = SessionContext::init(&store).await.unwrap();
        let client = ApiClient::new(&config, session);
        let mut unauthenticated_rx = client.subscribe_unauthenticated();

        let user = validate_session(&client, &store).await.unwrap();

        assert!(user.is_none());
        // In-memory slot, persisted copy, and the forced sign-out signal
        assert!(client.session().token().is_none());
        assert!(store.load().await.unwrap().is_none());
        assert!(unauthenticated_rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_validate_session_without_token_skips_network() {
        // Unroutable base URL: any request would fail loudly
        let config = ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..ClientConfig::default()
        };
        let store = MemoryTokenStore::new();
        let client = ApiClient::new(&config, SessionContext::new());

        let user = validate_session(&client, &store).await.unwrap();
        assert!(user.is_none());
    }
}
