//! Smoke CLI for the RoomSense client
//!
//! Logs in with credentials from the environment, lists rooms, and
//! prints their availability and amenities. Useful for checking a
//! deployment end to end without the app.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roomsense_client::services::{auth, rooms};
use roomsense_client::session::{FileTokenStore, SessionContext};
use roomsense_client::{ApiClient, ClientConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomsense_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    tracing::info!("Using API at {}", config.base_url);

    let store = FileTokenStore::new(&config.token_path);
    let session = SessionContext::init(&store)
        .await
        .context("Failed to load persisted session")?;
    let client = ApiClient::new(&config, session);

    let user = match auth::validate_session(&client, &store).await? {
        Some(user) => user,
        None => {
            let username =
                std::env::var("ROOMSENSE_USERNAME").context("ROOMSENSE_USERNAME not set")?;
            let password =
                std::env::var("ROOMSENSE_PASSWORD").context("ROOMSENSE_PASSWORD not set")?;
            auth::login(&client, &store, &username, &password).await?
        }
    };

    println!(
        "Signed in as {} ({})",
        user.username,
        roomsense_core::user::format_roles(&user.roles)
    );

    for room in rooms::list_rooms(&client).await? {
        let amenities: Vec<&str> = room.amenities.iter().map(|a| a.label()).collect();
        println!(
            "{:>4}  {:<20} {}  [{}]",
            room.id,
            room.name,
            if room.available { "available" } else { "busy" },
            amenities.join(", ")
        );
    }

    Ok(())
}
