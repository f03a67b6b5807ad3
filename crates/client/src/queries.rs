//! Ready-made query containers, one per screen fetch
//!
//! These bind the domain services to [`Query`]/[`KeyedQuery`] so
//! screens only hold a container and render its snapshot.

use std::sync::Arc;

use chrono::Utc;

use roomsense_core::acquisition::{AcquisitionSystem, AcquisitionSystemConfig};
use roomsense_core::capture::{CaptureType, DailyPoint};
use roomsense_core::room::{Room, RoomDetail};

use crate::http::ApiClient;
use crate::query::{KeyedQuery, Query};
use crate::services::{acquisition, capture_types, charts, rooms};

/// Room list for the overview screen
pub fn rooms_query(client: Arc<ApiClient>) -> Query<Vec<Room>> {
    Query::new(move || {
        let client = Arc::clone(&client);
        async move { rooms::list_rooms(&client).await }
    })
}

/// Room detail, keyed by room id
pub fn room_detail_query(client: Arc<ApiClient>) -> KeyedQuery<u64, RoomDetail> {
    KeyedQuery::new(move |id| {
        let client = Arc::clone(&client);
        async move { rooms::get_room(&client, id).await }
    })
}

/// Latest capture per type for one room, keyed by room id
pub fn room_last_captures_query(client: Arc<ApiClient>) -> KeyedQuery<u64, RoomDetail> {
    KeyedQuery::new(move |id| {
        let client = Arc::clone(&client);
        async move { rooms::get_room_last_captures(&client, id).await }
    })
}

/// Capture-type catalogue, fetched once
pub fn capture_types_query(client: Arc<ApiClient>) -> Query<Vec<CaptureType>> {
    Query::new(move || {
        let client = Arc::clone(&client);
        async move { capture_types::list_capture_types(&client).await }
    })
}

/// Acquisition systems for the configuration screens
pub fn acquisition_systems_query(client: Arc<ApiClient>) -> Query<Vec<AcquisitionSystem>> {
    Query::new(move || {
        let client = Arc::clone(&client);
        async move { acquisition::list_acquisition_systems(&client).await }
    })
}

/// One system's configuration blob, keyed by system id
pub fn acquisition_config_query(
    client: Arc<ApiClient>,
) -> KeyedQuery<u64, AcquisitionSystemConfig> {
    KeyedQuery::new(move |id| {
        let client = Arc::clone(&client);
        async move { acquisition::get_config(&client, id).await }
    })
}

/// 7-day chart series for one room, keyed by room id
///
/// "Today" is taken at fetch time, so a refetch after midnight shifts
/// the window.
pub fn room_week_series_query(client: Arc<ApiClient>) -> KeyedQuery<u64, Vec<DailyPoint>> {
    KeyedQuery::new(move |id| {
        let client = Arc::clone(&client);
        async move {
            let today = Utc::now().date_naive();
            charts::room_week_series(&client, id, today).await
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::session::SessionContext;

    #[tokio::test]
    async fn test_keyed_containers_stay_idle_without_key() {
        // No server involved: absent keys must never issue a request.
        let client = Arc::new(ApiClient::new(
            &ClientConfig::default(),
            SessionContext::new(),
        ));

        let detail = room_detail_query(Arc::clone(&client));
        detail.set_key(Some(0)).await;
        let state = detail.snapshot().await;
        assert!(state.is_loading);
        assert!(state.data.is_none());
        assert!(state.error.is_none());

        let config = acquisition_config_query(client);
        config.set_key(None).await;
        assert!(config.snapshot().await.data.is_none());
    }
}
