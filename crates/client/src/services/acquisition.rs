//! Acquisition-system endpoints

use roomsense_core::acquisition::{
    AcquisitionSystem, AcquisitionSystemConfig, AcquisitionSystemDto,
};
use roomsense_core::hydra::HydraCollection;

use crate::http::ApiClient;
use crate::Result;

/// `GET /acquisition_systems`
pub async fn list_acquisition_systems(client: &ApiClient) -> Result<Vec<AcquisitionSystem>> {
    let collection: HydraCollection<AcquisitionSystemDto> =
        client.get("/acquisition_systems").await?;
    Ok(collection
        .into_members()
        .into_iter()
        .map(AcquisitionSystem::from_dto)
        .collect())
}

/// `GET /acquisition_systems/{id}/config` — opaque blob, not interpreted
pub async fn get_config(client: &ApiClient, id: u64) -> Result<AcquisitionSystemConfig> {
    client.get(&format!("/acquisition_systems/{}/config", id)).await
}

/// `PUT /acquisition_systems/{id}/config`
pub async fn update_config(
    client: &ApiClient,
    id: u64,
    config: &AcquisitionSystemConfig,
) -> Result<AcquisitionSystemConfig> {
    client
        .put(&format!("/acquisition_systems/{}/config", id), config)
        .await
}
