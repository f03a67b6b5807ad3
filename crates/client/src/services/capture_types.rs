//! Capture-type catalogue endpoints

use roomsense_core::capture::{CaptureType, CaptureTypeCatalogue, CaptureTypeDto};
use roomsense_core::hydra::HydraCollection;

use crate::http::ApiClient;
use crate::Result;

/// `GET /capture_types`
pub async fn list_capture_types(client: &ApiClient) -> Result<Vec<CaptureType>> {
    let collection: HydraCollection<CaptureTypeDto> = client.get("/capture_types").await?;
    Ok(collection
        .into_members()
        .into_iter()
        .map(CaptureType::from_dto)
        .collect())
}

/// Fetch the catalogue once for id lookups
pub async fn load_catalogue(client: &ApiClient) -> Result<CaptureTypeCatalogue> {
    Ok(CaptureTypeCatalogue::new(list_capture_types(client).await?))
}
