//! Room wire-format records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::capture::TypedCaptureDto;

/// Room record as returned by list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Room record as returned by the detail endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailDto {
    #[serde(flatten)]
    pub room: RoomDto,
    #[serde(default)]
    pub last_captures_by_type: Vec<TypedCaptureDto>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body accepted by `PUT /rooms/{id}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdateDto {
    pub name: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
