//! Room view-models

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{RoomDetailDto, RoomDto};
use crate::amenity::Amenity;
use crate::capture::TypedCapture;

/// Room as shown in list screens
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: u64,
    pub name: String,
    pub available: bool,
    pub amenities: Vec<Amenity>,
    pub color: String,
    pub description: Option<String>,
}

impl Room {
    /// Map the wire record into the view-model
    ///
    /// Amenity tags outside the closed catalogue are dropped.
    pub fn from_dto(dto: RoomDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            available: dto.available,
            amenities: dto
                .amenities
                .iter()
                .filter_map(|tag| Amenity::from_tag(tag))
                .collect(),
            color: dto.color,
            description: dto.description,
        }
    }
}

/// Room as shown in the detail screen, with the last reading per type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetail {
    #[serde(flatten)]
    pub room: Room,
    pub last_captures_by_type: Vec<TypedCapture>,
    pub created_at: Option<DateTime<Utc>>,
}

impl RoomDetail {
    pub fn from_dto(dto: RoomDetailDto) -> Self {
        Self {
            room: Room::from_dto(dto.room),
            last_captures_by_type: dto
                .last_captures_by_type
                .into_iter()
                .map(TypedCapture::from_dto)
                .collect(),
            created_at: dto.created_at,
        }
    }
}
