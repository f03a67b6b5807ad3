//! Capture DTOs and view-models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw sensor reading as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureDto {
    pub id: u64,
    pub value: f64,
    pub captured_at: DateTime<Utc>,
    pub capture_type_id: u64,
}

/// Raw capture-type record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureTypeDto {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Last capture of a given type, as paired by the room detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedCaptureDto {
    #[serde(rename = "type")]
    pub capture_type: CaptureTypeDto,
    pub capture: CaptureDto,
}

/// A single sensor reading
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capture {
    pub id: u64,
    pub value: f64,
    pub captured_at: DateTime<Utc>,
    pub capture_type_id: u64,
}

impl Capture {
    pub fn from_dto(dto: CaptureDto) -> Self {
        Self {
            id: dto.id,
            value: dto.value,
            captured_at: dto.captured_at,
            capture_type_id: dto.capture_type_id,
        }
    }
}

/// A kind of sensor reading (temperature, humidity, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureType {
    pub id: u64,
    pub name: String,
    pub description: String,
}

impl CaptureType {
    pub fn from_dto(dto: CaptureTypeDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
        }
    }
}

/// A capture paired with its type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedCapture {
    pub capture_type: CaptureType,
    pub capture: Capture,
}

impl TypedCapture {
    pub fn from_dto(dto: TypedCaptureDto) -> Self {
        Self {
            capture_type: CaptureType::from_dto(dto.capture_type),
            capture: Capture::from_dto(dto.capture),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_capture_wire_format() {
        let dto: TypedCaptureDto = serde_json::from_str(
            r#"{"type":{"id":1,"name":"temperature","description":"Room temperature"},
                "capture":{"id":42,"value":21.5,
                           "capturedAt":"2026-08-20T10:00:00Z","captureTypeId":1}}"#,
        )
        .unwrap();
        let typed = TypedCapture::from_dto(dto);
        assert_eq!(typed.capture_type.name, "temperature");
        assert_eq!(typed.capture.value, 21.5);
        assert_eq!(typed.capture.capture_type_id, typed.capture_type.id);
    }

    #[test]
    fn test_capture_type_description_defaults_empty() {
        let dto: CaptureTypeDto = serde_json::from_str(r#"{"id":2,"name":"humidity"}"#).unwrap();
        assert_eq!(CaptureType::from_dto(dto).description, "");
    }
}
