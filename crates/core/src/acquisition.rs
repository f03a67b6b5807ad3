//! Acquisition system models
//!
//! An acquisition system is the hardware box pushing captures for a
//! room. Its configuration is an opaque blob the client round-trips
//! without interpreting.

use serde::{Deserialize, Serialize};

/// Acquisition system record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcquisitionSystemDto {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub room_id: Option<u64>,
}

/// Acquisition system view-model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcquisitionSystem {
    pub id: u64,
    pub name: String,
    pub active: bool,
    pub room_id: Option<u64>,
}

impl AcquisitionSystem {
    pub fn from_dto(dto: AcquisitionSystemDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            active: dto.active,
            room_id: dto.room_id,
        }
    }
}

/// Opaque configuration blob for one acquisition system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AcquisitionSystemConfig(pub serde_json::Value);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dto() {
        let dto: AcquisitionSystemDto =
            serde_json::from_str(r#"{"id":5,"name":"DAQ-5","active":true,"roomId":3}"#).unwrap();
        let system = AcquisitionSystem::from_dto(dto);
        assert_eq!(system.id, 5);
        assert!(system.active);
        assert_eq!(system.room_id, Some(3));
    }

    #[test]
    fn test_config_blob_round_trips_untouched() {
        let raw = r#"{"sampleRateHz":2,"sensors":[{"pin":4,"kind":"dht22"}]}"#;
        let config: AcquisitionSystemConfig = serde_json::from_str(raw).unwrap();
        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back, serde_json::from_str::<serde_json::Value>(raw).unwrap());
    }
}
