//! Room amenity catalogue
//!
//! Amenities arrive on the wire as free-form tags; the client treats
//! them as a closed set with a fixed mapping to display metadata.

use serde::{Deserialize, Serialize};

/// A room feature tag driving icon and label display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Amenity {
    Wifi,
    Monitor,
    Whiteboard,
    Coffee,
    Projector,
    VideoConference,
    AirConditioning,
    Accessible,
}

impl Amenity {
    /// All known amenities, in display order
    pub const ALL: [Amenity; 8] = [
        Amenity::Wifi,
        Amenity::Monitor,
        Amenity::Whiteboard,
        Amenity::Coffee,
        Amenity::Projector,
        Amenity::VideoConference,
        Amenity::AirConditioning,
        Amenity::Accessible,
    ];

    /// Parse a wire tag; unknown tags are not representable
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "wifi" => Some(Self::Wifi),
            "monitor" => Some(Self::Monitor),
            "whiteboard" => Some(Self::Whiteboard),
            "coffee" => Some(Self::Coffee),
            "projector" => Some(Self::Projector),
            "video_conference" | "videoconference" => Some(Self::VideoConference),
            "air_conditioning" | "airconditioning" => Some(Self::AirConditioning),
            "accessible" => Some(Self::Accessible),
            _ => None,
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Wifi => "Wi-Fi",
            Self::Monitor => "Monitor",
            Self::Whiteboard => "Whiteboard",
            Self::Coffee => "Coffee",
            Self::Projector => "Projector",
            Self::VideoConference => "Video conference",
            Self::AirConditioning => "Air conditioning",
            Self::Accessible => "Wheelchair accessible",
        }
    }

    /// Icon key consumed by the presentation layer
    pub fn icon_key(self) -> &'static str {
        match self {
            Self::Wifi => "wifi",
            Self::Monitor => "monitor",
            Self::Whiteboard => "edit-3",
            Self::Coffee => "coffee",
            Self::Projector => "video",
            Self::VideoConference => "phone-call",
            Self::AirConditioning => "wind",
            Self::Accessible => "accessibility",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_round_trip() {
        for amenity in Amenity::ALL {
            let tag = serde_json::to_string(&amenity).unwrap();
            let tag = tag.trim_matches('"');
            assert_eq!(Amenity::from_tag(tag), Some(amenity));
        }
    }

    #[test]
    fn test_from_tag_is_case_insensitive() {
        assert_eq!(Amenity::from_tag("WIFI"), Some(Amenity::Wifi));
        assert_eq!(Amenity::from_tag(" Coffee "), Some(Amenity::Coffee));
    }

    #[test]
    fn test_unknown_tag_is_none() {
        assert_eq!(Amenity::from_tag("jacuzzi"), None);
    }

    #[test]
    fn test_every_amenity_has_display_metadata() {
        for amenity in Amenity::ALL {
            assert!(!amenity.label().is_empty());
            assert!(!amenity.icon_key().is_empty());
        }
    }
}
