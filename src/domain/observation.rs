use serde::{Deserialize, Serialize};

use super::Equipment;

/// Kind of sky object an observation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectCategory {
    Planet,
    Moon,
    DeepSky,
    MeteorShower,
    SatellitePass,
    Event,
}

impl ObjectCategory {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "planet" => Some(Self::Planet),
            "moon" => Some(Self::Moon),
            "deep-sky" | "dso" => Some(Self::DeepSky),
            "meteor-shower" | "meteor" | "meteors" => Some(Self::MeteorShower),
            "satellite-pass" | "satellite" | "iss" => Some(Self::SatellitePass),
            "event" => Some(Self::Event),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planet => "planet",
            Self::Moon => "moon",
            Self::DeepSky => "deep-sky",
            Self::MeteorShower => "meteor-shower",
            Self::SatellitePass => "satellite-pass",
            Self::Event => "event",
        }
    }

    pub fn all() -> &'static [ObjectCategory] {
        &[
            Self::Planet,
            Self::Moon,
            Self::DeepSky,
            Self::MeteorShower,
            Self::SatellitePass,
            Self::Event,
        ]
    }
}

impl std::fmt::Display for ObjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What was observed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedObject {
    pub category: ObjectCategory,
    /// Stable key, e.g. `planet-mars` or `dso-M31`
    pub object_id: String,
    pub display_name: String,
}

/// Where the observation was made
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_name: Option<String>,
}

/// A single entry of the observation log.
///
/// `timestamp` is kept exactly as recorded by the client (normally RFC 3339
/// with the observer's offset). It is parsed lazily by the statistics code,
/// so a malformed value does not prevent the record from being stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub id: String,
    pub object: ObservedObject,
    pub timestamp: String,
    pub location: Location,
    pub equipment: Equipment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ObservationRecord {
    /// Create a record with a freshly generated id
    pub fn new(
        object: ObservedObject,
        timestamp: impl Into<String>,
        location: Location,
        equipment: Equipment,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            object,
            timestamp: timestamp.into(),
            location,
            equipment,
            notes,
        }
    }

    pub fn category(&self) -> ObjectCategory {
        self.object.category
    }
}
