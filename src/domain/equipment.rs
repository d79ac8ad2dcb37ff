use serde::{Deserialize, Serialize};

/// Optical aid used for an observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Equipment {
    NakedEye,
    Binoculars,
    Telescope,
}

impl Equipment {
    /// Parse equipment from a string (supports short aliases)
    /// - naked-eye: eye, naked, naked-eye
    /// - binoculars: bino, binos, binoculars
    /// - telescope: scope, tele, telescope
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "eye" | "naked" | "naked-eye" | "naked_eye" => Some(Self::NakedEye),
            "bino" | "binos" | "binoculars" => Some(Self::Binoculars),
            "scope" | "tele" | "telescope" => Some(Self::Telescope),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NakedEye => "naked-eye",
            Self::Binoculars => "binoculars",
            Self::Telescope => "telescope",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NakedEye => "Naked Eye",
            Self::Binoculars => "Binoculars",
            Self::Telescope => "Telescope",
        }
    }
}

impl std::fmt::Display for Equipment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
