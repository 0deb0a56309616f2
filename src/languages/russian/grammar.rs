//! Russian gender, animacy and case syncretism

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    pub const LABELS: &'static [&'static str] = &["masculine", "feminine", "neuter"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Masculine => "masculine",
            Self::Feminine => "feminine",
            Self::Neuter => "neuter",
        }
    }

    pub fn parse(owner: &'static str, value: &str) -> Result<Self, ValidationError> {
        match value {
            "masculine" => Ok(Self::Masculine),
            "feminine" => Ok(Self::Feminine),
            "neuter" => Ok(Self::Neuter),
            other => Err(ValidationError::InvalidValue {
                record: owner,
                field: "gender",
                value: other.to_string(),
                allowed: Self::LABELS.to_vec(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animacy {
    Animate,
    #[default]
    Inanimate,
}

impl Animacy {
    pub const LABELS: &'static [&'static str] = &["animate", "inanimate"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Animate => "animate",
            Self::Inanimate => "inanimate",
        }
    }

    /// An empty value means inanimate
    pub fn parse(owner: &'static str, value: &str) -> Result<Self, ValidationError> {
        match value {
            "animate" => Ok(Self::Animate),
            "inanimate" | "" => Ok(Self::Inanimate),
            other => Err(ValidationError::InvalidValue {
                record: owner,
                field: "animacy",
                value: other.to_string(),
                allowed: Self::LABELS.to_vec(),
            }),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Animacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accusative singular when the source does not give one
///
/// Animate nouns take the genitive form (or the bare noun if that is missing
/// too); inanimate nouns take the nominative.
pub fn derive_accusative(animacy: Animacy, noun: &str, nominative: &str, genitive: &str) -> String {
    match animacy {
        Animacy::Animate if !genitive.is_empty() => genitive.to_string(),
        Animacy::Animate => noun.to_string(),
        Animacy::Inanimate => nominative.to_string(),
    }
}
