//! Competitor records produced from a resolved roster.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::errors::RosterError;

/// Stable competitor handle: the row index in the source roster
pub type CompetitorId = usize;

/// Competitor gender as recorded on the roster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "M"),
            Gender::Female => write!(f, "F"),
            Gender::Unspecified => write!(f, "-"),
        }
    }
}

impl FromStr for Gender {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            "" => Ok(Gender::Unspecified),
            _ => Err(RosterError::UnknownGender(s.to_string())),
        }
    }
}

/// A single tournament entrant.
///
/// Records are immutable once built; `id` is the only handle that survives
/// shuffling and regeneration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    /// Row index in the source roster
    pub id: CompetitorId,
    /// Display name
    pub name: String,
    /// Gender
    pub gender: Gender,
    /// Age in years, if the cell parsed
    pub age: Option<u32>,
    /// Weight in kilograms, if the cell parsed
    pub weight: Option<f64>,
    /// Belt colour as written on the roster
    pub belt: String,
    /// Dojo or instructor
    pub affiliation: String,
}

impl Competitor {
    /// Create a competitor with only an id and a name
    pub fn new(id: CompetitorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gender: Gender::Unspecified,
            age: None,
            weight: None,
            belt: String::new(),
            affiliation: String::new(),
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_belt(mut self, belt: impl Into<String>) -> Self {
        self.belt = belt.into();
        self
    }

    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = affiliation.into();
        self
    }
}
