//! Bracket category filters.
//!
//! A category is the intersection of gender, age band, weight range and belt
//! tier. The filtered list feeds a [`PartitionSession`](crate::PartitionSession);
//! any change of criteria must reset that session.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::errors::{RosterError, RosterResult};
use super::models::{Competitor, Gender};

/// Age bands used on the tournament entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    /// Younger than 6
    Under6,
    /// Exactly this age. Only 6 through 13 are entry-form bands; build it with
    /// [`AgeBand::years`] to have that checked.
    Years(u32),
    /// 14 and 15
    Under16,
    /// 16 and 17
    Under18,
    /// 18 through 20
    Under21,
    /// 21 and older
    Seniors,
}

impl AgeBand {
    /// Single-year band for ages 6 through 13
    pub fn years(age: u32) -> Option<Self> {
        (6..=13).contains(&age).then_some(AgeBand::Years(age))
    }

    pub fn contains(self, age: u32) -> bool {
        match self {
            AgeBand::Under6 => age < 6,
            AgeBand::Years(years) => age == years,
            AgeBand::Under16 => (14..=15).contains(&age),
            AgeBand::Under18 => (16..=17).contains(&age),
            AgeBand::Under21 => (18..=20).contains(&age),
            AgeBand::Seniors => age >= 21,
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeBand::Under6 => write!(f, "Under 6 years"),
            AgeBand::Years(years) => write!(f, "{years} years"),
            AgeBand::Under16 => write!(f, "Under 16 years"),
            AgeBand::Under18 => write!(f, "Under 18 years"),
            AgeBand::Under21 => write!(f, "Under 21 years"),
            AgeBand::Seniors => write!(f, "Seniors"),
        }
    }
}

impl FromStr for AgeBand {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        match label.as_str() {
            "under 6 years" | "under6" => return Ok(AgeBand::Under6),
            "under 16 years" | "under16" => return Ok(AgeBand::Under16),
            "under 18 years" | "under18" => return Ok(AgeBand::Under18),
            "under 21 years" | "under21" => return Ok(AgeBand::Under21),
            "seniors" | "senior" => return Ok(AgeBand::Seniors),
            _ => {}
        }

        let years = label
            .strip_suffix("years")
            .unwrap_or(&label)
            .trim()
            .parse::<u32>()
            .map_err(|_| RosterError::UnknownAgeBand(s.to_string()))?;

        AgeBand::years(years).ok_or_else(|| RosterError::UnknownAgeBand(s.to_string()))
    }
}

/// Belt experience tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeltTier {
    Beginner,
    Intermediate,
    Advanced,
}

const BEGINNER_BELTS: [&str; 3] = ["white", "yellow", "orange"];
const ADVANCED_BELTS: [&str; 2] = ["brown", "black"];

impl BeltTier {
    /// Classify a belt colour. Unrecognised colours count as intermediate.
    pub fn classify(belt: &str) -> Self {
        let belt = belt.trim().to_lowercase();
        if BEGINNER_BELTS.contains(&belt.as_str()) {
            BeltTier::Beginner
        } else if ADVANCED_BELTS.contains(&belt.as_str()) {
            BeltTier::Advanced
        } else {
            BeltTier::Intermediate
        }
    }
}

impl fmt::Display for BeltTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeltTier::Beginner => write!(f, "Beginner"),
            BeltTier::Intermediate => write!(f, "Intermediate"),
            BeltTier::Advanced => write!(f, "Advanced"),
        }
    }
}

impl FromStr for BeltTier {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(BeltTier::Beginner),
            "intermediate" => Ok(BeltTier::Intermediate),
            "advanced" => Ok(BeltTier::Advanced),
            _ => Err(RosterError::UnknownBeltTier(s.to_string())),
        }
    }
}

/// Category filter; `None` criteria match everyone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterFilter {
    pub gender: Option<Gender>,
    pub age_band: Option<AgeBand>,
    /// Inclusive lower bound in kg; ignored unless positive
    pub min_weight: Option<f64>,
    /// Inclusive upper bound in kg; ignored unless positive
    pub max_weight: Option<f64>,
    pub belt_tier: Option<BeltTier>,
}

impl RosterFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn age_band(mut self, band: AgeBand) -> Self {
        self.age_band = Some(band);
        self
    }

    pub fn weight_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    pub fn belt_tier(mut self, tier: BeltTier) -> Self {
        self.belt_tier = Some(tier);
        self
    }

    /// Parse a weight bound typed by an operator; blank means no bound
    pub fn parse_weight(input: &str) -> RosterResult<Option<f64>> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }
        input
            .parse::<f64>()
            .map(Some)
            .map_err(|_| RosterError::InvalidWeight(input.to_string()))
    }

    fn active_bounds(&self) -> (Option<f64>, Option<f64>) {
        let positive = |w: Option<f64>| w.filter(|w| *w > 0.0);
        (positive(self.min_weight), positive(self.max_weight))
    }

    /// Check a single competitor against every criterion
    pub fn matches(&self, competitor: &Competitor) -> bool {
        if let Some(gender) = self.gender {
            if competitor.gender != gender {
                return false;
            }
        }

        if let Some(band) = self.age_band {
            match competitor.age {
                Some(age) if band.contains(age) => {}
                _ => return false,
            }
        }

        let (min, max) = self.active_bounds();
        if min.is_some() || max.is_some() {
            let Some(weight) = competitor.weight.filter(|w| *w > 0.0) else {
                return false;
            };
            if min.is_some_and(|min| weight < min) || max.is_some_and(|max| weight > max) {
                return false;
            }
        }

        if let Some(tier) = self.belt_tier {
            if BeltTier::classify(&competitor.belt) != tier {
                return false;
            }
        }

        true
    }

    /// Competitors matching the filter, in roster order
    pub fn apply(&self, competitors: &[Competitor]) -> Vec<Competitor> {
        competitors
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect()
    }

    /// Canonical description of the criteria.
    ///
    /// Two filters with the same key select the same competitors from the same
    /// roster, so a changed key means the current pools are stale.
    pub fn key(&self) -> String {
        let or_all = |v: Option<String>| v.unwrap_or_else(|| "All".to_string());
        let (min, max) = self.active_bounds();
        format!(
            "{}-{}-{}-{}-{}",
            or_all(self.gender.map(|g| g.to_string())),
            or_all(self.age_band.map(|b| b.to_string())),
            min.map(|w| w.to_string()).unwrap_or_default(),
            max.map(|w| w.to_string()).unwrap_or_default(),
            or_all(self.belt_tier.map(|t| t.to_string())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Competitor> {
        vec![
            Competitor::new(0, "Ren")
                .with_gender(Gender::Male)
                .with_age(12)
                .with_weight(40.0)
                .with_belt("Yellow"),
            Competitor::new(1, "Sora")
                .with_gender(Gender::Male)
                .with_age(12)
                .with_weight(45.5)
                .with_belt("green"),
            Competitor::new(2, "Mio")
                .with_gender(Gender::Female)
                .with_age(12)
                .with_weight(41.0)
                .with_belt("brown"),
            Competitor::new(3, "Kai")
                .with_gender(Gender::Male)
                .with_age(15)
                .with_weight(60.0)
                .with_belt("black"),
            Competitor::new(4, "Taro").with_gender(Gender::Male).with_age(12),
        ]
    }

    fn ids(competitors: &[Competitor]) -> Vec<usize> {
        competitors.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everyone_in_order() {
        let filtered = RosterFilter::new().apply(&roster());
        assert_eq!(ids(&filtered), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_gender_and_age_band() {
        let filter = RosterFilter::new()
            .gender(Gender::Male)
            .age_band(AgeBand::Years(12));
        assert_eq!(ids(&filter.apply(&roster())), vec![0, 1, 4]);
    }

    #[test]
    fn test_weight_range_excludes_missing_weight() {
        let filter = RosterFilter::new()
            .gender(Gender::Male)
            .weight_range(Some(40.0), Some(45.5));
        assert_eq!(ids(&filter.apply(&roster())), vec![0, 1]);
    }

    #[test]
    fn test_non_positive_bounds_are_ignored() {
        let filter = RosterFilter::new().weight_range(Some(0.0), Some(-3.0));
        assert_eq!(filter.apply(&roster()).len(), 5);
    }

    #[test]
    fn test_belt_tiers() {
        assert_eq!(BeltTier::classify(" White "), BeltTier::Beginner);
        assert_eq!(BeltTier::classify("maroon"), BeltTier::Intermediate);
        assert_eq!(BeltTier::classify("rainbow"), BeltTier::Intermediate);
        assert_eq!(BeltTier::classify("BLACK"), BeltTier::Advanced);

        let filter = RosterFilter::new().belt_tier(BeltTier::Advanced);
        assert_eq!(ids(&filter.apply(&roster())), vec![2, 3]);
    }

    #[test]
    fn test_age_band_ranges() {
        assert!(AgeBand::Under6.contains(5));
        assert!(!AgeBand::Under6.contains(6));
        assert!(AgeBand::Under16.contains(14));
        assert!(!AgeBand::Under16.contains(13));
        assert!(AgeBand::Under18.contains(17));
        assert!(AgeBand::Under21.contains(20));
        assert!(AgeBand::Seniors.contains(40));
    }

    #[test]
    fn test_age_band_parses_form_labels() {
        assert_eq!("Under 6 years".parse::<AgeBand>().unwrap(), AgeBand::Under6);
        assert_eq!("9 years".parse::<AgeBand>().unwrap(), AgeBand::Years(9));
        assert_eq!("Seniors".parse::<AgeBand>().unwrap(), AgeBand::Seniors);
        assert_eq!("13".parse::<AgeBand>().unwrap(), AgeBand::Years(13));
        assert!("14 years".parse::<AgeBand>().is_err());
        assert!("toddlers".parse::<AgeBand>().is_err());
    }

    #[test]
    fn test_single_year_band_range() {
        assert_eq!(AgeBand::years(6), Some(AgeBand::Years(6)));
        assert_eq!(AgeBand::years(13), Some(AgeBand::Years(13)));
        assert_eq!(AgeBand::years(5), None);
        assert_eq!(AgeBand::years(40), None);
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(RosterFilter::parse_weight("").unwrap(), None);
        assert_eq!(RosterFilter::parse_weight(" 42.5 ").unwrap(), Some(42.5));
        assert_eq!(
            RosterFilter::parse_weight("heavy").unwrap_err(),
            RosterError::InvalidWeight("heavy".to_string())
        );
    }

    #[test]
    fn test_key_changes_with_criteria() {
        let a = RosterFilter::new().gender(Gender::Male).age_band(AgeBand::Years(12));
        let b = a.clone().weight_range(Some(40.0), Some(45.0));

        assert_eq!(a.key(), "M-12 years---All");
        assert_eq!(b.key(), "M-12 years-40-45-All");
        assert_ne!(a.key(), b.key());
    }
}
