//! Pool data models.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::PartitionError;
use super::seeding::SeedAssignment;
use crate::roster::Competitor;

/// Bracket size of a single bout sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum TargetSize {
    Four,
    Eight,
}

impl TargetSize {
    /// Positions on the bout sheet
    pub fn size(self) -> usize {
        match self {
            TargetSize::Four => 4,
            TargetSize::Eight => 8,
        }
    }

    /// Largest main group before it is halved into sub-pools
    pub fn group_capacity(self) -> usize {
        2 * self.size()
    }
}

impl TryFrom<usize> for TargetSize {
    type Error = PartitionError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(TargetSize::Four),
            8 => Ok(TargetSize::Eight),
            other => Err(PartitionError::InvalidTargetSize(other)),
        }
    }
}

impl From<TargetSize> for usize {
    fn from(target: TargetSize) -> Self {
        target.size()
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.size())
    }
}

/// One bout sheet worth of competitors.
///
/// `players` is in seeding order: the first player takes the first seed slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubPool {
    /// Parent pool label plus ordinal, e.g. "A1"
    pub label: String,
    pub players: Vec<Competitor>,
    pub target_size: TargetSize,
}

impl SubPool {
    pub fn new(label: String, players: Vec<Competitor>, target_size: TargetSize) -> Self {
        Self {
            label,
            players,
            target_size,
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Bracket positions for the current player order
    pub fn seed_assignment(&self) -> SeedAssignment<'_> {
        SeedAssignment::new(&self.players, self.target_size)
    }
}

/// A main group and the sub-pools it was divided into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    /// "A", "B", ... in generation order
    pub label: String,
    pub sub_pools: Vec<SubPool>,
}

impl Pool {
    /// Competitors across all sub-pools
    pub fn len(&self) -> usize {
        self.sub_pools.iter().map(SubPool::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sub_pools.iter().all(SubPool::is_empty)
    }

    /// Sub-pool sizes in order
    pub fn shape(&self) -> Vec<usize> {
        self.sub_pools.iter().map(SubPool::len).collect()
    }
}

/// Label for the main group at `index`: A..Z, then AA, AB, ...
pub fn pool_label(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Label for the sub-pool at `ordinal` (0-based) within `pool_label`
pub fn sub_pool_label(pool_label: &str, ordinal: usize) -> String {
    format!("{pool_label}{}", ordinal + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_size_from_usize() {
        assert_eq!(TargetSize::try_from(4), Ok(TargetSize::Four));
        assert_eq!(TargetSize::try_from(8), Ok(TargetSize::Eight));
        assert_eq!(
            TargetSize::try_from(6),
            Err(PartitionError::InvalidTargetSize(6))
        );
        assert_eq!(
            TargetSize::try_from(0),
            Err(PartitionError::InvalidTargetSize(0))
        );
    }

    #[test]
    fn test_group_capacity() {
        assert_eq!(TargetSize::Four.group_capacity(), 8);
        assert_eq!(TargetSize::Eight.group_capacity(), 16);
    }

    #[test]
    fn test_target_size_serde_as_number() {
        let json = serde_json::to_string(&TargetSize::Eight).unwrap();
        assert_eq!(json, "8");
        assert_eq!(
            serde_json::from_str::<TargetSize>("4").unwrap(),
            TargetSize::Four
        );
        assert!(serde_json::from_str::<TargetSize>("5").is_err());
    }

    #[test]
    fn test_pool_labels() {
        assert_eq!(pool_label(0), "A");
        assert_eq!(pool_label(1), "B");
        assert_eq!(pool_label(25), "Z");
        assert_eq!(pool_label(26), "AA");
        assert_eq!(pool_label(27), "AB");
        assert_eq!(pool_label(701), "ZZ");
        assert_eq!(pool_label(702), "AAA");
    }

    #[test]
    fn test_sub_pool_labels() {
        assert_eq!(sub_pool_label("A", 0), "A1");
        assert_eq!(sub_pool_label("C", 1), "C2");
    }

    #[test]
    fn test_pool_shape() {
        let pool = Pool {
            label: "A".to_string(),
            sub_pools: vec![
                SubPool::new(
                    "A1".to_string(),
                    (0..3).map(|i| Competitor::new(i, "x")).collect(),
                    TargetSize::Four,
                ),
                SubPool::new(
                    "A2".to_string(),
                    (3..5).map(|i| Competitor::new(i, "x")).collect(),
                    TargetSize::Four,
                ),
            ],
        };
        assert_eq!(pool.len(), 5);
        assert_eq!(pool.shape(), vec![3, 2]);
        assert!(!pool.is_empty());
    }
}
