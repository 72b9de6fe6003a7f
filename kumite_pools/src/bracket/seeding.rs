//! Bracket seeding for single-elimination bout sheets.
//!
//! A sub-pool with fewer players than its bracket size leaves some positions
//! empty; those are byes. The tables below spread the real players across the
//! bracket tree so byes do not pile up on one side.

use serde::Serialize;

use super::models::TargetSize;
use crate::roster::Competitor;

const FOUR_SEEDS: [&[usize]; 5] = [&[], &[1], &[1, 4], &[1, 2, 4], &[1, 2, 3, 4]];

const EIGHT_SEEDS: [&[usize]; 9] = [
    &[],
    &[1],
    &[1, 8],
    &[1, 2, 8],
    &[1, 4, 5, 8],
    &[1, 2, 4, 5, 8],
    &[1, 2, 4, 5, 6, 8],
    &[1, 2, 3, 4, 5, 6, 8],
    &[1, 2, 3, 4, 5, 6, 7, 8],
];

/// Bracket positions (1-based, strictly increasing) for `n` ordered players.
///
/// Counts above the bracket size cannot come out of the divider; they fall
/// back to `1..=n`.
pub fn seed_positions(n: usize, target_size: TargetSize) -> Vec<usize> {
    let table: &[&[usize]] = match target_size {
        TargetSize::Four => &FOUR_SEEDS,
        TargetSize::Eight => &EIGHT_SEEDS,
    };

    match table.get(n) {
        Some(positions) => positions.to_vec(),
        None => (1..=n).collect(),
    }
}

/// Position to competitor mapping for one bout sheet.
///
/// Derived from a sub-pool on demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeedAssignment<'a> {
    target_size: TargetSize,
    slots: Vec<Option<&'a Competitor>>,
}

impl<'a> SeedAssignment<'a> {
    pub fn new(players: &'a [Competitor], target_size: TargetSize) -> Self {
        let positions = seed_positions(players.len(), target_size);
        let mut slots = vec![None; target_size.size().max(players.len())];
        for (player, position) in players.iter().zip(positions) {
            slots[position - 1] = Some(player);
        }
        Self { target_size, slots }
    }

    pub fn target_size(&self) -> TargetSize {
        self.target_size
    }

    /// Number of positions on the sheet
    pub fn positions(&self) -> usize {
        self.slots.len()
    }

    /// Competitor at a 1-based position; `None` for byes and out-of-range positions
    pub fn get(&self, position: usize) -> Option<&'a Competitor> {
        position
            .checked_sub(1)
            .and_then(|idx| self.slots.get(idx))
            .copied()
            .flatten()
    }

    /// True when no competitor is placed
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// (position, competitor) pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<&'a Competitor>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(idx, slot)| (idx + 1, *slot))
    }

    /// Positions holding a competitor
    pub fn occupied(&self) -> Vec<usize> {
        self.iter()
            .filter_map(|(pos, slot)| slot.map(|_| pos))
            .collect()
    }

    /// Empty positions
    pub fn byes(&self) -> Vec<usize> {
        self.iter()
            .filter_map(|(pos, slot)| slot.is_none().then_some(pos))
            .collect()
    }

    /// Opening-round bouts: positions (1,2), (3,4), ...
    pub fn first_round(&self) -> Vec<Bout<'a>> {
        self.slots
            .chunks(2)
            .enumerate()
            .map(|(idx, pair)| Bout {
                number: idx + 1,
                upper_position: 2 * idx + 1,
                upper: pair[0],
                lower_position: 2 * idx + 2,
                lower: pair.get(1).copied().flatten(),
            })
            .collect()
    }
}

/// Opening-round pairing on a bout sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bout<'a> {
    /// 1-based bout number
    pub number: usize,
    pub upper_position: usize,
    pub upper: Option<&'a Competitor>,
    pub lower_position: usize,
    pub lower: Option<&'a Competitor>,
}

impl<'a> Bout<'a> {
    /// Exactly one side is filled
    pub fn is_bye(&self) -> bool {
        self.upper.is_some() != self.lower.is_some()
    }

    /// The competitor who advances without fighting, if this is a bye
    pub fn walkover(&self) -> Option<&'a Competitor> {
        if self.is_bye() {
            self.upper.or(self.lower)
        } else {
            None
        }
    }
}
