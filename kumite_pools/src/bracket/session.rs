//! Partition session: the current pools for one competitor set.
//!
//! The session is a two-state machine. It starts `Empty`; a successful
//! [`generate`](PartitionSession::generate) moves it to `Partitioned` with a
//! bracket size, and [`reset`](PartitionSession::reset) or a new competitor set
//! moves it back. Failed operations never touch the current pools.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{PartitionError, PartitionResult};
use super::models::{Pool, SubPool, TargetSize};
use super::randomizer::{Randomizer, ThreadRandomizer};
use super::seeding::SeedAssignment;
use super::splitter::partition;
use crate::roster::Competitor;

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No pools
    Empty,
    /// Pools generated for this bracket size
    Partitioned(TargetSize),
}

/// Result of a generate or regenerate request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionOutcome {
    /// New pools replaced the old ones
    Generated,
    /// No competitors; nothing changed
    EmptyInput,
}

impl PartitionOutcome {
    pub fn is_noop(self) -> bool {
        self == PartitionOutcome::EmptyInput
    }
}

/// Notifications sent to observers after the pools change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    Generated { target_size: TargetSize },
    Regenerated { target_size: TargetSize },
    Reshuffled { label: String },
    Reset,
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generated { target_size } => write!(f, "generated pools of {target_size}"),
            Self::Regenerated { target_size } => write!(f, "regenerated pools of {target_size}"),
            Self::Reshuffled { label } => write!(f, "reshuffled sub-pool {label}"),
            Self::Reset => write!(f, "pools cleared"),
        }
    }
}

type Listener = Box<dyn FnMut(&SessionEvent, &[Pool])>;

/// Pools for one filtered competitor set.
///
/// Assumes a single caller; wrap it in a lock if several callers share one.
pub struct PartitionSession<R: Randomizer = ThreadRandomizer> {
    competitors: Vec<Competitor>,
    pools: Vec<Pool>,
    state: SessionState,
    preferred_target: Option<TargetSize>,
    randomizer: R,
    listeners: Vec<Listener>,
}

impl Default for PartitionSession<ThreadRandomizer> {
    fn default() -> Self {
        Self::new(ThreadRandomizer::new())
    }
}

impl<R: Randomizer> PartitionSession<R> {
    pub fn new(randomizer: R) -> Self {
        Self {
            competitors: Vec::new(),
            pools: Vec::new(),
            state: SessionState::Empty,
            preferred_target: None,
            randomizer,
            listeners: Vec::new(),
        }
    }

    /// Register a callback fired after every change to the pools
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&SessionEvent, &[Pool]) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the competitor set.
    ///
    /// Always invalidates: pools built from the previous set are dropped and the
    /// session returns to `Empty`.
    pub fn set_competitors(&mut self, competitors: Vec<Competitor>) {
        info!(
            "Competitor set replaced ({} -> {} competitors)",
            self.competitors.len(),
            competitors.len()
        );
        self.competitors = competitors;
        self.clear();
    }

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Bracket size of the current pools
    pub fn target_size(&self) -> Option<TargetSize> {
        match self.state {
            SessionState::Empty => None,
            SessionState::Partitioned(target) => Some(target),
        }
    }

    /// Bracket size remembered by the last `reset`
    pub fn preferred_target(&self) -> Option<TargetSize> {
        self.preferred_target
    }

    /// Current pools, in label order
    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    /// Look up a sub-pool by label ("A1", "B2", ...)
    pub fn sub_pool(&self, label: &str) -> Option<&SubPool> {
        self.pools
            .iter()
            .flat_map(|pool| pool.sub_pools.iter())
            .find(|sub| sub.label == label)
    }

    /// Bout-sheet positions for a sub-pool
    pub fn seed_assignment(&self, label: &str) -> PartitionResult<SeedAssignment<'_>> {
        self.sub_pool(label)
            .map(SubPool::seed_assignment)
            .ok_or_else(|| PartitionError::UnknownSubPool(label.to_string()))
    }

    /// Sub-pool sizes per pool
    pub fn shape(&self) -> Vec<Vec<usize>> {
        self.pools.iter().map(Pool::shape).collect()
    }

    /// Shuffle the whole competitor set and build fresh pools.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::InvalidTargetSize`] unless `target_size` is 4 or 8.
    pub fn generate(&mut self, target_size: usize) -> PartitionResult<PartitionOutcome> {
        let target = TargetSize::try_from(target_size).inspect_err(|e| warn!("{e}"))?;

        if self.competitors.is_empty() {
            debug!("Generate skipped: no competitors");
            return Ok(PartitionOutcome::EmptyInput);
        }

        self.rebuild(target);
        info!(
            "Generated {} pool(s) of {} for {} competitors",
            self.pools.len(),
            target,
            self.competitors.len()
        );
        self.notify(SessionEvent::Generated {
            target_size: target,
        });
        Ok(PartitionOutcome::Generated)
    }

    /// Generate with the size remembered by the last [`reset`](Self::reset),
    /// or `fallback` if none was given.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::InvalidTargetSize`] if `fallback` is needed and
    /// is not 4 or 8.
    pub fn generate_preferred(&mut self, fallback: usize) -> PartitionResult<PartitionOutcome> {
        let size = self.preferred_target.map_or(fallback, TargetSize::size);
        self.generate(size)
    }

    /// Reshuffle everyone and rebuild with the current bracket size.
    ///
    /// Labels are reassigned from "A"; the shape is the same as before since it
    /// depends only on the competitor count.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::NotPartitioned`] if no pools exist.
    pub fn regenerate_all(&mut self) -> PartitionResult<PartitionOutcome> {
        let SessionState::Partitioned(target) = self.state else {
            warn!("Regenerate rejected: no pools generated yet");
            return Err(PartitionError::NotPartitioned);
        };

        if self.competitors.is_empty() {
            debug!("Regenerate skipped: no competitors");
            return Ok(PartitionOutcome::EmptyInput);
        }

        self.rebuild(target);
        info!("Regenerated {} pool(s) of {}", self.pools.len(), target);
        self.notify(SessionEvent::Regenerated {
            target_size: target,
        });
        Ok(PartitionOutcome::Generated)
    }

    /// Shuffle the players inside one sub-pool; membership stays the same.
    ///
    /// # Errors
    ///
    /// - [`PartitionError::NotPartitioned`] if no pools exist
    /// - [`PartitionError::UnknownSubPool`] if `label` is not a current sub-pool
    pub fn reshuffle_sub_pool(&mut self, label: &str) -> PartitionResult<()> {
        if self.state == SessionState::Empty {
            warn!("Reshuffle of {label} rejected: no pools generated yet");
            return Err(PartitionError::NotPartitioned);
        }

        let Some(sub_pool) = self
            .pools
            .iter_mut()
            .flat_map(|pool| pool.sub_pools.iter_mut())
            .find(|sub| sub.label == label)
        else {
            warn!("Reshuffle rejected: unknown sub-pool {label}");
            return Err(PartitionError::UnknownSubPool(label.to_string()));
        };

        self.randomizer.permute(&mut sub_pool.players);
        debug!("Reshuffled sub-pool {label} ({} players)", sub_pool.len());

        self.notify(SessionEvent::Reshuffled {
            label: label.to_string(),
        });
        Ok(())
    }

    /// Drop all pools and return to `Empty`.
    ///
    /// `next_target` is remembered as the preferred bracket size and is used by
    /// [`generate_preferred`](Self::generate_preferred). `None` forgets it.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::InvalidTargetSize`] for a size other than 4 or 8;
    /// the session is left unchanged in that case.
    pub fn reset(&mut self, next_target: Option<usize>) -> PartitionResult<()> {
        let preferred = next_target.map(TargetSize::try_from).transpose()?;
        self.preferred_target = preferred;
        self.clear();
        Ok(())
    }

    fn rebuild(&mut self, target: TargetSize) {
        let mut shuffled = self.competitors.clone();
        self.randomizer.permute(&mut shuffled);
        self.pools = partition(shuffled, target);
        self.state = SessionState::Partitioned(target);
    }

    fn clear(&mut self) {
        let had_pools = !self.pools.is_empty() || self.state != SessionState::Empty;
        self.pools.clear();
        self.state = SessionState::Empty;
        if had_pools {
            info!("Pools cleared");
            self.notify(SessionEvent::Reset);
        }
    }

    fn notify(&mut self, event: SessionEvent) {
        for listener in &mut self.listeners {
            listener(&event, &self.pools);
        }
    }
}
