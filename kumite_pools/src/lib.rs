//! # Kumite Pools
//!
//! Pool partitioning and bracket seeding for martial-arts tournaments.
//!
//! Operators filter a roster down to one bracket category (gender, age band,
//! weight range, belt tier) and then split the competitors into balanced pools
//! of 4 or 8, each printed as a single-elimination bout sheet.
//!
//! ## Pipeline
//!
//! - **Randomizer**: uniformly permutes the competitors before every partition
//! - **Group splitter**: splits them into nearly-equal main groups of at most
//!   twice the bracket size
//! - **Sub-pool divider**: halves any main group larger than the bracket size
//! - **Seed mapper**: places each sub-pool's players on bracket positions so
//!   that byes are spread across the tree
//! - **Partition session**: holds the current pools and supports regenerating
//!   everything or reshuffling a single sub-pool
//!
//! ## Core Modules
//!
//! - [`bracket`]: partitioning, seeding and the partition session
//! - [`roster`]: competitor records, column resolution and category filters
//!
//! ## Example
//!
//! ```
//! use kumite_pools::{Competitor, PartitionSession, SeededRandomizer};
//!
//! let competitors: Vec<Competitor> = (0..9)
//!     .map(|i| Competitor::new(i, format!("Fighter {i}")))
//!     .collect();
//!
//! let mut session = PartitionSession::new(SeededRandomizer::new(7));
//! session.set_competitors(competitors);
//! session.generate(4).unwrap();
//!
//! let sizes: Vec<usize> = session
//!     .pools()
//!     .iter()
//!     .flat_map(|pool| pool.sub_pools.iter().map(|sub| sub.len()))
//!     .collect();
//! assert_eq!(sizes, vec![3, 2, 4]);
//! ```

/// Partitioning, seeding and session orchestration.
pub mod bracket;
pub use bracket::{
    Bout, PartitionError, PartitionOutcome, PartitionResult, PartitionSession, Pool, Randomizer,
    SeedAssignment, SeededRandomizer, SessionEvent, SessionState, SubPool, TargetSize,
    ThreadRandomizer,
};

/// Roster collaborators: competitor records, column mapping and filters.
pub mod roster;
pub use roster::{
    AgeBand, BeltTier, ColumnMap, Competitor, CompetitorId, Field, Gender, RosterError,
    RosterFilter, RosterResult, RosterTable,
};
