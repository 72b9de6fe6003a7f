//! Bracket module: pool partitioning and single-elimination seeding.
//!
//! - [`splitter`]: balanced main groups and sub-pool division
//! - [`seeding`]: bye placement tables for 4- and 8-player bout sheets
//! - [`session`]: generate / regenerate / reshuffle over one competitor set
//! - [`randomizer`]: the shuffle capability the session is built with
//!
//! ## Group sizes
//!
//! For `n` competitors and bracket size `t`, the roster is cut into
//! `ceil(n / 2t)` main groups whose sizes differ by at most one. A main group
//! larger than `t` becomes two sub-pools, the first taking the odd player.
//!
//! | competitors | bracket | sub-pools      |
//! |-------------|---------|----------------|
//! | 9           | 4       | A1=3 A2=2 B1=4 |
//! | 13          | 8       | A1=7 A2=6      |
//! | 17          | 8       | A1=5 A2=4 B1=8 |

pub mod errors;
pub mod models;
pub mod randomizer;
pub mod seeding;
pub mod session;
pub mod splitter;

pub use errors::{PartitionError, PartitionResult};
pub use models::{Pool, SubPool, TargetSize};
pub use randomizer::{Randomizer, SeededRandomizer, ThreadRandomizer};
pub use seeding::{Bout, SeedAssignment, seed_positions};
pub use session::{PartitionOutcome, PartitionSession, SessionEvent, SessionState};
pub use splitter::{divide, partition, split_evenly, split_into_parts};
