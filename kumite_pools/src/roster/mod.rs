//! Roster module: competitor records and the collaborators that produce them.
//!
//! - [`RosterTable`]: the rectangular table a spreadsheet upload yields
//! - [`ColumnMap`]: free-text header variants mapped onto semantic fields
//! - [`RosterFilter`]: gender / age band / weight range / belt tier category
//!
//! ## Example
//!
//! ```
//! use kumite_pools::roster::{AgeBand, Gender, RosterFilter, RosterTable};
//!
//! let table = RosterTable::new(
//!     vec!["Name".into(), "Gender".into(), "Age".into()],
//!     vec![
//!         vec!["Ren".into(), "M".into(), "9".into()],
//!         vec!["Mio".into(), "F".into(), "9".into()],
//!     ],
//! );
//!
//! let competitors = table.competitors().unwrap();
//! let boys = RosterFilter::new()
//!     .gender(Gender::Male)
//!     .age_band(AgeBand::Years(9))
//!     .apply(&competitors);
//! assert_eq!(boys.len(), 1);
//! ```

pub mod columns;
pub mod errors;
pub mod filter;
pub mod models;

pub use columns::{ColumnMap, Field, RosterTable};
pub use errors::{RosterError, RosterResult};
pub use filter::{AgeBand, BeltTier, RosterFilter};
pub use models::{Competitor, CompetitorId, Gender};
