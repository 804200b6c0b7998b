//! Reporting period handling.
//!
//! This module covers:
//! - French month names and the lenient name lookup
//! - The validated `Period` type and its persisted form
//! - Resolution of the active period at session start
//! - The per-session selection lifecycle

pub mod error;
pub mod month;
pub mod resolver;
pub mod session;
pub mod types;

pub use error::PeriodError;
pub use month::{Month, MonthLookup, month_name_to_number};
pub use resolver::{PeriodOrigin, PeriodResolver, ResolvedPeriod};
pub use session::PeriodSession;
pub use types::{MAX_YEAR, Period, StoredPeriod, parse_year};
