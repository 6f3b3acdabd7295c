//! Reshaping of KLASS code tables.
//!
//! This crate holds the tabular core of the library: building polars
//! DataFrames from typed response rows, mapping hierarchy levels to
//! their display names, pivoting a long codelist into one column group
//! per level, extracting code-to-label lookups, and joining variant or
//! correspondence mappings onto a base codelist as new columns.
//!
//! Everything here is pure: functions take frames and return new
//! frames, inputs are never mutated, and no I/O happens. The HTTP
//! fetches that produce the inputs live in `klass-client`.

pub mod error;
pub mod frame;
pub mod join;
pub mod levels;
pub mod lookup;
pub mod naming;
pub mod pivot;
pub mod values;

pub use error::{Result, TableError};
pub use frame::{
    changes_to_frame, codes_to_frame, correspondence_to_frame, drop_empty_columns,
    items_to_frame,
};
pub use join::{JoinOptions, SecondaryTable, join_secondary};
pub use levels::LevelMap;
pub use lookup::{Lookup, LookupOptions, to_lookup};
pub use naming::short_name;
pub use pivot::pivot_levels;
