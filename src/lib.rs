//! Insertion-ordered grade tables with threshold filtering.
//!
//! This library models a table of student grades as an insertion-ordered
//! mapping with unique, non-empty names, and provides pure predicate-based
//! filtering over it. Filtering never mutates the input table; it produces
//! a new table containing the surviving records in their original order.
//!
//! # Quick Start
//!
//! ```ignore
//! use gradebook::prelude::*;
//!
//! let grades = GradeTable::from_records([
//!     ("Alice", 75),
//!     ("Bob", 85),
//!     ("Charlie", 90),
//! ])?;
//!
//! let passing = GradeFilter::above(80).apply(&grades);
//! assert_eq!(passing.to_string(), "{'Bob': 85, 'Charlie': 90}");
//! ```
//!
//! # Modules
//!
//! - [`table`] - The ordered grade table and its text rendering
//! - [`filter`] - Predicate-based filtering of grade tables
//!
//! # Feature Flags
//!
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `serde` - Enable serde support for grade tables
//! - `full` - Enable all features

pub mod filter;
mod logging;
pub mod prelude;
pub mod table;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export table types at crate root for convenience
pub use table::{Grade, GradeRecord, GradeTable, TableError, write_table};

// Re-export filter types at crate root for convenience
pub use filter::{FilterReport, GradeFilter, GradePredicate};

/// Filter a table to the records whose grade strictly exceeds `threshold`.
///
/// Convenience for the single-call case; equivalent to
/// `GradeFilter::above(threshold).apply(table)`.
pub fn filter_above(table: &GradeTable, threshold: Grade) -> GradeTable {
    GradeFilter::above(threshold).apply(table)
}
