//! Convenient re-exports for common usage patterns.
//!
//! This module provides a single import to bring all commonly used types
//! into scope.
//!
//! # Example
//!
//! ```ignore
//! use gradebook::prelude::*;
//!
//! let grades = GradeTable::from_records([("Alice", 75), ("Bob", 85)])?;
//! let passing = GradeFilter::above(80).apply(&grades);
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Table types
pub use crate::table::{Grade, GradeRecord, GradeTable, TableError};

// Filter types
pub use crate::filter::{FilterReport, GradeFilter, GradePredicate};

// Crate-root conveniences
pub use crate::{filter_above, write_table};
