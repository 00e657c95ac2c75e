//! Unified error type for the gradebook library.
//!
//! This module provides a single [`Error`] type that encompasses all errors
//! that can occur in the library, making it easier to handle errors in
//! application code.

use thiserror::Error;

use crate::table::TableError;

/// Unified error type for all gradebook operations.
///
/// # Example
///
/// ```ignore
/// use gradebook::{GradeTable, Result, write_table};
///
/// fn print_grades() -> Result<()> {
///     let grades = GradeTable::from_records([("Alice", 75)])?;
///     write_table(&mut std::io::stdout().lock(), &grades)?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Error from grade table construction.
    #[error(transparent)]
    Table(#[from] TableError),

    /// I/O error while writing a rendered table.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a table construction error.
    pub fn is_table(&self) -> bool {
        matches!(self, Self::Table(_))
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
