//! Error types for the table module.

use thiserror::Error;

/// Errors that can occur while building a grade table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Student name is empty")]
    EmptyName,

    #[error("Duplicate student name: {0}")]
    DuplicateName(String),
}
