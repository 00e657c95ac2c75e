//! Grade table module: an insertion-ordered name-to-grade mapping.
//!
//! A [`GradeTable`] holds one [`GradeRecord`] per student, iterates in
//! insertion order, and renders to a mapping-literal text form. Names are
//! unique and non-empty; violating either on construction is a
//! [`TableError`].

mod error;
mod format;
#[cfg(feature = "serde")]
mod serde_support;
mod store;
mod types;

pub use error::TableError;
pub use format::write_table;
pub use store::GradeTable;
pub use types::{Grade, GradeRecord};
