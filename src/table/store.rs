//! Grade table implementation.

use crate::logging::{debug, trace, warn};

use super::error::TableError;
use super::types::{Grade, GradeRecord};

/// Insertion-ordered mapping from student name to grade.
///
/// Names are unique; records iterate in the order they were inserted.
/// Filtering produces a new table and leaves the original untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeTable {
    records: Vec<GradeRecord>,
}

impl GradeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a table from (name, grade) pairs, preserving their order.
    ///
    /// Returns an error if a name is empty or appears more than once.
    pub fn from_records<I, N>(records: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (N, Grade)>,
        N: Into<String>,
    {
        let mut table = Self::new();
        for (name, grade) in records {
            table.insert(name, grade)?;
        }
        debug!(count = table.len(), "grade table constructed");
        Ok(table)
    }

    /// Append one record at the end of the table.
    ///
    /// Returns an error if the name is empty or already present.
    pub fn insert(&mut self, name: impl Into<String>, grade: Grade) -> Result<(), TableError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TableError::EmptyName);
        }
        if self.contains(&name) {
            warn!(name = %name, "duplicate student name rejected");
            return Err(TableError::DuplicateName(name));
        }
        trace!(name = %name, grade = grade, "record appended");
        self.records.push(GradeRecord::new(name, grade));
        Ok(())
    }

    /// Look up the grade recorded for `name`.
    pub fn get(&self, name: &str) -> Option<Grade> {
        self.records
            .iter()
            .find(|record| record.name == name)
            .map(|record| record.grade)
    }

    /// Check whether a record exists for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.records.iter().any(|record| record.name == name)
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, GradeRecord> {
        self.records.iter()
    }

    /// New table containing the records satisfying `predicate`, in order.
    ///
    /// The survivors of a valid table are themselves a valid table, so this
    /// cannot fail.
    pub fn filtered<P>(&self, predicate: P) -> Self
    where
        P: Fn(&GradeRecord) -> bool,
    {
        Self {
            records: self
                .records
                .iter()
                .filter(|record| predicate(record))
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a GradeTable {
    type Item = &'a GradeRecord;
    type IntoIter = std::slice::Iter<'a, GradeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
