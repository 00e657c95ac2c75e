//! Predicate-based filtering of grade tables.
//!
//! A [`GradeFilter`] applies a [`GradePredicate`] to every record of a
//! [`GradeTable`] and produces a new table of the survivors, preserving
//! their relative order. The input table is borrowed immutably and never
//! modified; the same table and predicate always yield the same result.

use crate::logging::debug;
use crate::table::{Grade, GradeTable};

/// Predicate selecting which grades survive a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradePredicate {
    /// Keep every record.
    All,
    /// Keep grades strictly above the threshold.
    Above(Grade),
    /// Keep grades at or above the threshold.
    AtLeast(Grade),
    /// Keep grades strictly below the threshold.
    Below(Grade),
    /// Keep grades in the inclusive range [min, max].
    Within { min: Grade, max: Grade },
}

impl GradePredicate {
    /// Evaluate the predicate for one grade.
    pub fn matches(&self, grade: Grade) -> bool {
        match *self {
            Self::All => true,
            Self::Above(threshold) => grade > threshold,
            Self::AtLeast(threshold) => grade >= threshold,
            Self::Below(threshold) => grade < threshold,
            Self::Within { min, max } => grade >= min && grade <= max,
        }
    }
}

/// Bookkeeping for one filter application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterReport {
    /// Count of records that satisfied the predicate.
    pub retained: usize,
    /// Count of records removed by the predicate.
    pub dropped: usize,
}

impl FilterReport {
    /// Number of input records the filter examined.
    pub fn total(&self) -> usize {
        self.retained + self.dropped
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        format!("Processed: {} retained, {} dropped", self.retained, self.dropped)
    }
}

/// Filter over grade tables.
#[derive(Debug, Clone, Copy)]
pub struct GradeFilter {
    predicate: GradePredicate,
}

impl GradeFilter {
    /// Create a filter from a predicate.
    pub fn new(predicate: GradePredicate) -> Self {
        Self { predicate }
    }

    /// Filter keeping records whose grade strictly exceeds `threshold`.
    pub fn above(threshold: Grade) -> Self {
        Self::new(GradePredicate::Above(threshold))
    }

    /// The predicate this filter applies.
    pub fn predicate(&self) -> GradePredicate {
        self.predicate
    }

    /// Apply the filter, producing a new table of the surviving records.
    pub fn apply(&self, table: &GradeTable) -> GradeTable {
        let passing = table.filtered(|record| self.predicate.matches(record.grade));
        debug!(
            retained = passing.len(),
            dropped = table.len() - passing.len(),
            "filter applied"
        );
        passing
    }

    /// Apply the filter and report retained/dropped counts.
    pub fn apply_with_report(&self, table: &GradeTable) -> (GradeTable, FilterReport) {
        let passing = self.apply(table);
        let report = FilterReport {
            retained: passing.len(),
            dropped: table.len() - passing.len(),
        };
        (passing, report)
    }
}
