//! Common test utilities and fixtures.

use gradebook::{Grade, GradeTable};

/// The five-record sample roster used across the test suite.
pub const SAMPLE_ROSTER: [(&str, Grade); 5] = [
    ("Alice", 75),
    ("Bob", 85),
    ("Charlie", 90),
    ("David", 80),
    ("Emily", 95),
];

/// Threshold used by the reference scenario.
pub const SAMPLE_THRESHOLD: Grade = 80;

/// Build the sample table.
pub fn sample_table() -> GradeTable {
    GradeTable::from_records(SAMPLE_ROSTER).unwrap()
}
