use thiserror::Error;

use gradebook::{Grade, GradeFilter, GradeTable, TableError, write_table};

#[derive(Error, Debug)]
enum AppError {
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The class roster, in recording order.
const CLASS_ROSTER: [(&str, Grade); 5] = [
    ("Alice", 75),
    ("Bob", 85),
    ("Charlie", 90),
    ("David", 80),
    ("Emily", 95),
];

/// Grades strictly above this value are kept.
const PASSING_THRESHOLD: Grade = 80;

fn main() -> Result<(), AppError> {
    let grades = GradeTable::from_records(CLASS_ROSTER)?;
    let passing = GradeFilter::above(PASSING_THRESHOLD).apply(&grades);

    let mut stdout = std::io::stdout().lock();
    write_table(&mut stdout, &passing)?;
    Ok(())
}
