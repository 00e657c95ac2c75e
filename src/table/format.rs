//! Textual rendering of grade tables.
//!
//! Tables render to a single-line mapping literal with single-quoted names,
//! e.g. `{'Bob': 85, 'Charlie': 90, 'Emily': 95}`. The empty table renders
//! as `{}`.

use std::fmt;
use std::io;

use super::store::GradeTable;

impl fmt::Display for GradeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, record) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}': {}", record.name, record.grade)?;
        }
        f.write_str("}")
    }
}

/// Write the mapping-literal form of `table` plus a trailing newline.
pub fn write_table<W: io::Write>(writer: &mut W, table: &GradeTable) -> io::Result<()> {
    writeln!(writer, "{}", table)
}
