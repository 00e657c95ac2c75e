//! Serde support for grade tables.
//!
//! Tables serialize as a map in insertion order and deserialize back into
//! an ordered table. Deserialization enforces the same invariants as
//! construction: names are non-empty and unique.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::store::GradeTable;
use super::types::Grade;

impl Serialize for GradeTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for record in self.iter() {
            map.serialize_entry(&record.name, &record.grade)?;
        }
        map.end()
    }
}

struct GradeTableVisitor;

impl<'de> Visitor<'de> for GradeTableVisitor {
    type Value = GradeTable;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of student names to grades")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut table = GradeTable::new();
        while let Some((name, grade)) = access.next_entry::<String, Grade>()? {
            table.insert(name, grade).map_err(de::Error::custom)?;
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for GradeTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(GradeTableVisitor)
    }
}
