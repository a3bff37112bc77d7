//! Truth table data model.
//!
//! A truth table maps glyph labels (`"0"`, `"A"`, ...) to activation vectors:
//! one entry per segment saying whether (and how) that segment is lit for the
//! glyph. Label order is the order rows were defined in, which is also the
//! order they appear in a preset file.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Per-segment activation values for one glyph.
pub type ActivationVector = Vec<i64>;

/// Ordered mapping from glyph label to its activation vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TruthTable {
    rows: Vec<(String, ActivationVector)>,
}

impl TruthTable {
    /// Create an empty truth table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row. An existing label keeps its position and gets the new
    /// vector; the previous vector is returned.
    pub fn insert(
        &mut self,
        label: impl Into<String>,
        activations: ActivationVector,
    ) -> Option<ActivationVector> {
        let label = label.into();
        if let Some((_, row)) = self.rows.iter_mut().find(|(l, _)| *l == label) {
            return Some(std::mem::replace(row, activations));
        }
        self.rows.push((label, activations));
        None
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_row(mut self, label: impl Into<String>, activations: ActivationVector) -> Self {
        self.insert(label, activations);
        self
    }

    /// Remove a row, returning its vector.
    pub fn remove(&mut self, label: &str) -> Option<ActivationVector> {
        let pos = self.rows.iter().position(|(l, _)| l == label)?;
        Some(self.rows.remove(pos).1)
    }

    pub fn get(&self, label: &str) -> Option<&[i64]> {
        self.rows
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, row)| row.as_slice())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Labels in definition order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(l, _)| l.as_str())
    }

    /// Rows in definition order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[i64])> {
        self.rows.iter().map(|(l, row)| (l.as_str(), row.as_slice()))
    }

    /// The first defined row, which fixes the segment count for grouping.
    pub fn first_row(&self) -> Option<&[i64]> {
        self.rows.first().map(|(_, row)| row.as_slice())
    }

    /// Segment count implied by the first row (0 for an empty table).
    pub fn segment_count(&self) -> usize {
        self.first_row().map_or(0, <[i64]>::len)
    }

    /// Rows whose length differs from `expected`, as `(label, actual_len)`.
    pub fn length_mismatches(&self, expected: usize) -> Vec<(&str, usize)> {
        self.rows()
            .filter(|(_, row)| row.len() != expected)
            .map(|(label, row)| (label, row.len()))
            .collect()
    }

    /// True when every row has the same length.
    pub fn is_rectangular(&self) -> bool {
        self.length_mismatches(self.segment_count()).is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, ActivationVector)> for TruthTable {
    fn from_iter<I: IntoIterator<Item = (L, ActivationVector)>>(iter: I) -> Self {
        let mut table = TruthTable::new();
        for (label, row) in iter {
            table.insert(label, row);
        }
        table
    }
}

impl Serialize for TruthTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for (label, row) in &self.rows {
            map.serialize_entry(label, row)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TruthTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TruthTableVisitor;

        impl<'de> Visitor<'de> for TruthTableVisitor {
            type Value = TruthTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping labels to integer arrays")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TruthTable, A::Error> {
                let mut table = TruthTable::new();
                while let Some((label, row)) = access.next_entry::<String, ActivationVector>()? {
                    // Later duplicates win, keeping the first position.
                    table.insert(label, row);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TruthTableVisitor)
    }
}
