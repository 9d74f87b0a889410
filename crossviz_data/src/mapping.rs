// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Role schema: which table column plays X, Y, Z and Value.

extern crate alloc;

use alloc::string::String;

use crate::{Dimension, SourceError, Table};

/// A reference to a table column, by position or by header name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Column {
    /// Zero-based position within each record.
    Index(usize),
    /// Name looked up in [`Table::columns`].
    Name(String),
}

impl From<usize> for Column {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Self::Name(String::from(name))
    }
}

impl From<String> for Column {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Column assignment for the four cross-tab roles.
///
/// The categorical roles default to the first three columns. The value role has no default
/// and must be set before the mapping resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Column for the X categories.
    pub x: Option<Column>,
    /// Column for the Y categories.
    pub y: Option<Column>,
    /// Column for the Z categories.
    pub z: Option<Column>,
    /// Column holding the numeric measure.
    pub value: Option<Column>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            x: Some(Column::Index(0)),
            y: Some(Column::Index(1)),
            z: Some(Column::Index(2)),
            value: None,
        }
    }
}

impl ColumnMapping {
    /// Creates the default mapping (`x = 0`, `y = 1`, `z = 2`, no value column).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the X column.
    pub fn with_x(mut self, column: impl Into<Column>) -> Self {
        self.x = Some(column.into());
        self
    }

    /// Sets the Y column.
    pub fn with_y(mut self, column: impl Into<Column>) -> Self {
        self.y = Some(column.into());
        self
    }

    /// Sets the Z column.
    pub fn with_z(mut self, column: impl Into<Column>) -> Self {
        self.z = Some(column.into());
        self
    }

    /// Sets the value column.
    pub fn with_value(mut self, column: impl Into<Column>) -> Self {
        self.value = Some(column.into());
        self
    }

    /// Resolves every role to a record position and validates the table against it.
    pub fn resolve(&self, table: &Table) -> Result<ResolvedMapping, SourceError> {
        let resolved = ResolvedMapping {
            x: resolve_one(table, Dimension::X, self.x.as_ref())?,
            y: resolve_one(table, Dimension::Y, self.y.as_ref())?,
            z: resolve_one(table, Dimension::Z, self.z.as_ref())?,
            value: resolve_one(table, Dimension::Value, self.value.as_ref())?,
        };

        for dimension in [Dimension::X, Dimension::Y, Dimension::Z] {
            if resolved.index(dimension) == resolved.value {
                return Err(SourceError::ValueOverlapsDimension { dimension });
            }
        }

        let needed = resolved.width();
        if let Some((row, record)) = table
            .rows
            .iter()
            .enumerate()
            .find(|(_, record)| record.len() < needed)
        {
            return Err(SourceError::ShortRecord {
                row,
                len: record.len(),
                needed,
            });
        }

        Ok(resolved)
    }
}

fn resolve_one(
    table: &Table,
    dimension: Dimension,
    column: Option<&Column>,
) -> Result<usize, SourceError> {
    match column {
        None => Err(SourceError::MissingDimension(dimension)),
        Some(Column::Name(name)) => {
            table
                .column_index(name)
                .ok_or_else(|| SourceError::UnknownColumn {
                    dimension,
                    name: name.clone(),
                })
        }
        Some(&Column::Index(index)) => {
            let width = table.columns.len();
            if width != 0 && index >= width {
                return Err(SourceError::ColumnOutOfRange {
                    dimension,
                    index,
                    width,
                });
            }
            Ok(index)
        }
    }
}

/// A validated mapping from roles to record positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedMapping {
    /// Position of the X field.
    pub x: usize,
    /// Position of the Y field.
    pub y: usize,
    /// Position of the Z field.
    pub z: usize,
    /// Position of the numeric measure.
    pub value: usize,
}

impl ResolvedMapping {
    /// Returns the record position for a role.
    pub fn index(&self, dimension: Dimension) -> usize {
        match dimension {
            Dimension::X => self.x,
            Dimension::Y => self.y,
            Dimension::Z => self.z,
            Dimension::Value => self.value,
        }
    }

    /// Minimum record length this mapping can read.
    pub fn width(&self) -> usize {
        self.x.max(self.y).max(self.z).max(self.value) + 1
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::Value;

    fn header_table() -> Table {
        Table::new(["region", "age", "sex", "count"]).with_row(vec![
            Value::from("north"),
            Value::from("18-25"),
            Value::from("f"),
            Value::from(3),
        ])
    }

    #[test]
    fn value_role_is_required() {
        let err = ColumnMapping::new().resolve(&header_table()).unwrap_err();
        assert_eq!(err, SourceError::MissingDimension(Dimension::Value));
    }

    #[test]
    fn named_columns_resolve_to_positions() {
        let mapping = ColumnMapping::new()
            .with_x("sex")
            .with_y("region")
            .with_z("age")
            .with_value("count");
        let resolved = mapping.resolve(&header_table()).unwrap();
        assert_eq!(
            resolved,
            ResolvedMapping {
                x: 2,
                y: 0,
                z: 1,
                value: 3
            }
        );
    }

    #[test]
    fn unknown_name_is_reported() {
        let mapping = ColumnMapping::new().with_value("total");
        assert_eq!(
            mapping.resolve(&header_table()).unwrap_err(),
            SourceError::UnknownColumn {
                dimension: Dimension::Value,
                name: String::from("total"),
            }
        );
    }

    #[test]
    fn index_beyond_header_is_reported() {
        let mapping = ColumnMapping::new().with_value(7);
        assert_eq!(
            mapping.resolve(&header_table()).unwrap_err(),
            SourceError::ColumnOutOfRange {
                dimension: Dimension::Value,
                index: 7,
                width: 4,
            }
        );
    }

    #[test]
    fn value_cannot_share_a_categorical_column() {
        let mapping = ColumnMapping::new().with_value(1);
        assert_eq!(
            mapping.resolve(&header_table()).unwrap_err(),
            SourceError::ValueOverlapsDimension {
                dimension: Dimension::Y
            }
        );
    }

    #[test]
    fn short_rows_are_rejected() {
        let table = Table::from_rows(vec![
            vec![
                Value::from("a"),
                Value::from("b"),
                Value::from("c"),
                Value::from(1),
            ],
            vec![Value::from("a"), Value::from("b")],
        ]);
        let err = ColumnMapping::new().with_value(3).resolve(&table).unwrap_err();
        assert_eq!(
            err,
            SourceError::ShortRecord {
                row: 1,
                len: 2,
                needed: 4
            }
        );
    }
}
