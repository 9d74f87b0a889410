// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell values, records and tables.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A single cell value.
///
/// Values have a total order so distinct value sets can be sorted deterministically:
/// numbers sort before strings, numbers compare numerically and strings lexicographically.
#[derive(Clone, Debug)]
pub enum Value {
    /// A numeric value.
    Num(f64),
    /// A string value.
    Str(String),
}

impl Value {
    /// Returns the numeric reading of this value.
    ///
    /// Strings are parsed after trimming; unparseable strings yield `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Num(v) => Some(*v),
            Self::Str(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

// `-0.0` and `0.0` are the same category; all NaNs collapse to one.
fn canonical(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else if v.is_nan() {
        f64::NAN
    } else {
        v
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Num(a), Self::Num(b)) => canonical(*a).total_cmp(&canonical(*b)),
            (Self::Num(_), Self::Str(_)) => Ordering::Less,
            (Self::Str(_), Self::Num(_)) => Ordering::Greater,
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Num(v) => {
                state.write_u8(0);
                canonical(*v).to_bits().hash(state);
            }
            Self::Str(s) => {
                state.write_u8(1);
                s.hash(state);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(v) => write!(f, "{}", canonical(*v)),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Num(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Num(f64::from(v))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(String::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// One row of a [`Table`]; dimensions address it positionally.
pub type Record = Vec<Value>;

/// The role a column plays in a cross-tabulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Horizontal categories (columns of the grid).
    X,
    /// Vertical categories (rows of the grid).
    Y,
    /// Nested categories (sub-rows within each Y row).
    Z,
    /// The numeric measure being summed.
    Value,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::Value => "value",
        })
    }
}

/// A row-oriented table with optional column names.
///
/// Column names are only needed when a [`crate::ColumnMapping`] refers to columns by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    /// Column names; may be empty for purely positional data.
    pub columns: Vec<String>,
    /// Row data.
    pub rows: Vec<Record>,
}

impl Table {
    /// Creates an empty table with named columns.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Creates an unnamed table from positional rows.
    pub fn from_rows(rows: Vec<Record>) -> Self {
        Self {
            columns: Vec::new(),
            rows,
        }
    }

    /// Appends a row.
    pub fn push(&mut self, row: Record) {
        self.rows.push(row);
    }

    /// Appends a row, builder style.
    pub fn with_row(mut self, row: Record) -> Self {
        self.rows.push(row);
        self
    }

    /// Returns the index of a named column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::collections::BTreeSet;
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn numbers_sort_before_strings() {
        let mut values = vec![
            Value::from("b"),
            Value::from(3),
            Value::from("a"),
            Value::from(-1.5),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                Value::from(-1.5),
                Value::from(3),
                Value::from("a"),
                Value::from("b"),
            ]
        );
    }

    #[test]
    fn signed_zero_is_one_category() {
        let set: BTreeSet<Value> = [Value::from(0.0), Value::from(-0.0)].into_iter().collect();
        assert_eq!(set.len(), 1, "0.0 and -0.0 should dedup");
        assert_eq!(Value::from(-0.0).to_string(), "0");
    }

    #[test]
    fn numeric_strings_parse() {
        assert_eq!(Value::from(" 12.5 ").as_f64(), Some(12.5));
        assert_eq!(Value::from("n/a").as_f64(), None);
        assert_eq!(Value::from(4).as_f64(), Some(4.0));
    }

    #[test]
    fn named_columns_resolve() {
        let t = Table::new(["region", "age", "sex", "count"]);
        assert_eq!(t.column_index("sex"), Some(2));
        assert_eq!(t.column_index("missing"), None);
    }
}
