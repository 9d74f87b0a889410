// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::string::String;

use crate::Dimension;

/// Errors returned when resolving a column mapping or building a [`crate::Dataset`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// A required role has no column assigned.
    #[error("no column mapped to the {0} dimension")]
    MissingDimension(Dimension),
    /// A named column does not exist in the table header.
    #[error("{dimension} dimension refers to unknown column `{name}`")]
    UnknownColumn {
        /// Role being resolved.
        dimension: Dimension,
        /// Requested column name.
        name: String,
    },
    /// A positional column is outside the table header.
    #[error("{dimension} dimension index {index} is out of range for {width} columns")]
    ColumnOutOfRange {
        /// Role being resolved.
        dimension: Dimension,
        /// Requested index.
        index: usize,
        /// Number of named columns.
        width: usize,
    },
    /// The value column is also used as a categorical dimension.
    #[error("value column coincides with the {dimension} dimension")]
    ValueOverlapsDimension {
        /// The categorical role sharing the column.
        dimension: Dimension,
    },
    /// A row is too short for the resolved mapping.
    #[error("row {row} has {len} fields but the mapping needs {needed}")]
    ShortRecord {
        /// Row index.
        row: usize,
        /// Number of fields in the row.
        len: usize,
        /// Minimum number of fields required.
        needed: usize,
    },
}
