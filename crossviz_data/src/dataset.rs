// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The resolved, indexed data behind a cross-tab chart.

extern crate alloc;

use alloc::vec::Vec;

use crate::aggregate::{CrossIndex, Predicate, distinct_sorted, filter, sum};
use crate::{ColumnMapping, Record, ResolvedMapping, SourceError, Table, Value};

/// Records plus everything derived from them at source time.
///
/// A `Dataset` is rebuilt wholesale from a [`Table`]; there is no incremental update.
#[derive(Clone, Debug)]
pub struct Dataset {
    source: Vec<Record>,
    mapping: ResolvedMapping,
    x_values: Vec<Value>,
    y_values: Vec<Value>,
    z_values: Vec<Value>,
    sum: f64,
    index: CrossIndex,
}

impl Dataset {
    /// Resolves `mapping` against `table` and derives value sets, grand total and bucket sums.
    pub fn from_table(table: Table, mapping: &ColumnMapping) -> Result<Self, SourceError> {
        let resolved = mapping.resolve(&table)?;
        Ok(Self::from_records(table.rows, resolved))
    }

    /// Builds a dataset from records and a mapping already checked by [`ColumnMapping::resolve`].
    ///
    /// The grand total is taken from the index, so a record the index cannot bucket never counts.
    pub(crate) fn from_records(source: Vec<Record>, mapping: ResolvedMapping) -> Self {
        let x_values = distinct_sorted(&source, mapping.x);
        let y_values = distinct_sorted(&source, mapping.y);
        let z_values = distinct_sorted(&source, mapping.z);
        let index = CrossIndex::build(&source, mapping, &x_values, &y_values, &z_values);
        let total = index.total();

        tracing::debug!(
            records = source.len(),
            x = x_values.len(),
            y = y_values.len(),
            z = z_values.len(),
            sum = total,
            "built cross-tab dataset"
        );

        Self {
            source,
            mapping,
            x_values,
            y_values,
            z_values,
            sum: total,
            index,
        }
    }

    /// The source records, in input order.
    pub fn source(&self) -> &[Record] {
        &self.source
    }

    /// The resolved role mapping.
    pub fn mapping(&self) -> ResolvedMapping {
        self.mapping
    }

    /// Ascending distinct X values.
    pub fn x_values(&self) -> &[Value] {
        &self.x_values
    }

    /// Ascending distinct Y values.
    pub fn y_values(&self) -> &[Value] {
        &self.y_values
    }

    /// Ascending distinct Z values.
    pub fn z_values(&self) -> &[Value] {
        &self.z_values
    }

    /// Grand total of the value column.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Bucketed sums.
    pub fn index(&self) -> &CrossIndex {
        &self.index
    }

    /// An all-matching predicate over this dataset's mapping.
    pub fn predicate(&self) -> Predicate<'_> {
        Predicate::new(self.mapping)
    }

    /// Sums the value column over the records matching `predicate`.
    ///
    /// This re-scans the source; chart rendering uses [`Self::index`] instead.
    pub fn filtered_sum(&self, predicate: Predicate<'_>) -> f64 {
        sum(filter(&self.source, predicate), self.mapping.value)
    }

    /// Converts an aggregate into a share of the grand total.
    ///
    /// Returns `0.0` when the grand total is zero or the result is not finite.
    pub fn rate(&self, count: f64) -> f64 {
        if self.sum == 0.0 {
            return 0.0;
        }
        let rate = count / self.sum;
        if rate.is_finite() { rate } else { 0.0 }
    }
}
