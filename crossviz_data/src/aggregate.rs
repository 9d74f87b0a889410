// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filter/sum primitives and the bucketed cross index.

extern crate alloc;

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::{Record, ResolvedMapping, Value};

/// Sums the numeric field at `value_index` across `records`.
///
/// Empty input yields `0.0`. Fields that are missing, non-numeric or non-finite contribute
/// nothing.
pub fn sum<'a, I>(records: I, value_index: usize) -> f64
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|r| r.get(value_index)?.as_f64())
        .filter(|v| v.is_finite())
        .sum()
}

/// Returns the ascending distinct values found at `dim_index`.
pub fn distinct_sorted(records: &[Record], dim_index: usize) -> Vec<Value> {
    records
        .iter()
        .filter_map(|r| r.get(dim_index))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// A conjunction of equality tests over any subset of the X/Y/Z dimensions.
#[derive(Clone, Copy, Debug)]
pub struct Predicate<'a> {
    mapping: ResolvedMapping,
    x: Option<&'a Value>,
    y: Option<&'a Value>,
    z: Option<&'a Value>,
}

impl<'a> Predicate<'a> {
    /// Creates a predicate that matches every record.
    pub fn new(mapping: ResolvedMapping) -> Self {
        Self {
            mapping,
            x: None,
            y: None,
            z: None,
        }
    }

    /// Requires the X field to equal `value`.
    pub fn x(mut self, value: &'a Value) -> Self {
        self.x = Some(value);
        self
    }

    /// Requires the Y field to equal `value`.
    pub fn y(mut self, value: &'a Value) -> Self {
        self.y = Some(value);
        self
    }

    /// Requires the Z field to equal `value`.
    pub fn z(mut self, value: &'a Value) -> Self {
        self.z = Some(value);
        self
    }

    /// Evaluates the predicate against a record.
    pub fn matches(&self, record: &Record) -> bool {
        let field_eq = |index: usize, want: Option<&Value>| match want {
            None => true,
            Some(want) => record.get(index) == Some(want),
        };
        field_eq(self.mapping.x, self.x)
            && field_eq(self.mapping.y, self.y)
            && field_eq(self.mapping.z, self.z)
    }
}

/// Yields the records matching `predicate`, preserving input order.
pub fn filter<'r, 'p>(
    records: &'r [Record],
    predicate: Predicate<'p>,
) -> impl Iterator<Item = &'r Record> {
    records.iter().filter(move |r| predicate.matches(r))
}

/// Bucketed sums keyed by `(x, y, z)` value-set indices.
///
/// Built in a single pass over the records; every aggregate the chart variants need is then a
/// lookup instead of a re-scan of the source.
#[derive(Clone, Debug, Default)]
pub struct CrossIndex {
    dims: [usize; 3],
    cells: HashMap<[usize; 3], f64>,
    x_totals: Vec<f64>,
    xy_totals: Vec<f64>,
    yz_totals: Vec<f64>,
    total: f64,
}

impl CrossIndex {
    /// Buckets `records` against the given sorted value sets.
    pub fn build(
        records: &[Record],
        mapping: ResolvedMapping,
        x_values: &[Value],
        y_values: &[Value],
        z_values: &[Value],
    ) -> Self {
        let (nx, ny, nz) = (x_values.len(), y_values.len(), z_values.len());
        let x_pos = positions(x_values);
        let y_pos = positions(y_values);
        let z_pos = positions(z_values);

        let mut index = Self {
            dims: [nx, ny, nz],
            cells: HashMap::new(),
            x_totals: vec![0.0; nx],
            xy_totals: vec![0.0; nx * ny],
            yz_totals: vec![0.0; ny * nz],
            total: 0.0,
        };

        for record in records {
            let v = match record.get(mapping.value).and_then(Value::as_f64) {
                Some(v) if v.is_finite() => v,
                _ => continue,
            };
            let Some([i, j, k]) = bucket_key(record, mapping, [&x_pos, &y_pos, &z_pos]) else {
                continue;
            };
            *index.cells.entry([i, j, k]).or_insert(0.0) += v;
            index.x_totals[i] += v;
            index.xy_totals[i * ny + j] += v;
            index.yz_totals[j * nz + k] += v;
            index.total += v;
        }

        index
    }

    /// Value-set sizes as `[|X|, |Y|, |Z|]`.
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Sum of the cell `(x_i, y_j, z_k)`.
    pub fn cell(&self, i: usize, j: usize, k: usize) -> f64 {
        self.cells.get(&[i, j, k]).copied().unwrap_or(0.0)
    }

    /// Sum over all records with `x == x_i`.
    pub fn x_total(&self, i: usize) -> f64 {
        self.x_totals.get(i).copied().unwrap_or(0.0)
    }

    /// Sum over all records with `x == x_i` and `y == y_j`.
    pub fn xy_total(&self, i: usize, j: usize) -> f64 {
        if j >= self.dims[1] {
            return 0.0;
        }
        self.xy_totals
            .get(i * self.dims[1] + j)
            .copied()
            .unwrap_or(0.0)
    }

    /// Sum over all records with `y == y_j` and `z == z_k`.
    pub fn yz_total(&self, j: usize, k: usize) -> f64 {
        if k >= self.dims[2] {
            return 0.0;
        }
        self.yz_totals
            .get(j * self.dims[2] + k)
            .copied()
            .unwrap_or(0.0)
    }

    /// Sum over every bucketed record.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Iterates every `(y, z)` group total.
    pub fn yz_totals(&self) -> impl Iterator<Item = f64> + '_ {
        self.yz_totals.iter().copied()
    }

    /// Iterates every `(x, y, z)` cell total, including empty cells as `0.0`.
    pub fn cell_totals(&self) -> impl Iterator<Item = f64> + '_ {
        let [nx, ny, nz] = self.dims;
        (0..nx).flat_map(move |i| {
            (0..ny).flat_map(move |j| (0..nz).map(move |k| self.cell(i, j, k)))
        })
    }
}

fn bucket_key(
    record: &Record,
    mapping: ResolvedMapping,
    [x_pos, y_pos, z_pos]: [&HashMap<&Value, usize>; 3],
) -> Option<[usize; 3]> {
    Some([
        *x_pos.get(record.get(mapping.x)?)?,
        *y_pos.get(record.get(mapping.y)?)?,
        *z_pos.get(record.get(mapping.z)?)?,
    ])
}

fn positions(values: &[Value]) -> HashMap<&Value, usize> {
    values.iter().enumerate().map(|(i, v)| (v, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(x: &str, y: &str, z: &str, v: f64) -> Record {
        vec![Value::from(x), Value::from(y), Value::from(z), Value::from(v)]
    }

    fn mapping() -> ResolvedMapping {
        ResolvedMapping {
            x: 0,
            y: 1,
            z: 2,
            value: 3,
        }
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        assert_eq!(sum(&Vec::<Record>::new(), 3), 0.0);
    }

    #[test]
    fn sum_parses_numeric_strings_and_skips_junk() {
        let records = vec![
            vec![Value::from("a"), Value::from("2.5")],
            vec![Value::from("b"), Value::from("oops")],
            vec![Value::from("c"), Value::from(1)],
        ];
        assert_eq!(sum(&records, 1), 3.5);
    }

    #[test]
    fn filter_is_a_stable_conjunction() {
        let records = vec![
            row("A", "Y1", "Z1", 1.0),
            row("B", "Y1", "Z1", 2.0),
            row("A", "Y2", "Z1", 3.0),
            row("A", "Y1", "Z2", 4.0),
            row("A", "Y1", "Z1", 5.0),
        ];
        let a = Value::from("A");
        let y1 = Value::from("Y1");
        let picked: Vec<f64> = filter(&records, Predicate::new(mapping()).x(&a).y(&y1))
            .map(|r| r[3].as_f64().unwrap())
            .collect();
        assert_eq!(picked, vec![1.0, 4.0, 5.0]);
    }

    #[test]
    fn distinct_values_are_sorted_and_stable() {
        let records = vec![
            row("B", "Y2", "Z1", 1.0),
            row("A", "Y1", "Z1", 1.0),
            row("B", "Y1", "Z1", 1.0),
        ];
        let first = distinct_sorted(&records, 0);
        let second = distinct_sorted(&records, 0);
        assert_eq!(first, vec![Value::from("A"), Value::from("B")]);
        assert_eq!(first, second, "extraction should be idempotent");
    }

    #[test]
    fn index_agrees_with_filter_and_sum() {
        let records = vec![
            row("A", "Y1", "Z1", 10.0),
            row("B", "Y1", "Z1", 5.0),
            row("A", "Y2", "Z1", 3.0),
            row("B", "Y2", "Z2", 7.0),
            row("A", "Y1", "Z2", 2.0),
            row("A", "Y1", "Z1", 1.0),
        ];
        let m = mapping();
        let xs = distinct_sorted(&records, m.x);
        let ys = distinct_sorted(&records, m.y);
        let zs = distinct_sorted(&records, m.z);
        let index = CrossIndex::build(&records, m, &xs, &ys, &zs);

        for (i, x) in xs.iter().enumerate() {
            let p = Predicate::new(m).x(x);
            assert_eq!(index.x_total(i), sum(filter(&records, p), m.value));
            for (j, y) in ys.iter().enumerate() {
                let p = Predicate::new(m).x(x).y(y);
                assert_eq!(index.xy_total(i, j), sum(filter(&records, p), m.value));
                for (k, z) in zs.iter().enumerate() {
                    let p = Predicate::new(m).x(x).y(y).z(z);
                    assert_eq!(index.cell(i, j, k), sum(filter(&records, p), m.value));
                }
            }
        }
        for (j, y) in ys.iter().enumerate() {
            for (k, z) in zs.iter().enumerate() {
                let p = Predicate::new(m).y(y).z(z);
                assert_eq!(index.yz_total(j, k), sum(filter(&records, p), m.value));
            }
        }
        assert_eq!(index.total(), sum(&records, m.value));
    }

    #[test]
    fn cells_partition_the_total() {
        let records = vec![
            row("A", "Y1", "Z1", 10.0),
            row("B", "Y1", "Z1", 5.0),
            row("A", "Y2", "Z1", 3.0),
            row("C", "Y3", "Z2", 0.5),
        ];
        let m = mapping();
        let xs = distinct_sorted(&records, m.x);
        let ys = distinct_sorted(&records, m.y);
        let zs = distinct_sorted(&records, m.z);
        let index = CrossIndex::build(&records, m, &xs, &ys, &zs);
        let cells: f64 = index.cell_totals().sum();
        assert!(
            (cells - sum(&records, m.value)).abs() < 1e-12,
            "cells should sum to the grand total"
        );
        assert_eq!(index.cell_totals().count(), 3 * 3 * 2);
    }
}
