// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-tabulation datasets.
//!
//! This crate provides:
//! - categorical/numeric cell values ([`Value`]) and row-oriented [`Table`]s,
//! - an explicit role schema ([`ColumnMapping`]) resolved once per source,
//! - a [`Dataset`] holding the sorted X/Y/Z value sets, the grand total and a one-pass
//!   [`CrossIndex`] of `(x, y, z)` bucket sums,
//! - the [`Normalization`] factors used to scale bar widths and heatmap opacity.
//!
//! The raw filter/sum helpers ([`filter`], [`sum`], [`distinct_sorted`]) are kept alongside the
//! index; every index lookup equals the matching `sum(filter(..))`.

#![no_std]

extern crate alloc;

mod aggregate;
mod dataset;
mod error;
mod mapping;
mod normalize;
mod value;

pub use aggregate::{CrossIndex, Predicate, distinct_sorted, filter, sum};
pub use dataset::Dataset;
pub use error::SourceError;
pub use mapping::{Column, ColumnMapping, ResolvedMapping};
pub use normalize::Normalization;
pub use value::{Dimension, Record, Table, Value};
