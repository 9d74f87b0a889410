// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Global normalization factors.

use crate::Dataset;

/// Denominators that let the most extreme group/cell reach full visual extent.
///
/// Both factors are shares of the grand total in `[0, 1]` for non-negative data, and both are
/// `0.0` when the dataset is degenerate (zero total or an empty value set).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Normalization {
    /// Largest `(y, z)` group total as a share of the grand total.
    ///
    /// Drives unstretched bar widths.
    pub max_x_rate: f64,
    /// Largest `(x, y, z)` cell total as a share of the grand total.
    ///
    /// Drives heatmap opacity.
    pub max_rate: f64,
}

impl Normalization {
    /// Derives both factors from the dataset's bucket index.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let index = dataset.index();
        let max_x_rate = max_share(dataset, index.yz_totals());
        let max_rate = max_share(dataset, index.cell_totals());
        let n = Self {
            max_x_rate,
            max_rate,
        };
        if n.is_degenerate() {
            tracing::warn!(
                sum = dataset.sum(),
                "cross-tab normalization is degenerate; sized geometry collapses to zero"
            );
        } else {
            tracing::debug!(max_x_rate, max_rate, "derived cross-tab normalization");
        }
        n
    }

    /// Returns `true` if either factor is zero, so no geometry can be scaled against it.
    pub fn is_degenerate(&self) -> bool {
        self.max_x_rate == 0.0 || self.max_rate == 0.0
    }
}

fn max_share(dataset: &Dataset, totals: impl Iterator<Item = f64>) -> f64 {
    let max = totals.fold(f64::NEG_INFINITY, f64::max);
    let rate = dataset.rate(max);
    if rate.is_finite() { rate } else { 0.0 }
}
