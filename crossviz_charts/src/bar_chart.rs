// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked bars: one bar per `(y, z)` sub-row, one segment per X value.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

use crate::{BarScaling, DrawCommand, GeometryContext, RectMarkSpec};

/// Width of one bar segment.
///
/// `x_count * grid_width` is the full bar extent; `rate / denominator` is the segment's fraction
/// of it. A zero or non-finite denominator yields `0.0`.
pub fn bar_segment_width(x_count: usize, grid_width: f64, rate: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    let width = x_count as f64 * grid_width * (rate / denominator);
    if width.is_finite() { width } else { 0.0 }
}

pub(crate) fn bar_commands(ctx: &GeometryContext<'_>) -> Vec<DrawCommand> {
    let GeometryContext {
        dataset,
        normalization,
        grid,
        config,
    } = *ctx;
    let index = dataset.index();
    let x_count = dataset.x_values().len();
    let bar_height = grid.bar_height();

    let mut out = Vec::new();
    for j in 0..dataset.y_values().len() {
        for k in 0..dataset.z_values().len() {
            let denominator = match config.bar_scaling {
                BarScaling::Global => normalization.max_x_rate,
                BarScaling::Stretched => dataset.rate(index.yz_total(j, k)),
            };
            let origin = grid.bar_origin(j, k);
            let mut offset = 0.0;
            for i in 0..x_count {
                let rate = dataset.rate(index.cell(i, j, k));
                let width = bar_segment_width(x_count, grid.grid_width, rate, denominator);
                if width > 0.0 {
                    let x0 = origin.x + offset;
                    let rect = Rect::new(x0, origin.y, x0 + width, origin.y + bar_height);
                    out.push(
                        RectMarkSpec::new(rect)
                            .with_fill(config.color(i))
                            .command(),
                    );
                }
                offset += width;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_is_a_fraction_of_the_full_bar() {
        assert_eq!(bar_segment_width(4, 40.0, 0.25, 0.5), 80.0);
        assert_eq!(bar_segment_width(4, 40.0, 0.5, 0.5), 160.0);
    }

    #[test]
    fn degenerate_denominator_collapses_to_zero() {
        assert_eq!(bar_segment_width(4, 40.0, 0.25, 0.0), 0.0);
        assert_eq!(bar_segment_width(4, 40.0, 0.25, f64::NAN), 0.0);
        assert_eq!(bar_segment_width(0, 40.0, 0.0, 0.5), 0.0);
    }
}
