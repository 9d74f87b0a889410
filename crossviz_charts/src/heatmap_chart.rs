// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Heatmap: one blue cell per `(x, y, z)`, opacity relative to the largest cell.

extern crate alloc;

use alloc::vec::Vec;

use peniko::color::palette::css;

use crate::{DrawCommand, GeometryContext, RectMarkSpec, StrokeStyle};

/// Opacity of a cell with share `rate` when the largest cell has share `max_rate`.
///
/// Clamped to `[0, 1]`; a zero or non-finite `max_rate` gives `0.0`.
pub fn heat_opacity(rate: f64, max_rate: f64) -> f64 {
    if max_rate == 0.0 || !max_rate.is_finite() {
        return 0.0;
    }
    let opacity = rate / max_rate;
    if opacity.is_finite() {
        opacity.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

pub(crate) fn heatmap_commands(ctx: &GeometryContext<'_>) -> Vec<DrawCommand> {
    let GeometryContext {
        dataset,
        normalization,
        grid,
        ..
    } = *ctx;
    let index = dataset.index();
    let stroke = StrokeStyle::solid(css::WHITE, 0.1);

    let mut out = Vec::new();
    for i in 0..dataset.x_values().len() {
        for j in 0..dataset.y_values().len() {
            for k in 0..dataset.z_values().len() {
                let rate = dataset.rate(index.cell(i, j, k));
                out.push(
                    RectMarkSpec::new(grid.cell_rect(i, j, k))
                        .with_fill(css::BLUE)
                        .with_stroke(stroke.clone())
                        .with_opacity(heat_opacity(rate, normalization.max_rate))
                        .command(),
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_cell_is_fully_opaque() {
        assert_eq!(heat_opacity(0.4, 0.4), 1.0);
        assert_eq!(heat_opacity(0.2, 0.4), 0.5);
    }

    #[test]
    fn zero_max_rate_is_transparent() {
        assert_eq!(heat_opacity(0.0, 0.0), 0.0);
        assert_eq!(heat_opacity(0.3, f64::NAN), 0.0);
    }

    #[test]
    fn negative_rates_clamp() {
        assert_eq!(heat_opacity(-0.1, 0.4), 0.0);
    }
}
