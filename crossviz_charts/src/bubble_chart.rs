// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bubbles: one framed grid cell per `(x, y)`, one labelled circle per Z inside it.

extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;

use peniko::color::palette::css;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::{CircleMarkSpec, DrawCommand, GeometryContext, RectMarkSpec, StrokeStyle, TextMarkSpec};

/// Stroke width of the per-group frame rectangles.
const GROUP_FRAME_STROKE_WIDTH: f64 = 0.1;

/// Radius whose circle area tracks a share: `sqrt(round(rate * 10000))`.
///
/// Negative or non-finite shares give `0.0`.
pub fn share_radius(rate: f64) -> f64 {
    let scaled = (rate * 10_000.0).round();
    if scaled > 0.0 && scaled.is_finite() {
        scaled.sqrt()
    } else {
        0.0
    }
}

pub(crate) fn bubble_commands(ctx: &GeometryContext<'_>) -> Vec<DrawCommand> {
    let GeometryContext {
        dataset,
        grid,
        config,
        ..
    } = *ctx;
    let index = dataset.index();
    let frame_stroke = StrokeStyle::solid(css::BLACK, GROUP_FRAME_STROKE_WIDTH);

    let mut out = Vec::new();
    for i in 0..dataset.x_values().len() {
        for j in 0..dataset.y_values().len() {
            out.push(
                RectMarkSpec::new(grid.group_rect(i, j))
                    .with_stroke(frame_stroke.clone())
                    .command(),
            );
            for (k, z) in dataset.z_values().iter().enumerate() {
                let center = grid.cell_center(i, j, k);
                let radius = share_radius(dataset.rate(index.cell(i, j, k)));
                out.push(CircleMarkSpec::new(center, radius).command());
                out.push(
                    TextMarkSpec::new(center, z.to_string())
                        .with_font_size(config.font_size)
                        .command(),
                );
            }
        }
    }
    out
}
