// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Totals overlay: one share per X column, one per `(y, z)` sub-row, and the `100%` corner.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

use crate::{DrawCommand, GeometryContext, TextMarkSpec};

/// Generates the totals overlay.
pub fn summary_commands(ctx: &GeometryContext<'_>) -> Vec<DrawCommand> {
    let GeometryContext {
        dataset,
        grid,
        config,
        ..
    } = *ctx;
    let index = dataset.index();
    let label = |pos: Point, text: String| {
        TextMarkSpec::new(pos, text)
            .with_font_size(config.font_size)
            .command()
    };

    let mut out = Vec::new();
    let row_y = grid.summary_row_center();
    for i in 0..dataset.x_values().len() {
        let rate = dataset.rate(index.x_total(i));
        out.push(label(
            Point::new(grid.column_center(i), row_y),
            (config.format_value)(rate),
        ));
    }

    let column_x = grid.summary_column_center();
    for j in 0..dataset.y_values().len() {
        for k in 0..dataset.z_values().len() {
            let rate = dataset.rate(index.yz_total(j, k));
            out.push(label(
                Point::new(column_x, grid.sub_row_center(j, k)),
                (config.format_value)(rate),
            ));
        }
    }

    out.push(label(Point::new(column_x, row_y), String::from("100%")));
    out
}
