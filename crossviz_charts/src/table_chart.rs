// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Table: the formatted share of every `(x, y, z)` cell.

extern crate alloc;

use alloc::vec::Vec;

use crate::{DrawCommand, GeometryContext, TextMarkSpec};

pub(crate) fn table_commands(ctx: &GeometryContext<'_>) -> Vec<DrawCommand> {
    let GeometryContext {
        dataset,
        grid,
        config,
        ..
    } = *ctx;
    let index = dataset.index();

    let mut out = Vec::new();
    for i in 0..dataset.x_values().len() {
        for j in 0..dataset.y_values().len() {
            for k in 0..dataset.z_values().len() {
                let rate = dataset.rate(index.cell(i, j, k));
                out.push(
                    TextMarkSpec::new(grid.cell_center(i, j, k), (config.format_value)(rate))
                        .with_font_size(config.font_size)
                        .command(),
                );
            }
        }
    }
    out
}
