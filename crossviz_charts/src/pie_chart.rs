// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pies: one pie per `(x, y)` group, one sector per Z value.

extern crate alloc;

use alloc::vec::Vec;

use crate::bubble_chart::share_radius;
use crate::{DrawCommand, GeometryContext, SectorMarkSpec};

/// Sector spans in degrees for `counts`, accumulated in order.
///
/// Sector `k` spans `[offset / group * 360, (offset + counts[k]) / group * 360]`. Every span is
/// `(0, 0)` when `group <= 0`.
pub fn sector_angles(counts: &[f64], group: f64) -> Vec<(f64, f64)> {
    let mut offset = 0.0;
    counts
        .iter()
        .map(|&count| {
            let span = if group > 0.0 {
                (offset / group * 360.0, (offset + count) * 360.0 / group)
            } else {
                (0.0, 0.0)
            };
            offset += count;
            span
        })
        .collect()
}

pub(crate) fn pie_commands(ctx: &GeometryContext<'_>) -> Vec<DrawCommand> {
    let GeometryContext {
        dataset,
        grid,
        config,
        ..
    } = *ctx;
    let index = dataset.index();
    let z_count = dataset.z_values().len();

    let mut out = Vec::new();
    let mut counts = Vec::with_capacity(z_count);
    for i in 0..dataset.x_values().len() {
        for j in 0..dataset.y_values().len() {
            let group = index.xy_total(i, j);
            let center = grid.group_center(i, j);
            let radius = share_radius(dataset.rate(group));

            counts.clear();
            counts.extend((0..z_count).map(|k| index.cell(i, j, k)));
            for (k, (start, end)) in sector_angles(&counts, group).into_iter().enumerate() {
                let sector =
                    SectorMarkSpec::new(center, radius, start.to_radians(), end.to_radians())
                        .with_fill(config.color(k));
                if sector.is_empty() {
                    continue;
                }
                out.push(sector.command());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn spans_accumulate_to_a_full_turn() {
        let spans = sector_angles(&[1.0, 2.0, 1.0], 4.0);
        assert_eq!(spans, vec![(0.0, 90.0), (90.0, 270.0), (270.0, 360.0)]);
    }

    #[test]
    fn single_sector_is_a_full_turn() {
        assert_eq!(sector_angles(&[7.0], 7.0), vec![(0.0, 360.0)]);
    }

    #[test]
    fn empty_group_has_zero_spans() {
        assert_eq!(sector_angles(&[0.0, 0.0], 0.0), vec![(0.0, 0.0), (0.0, 0.0)]);
    }
}
