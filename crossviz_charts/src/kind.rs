// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart variant selection.

extern crate alloc;

use alloc::vec::Vec;

use crossviz_data::{Dataset, Normalization};

use crate::{ChartConfig, DrawCommand, GridLayout};
use crate::{bar_chart, bubble_chart, heatmap_chart, pie_chart, table_chart};

/// Which encoding fills the data cells of the cross-tab grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Stacked horizontal bars per `(y, z)` sub-row, one segment per X.
    Bar,
    /// One circle per `(x, y, z)` cell, area proportional to its share.
    Bubble,
    /// One blue cell per `(x, y, z)`, opacity relative to the largest cell.
    Heatmap,
    /// One pie per `(x, y)` group, one sector per Z.
    Pie,
    /// The formatted share of every `(x, y, z)` cell.
    Table,
}

impl ChartKind {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 5] = [Self::Bar, Self::Bubble, Self::Heatmap, Self::Pie, Self::Table];

    /// Lowercase variant name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Bubble => "bubble",
            Self::Heatmap => "heatmap",
            Self::Pie => "pie",
            Self::Table => "table",
        }
    }

    /// Computes the data-cell commands for this variant.
    ///
    /// The frame and the totals overlay are not included.
    pub fn geometry(self, ctx: &GeometryContext<'_>) -> Vec<DrawCommand> {
        let commands = match self {
            Self::Bar => bar_chart::bar_commands(ctx),
            Self::Bubble => bubble_chart::bubble_commands(ctx),
            Self::Heatmap => heatmap_chart::heatmap_commands(ctx),
            Self::Pie => pie_chart::pie_commands(ctx),
            Self::Table => table_chart::table_commands(ctx),
        };
        tracing::trace!(kind = self.name(), commands = commands.len(), "variant geometry");
        commands
    }
}

impl core::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a variant needs to lay out its geometry.
#[derive(Clone, Copy, Debug)]
pub struct GeometryContext<'a> {
    /// Source data and its bucket index.
    pub dataset: &'a Dataset,
    /// Global scaling factors for `dataset`.
    pub normalization: Normalization,
    /// Grid geometry for `dataset` under `config`.
    pub grid: GridLayout,
    /// Resolved configuration.
    pub config: &'a ChartConfig,
}

impl<'a> GeometryContext<'a> {
    /// Bundles a dataset and configuration, deriving the grid layout.
    pub fn new(
        dataset: &'a Dataset,
        normalization: Normalization,
        config: &'a ChartConfig,
    ) -> Self {
        Self {
            dataset,
            normalization,
            grid: GridLayout::for_dataset(dataset, config),
            config,
        }
    }
}
