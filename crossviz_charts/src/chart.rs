// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart engine: source data, configuration and the render pipeline.

extern crate alloc;

use alloc::vec::Vec;

use crossviz_data::{ColumnMapping, Dataset, Normalization, SourceError, Table};

use crate::summary::summary_commands;
use crate::{
    ChartConfig, ChartKind, ChartOptions, CrossAxisSpec, DrawCommand, GeometryContext, Surface,
};

/// Errors returned by [`CrossChart::render`] and [`CrossChart::geometry`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// No source data has been set.
    #[error("no source data; call `set_source` before rendering")]
    NoSource,
}

/// A cross-tabulation chart of one [`ChartKind`].
///
/// ```
/// use crossviz_charts::{ChartConfig, ChartKind, CrossChart, RecordingSurface};
/// use crossviz_data::{ColumnMapping, Table};
///
/// let table = Table::new(["region", "year", "channel", "sales"])
///     .with_row(vec!["north".into(), "2024".into(), "web".into(), 10.into()])
///     .with_row(vec!["south".into(), "2024".into(), "web".into(), 5.into()]);
///
/// let mut chart = CrossChart::new(ChartKind::Table, ChartConfig::default());
/// chart
///     .set_source(table, &ColumnMapping::new().with_value("sales"))
///     .unwrap();
///
/// let mut surface = RecordingSurface::new();
/// chart.render(&mut surface, None).unwrap();
/// assert!(surface.texts().any(|t| t == "66.7%"));
/// ```
#[derive(Clone, Debug)]
pub struct CrossChart {
    kind: ChartKind,
    config: ChartConfig,
    source: Option<(Dataset, Normalization)>,
}

impl CrossChart {
    /// Creates a chart with no source data.
    pub fn new(kind: ChartKind, config: ChartConfig) -> Self {
        Self {
            kind,
            config,
            source: None,
        }
    }

    /// The chart variant.
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// The persisted configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// The current dataset, if a source has been set.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.source.as_ref().map(|(dataset, _)| dataset)
    }

    /// The normalization factors of the current dataset, if a source has been set.
    pub fn normalization(&self) -> Option<Normalization> {
        self.source.as_ref().map(|(_, normalization)| *normalization)
    }

    /// Resolves `mapping` against `table` and replaces the current source.
    ///
    /// On error the previous source is kept.
    pub fn set_source(&mut self, table: Table, mapping: &ColumnMapping) -> Result<(), SourceError> {
        let dataset = Dataset::from_table(table, mapping)?;
        let normalization = Normalization::from_dataset(&dataset);
        tracing::debug!(
            kind = self.kind.name(),
            records = dataset.source().len(),
            x = dataset.x_values().len(),
            y = dataset.y_values().len(),
            z = dataset.z_values().len(),
            sum = dataset.sum(),
            max_x_rate = normalization.max_x_rate,
            max_rate = normalization.max_rate,
            "cross chart source set"
        );
        self.source = Some((dataset, normalization));
        Ok(())
    }

    /// Merges `options` into the persisted configuration.
    pub fn set_options(&mut self, options: &ChartOptions) {
        self.config.merge(options);
    }

    /// Computes every draw command in paint order: frame, data cells, then totals.
    pub fn geometry(&self) -> Result<Vec<DrawCommand>, RenderError> {
        let (dataset, normalization) = self.source.as_ref().ok_or(RenderError::NoSource)?;
        let ctx = GeometryContext::new(dataset, *normalization, &self.config);

        let mut commands = CrossAxisSpec::new(dataset, ctx.grid, &self.config).commands();
        commands.extend(self.kind.geometry(&ctx));
        if self.config.show_summary {
            commands.extend(summary_commands(&ctx));
        }
        Ok(commands)
    }

    /// Applies `options`, clears `surface` and draws the chart onto it.
    ///
    /// Nothing is drawn and the surface is left untouched when an error is returned.
    pub fn render(
        &mut self,
        surface: &mut dyn Surface,
        options: Option<&ChartOptions>,
    ) -> Result<(), RenderError> {
        if let Some(options) = options {
            self.set_options(options);
        }
        let commands = self.geometry()?;
        surface.clear();
        for command in &commands {
            command.apply(surface);
        }
        tracing::debug!(
            kind = self.kind.name(),
            commands = commands.len(),
            "cross chart rendered"
        );
        Ok(())
    }
}
