// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration and per-render overrides.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Point, Size};
use peniko::Color;
use peniko::color::palette::css;

use crate::format::format_percent;

/// Formats a rate (a share of the grand total) for display.
pub type ValueFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Denominator used for bar widths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BarScaling {
    /// Scale every group against the largest `(y, z)` group, so groups are comparable.
    #[default]
    Global,
    /// Scale every group against its own total, so each bar spans the full width.
    Stretched,
}

/// Resolved chart configuration.
///
/// All lengths are in scene units (pixels for the SVG surface).
#[derive(Clone)]
pub struct ChartConfig {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Outer margin as `[top, right, bottom, left]`.
    pub margin: [f64; 4],
    /// Width of one grid column.
    pub grid_width: f64,
    /// Height of one grid row.
    pub grid_height: f64,
    /// Whether to add the totals row/column.
    pub show_summary: bool,
    /// Whether to reserve legend space to the right of the canvas.
    pub show_legend: bool,
    /// Width reserved for the legend when `show_legend` is set.
    pub legend_width: f64,
    /// Category colors, indexed by X position (bars) or Z position (pie sectors).
    ///
    /// Indices wrap around when there are more categories than colors.
    pub colors: Vec<Color>,
    /// Bar width denominator.
    pub bar_scaling: BarScaling,
    /// Label for the totals row and column.
    pub summary_label: String,
    /// Font size for every label.
    pub font_size: f64,
    /// Formatter for table cells and summary totals.
    pub format_value: ValueFormatter,
}

impl core::fmt::Debug for ChartConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChartConfig")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("margin", &self.margin)
            .field("grid_width", &self.grid_width)
            .field("grid_height", &self.grid_height)
            .field("show_summary", &self.show_summary)
            .field("show_legend", &self.show_legend)
            .field("legend_width", &self.legend_width)
            .field("colors", &self.colors.len())
            .field("bar_scaling", &self.bar_scaling)
            .field("summary_label", &self.summary_label)
            .field("font_size", &self.font_size)
            .field("format_value", &"<fn>")
            .finish()
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 522.0,
            height: 522.0,
            margin: [50.0, 50.0, 50.0, 50.0],
            grid_width: 40.0,
            grid_height: 40.0,
            show_summary: false,
            show_legend: false,
            legend_width: 0.0,
            colors: Self::default_colors(),
            bar_scaling: BarScaling::Global,
            summary_label: String::from("汇总"),
            font_size: 12.0,
            format_value: Arc::new(format_percent),
        }
    }
}

impl ChartConfig {
    /// Returns the fallback categorical palette.
    pub fn default_colors() -> Vec<Color> {
        const PALETTE: [Color; 8] = [
            css::CORNFLOWER_BLUE,
            css::ORANGE,
            css::MEDIUM_SEA_GREEN,
            css::CRIMSON,
            css::GOLDENROD,
            css::SLATE_BLUE,
            css::DARK_CYAN,
            css::HOT_PINK,
        ];
        PALETTE.to_vec()
    }

    /// Returns the color for a category position, wrapping around the palette.
    pub fn color(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return css::BLACK;
        }
        self.colors[index % self.colors.len()]
    }

    /// Sets the canvas size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the outer margin (`[top, right, bottom, left]`).
    pub fn with_margin(mut self, margin: [f64; 4]) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the grid cell size.
    pub fn with_grid(mut self, grid_width: f64, grid_height: f64) -> Self {
        self.grid_width = grid_width;
        self.grid_height = grid_height;
        self
    }

    /// Enables or disables the totals row/column.
    pub fn with_summary(mut self, show_summary: bool) -> Self {
        self.show_summary = show_summary;
        self
    }

    /// Reserves legend space of the given width.
    pub fn with_legend(mut self, legend_width: f64) -> Self {
        self.show_legend = true;
        self.legend_width = legend_width;
        self
    }

    /// Sets the category palette.
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    /// Selects stretched (`true`) or globally scaled (`false`) bars.
    pub fn with_stretched(mut self, stretched: bool) -> Self {
        self.bar_scaling = if stretched {
            BarScaling::Stretched
        } else {
            BarScaling::Global
        };
        self
    }

    /// Sets the totals label.
    pub fn with_summary_label(mut self, label: impl Into<String>) -> Self {
        self.summary_label = label.into();
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the rate formatter.
    pub fn with_format_value(mut self, f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        self.format_value = Arc::new(f);
        self
    }

    /// Returns `true` if bars are stretched to their own group total.
    pub fn stretched(&self) -> bool {
        self.bar_scaling == BarScaling::Stretched
    }

    /// Outer canvas size, including reserved legend space.
    pub fn canvas_size(&self) -> Size {
        let legend = if self.show_legend {
            self.legend_width.max(0.0)
        } else {
            0.0
        };
        Size::new(self.width + legend, self.height)
    }

    /// Top-left corner of the grid within the canvas.
    pub fn plot_origin(&self) -> Point {
        Point::new(self.margin[3], self.margin[0])
    }

    /// Applies every override present in `options`.
    pub fn merge(&mut self, options: &ChartOptions) {
        let ChartOptions {
            width,
            height,
            margin,
            grid_width,
            grid_height,
            show_summary,
            show_legend,
            legend_width,
            colors,
            stretched,
            summary_label,
            font_size,
            format_value,
        } = options;

        if let Some(v) = *width {
            self.width = v;
        }
        if let Some(v) = *height {
            self.height = v;
        }
        if let Some(v) = *margin {
            self.margin = v;
        }
        if let Some(v) = *grid_width {
            self.grid_width = v;
        }
        if let Some(v) = *grid_height {
            self.grid_height = v;
        }
        if let Some(v) = *show_summary {
            self.show_summary = v;
        }
        if let Some(v) = *show_legend {
            self.show_legend = v;
        }
        if let Some(v) = *legend_width {
            self.legend_width = v;
        }
        if let Some(v) = colors {
            self.colors.clone_from(v);
        }
        if let Some(v) = *stretched {
            self.bar_scaling = if v {
                BarScaling::Stretched
            } else {
                BarScaling::Global
            };
        }
        if let Some(v) = summary_label {
            self.summary_label.clone_from(v);
        }
        if let Some(v) = *font_size {
            self.font_size = v;
        }
        if let Some(v) = format_value {
            self.format_value = v.clone();
        }
    }

    /// Returns a copy with `options` applied.
    pub fn merged(&self, options: &ChartOptions) -> Self {
        let mut out = self.clone();
        out.merge(options);
        out
    }
}

/// Partial overrides applied on top of a [`ChartConfig`] at render time.
#[derive(Clone, Default)]
pub struct ChartOptions {
    /// Canvas width.
    pub width: Option<f64>,
    /// Canvas height.
    pub height: Option<f64>,
    /// Outer margin as `[top, right, bottom, left]`.
    pub margin: Option<[f64; 4]>,
    /// Width of one grid column.
    pub grid_width: Option<f64>,
    /// Height of one grid row.
    pub grid_height: Option<f64>,
    /// Whether to add the totals row/column.
    pub show_summary: Option<bool>,
    /// Whether to reserve legend space.
    pub show_legend: Option<bool>,
    /// Width reserved for the legend.
    pub legend_width: Option<f64>,
    /// Category colors.
    pub colors: Option<Vec<Color>>,
    /// Stretched (`true`) or globally scaled (`false`) bars.
    pub stretched: Option<bool>,
    /// Label for the totals row and column.
    pub summary_label: Option<String>,
    /// Label font size.
    pub font_size: Option<f64>,
    /// Rate formatter.
    pub format_value: Option<ValueFormatter>,
}

impl core::fmt::Debug for ChartOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChartOptions")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("margin", &self.margin)
            .field("grid_width", &self.grid_width)
            .field("grid_height", &self.grid_height)
            .field("show_summary", &self.show_summary)
            .field("show_legend", &self.show_legend)
            .field("legend_width", &self.legend_width)
            .field("colors", &self.colors.as_ref().map(Vec::len))
            .field("stretched", &self.stretched)
            .field("summary_label", &self.summary_label)
            .field("font_size", &self.font_size)
            .field("format_value", &self.format_value.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
