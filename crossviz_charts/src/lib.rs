// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-tabulation charts over a fixed grid.
//!
//! A [`CrossChart`] lays out three categorical dimensions on one grid: X values as columns, Y
//! values as rows, and Z values as sub-rows within each row. The data cells are filled by one of
//! five encodings ([`ChartKind`]): stacked bars, bubbles, a heatmap, pies or plain percentages.
//!
//! Rendering is split in two steps:
//! - **Geometry**: the chart computes a list of [`DrawCommand`]s (rects, circles, paths, text)
//!   using the mark specs in this crate.
//! - **Replay**: the commands are replayed onto a [`Surface`], which owns the actual drawing
//!   backend.
//!
//! Text shaping is out of scope; text commands carry unshaped strings and an anchor.

#![no_std]

extern crate alloc;

mod axis;
mod bar_chart;
mod bubble_chart;
mod chart;
mod chart_config;
mod circle_mark;
mod command;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod grid;
mod heatmap_chart;
mod kind;
mod pie_chart;
mod rect_mark;
mod rule_mark;
mod sector_mark;
mod summary;
mod surface;
mod table_chart;
mod text_mark;

pub use axis::CrossAxisSpec;
pub use bar_chart::bar_segment_width;
pub use bubble_chart::share_radius;
pub use chart::{CrossChart, RenderError};
pub use chart_config::{BarScaling, ChartConfig, ChartOptions, ValueFormatter};
pub use circle_mark::CircleMarkSpec;
pub use command::{DrawCommand, ShapeStyle, StrokeStyle, TextAnchor, TextBaseline, TextStyle};
pub use format::format_percent;
pub use grid::GridLayout;
pub use heatmap_chart::heat_opacity;
pub use kind::{ChartKind, GeometryContext};
pub use pie_chart::sector_angles;
pub use rect_mark::RectMarkSpec;
pub use rule_mark::{FRAME_STROKE_WIDTH, RuleMarkSpec};
pub use sector_mark::SectorMarkSpec;
pub use summary::summary_commands;
pub use surface::{RecordingSurface, Surface};
pub use text_mark::TextMarkSpec;
