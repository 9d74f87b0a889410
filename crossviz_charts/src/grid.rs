// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed cross-tab grid.
//!
//! Column 0 holds the Y/Z header (Y labels in the left half, Z labels in the right half) and
//! row 0 holds the X labels. Data occupies columns `1..=|X|` and rows `1..=|Y|`; each row is
//! split into `|Z|` equal sub-rows. With the summary enabled, one extra column and one extra
//! row follow the data.
//!
//! All positions are relative to the plot origin (see [`ChartConfig::plot_origin`]).
//!
//! [`ChartConfig::plot_origin`]: crate::ChartConfig::plot_origin

use crossviz_data::Dataset;
use kurbo::{Point, Rect};

use crate::ChartConfig;

/// Pure coordinate functions for one dataset shape and grid size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    /// Width of one grid column.
    pub grid_width: f64,
    /// Height of one grid row.
    pub grid_height: f64,
    /// Number of distinct X values.
    pub x_count: usize,
    /// Number of distinct Y values.
    pub y_count: usize,
    /// Number of distinct Z values.
    pub z_count: usize,
    /// Whether the totals row/column is present.
    pub show_summary: bool,
}

impl GridLayout {
    /// Creates a layout for the given grid size and value-set sizes.
    pub fn new(
        grid_width: f64,
        grid_height: f64,
        [x_count, y_count, z_count]: [usize; 3],
        show_summary: bool,
    ) -> Self {
        Self {
            grid_width,
            grid_height,
            x_count,
            y_count,
            z_count,
            show_summary,
        }
    }

    /// Creates a layout sized for `dataset` under `config`.
    pub fn for_dataset(dataset: &Dataset, config: &ChartConfig) -> Self {
        Self::new(
            config.grid_width,
            config.grid_height,
            [
                dataset.x_values().len(),
                dataset.y_values().len(),
                dataset.z_values().len(),
            ],
            config.show_summary,
        )
    }

    /// Height of one Z sub-row.
    ///
    /// Only meaningful when `z_count > 0`.
    pub fn sub_row_height(&self) -> f64 {
        self.grid_height / self.z_count as f64
    }

    /// Center of the X label for column `i`.
    pub fn x_label_center(&self, i: usize) -> Point {
        Point::new(self.column_center(i), 0.5 * self.grid_height)
    }

    /// Horizontal center of data column `i`.
    pub fn column_center(&self, i: usize) -> f64 {
        (i as f64 + 1.5) * self.grid_width
    }

    /// Top edge of data row `j`.
    pub fn row_top(&self, j: usize) -> f64 {
        (j as f64 + 1.0) * self.grid_height
    }

    /// Vertical center of data row `j`.
    pub fn row_center(&self, j: usize) -> f64 {
        (j as f64 + 1.5) * self.grid_height
    }

    /// Top edge of sub-row `k` within row `j`.
    pub fn sub_row_top(&self, j: usize, k: usize) -> f64 {
        k as f64 * self.sub_row_height() + self.row_top(j)
    }

    /// Vertical center of sub-row `k` within row `j`.
    pub fn sub_row_center(&self, j: usize, k: usize) -> f64 {
        (k as f64 + 0.5) * self.sub_row_height() + self.row_top(j)
    }

    /// Center of the cell `(i, j, k)`.
    pub fn cell_center(&self, i: usize, j: usize, k: usize) -> Point {
        Point::new(self.column_center(i), self.sub_row_center(j, k))
    }

    /// The heatmap cell `(i, j, k)`: one column wide, one sub-row tall.
    pub fn cell_rect(&self, i: usize, j: usize, k: usize) -> Rect {
        let x = (i as f64 + 1.0) * self.grid_width;
        let y = self.sub_row_top(j, k);
        Rect::new(x, y, x + self.grid_width, y + self.sub_row_height())
    }

    /// The full grid cell for `(i, j)`, spanning every Z sub-row.
    pub fn group_rect(&self, i: usize, j: usize) -> Rect {
        let x = (i as f64 + 1.0) * self.grid_width;
        let y = self.row_top(j);
        Rect::new(x, y, x + self.grid_width, y + self.grid_height)
    }

    /// Center of the grid cell for `(i, j)`.
    pub fn group_center(&self, i: usize, j: usize) -> Point {
        Point::new(self.column_center(i), self.row_center(j))
    }

    /// Top-left corner of the first bar segment in sub-row `(j, k)`.
    ///
    /// Bars start a quarter column into the first data column and are vertically centered in
    /// their sub-row.
    pub fn bar_origin(&self, j: usize, k: usize) -> Point {
        Point::new(
            1.25 * self.grid_width,
            (k as f64 + 0.25) * self.sub_row_height() + self.row_top(j),
        )
    }

    /// Height of one bar: half a sub-row.
    pub fn bar_height(&self) -> f64 {
        self.sub_row_height() / 2.0
    }

    /// Total width spanned by horizontal dividers.
    pub fn frame_width(&self) -> f64 {
        let extra = if self.show_summary { 2.0 } else { 1.0 };
        (self.x_count as f64 + extra) * self.grid_width
    }

    /// Bottom edge of the last data row.
    pub fn body_bottom(&self) -> f64 {
        (self.y_count as f64 + 1.0) * self.grid_height
    }

    /// Bottom edge of the totals row.
    pub fn summary_bottom(&self) -> f64 {
        (self.y_count as f64 + 2.0) * self.grid_height
    }

    /// Vertical center of the totals row.
    pub fn summary_row_center(&self) -> f64 {
        (self.y_count as f64 + 1.5) * self.grid_height
    }

    /// Horizontal center of the totals column.
    pub fn summary_column_center(&self) -> f64 {
        (self.x_count as f64 + 1.5) * self.grid_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> GridLayout {
        GridLayout::new(40.0, 40.0, [2, 2, 2], false)
    }

    #[test]
    fn sub_rows_tile_each_row() {
        let g = layout();
        assert_eq!(g.sub_row_height(), 20.0);
        assert_eq!(g.sub_row_top(1, 0), g.row_top(1));
        assert_eq!(g.sub_row_top(1, 1) + g.sub_row_height(), g.row_top(2));
        assert_eq!(g.sub_row_center(0, 1), 70.0);
    }

    #[test]
    fn cell_and_group_rects() {
        let g = layout();
        assert_eq!(g.cell_rect(1, 0, 1), Rect::new(80.0, 60.0, 120.0, 80.0));
        assert_eq!(g.group_rect(1, 1), Rect::new(80.0, 80.0, 120.0, 120.0));
        assert_eq!(g.group_center(0, 0), Point::new(60.0, 60.0));
        assert_eq!(g.cell_rect(0, 0, 0).center(), g.cell_center(0, 0, 0));
    }

    #[test]
    fn bars_sit_in_the_middle_half_of_their_sub_row() {
        let g = layout();
        let origin = g.bar_origin(0, 1);
        assert_eq!(origin, Point::new(50.0, 65.0));
        assert_eq!(g.bar_height(), 10.0);
        assert_eq!(origin.y + 0.5 * g.bar_height(), g.sub_row_center(0, 1));
    }

    #[test]
    fn frame_extent_grows_with_summary() {
        let g = layout();
        assert_eq!(g.frame_width(), 120.0);
        assert_eq!(g.body_bottom(), 120.0);

        let g = GridLayout {
            show_summary: true,
            ..g
        };
        assert_eq!(g.frame_width(), 160.0);
        assert_eq!(g.summary_row_center(), 140.0);
        assert_eq!(g.summary_column_center(), 140.0);
        assert_eq!(g.summary_bottom(), 160.0);
    }

    #[test]
    fn summary_offsets_follow_their_own_axis() {
        let g = GridLayout::new(30.0, 50.0, [4, 1, 1], true);
        // The totals column follows the X columns; the totals row follows the Y rows.
        assert_eq!(g.summary_column_center(), 5.5 * 30.0);
        assert_eq!(g.summary_row_center(), 2.5 * 50.0);
    }
}
