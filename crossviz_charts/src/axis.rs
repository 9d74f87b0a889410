// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cross-tab frame: category labels and divider rules.
//!
//! X labels run along the top header row. The left header column is split in two: Y labels in
//! the outer half and one Z label per sub-row in the inner half.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crossviz_data::{Dataset, Value};
use kurbo::Point;

use crate::{ChartConfig, DrawCommand, GridLayout, RuleMarkSpec, TextMarkSpec};

/// Frame generator for one dataset shape.
#[derive(Clone, Debug)]
pub struct CrossAxisSpec<'a> {
    /// Grid geometry.
    pub grid: GridLayout,
    /// Distinct X values, in column order.
    pub x_values: &'a [Value],
    /// Distinct Y values, in row order.
    pub y_values: &'a [Value],
    /// Distinct Z values, in sub-row order.
    pub z_values: &'a [Value],
    /// Label for the totals row and column.
    pub summary_label: String,
    /// Label font size.
    pub font_size: f64,
}

impl<'a> CrossAxisSpec<'a> {
    /// Creates a frame generator for `dataset` laid out by `grid`.
    pub fn new(dataset: &'a Dataset, grid: GridLayout, config: &ChartConfig) -> Self {
        Self {
            grid,
            x_values: dataset.x_values(),
            y_values: dataset.y_values(),
            z_values: dataset.z_values(),
            summary_label: config.summary_label.clone(),
            font_size: config.font_size,
        }
    }

    fn label(&self, pos: Point, text: impl Into<String>) -> DrawCommand {
        TextMarkSpec::new(pos, text)
            .with_font_size(self.font_size)
            .command()
    }

    /// Generates the frame commands in paint order.
    pub fn commands(&self) -> Vec<DrawCommand> {
        let g = &self.grid;
        let gw = g.grid_width;
        let gh = g.grid_height;
        let frame_width = g.frame_width();
        let mut out = Vec::new();

        for (i, x) in self.x_values.iter().enumerate() {
            out.push(self.label(g.x_label_center(i), x.to_string()));
        }

        out.push(RuleMarkSpec::horizontal(0.0, 0.0, frame_width).command());
        out.push(RuleMarkSpec::horizontal(g.body_bottom(), 0.0, frame_width).command());
        out.push(RuleMarkSpec::horizontal(gh, 0.0, frame_width).command());

        if g.show_summary {
            out.push(RuleMarkSpec::horizontal(g.summary_bottom(), 0.0, frame_width).command());
            out.push(self.label(
                Point::new(g.summary_column_center(), 0.5 * gh),
                self.summary_label.clone(),
            ));
            out.push(self.label(
                Point::new(0.5 * gw, g.summary_row_center()),
                self.summary_label.clone(),
            ));
        }

        for (j, y) in self.y_values.iter().enumerate() {
            let top = g.row_top(j);
            let bottom = top + gh;
            out.push(self.label(Point::new(0.25 * gw, g.row_center(j)), y.to_string()));
            // The first row's top edge is the header divider.
            if j != 0 {
                out.push(RuleMarkSpec::horizontal(top, 0.0, gw).command());
            }
            out.push(RuleMarkSpec::vertical(gw, top, bottom).command());
            out.push(RuleMarkSpec::vertical(0.5 * gw, top, bottom).command());

            for (k, z) in self.z_values.iter().enumerate() {
                out.push(self.label(Point::new(0.75 * gw, g.sub_row_center(j, k)), z.to_string()));
                if k != 0 {
                    out.push(RuleMarkSpec::horizontal(g.sub_row_top(j, k), 0.5 * gw, gw).command());
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn values(items: &[&str]) -> Vec<Value> {
        items.iter().map(|s| Value::from(*s)).collect()
    }

    fn spec<'a>(
        xs: &'a [Value],
        ys: &'a [Value],
        zs: &'a [Value],
        summary: bool,
    ) -> CrossAxisSpec<'a> {
        CrossAxisSpec {
            grid: GridLayout::new(40.0, 40.0, [xs.len(), ys.len(), zs.len()], summary),
            x_values: xs,
            y_values: ys,
            z_values: zs,
            summary_label: String::from("Total"),
            font_size: 12.0,
        }
    }

    fn count_rules(commands: &[DrawCommand]) -> usize {
        commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Path { .. }))
            .count()
    }

    #[test]
    fn labels_come_first_and_in_value_order() {
        let (xs, ys, zs) = (values(&["a", "b"]), values(&["p"]), values(&["u", "v"]));
        let commands = spec(&xs, &ys, &zs, false).commands();
        let texts: Vec<&str> = commands.iter().filter_map(DrawCommand::text).collect();
        assert_eq!(texts, vec!["a", "b", "p", "u", "v"]);
        assert!(matches!(commands[0], DrawCommand::Text { .. }));
    }

    #[test]
    fn first_row_and_first_sub_row_skip_their_top_divider() {
        let (xs, ys, zs) = (values(&["a"]), values(&["p", "q", "r"]), values(&["u", "v"]));
        let commands = spec(&xs, &ys, &zs, false).commands();
        // 3 frame rules; per row: 2 verticals, plus a row divider for j != 0,
        // plus a Z divider for k != 0.
        let expected = 3 + 3 * 2 + 2 + 3;
        assert_eq!(count_rules(&commands), expected);
    }

    #[test]
    fn summary_adds_a_rule_and_two_labels() {
        let (xs, ys, zs) = (values(&["a"]), values(&["p"]), values(&["u"]));
        let plain = spec(&xs, &ys, &zs, false).commands();
        let summed = spec(&xs, &ys, &zs, true).commands();
        assert_eq!(count_rules(&summed), count_rules(&plain) + 1);
        let totals: Vec<Point> = summed
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { pos, text, .. } if text == "Total" => Some(*pos),
                _ => None,
            })
            .collect();
        assert_eq!(totals, vec![Point::new(100.0, 20.0), Point::new(20.0, 100.0)]);
    }

    #[test]
    fn empty_dataset_still_draws_the_frame() {
        let commands = spec(&[], &[], &[], false).commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(count_rules(&commands), 3);
    }
}
