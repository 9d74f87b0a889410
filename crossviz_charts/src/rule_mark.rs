// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule mark generation.
//!
//! A "rule" is a straight line segment; the cross-tab frame is drawn entirely from rules.

use kurbo::BezPath;
use peniko::Brush;
use peniko::color::palette::css;

use crate::{DrawCommand, ShapeStyle, StrokeStyle};

/// Stroke width used for every frame divider.
pub const FRAME_STROKE_WIDTH: f64 = 0.5;

/// A rule mark spec (a stroked line segment).
#[derive(Clone, Debug)]
pub struct RuleMarkSpec {
    /// Start point x in scene coordinates.
    pub x0: f64,
    /// Start point y in scene coordinates.
    pub y0: f64,
    /// End point x in scene coordinates.
    pub x1: f64,
    /// End point y in scene coordinates.
    pub y1: f64,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl RuleMarkSpec {
    /// Creates a new frame rule between two points.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            stroke: css::BLACK.into(),
            stroke_width: FRAME_STROKE_WIDTH,
        }
    }

    /// Creates a horizontal rule.
    pub fn horizontal(y: f64, x0: f64, x1: f64) -> Self {
        Self::new(x0, y, x1, y)
    }

    /// Creates a vertical rule.
    pub fn vertical(x: f64, y0: f64, y1: f64) -> Self {
        Self::new(x, y0, x, y1)
    }

    /// Sets stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Generates the rule command.
    pub fn command(&self) -> DrawCommand {
        let mut p = BezPath::new();
        p.move_to((self.x0, self.y0));
        p.line_to((self.x1, self.y1));
        DrawCommand::Path {
            path: p,
            style: ShapeStyle::stroked(StrokeStyle::solid(self.stroke.clone(), self.stroke_width)),
        }
    }
}
