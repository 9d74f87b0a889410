// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circle mark generation.

use kurbo::{Circle, Point};
use peniko::Brush;

use crate::{DrawCommand, ShapeStyle, StrokeStyle};

/// A circle mark spec, used for bubbles.
///
/// By default the circle is outlined with a 1px black stroke and left unfilled.
#[derive(Clone, Debug)]
pub struct CircleMarkSpec {
    /// Center in scene coordinates.
    pub center: Point,
    /// Radius in scene coordinates.
    pub radius: f64,
    /// Fill paint; `None` leaves the interior unpainted.
    pub fill: Option<Brush>,
    /// Outline stroke.
    pub stroke: Option<StrokeStyle>,
}

impl CircleMarkSpec {
    /// Creates a new circle mark spec.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            fill: None,
            stroke: Some(StrokeStyle::default()),
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Disables the outline stroke.
    pub fn without_stroke(mut self) -> Self {
        self.stroke = None;
        self
    }

    /// Generates the draw command.
    ///
    /// Negative or non-finite radii collapse to zero.
    pub fn command(&self) -> DrawCommand {
        let radius = if self.radius.is_finite() {
            self.radius.max(0.0)
        } else {
            0.0
        };
        DrawCommand::Circle {
            circle: Circle::new(self.center, radius),
            style: ShapeStyle {
                fill: self.fill.clone(),
                stroke: self.stroke.clone(),
                ..ShapeStyle::default()
            },
        }
    }
}
