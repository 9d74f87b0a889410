// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle mark generation.

use kurbo::Rect;
use peniko::Brush;

use crate::{DrawCommand, ShapeStyle, StrokeStyle};

/// A rectangle mark spec.
#[derive(Clone, Debug)]
pub struct RectMarkSpec {
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint; `None` leaves the interior unpainted.
    pub fill: Option<Brush>,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
    /// Whole-mark opacity.
    pub opacity: f64,
}

impl RectMarkSpec {
    /// Creates a new rectangle mark spec with no paint.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            fill: None,
            stroke: None,
            opacity: 1.0,
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

    /// Sets the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Generates the draw command.
    pub fn command(&self) -> DrawCommand {
        let style = ShapeStyle {
            fill: self.fill.clone(),
            stroke: self.stroke.clone(),
            ..ShapeStyle::default()
        }
        .with_opacity(self.opacity);
        DrawCommand::Rect {
            rect: self.rect,
            style,
        }
    }
}
