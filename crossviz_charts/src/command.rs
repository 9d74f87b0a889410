// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw commands: the geometry a chart emits before it touches a [`Surface`].

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Circle, Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use crate::Surface;

/// A paint + width pair for stroked outlines and rules.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Paint for a filled and/or stroked shape.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeStyle {
    /// Fill paint; `None` leaves the interior unpainted.
    pub fill: Option<Brush>,
    /// Outline; `None` draws no outline.
    pub stroke: Option<StrokeStyle>,
    /// Whole-shape opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            opacity: 1.0,
        }
    }
}

impl ShapeStyle {
    /// A fill-only style.
    pub fn filled(fill: impl Into<Brush>) -> Self {
        Self {
            fill: Some(fill.into()),
            ..Self::default()
        }
    }

    /// A stroke-only style.
    pub fn stroked(stroke: StrokeStyle) -> Self {
        Self {
            stroke: Some(stroke),
            ..Self::default()
        }
    }

    /// Adds an outline.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the opacity, clamped to `[0, 1]`; non-finite input becomes `0`.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }
}

/// Horizontal alignment of text relative to its anchor point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    Start,
    /// Text is centered on the anchor.
    #[default]
    Middle,
    /// Text ends at the anchor.
    End,
}

/// Vertical alignment of text relative to its anchor point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor sits on the alphabetic baseline.
    Alphabetic,
    /// The anchor sits on the vertical middle of the text.
    #[default]
    Middle,
    /// The anchor sits on the hanging baseline.
    Hanging,
}

/// Styling for a text command.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Middle,
            fill: css::BLACK.into(),
        }
    }
}

/// One drawing primitive, in scene coordinates.
///
/// Commands are replayed in order; later commands paint over earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// An axis-aligned rectangle.
    Rect {
        /// Geometry.
        rect: Rect,
        /// Paint.
        style: ShapeStyle,
    },
    /// A circle.
    Circle {
        /// Geometry.
        circle: Circle,
        /// Paint.
        style: ShapeStyle,
    },
    /// An arbitrary path (rules, sectors).
    Path {
        /// Geometry.
        path: BezPath,
        /// Paint.
        style: ShapeStyle,
    },
    /// A run of unshaped text.
    Text {
        /// Anchor position.
        pos: Point,
        /// Content.
        text: String,
        /// Paint and alignment.
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Sends this command to a surface.
    pub fn apply(&self, surface: &mut dyn Surface) {
        match self {
            Self::Rect { rect, style } => surface.draw_rect(*rect, style),
            Self::Circle { circle, style } => surface.draw_circle(*circle, style),
            Self::Path { path, style } => surface.draw_path(path, style),
            Self::Text { pos, text, style } => surface.draw_text(*pos, text, style),
        }
    }

    /// Returns the text content if this is a [`DrawCommand::Text`].
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Returns a conservative bounding box for shapes; text has none.
    pub fn bounds(&self) -> Option<Rect> {
        use kurbo::Shape;
        match self {
            Self::Rect { rect, .. } => Some(*rect),
            Self::Circle { circle, .. } => Some(circle.bounding_box()),
            Self::Path { path, .. } => Some(path.bounding_box()),
            Self::Text { .. } => None,
        }
    }
}
