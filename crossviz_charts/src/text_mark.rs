// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text mark generation.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use peniko::Brush;

use crate::{DrawCommand, TextAnchor, TextBaseline, TextStyle};

/// A text mark spec.
///
/// Text is centered on its anchor by default, which is how every cross-tab label is placed.
#[derive(Clone, Debug)]
pub struct TextMarkSpec {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

impl TextMarkSpec {
    /// Creates a new text mark spec with default styling.
    pub fn new(pos: Point, text: impl Into<String>) -> Self {
        let style = TextStyle::default();
        Self {
            pos,
            text: text.into(),
            font_size: style.font_size,
            anchor: style.anchor,
            baseline: style.baseline,
            fill: style.fill,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Generates the draw command.
    pub fn command(&self) -> DrawCommand {
        DrawCommand::Text {
            pos: self.pos,
            text: self.text.clone(),
            style: TextStyle {
                font_size: self.font_size,
                anchor: self.anchor,
                baseline: self.baseline,
                fill: self.fill.clone(),
            },
        }
    }
}
