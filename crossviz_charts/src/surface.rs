// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering seam between chart geometry and a concrete backend.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Rect};

use crate::{DrawCommand, ShapeStyle, TextStyle};

/// A mutable 2D drawing target.
///
/// A chart assumes exclusive access to the surface for the duration of one render call.
pub trait Surface {
    /// Removes everything drawn so far.
    fn clear(&mut self);
    /// Draws an axis-aligned rectangle.
    fn draw_rect(&mut self, rect: Rect, style: &ShapeStyle);
    /// Draws a circle.
    fn draw_circle(&mut self, circle: Circle, style: &ShapeStyle);
    /// Draws an arbitrary path.
    fn draw_path(&mut self, path: &BezPath, style: &ShapeStyle);
    /// Draws unshaped text anchored at `pos`.
    fn draw_text(&mut self, pos: Point, text: &str, style: &TextStyle);
}

/// A surface that records every call as a [`DrawCommand`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    /// Commands drawn since the last [`Surface::clear`].
    pub commands: Vec<DrawCommand>,
    /// Number of times the surface was cleared.
    pub clears: usize,
}

impl RecordingSurface {
    /// Creates an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates the text content of every recorded text command.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(DrawCommand::text)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn draw_rect(&mut self, rect: Rect, style: &ShapeStyle) {
        self.commands.push(DrawCommand::Rect {
            rect,
            style: style.clone(),
        });
    }

    fn draw_circle(&mut self, circle: Circle, style: &ShapeStyle) {
        self.commands.push(DrawCommand::Circle {
            circle,
            style: style.clone(),
        });
    }

    fn draw_path(&mut self, path: &BezPath, style: &ShapeStyle) {
        self.commands.push(DrawCommand::Path {
            path: path.clone(),
            style: style.clone(),
        });
    }

    fn draw_text(&mut self, pos: Point, text: &str, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: String::from(text),
            style: style.clone(),
        });
    }
}
