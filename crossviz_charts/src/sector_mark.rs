// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector (pie slice) mark generation.
//!
//! The outline is `center -> start point -> arc to midpoint -> arc to end point -> close`.
//! Splitting the arc at the angular midpoint keeps each half under 180 degrees, so a sector that
//! spans the full circle still renders as a disc instead of collapsing to nothing.

use kurbo::{Arc, BezPath, Point, Vec2};
use peniko::Brush;

use crate::{DrawCommand, ShapeStyle, StrokeStyle};

/// A pie slice from the center out to `radius`.
///
/// Angles are in radians, measured clockwise from the positive x axis in y-down scene
/// coordinates.
#[derive(Clone, Debug)]
pub struct SectorMarkSpec {
    /// Center in scene coordinates.
    pub center: Point,
    /// Outer radius in scene coordinates.
    pub radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Fill paint for the sector.
    pub fill: Brush,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
    /// Curve flattening tolerance when converting the arcs to cubic segments.
    pub tolerance: f64,
}

impl SectorMarkSpec {
    /// Creates a new sector mark spec.
    pub fn new(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            fill: Brush::default(),
            stroke: None,
            tolerance: 0.1,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the curve flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns `true` if the sector has no area.
    pub fn is_empty(&self) -> bool {
        !(self.radius > 0.0 && self.end_angle - self.start_angle > 0.0)
    }

    /// Builds the sector outline.
    pub fn path(&self) -> BezPath {
        let mid_angle = 0.5 * (self.start_angle + self.end_angle);
        let half_sweep = mid_angle - self.start_angle;
        let radii = Vec2::new(self.radius, self.radius);

        let mut path = BezPath::new();
        path.move_to(self.center);
        path.line_to(self.center + Vec2::from_angle(self.start_angle) * self.radius);
        for start_angle in [self.start_angle, mid_angle] {
            let arc = Arc {
                center: self.center,
                radii,
                start_angle,
                sweep_angle: half_sweep,
                x_rotation: 0.0,
            };
            path.extend(arc.append_iter(self.tolerance));
        }
        path.close_path();
        path
    }

    /// Generates the draw command.
    pub fn command(&self) -> DrawCommand {
        let style = ShapeStyle::filled(self.fill.clone());
        let style = match self.stroke.clone() {
            Some(stroke) => style.with_stroke(stroke),
            None => style,
        };
        DrawCommand::Path {
            path: self.path(),
            style,
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{PI, TAU};

    use kurbo::{PathEl, Shape};
    use peniko::color::palette::css;

    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "{a} != {b}");
    }

    // Cubic arc approximations may overshoot the true circle slightly.
    fn assert_near(a: f64, b: f64) {
        assert!((a - b).abs() < 0.05, "{a} is not near {b}");
    }

    #[test]
    fn full_turn_covers_the_whole_disc() {
        let sector = SectorMarkSpec::new(Point::new(50.0, 50.0), 10.0, 0.0, TAU);
        let bbox = sector.path().bounding_box();
        assert_near(bbox.x0, 40.0);
        assert_near(bbox.x1, 60.0);
        assert_near(bbox.y0, 40.0);
        assert_near(bbox.y1, 60.0);
    }

    #[test]
    fn outline_passes_through_start_and_end_points() {
        let sector = SectorMarkSpec::new(Point::ZERO, 10.0, 0.0, PI / 2.0);
        let els: alloc::vec::Vec<PathEl> = sector.path().elements().to_vec();
        assert_eq!(els.first(), Some(&PathEl::MoveTo(Point::ZERO)));
        let PathEl::LineTo(start) = els[1] else {
            panic!("expected a line to the start point");
        };
        assert_close(start.x, 10.0);
        assert_close(start.y, 0.0);
        let end = els
            .iter()
            .rev()
            .find_map(|el| match el {
                PathEl::CurveTo(_, _, p) => Some(*p),
                _ => None,
            })
            .expect("arc segments");
        // Clockwise in y-down coordinates: a quarter turn ends straight below the center.
        assert_close(end.x, 0.0);
        assert_close(end.y, 10.0);
        assert_eq!(els.last(), Some(&PathEl::ClosePath));
    }

    #[test]
    fn command_carries_fill_and_optional_stroke() {
        let sector = SectorMarkSpec::new(Point::ZERO, 5.0, 0.0, PI).with_fill(css::TOMATO);
        let DrawCommand::Path { style, .. } = sector.command() else {
            panic!("expected a path command");
        };
        assert_eq!(style.fill, Some(css::TOMATO.into()));
        assert_eq!(style.stroke, None);

        let stroked = sector.with_stroke(StrokeStyle::solid(css::BLACK, 2.0));
        let DrawCommand::Path { style, .. } = stroked.command() else {
            panic!("expected a path command");
        };
        assert_eq!(style.stroke.map(|s| s.stroke_width), Some(2.0));
    }

    #[test]
    fn zero_sweep_or_radius_is_empty() {
        assert!(SectorMarkSpec::new(Point::ZERO, 5.0, 1.0, 1.0).is_empty());
        assert!(SectorMarkSpec::new(Point::ZERO, 0.0, 0.0, 1.0).is_empty());
        assert!(!SectorMarkSpec::new(Point::ZERO, 5.0, 0.0, 1.0).is_empty());
    }
}
