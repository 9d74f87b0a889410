// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Surface`] that serializes draw calls as SVG elements.

use std::fmt::Write as _;

use crossviz_charts::{ShapeStyle, Surface, TextAnchor, TextBaseline, TextStyle};
use kurbo::{BezPath, Circle, Point, Rect, Size};
use peniko::Brush;

/// Collects SVG elements inside a group translated to the plot origin.
#[derive(Debug)]
pub(crate) struct SvgSurface {
    size: Size,
    origin: Point,
    body: String,
}

impl SvgSurface {
    pub(crate) fn new(size: Size, origin: Point) -> Self {
        Self {
            size,
            origin,
            body: String::new(),
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}" font-family="sans-serif">"#,
            w = self.size.width,
            h = self.size.height,
        );
        let _ = writeln!(
            out,
            r#"<g transform="translate({} {})">"#,
            self.origin.x, self.origin.y
        );
        out.push_str(&self.body);
        out.push_str("</g>\n</svg>\n");
        out
    }

    fn write_shape_style(&mut self, style: &ShapeStyle) {
        match &style.fill {
            Some(fill) => write_paint_attr(&mut self.body, "fill", fill),
            None => self.body.push_str(r#" fill="none""#),
        }
        if let Some(stroke) = &style.stroke
            && stroke.stroke_width > 0.0
        {
            write_paint_attr(&mut self.body, "stroke", &stroke.brush);
            let _ = write!(self.body, r#" stroke-width="{}""#, stroke.stroke_width);
        }
        if style.opacity < 1.0 {
            let _ = write!(self.body, r#" opacity="{}""#, style.opacity);
        }
        self.body.push_str("/>\n");
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.body.clear();
    }

    fn draw_rect(&mut self, rect: Rect, style: &ShapeStyle) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        );
        self.write_shape_style(style);
    }

    fn draw_circle(&mut self, circle: Circle, style: &ShapeStyle) {
        let _ = write!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}""#,
            circle.center.x, circle.center.y, circle.radius,
        );
        self.write_shape_style(style);
    }

    fn draw_path(&mut self, path: &BezPath, style: &ShapeStyle) {
        let _ = write!(self.body, r#"<path d="{}""#, path.to_svg());
        self.write_shape_style(style);
    }

    fn draw_text(&mut self, pos: Point, text: &str, style: &TextStyle) {
        let baseline = match style.baseline {
            TextBaseline::Middle => "middle",
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Hanging => "hanging",
        };
        let anchor = match style.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-size="{}""#,
            pos.x, pos.y, style.font_size,
        );
        let _ = write!(self.body, r#" dominant-baseline="{baseline}" text-anchor="{anchor}""#);
        write_paint_attr(&mut self.body, "fill", &style.fill);
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = (rgba.a != 255).then(|| f64::from(rgba.a) / 255.0);
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use crossviz_charts::{StrokeStyle, TextMarkSpec};
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn shapes_carry_paint_and_opacity() {
        let mut svg = SvgSurface::new(Size::new(100.0, 80.0), Point::new(10.0, 5.0));
        svg.draw_rect(
            Rect::new(0.0, 0.0, 4.0, 2.0),
            &ShapeStyle::filled(css::BLUE)
                .with_stroke(StrokeStyle::solid(css::WHITE, 0.1))
                .with_opacity(0.5),
        );
        let out = svg.to_svg_string();
        assert!(out.contains(r#"viewBox="0 0 100 80""#), "{out}");
        assert!(out.contains(r#"<g transform="translate(10 5)">"#), "{out}");
        let rect = concat!(
            r##"<rect x="0" y="0" width="4" height="2" fill="#0000ff""##,
            r##" stroke="#ffffff" stroke-width="0.1" opacity="0.5"/>"##,
        );
        assert!(out.contains(rect), "{out}");
    }

    #[test]
    fn unfilled_shapes_and_zero_strokes() {
        let mut svg = SvgSurface::new(Size::new(10.0, 10.0), Point::ZERO);
        svg.draw_circle(
            Circle::new((1.0, 2.0), 3.0),
            &ShapeStyle::stroked(StrokeStyle::solid(css::BLACK, 0.0)),
        );
        assert!(
            svg.to_svg_string()
                .contains(r#"<circle cx="1" cy="2" r="3" fill="none"/>"#)
        );
    }

    #[test]
    fn text_is_escaped_and_anchored() {
        let mut svg = SvgSurface::new(Size::new(10.0, 10.0), Point::ZERO);
        TextMarkSpec::new(Point::new(3.0, 4.0), "a<b & c")
            .command()
            .apply(&mut svg);
        let out = svg.to_svg_string();
        assert!(out.contains("a&lt;b &amp; c"), "{out}");
        assert!(out.contains(r#"text-anchor="middle""#), "{out}");
        assert!(out.contains(r#"dominant-baseline="middle""#), "{out}");
    }

    #[test]
    fn clear_discards_previous_elements() {
        let mut svg = SvgSurface::new(Size::new(10.0, 10.0), Point::ZERO);
        svg.draw_rect(Rect::new(0.0, 0.0, 1.0, 1.0), &ShapeStyle::default());
        svg.clear();
        assert!(!svg.to_svg_string().contains("<rect"));
    }
}
