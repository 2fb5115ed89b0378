//! SVG serialization of recorded draw commands.
//!
//! Command coordinates are y-up layout units. The document is y-down, so
//! every point is mapped through `(x * scale, -y * scale)` and radii are
//! multiplied by `scale`. Stroke widths and font sizes are already SVG user
//! units and are written unscaled.

use crate::draw::{DrawCommand, StrokeStyle, TextStyle};
use crate::{Color, Point, Rect};

/// Options controlling SVG output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgOptions {
    /// SVG user units per layout unit.
    pub scale: f32,
    /// Extra space around the tight content bounds, in SVG user units.
    pub padding: f32,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            scale: 40.0,
            padding: 0.0,
        }
    }
}

impl SvgOptions {
    /// Map a layout point into document space.
    #[must_use]
    pub fn map_point(&self, p: Point) -> Point {
        Point::new(p.x * self.scale, -p.y * self.scale)
    }

    fn map_command(&self, cmd: &DrawCommand) -> DrawCommand {
        match cmd {
            DrawCommand::Line { from, to, style } => {
                DrawCommand::line(self.map_point(*from), self.map_point(*to), style.clone())
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
            } => DrawCommand::filled_circle(self.map_point(*center), radius * self.scale, *fill),
            DrawCommand::Text {
                content,
                position,
                style,
            } => DrawCommand::text(content.clone(), self.map_point(*position), style.clone()),
        }
    }
}

/// Tight bounds of `commands` once mapped into document space.
///
/// Returns a zero rectangle when there is nothing to draw.
#[must_use]
pub fn content_bounds(commands: &[DrawCommand], options: &SvgOptions) -> Rect {
    commands
        .iter()
        .map(|c| options.map_command(c).bounds())
        .reduce(|acc, r| acc.union(&r))
        .map_or_else(Rect::default, |r| r.outset(options.padding))
}

/// Convert draw commands to an SVG document.
///
/// The background is left transparent and the view box is cropped to the
/// drawn content.
#[must_use]
pub fn to_svg(commands: &[DrawCommand], options: &SvgOptions) -> String {
    let bounds = content_bounds(commands, options);

    let mut svg = String::new();
    svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    svg.push('\n');
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="{x} {y} {w} {h}">"#,
        x = num(bounds.x),
        y = num(bounds.y),
        w = num(bounds.width),
        h = num(bounds.height),
    ));
    svg.push('\n');
    svg.push_str("  <style>text { font-family: \"DejaVu Sans\", sans-serif; }</style>\n");

    for cmd in commands {
        match options.map_command(cmd) {
            DrawCommand::Line { from, to, style } => push_line(&mut svg, from, to, &style),
            DrawCommand::Circle {
                center,
                radius,
                fill,
            } => push_circle(&mut svg, center, radius, fill),
            DrawCommand::Text {
                content,
                position,
                style,
            } => push_text(&mut svg, &content, position, &style),
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_line(svg: &mut String, from: Point, to: Point, style: &StrokeStyle) {
    svg.push_str(&format!(
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"{} stroke-width="{}"/>
"#,
        num(from.x),
        num(from.y),
        num(to.x),
        num(to.y),
        style.color.to_hex(),
        opacity_attr("stroke-opacity", style.color),
        num(style.width),
    ));
}

fn push_circle(svg: &mut String, center: Point, radius: f32, fill: Color) {
    svg.push_str(&format!(
        r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"{}/>
"#,
        num(center.x),
        num(center.y),
        num(radius),
        fill.to_hex(),
        opacity_attr("fill-opacity", fill),
    ));
}

fn push_text(svg: &mut String, content: &str, position: Point, style: &TextStyle) {
    svg.push_str(&format!(
        r#"  <text x="{}" y="{}" font-size="{}" fill="{}"{} text-anchor="middle" dominant-baseline="central">{}</text>
"#,
        num(position.x),
        num(position.y),
        num(style.size),
        style.color.to_hex(),
        opacity_attr("fill-opacity", style.color),
        xml_escape(content),
    ));
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.is_opaque() {
        String::new()
    } else {
        format!(r#" {name}="{}""#, num(color.a))
    }
}

/// Compact decimal: three places at most, no trailing zeros, no `-0`.
fn num(v: f32) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
