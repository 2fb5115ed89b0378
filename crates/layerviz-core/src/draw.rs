//! Draw commands.
//!
//! Every diagram reduces to these primitives. Positions and radii are in
//! layout units; stroke widths and font sizes are in SVG user units and do
//! not follow the layout scale.

use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for line rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in SVG user units
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Text style for rendering.
///
/// Text is always anchored at its center point.
///
/// # Examples
///
/// ```
/// use layerviz_core::{Color, TextStyle};
///
/// let style = TextStyle::default();
/// assert_eq!(style.size, 10.0);
///
/// let small = TextStyle { size: 8.0, ..TextStyle::default() };
/// assert_eq!(small.color, Color::BLACK);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in SVG user units
    pub size: f32,
    /// Text color
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 10.0,
            color: Color::BLACK,
        }
    }
}

/// Drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Straight line segment
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Filled circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill color
        fill: Color,
    },

    /// Text centered on a point
    Text {
        /// Text content
        content: String,
        /// Center position
        position: Point,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Create a line command.
    #[must_use]
    pub fn line(from: Point, to: Point, style: StrokeStyle) -> Self {
        Self::Line { from, to, style }
    }

    /// Create a filled circle command.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, fill: Color) -> Self {
        Self::Circle {
            center,
            radius,
            fill,
        }
    }

    /// Create a text command.
    #[must_use]
    pub fn text(content: impl Into<String>, position: Point, style: TextStyle) -> Self {
        Self::Text {
            content: content.into(),
            position,
            style,
        }
    }

    /// Approximate bounds, with stroke widths and font sizes taken in the
    /// command's own units.
    ///
    /// Only meaningful once positions are in SVG user units too. Text
    /// extents are estimated from the character count since no font metrics
    /// are available.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Line { from, to, style } => Rect::from_points(
                Point::new(from.x.min(to.x), from.y.min(to.y)),
                Point::new(from.x.max(to.x), from.y.max(to.y)),
            )
            .outset(style.width / 2.0),
            Self::Circle { center, radius, .. } => Rect::around(*center, *radius, *radius),
            Self::Text {
                content,
                position,
                style,
            } => {
                let chars = content.chars().count() as f32;
                Rect::around(*position, chars * style.size * 0.3, style.size / 2.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_style_default() {
        let s = StrokeStyle::default();
        assert_eq!(s.color, Color::BLACK);
        assert_eq!(s.width, 1.0);
    }

    #[test]
    fn test_line_bounds_include_width() {
        let cmd = DrawCommand::line(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            StrokeStyle {
                width: 2.0,
                ..Default::default()
            },
        );
        assert_eq!(cmd.bounds(), Rect::new(-1.0, -1.0, 12.0, 2.0));
    }

    #[test]
    fn test_circle_bounds() {
        let cmd = DrawCommand::filled_circle(Point::new(1.0, 1.0), 0.5, Color::BLUE);
        assert_eq!(cmd.bounds(), Rect::new(0.5, 0.5, 1.0, 1.0));
    }

    #[test]
    fn test_text_bounds_grow_with_length() {
        let style = TextStyle::default();
        let short = DrawCommand::text("b", Point::ORIGIN, style.clone());
        let long = DrawCommand::text("b:0.25", Point::ORIGIN, style);
        let b = long.bounds();
        assert!(b.width > short.bounds().width);
        assert!((b.width - 36.0).abs() < 1e-4);
        assert_eq!(b.height, 10.0);
        assert!((b.x + b.width / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_draw_command_serializes() {
        let cmd = DrawCommand::filled_circle(Point::new(3.0, 1.5), 0.2, Color::BLUE);
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("Circle"));
        let back: DrawCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
