//! Drawing surfaces.

use crate::draw::{DrawCommand, StrokeStyle, TextStyle};
use crate::{Color, Point};

/// A drawing surface that diagram renderers paint onto.
///
/// Implementations decide what a primitive turns into (recorded commands,
/// SVG elements, pixels); renderers only issue primitives in back-to-front
/// order.
pub trait Canvas {
    /// Draw a straight line between two points.
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw text centered on `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (SVG export, JSON dumps)
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Number of recorded lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.count_where(|c| matches!(c, DrawCommand::Line { .. }))
    }

    /// Number of recorded circles.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.count_where(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    /// Number of recorded text runs.
    #[must_use]
    pub fn text_count(&self) -> usize {
        self.count_where(|c| matches!(c, DrawCommand::Text { .. }))
    }

    fn count_where(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|&c| pred(c)).count()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::line(
            from,
            to,
            StrokeStyle { color, width },
        ));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::filled_circle(center, radius, color));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands
            .push(DrawCommand::text(text, position, style.clone()));
    }
}
