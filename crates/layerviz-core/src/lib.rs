//! Core types and traits for layerviz diagrams.
//!
//! This crate provides the drawing vocabulary shared by the layout engine,
//! the renderer and the exporters:
//! - Geometric primitives: [`Point`], [`Rect`]
//! - Color representation: [`Color`]
//! - Draw commands and styles: [`DrawCommand`], [`StrokeStyle`], [`TextStyle`]
//! - Drawing surfaces: [`Canvas`], [`RecordingCanvas`]
//! - SVG output: [`to_svg`], [`SvgOptions`]

mod canvas;
mod color;
pub mod draw;
mod geometry;
pub mod svg;

pub use canvas::{Canvas, RecordingCanvas};
pub use color::Color;
pub use draw::{DrawCommand, StrokeStyle, TextStyle};
pub use geometry::{Point, Rect};
pub use svg::{content_bounds, to_svg, SvgOptions};
