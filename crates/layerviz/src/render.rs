//! Diagram renderer.
//!
//! Paints a [`Layout`] onto any [`Canvas`] back to front: every dense
//! connection, then every neuron, then the weight and bias labels so no
//! circle hides a label. Thickness, weight labels and bias labels are
//! illustrative values drawn from the supplied [`Sampler`].

use layerviz_core::{Canvas, Point};
use layerviz_layout::Layout;
use tracing::{debug, trace};

use crate::sampler::Sampler;
use crate::style::{RenderStyle, NEURON_COLOR};

/// Range of connection stroke widths, in SVG user units.
pub const THICKNESS_RANGE: (f32, f32) = (0.3, 1.5);

/// Range of the position of a weight label along its connection.
pub const LABEL_FRACTION_RANGE: (f32, f32) = (0.3, 0.7);

/// Range of synthetic bias values.
pub const BIAS_RANGE: (f32, f32) = (0.0, 1.0);

/// Vertical offset of a bias label relative to its neuron center.
pub const BIAS_LABEL_OFFSET: f32 = -0.4;

/// Counts of what a render pass drew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Connection lines drawn
    pub connections: usize,
    /// Neuron circles drawn
    pub neurons: usize,
    /// Weight labels drawn
    pub weight_labels: usize,
    /// Bias labels drawn
    pub bias_labels: usize,
}

impl RenderStats {
    /// Every primitive issued to the canvas.
    #[must_use]
    pub const fn primitives(&self) -> usize {
        self.connections + self.neurons + self.weight_labels + self.bias_labels
    }
}

/// A text annotation waiting for the label pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Text to draw, e.g. `w:0.6`
    pub text: String,
    /// Center of the text in layout units
    pub position: Point,
}

/// Render the full diagram: connections, neurons, then labels.
pub fn render<C, S>(
    canvas: &mut C,
    layout: &Layout,
    style: &RenderStyle,
    sampler: &mut S,
) -> RenderStats
where
    C: Canvas + ?Sized,
    S: Sampler + ?Sized,
{
    let mut stats = RenderStats::default();
    let mut labels = Vec::new();
    draw_connections(canvas, layout, style, sampler, &mut labels, &mut stats);
    draw_neurons(canvas, layout, style, sampler, &mut labels, &mut stats);
    draw_labels(canvas, style, &labels);
    debug!(
        connections = stats.connections,
        neurons = stats.neurons,
        weight_labels = stats.weight_labels,
        bias_labels = stats.bias_labels,
        "rendered diagram"
    );
    stats
}

/// Connection pass.
///
/// For every connection a thickness is sampled from [`THICKNESS_RANGE`]. With
/// weight labels enabled a label reading `w:<thickness / 1.5>` is queued at a
/// sampled fraction of the way from source to target.
pub fn draw_connections<C, S>(
    canvas: &mut C,
    layout: &Layout,
    style: &RenderStyle,
    sampler: &mut S,
    labels: &mut Vec<Label>,
    stats: &mut RenderStats,
) where
    C: Canvas + ?Sized,
    S: Sampler + ?Sized,
{
    let color = style.connection_color();

    for conn in layout.connections() {
        let thickness = sampler.uniform(THICKNESS_RANGE.0, THICKNESS_RANGE.1);
        trace!(
            layer = conn.layer,
            source = conn.source,
            target = conn.target,
            thickness,
            "connection"
        );
        canvas.draw_line(conn.from, conn.to, color, thickness);
        stats.connections += 1;

        if style.show_weights {
            let weight = round2(thickness / THICKNESS_RANGE.1);
            let t = sampler.uniform(LABEL_FRACTION_RANGE.0, LABEL_FRACTION_RANGE.1);
            labels.push(Label {
                text: format!("w:{}", format_value(weight)),
                position: conn.from.lerp(&conn.to, t),
            });
            stats.weight_labels += 1;
        }
    }
}

/// Neuron pass.
///
/// Each neuron is a filled circle of the configured radius. With bias labels
/// enabled a bias from [`BIAS_RANGE`] is queued just below the neuron.
pub fn draw_neurons<C, S>(
    canvas: &mut C,
    layout: &Layout,
    style: &RenderStyle,
    sampler: &mut S,
    labels: &mut Vec<Label>,
    stats: &mut RenderStats,
) where
    C: Canvas + ?Sized,
    S: Sampler + ?Sized,
{
    for center in layout.positions() {
        canvas.fill_circle(center, style.neuron_radius, NEURON_COLOR);
        stats.neurons += 1;

        if style.show_biases {
            let bias = round2(sampler.uniform(BIAS_RANGE.0, BIAS_RANGE.1));
            labels.push(Label {
                text: format!("b:{}", format_value(bias)),
                position: Point::new(center.x, center.y + BIAS_LABEL_OFFSET),
            });
            stats.bias_labels += 1;
        }
    }
}

/// Label pass. Draws queued labels in order, on top of everything else.
pub fn draw_labels<C>(canvas: &mut C, style: &RenderStyle, labels: &[Label])
where
    C: Canvas + ?Sized,
{
    let label_style = style.label_style();
    for label in labels {
        canvas.draw_text(&label.text, label.position, &label_style);
    }
}

/// Round to two decimal places.
#[must_use]
pub fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

/// Short decimal form used in labels: at most two places, trailing zeros
/// dropped, but always one fractional digit (`0.5`, `1.0`, `0.67`).
#[must_use]
pub fn format_value(v: f32) -> String {
    let s = format!("{v:.2}");
    let trimmed = s.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}
