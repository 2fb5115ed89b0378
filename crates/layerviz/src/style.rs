//! Render style parameters.

use layerviz_core::{Color, TextStyle};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Neuron fill: blue at 80% opacity.
pub const NEURON_COLOR: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 0.8,
};

/// Connection stroke before the configured opacity is applied.
pub const CONNECTION_COLOR: Color = Color::BLACK;

/// Annotation text color.
pub const LABEL_COLOR: Color = Color::BLACK;

/// Visual parameters shared by the layout engine and the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    /// Neuron circle radius in layout units.
    pub neuron_radius: f32,
    /// Opacity of connection lines, in [0, 1].
    pub connection_alpha: f32,
    /// Horizontal distance between adjacent layers in layout units.
    pub layer_spacing: f32,
    /// Annotation font size in SVG user units.
    pub font_size: f32,
    /// Label every connection with its synthetic weight.
    pub show_weights: bool,
    /// Label every neuron with its synthetic bias.
    pub show_biases: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            neuron_radius: 0.2,
            connection_alpha: 0.5,
            layer_spacing: 3.0,
            font_size: 8.0,
            show_weights: false,
            show_biases: false,
        }
    }
}

impl RenderStyle {
    /// Check every parameter is in range.
    ///
    /// Layer spacing is checked by the layout engine, which owns it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.neuron_radius.is_finite() || self.neuron_radius < 0.0 {
            return Err(ConfigError::NeuronRadius(self.neuron_radius));
        }
        if !(0.0..=1.0).contains(&self.connection_alpha) {
            return Err(ConfigError::Opacity(self.connection_alpha));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ConfigError::FontSize(self.font_size));
        }
        Ok(())
    }

    /// Stroke color for connections.
    #[must_use]
    pub fn connection_color(&self) -> Color {
        CONNECTION_COLOR.with_alpha(self.connection_alpha)
    }

    /// Text style for weight and bias annotations.
    #[must_use]
    pub fn label_style(&self) -> TextStyle {
        TextStyle {
            size: self.font_size,
            color: LABEL_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = RenderStyle::default();
        assert_eq!(s.neuron_radius, 0.2);
        assert_eq!(s.connection_alpha, 0.5);
        assert_eq!(s.layer_spacing, 3.0);
        assert_eq!(s.font_size, 8.0);
        assert!(!s.show_weights);
        assert!(!s.show_biases);
        assert_eq!(s.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_negative_radius() {
        let s = RenderStyle {
            neuron_radius: -0.1,
            ..Default::default()
        };
        assert_eq!(s.validate(), Err(ConfigError::NeuronRadius(-0.1)));
    }

    #[test]
    fn test_zero_radius_is_allowed() {
        let s = RenderStyle {
            neuron_radius: 0.0,
            ..Default::default()
        };
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_rejects_alpha_out_of_range() {
        for alpha in [-0.01, 1.01, f32::NAN] {
            let s = RenderStyle {
                connection_alpha: alpha,
                ..Default::default()
            };
            assert!(matches!(s.validate(), Err(ConfigError::Opacity(_))));
        }
    }

    #[test]
    fn test_alpha_bounds_inclusive() {
        for alpha in [0.0, 1.0] {
            let s = RenderStyle {
                connection_alpha: alpha,
                ..Default::default()
            };
            assert!(s.validate().is_ok());
        }
    }

    #[test]
    fn test_rejects_bad_font_size() {
        let s = RenderStyle {
            font_size: 0.0,
            ..Default::default()
        };
        assert_eq!(s.validate(), Err(ConfigError::FontSize(0.0)));
    }

    #[test]
    fn test_colors() {
        let s = RenderStyle::default();
        assert_eq!(s.connection_color(), Color::BLACK.with_alpha(0.5));
        assert_eq!(NEURON_COLOR, Color::BLUE.with_alpha(0.8));
        assert_eq!(s.label_style().size, 8.0);
    }
}
