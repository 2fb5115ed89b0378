//! Run configuration.

use layerviz_core::SvgOptions;
use layerviz_layout::Topology;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::style::RenderStyle;

/// Everything a single diagram run needs, validated once up front.
#[derive(Debug, Clone)]
pub struct DiagramConfig {
    /// Neurons per layer.
    pub topology: Topology,
    /// Visual parameters.
    pub style: RenderStyle,
    /// SVG destination; nothing is written when absent.
    pub output: Option<PathBuf>,
    /// JSON dump of the recorded draw commands.
    pub commands_json: Option<PathBuf>,
    /// Seed for the illustrative values; entropy when absent.
    pub seed: Option<u64>,
    /// SVG serialization options.
    pub svg: SvgOptions,
}

impl DiagramConfig {
    /// Build a configuration with default style and no outputs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Topology`] if `widths` is empty or exceeds the
    /// topology size limits.
    pub fn new(widths: Vec<usize>) -> Result<Self, ConfigError> {
        Ok(Self {
            topology: Topology::new(widths)?,
            style: RenderStyle::default(),
            output: None,
            commands_json: None,
            seed: None,
            svg: SvgOptions::default(),
        })
    }

    /// Replace the render style.
    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Write an SVG to `path`.
    #[must_use]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Dump the draw commands as JSON to `path`.
    #[must_use]
    pub fn with_commands_json(mut self, path: impl Into<PathBuf>) -> Self {
        self.commands_json = Some(path.into());
        self
    }

    /// Pin the illustrative values to a seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the SVG options.
    #[must_use]
    pub fn with_svg_options(mut self, svg: SvgOptions) -> Self {
        self.svg = svg;
        self
    }

    /// Check style and SVG parameters.
    ///
    /// Layer spacing is checked when the layout is computed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.style.validate()?;
        if !self.svg.scale.is_finite() || self.svg.scale <= 0.0 {
            return Err(ConfigError::Scale(self.svg.scale));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layerviz_layout::TopologyError;

    #[test]
    fn test_new_rejects_empty_topology() {
        assert_eq!(
            DiagramConfig::new(vec![]).unwrap_err(),
            ConfigError::Topology(TopologyError::Empty)
        );
    }

    #[test]
    fn test_new_rejects_oversized_topology() {
        assert!(matches!(
            DiagramConfig::new(vec![usize::MAX, 3]).unwrap_err(),
            ConfigError::Topology(TopologyError::TooManyNeurons { .. })
        ));
    }

    #[test]
    fn test_builder() {
        let cfg = DiagramConfig::new(vec![4, 8, 4])
            .unwrap()
            .with_output("net.svg")
            .with_commands_json("net.json")
            .with_seed(9);
        assert_eq!(cfg.output, Some(PathBuf::from("net.svg")));
        assert_eq!(cfg.commands_json, Some(PathBuf::from("net.json")));
        assert_eq!(cfg.seed, Some(9));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_checks_style() {
        let cfg = DiagramConfig::new(vec![2]).unwrap().with_style(RenderStyle {
            connection_alpha: 2.0,
            ..Default::default()
        });
        assert_eq!(cfg.validate(), Err(ConfigError::Opacity(2.0)));
    }

    #[test]
    fn test_validate_checks_scale() {
        let cfg = DiagramConfig::new(vec![2])
            .unwrap()
            .with_svg_options(SvgOptions {
                scale: 0.0,
                padding: 0.0,
            });
        assert_eq!(cfg.validate(), Err(ConfigError::Scale(0.0)));
    }
}
