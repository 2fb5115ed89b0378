//! Error types for layerviz.

use layerviz_layout::TopologyError;
use std::path::PathBuf;
use thiserror::Error;

/// Invalid run configuration. Raised before any rendering happens.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Topology or layer spacing rejected by the layout engine.
    #[error(transparent)]
    Topology(#[from] TopologyError),

    /// Neuron radius must be a finite, non-negative number.
    #[error("neuron radius must be >= 0 (got {0})")]
    NeuronRadius(f32),

    /// Connection opacity must lie in [0, 1].
    #[error("connection opacity must be within [0, 1] (got {0})")]
    Opacity(f32),

    /// Font size must be a finite, positive number.
    #[error("font size must be > 0 (got {0})")]
    FontSize(f32),

    /// SVG scale must be a finite, positive number.
    #[error("SVG scale must be > 0 (got {0})")]
    Scale(f32),
}

/// Failure writing an output artifact. The in-memory diagram is unaffected.
#[derive(Debug, Error)]
#[error("failed to write {}: {source}", .path.display())]
pub struct ExportError {
    /// Destination that could not be written.
    pub path: PathBuf,
    /// Underlying I/O failure.
    #[source]
    pub source: std::io::Error,
}

/// Errors that can occur while producing a diagram.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Output could not be written.
    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    /// Scene could not be serialized to JSON.
    #[error("failed to serialize draw commands: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<TopologyError> for Error {
    fn from(err: TopologyError) -> Self {
        Self::Config(err.into())
    }
}

/// Result type used throughout layerviz.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::Opacity(1.5).to_string(),
            "connection opacity must be within [0, 1] (got 1.5)"
        );
        assert_eq!(
            ConfigError::NeuronRadius(-0.2).to_string(),
            "neuron radius must be >= 0 (got -0.2)"
        );
        assert!(ConfigError::FontSize(0.0).to_string().contains("font size"));
        assert!(ConfigError::Scale(0.0).to_string().contains("SVG scale"));
    }

    #[test]
    fn test_topology_error_is_transparent() {
        let err = ConfigError::from(TopologyError::Empty);
        assert_eq!(err.to_string(), "topology needs at least one layer");
    }

    #[test]
    fn test_error_from_topology() {
        let err = Error::from(TopologyError::InvalidSpacing(0.0));
        assert!(matches!(
            err,
            Error::Config(ConfigError::Topology(TopologyError::InvalidSpacing(_)))
        ));
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn test_export_error_display() {
        let err = ExportError {
            path: PathBuf::from("/nope/net.svg"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nope/net.svg"));
        assert!(msg.contains("no such directory"));

        let wrapped = Error::from(err);
        assert!(matches!(wrapped, Error::Export(_)));
        assert!(wrapped.to_string().starts_with("export failed"));
    }
}
