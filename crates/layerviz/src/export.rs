//! File export of a rendered diagram.

use layerviz_core::{to_svg, DrawCommand, SvgOptions};
use layerviz_layout::Topology;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{Error, ExportError};

/// Serializable snapshot of a rendered diagram.
#[derive(Debug, Serialize)]
pub struct SceneDump<'a> {
    /// Neurons per layer
    pub topology: &'a Topology,
    /// Learnable parameters of the topology
    pub parameters: usize,
    /// Draw commands in paint order
    pub commands: &'a [DrawCommand],
}

/// Write `commands` as an SVG document to `path`.
///
/// # Errors
///
/// Returns [`ExportError`] if the file cannot be written.
pub fn write_svg(
    path: &Path,
    commands: &[DrawCommand],
    options: &SvgOptions,
) -> Result<(), ExportError> {
    let svg = to_svg(commands, options);
    fs::write(path, svg.as_bytes()).map_err(|source| ExportError {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = svg.len(), "wrote SVG");
    Ok(())
}

/// Write a [`SceneDump`] as pretty-printed JSON to `path`.
///
/// # Errors
///
/// Returns [`Error::Serialize`] if serialization fails and [`Error::Export`]
/// if the file cannot be written.
pub fn write_json(path: &Path, scene: &SceneDump<'_>) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(scene)?;
    fs::write(path, json.as_bytes()).map_err(|source| ExportError {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), commands = scene.commands.len(), "wrote draw commands");
    Ok(())
}
