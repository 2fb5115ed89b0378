//! End-to-end run: layout, render, count, export.

use layerviz_core::{DrawCommand, RecordingCanvas, SvgOptions};
use layerviz_layout::{compute_layout, Layout, Topology};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::DiagramConfig;
use crate::error::{Error, ExportError, Result};
use crate::export::{self, SceneDump};
use crate::render::{render, RenderStats};
use crate::sampler::Sampler;
use crate::style::RenderStyle;

/// A diagram rendered in memory, ready to be exported.
#[derive(Debug)]
pub struct Diagram {
    topology: Topology,
    layout: Layout,
    canvas: RecordingCanvas,
    stats: RenderStats,
    parameters: usize,
}

impl Diagram {
    /// Lay out and render `topology` with `style`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the style or layer spacing is invalid.
    /// Nothing is drawn in that case.
    pub fn render<S: Sampler + ?Sized>(
        topology: &Topology,
        style: &RenderStyle,
        sampler: &mut S,
    ) -> Result<Self> {
        style.validate()?;
        let layout = compute_layout(topology, style.layer_spacing)?;

        let mut canvas = RecordingCanvas::new();
        let stats = render(&mut canvas, &layout, style, sampler);
        let parameters = topology.parameter_count();
        debug!(topology = %topology, parameters, "diagram ready");

        Ok(Self {
            topology: topology.clone(),
            layout,
            canvas,
            stats,
            parameters,
        })
    }

    /// Topology the diagram was built from.
    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Neuron positions.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Draw commands in paint order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        self.canvas.commands()
    }

    /// What the render pass drew.
    #[must_use]
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Learnable parameters of the topology.
    #[must_use]
    pub fn parameters(&self) -> usize {
        self.parameters
    }

    /// Human-readable parameter summary line.
    #[must_use]
    pub fn summary(&self) -> String {
        parameter_summary(self.parameters)
    }

    /// Write the diagram as SVG.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the file cannot be written.
    pub fn write_svg(
        &self,
        path: &Path,
        options: &SvgOptions,
    ) -> std::result::Result<(), ExportError> {
        export::write_svg(path, self.commands(), options)
    }

    /// Write the topology, parameter count and draw commands as JSON.
    ///
    /// # Errors
    ///
    /// Fails if serialization or the file write fails.
    pub fn write_commands_json(&self, path: &Path) -> Result<()> {
        export::write_json(
            path,
            &SceneDump {
                topology: &self.topology,
                parameters: self.parameters,
                commands: self.commands(),
            },
        )
    }
}

/// Outcome of [`run`].
#[derive(Debug)]
pub struct RunReport {
    /// Learnable parameters of the topology
    pub parameters: usize,
    /// What the render pass drew
    pub stats: RenderStats,
    /// SVG written, if any
    pub svg: Option<PathBuf>,
    /// Exports that could not be written, in the order they were attempted
    pub failures: Vec<Error>,
}

impl RunReport {
    /// Human-readable parameter summary line.
    #[must_use]
    pub fn summary(&self) -> String {
        parameter_summary(self.parameters)
    }

    /// Whether every requested export was written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

fn parameter_summary(parameters: usize) -> String {
    format!("Total number of parameters in the network: {parameters}")
}

/// Render `config` and write every requested artifact.
///
/// Rendering completes in memory before anything touches the filesystem.
/// Every requested export is attempted even if an earlier one fails; the
/// failures are collected in [`RunReport::failures`].
///
/// # Errors
///
/// Returns [`Error::Config`] if the configuration is invalid. Nothing is
/// rendered or written in that case.
pub fn run<S: Sampler + ?Sized>(config: &DiagramConfig, sampler: &mut S) -> Result<RunReport> {
    config.validate()?;
    let diagram = Diagram::render(&config.topology, &config.style, sampler)?;

    let mut failures = Vec::new();
    if let Some(path) = &config.commands_json {
        if let Err(e) = diagram.write_commands_json(path) {
            warn!(path = %path.display(), error = %e, "command dump not written");
            failures.push(e);
        }
    }
    let mut svg = None;
    if let Some(path) = &config.output {
        match diagram.write_svg(path, &config.svg) {
            Ok(()) => svg = Some(path.clone()),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "SVG not written");
                failures.push(e.into());
            }
        }
    } else {
        info!("no output path given; SVG not written");
    }

    Ok(RunReport {
        parameters: diagram.parameters(),
        stats: diagram.stats(),
        svg,
        failures,
    })
}
