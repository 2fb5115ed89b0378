//! layerviz CLI - draw a dense network topology and export it as SVG.

use clap::{ArgAction, Parser};
use layerviz::{run, ConfigError, DiagramConfig, RenderStyle, RngSampler, SvgOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Exit status for invalid input.
const EXIT_USAGE: u8 = 2;
/// Exit status when an output file could not be written.
const EXIT_EXPORT: u8 = 1;

#[derive(Parser, Debug)]
#[command(name = "layerviz")]
#[command(about = "Draw a schematic diagram of a dense neural network")]
#[command(
    after_help = "Example: layerviz 4 8 8 8 4 --neuron_radius 0.2 --arrow_alpha 0.5 --schicht_abstand 3 --fontsize 12 --show_weights --show_biases --output=testnet.svg"
)]
#[command(version)]
struct Cli {
    /// Number of neurons per layer
    #[arg(required = true, num_args = 1.., value_name = "LAYER_WIDTHS")]
    layer_widths: Vec<usize>,

    /// Neuron circle radius
    #[arg(long = "neuron_radius", default_value_t = 0.2)]
    neuron_radius: f32,

    /// Opacity of the connection lines (0 to 1)
    #[arg(long = "arrow_alpha", default_value_t = 0.5)]
    arrow_alpha: f32,

    /// Horizontal distance between layers
    #[arg(
        long = "schicht_abstand",
        visible_alias = "layer-spacing",
        default_value_t = 3,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    layer_spacing: u32,

    /// Font size for weight and bias labels
    #[arg(
        long = "fontsize",
        default_value_t = 8,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    font_size: u32,

    /// Label connections with illustrative weights
    #[arg(long = "show_weights")]
    show_weights: bool,

    /// Label neurons with illustrative biases
    #[arg(long = "show_biases")]
    show_biases: bool,

    /// Write the diagram to this SVG file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Seed for the illustrative values (random when unset)
    #[arg(long, env = "RANDOM_SEED")]
    seed: Option<u64>,

    /// SVG units per layout unit
    #[arg(long, default_value_t = 40.0)]
    scale: f32,

    /// Write the recorded draw commands as JSON to this file
    #[arg(long = "dump-commands", value_name = "PATH")]
    dump_commands: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn style(&self) -> RenderStyle {
        RenderStyle {
            neuron_radius: self.neuron_radius,
            connection_alpha: self.arrow_alpha,
            layer_spacing: self.layer_spacing as f32,
            font_size: self.font_size as f32,
            show_weights: self.show_weights,
            show_biases: self.show_biases,
        }
    }

    fn into_config(self) -> Result<DiagramConfig, ConfigError> {
        let style = self.style();
        let mut config = DiagramConfig::new(self.layer_widths)?
            .with_style(style)
            .with_svg_options(SvgOptions {
                scale: self.scale,
                ..SvgOptions::default()
            });
        config.output = self.output;
        config.commands_json = self.dump_commands;
        config.seed = self.seed;
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli, "parsed arguments");

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let mut sampler = RngSampler::from_seed_or_entropy(config.seed);
    let report = match run(&config, &mut sampler) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_USAGE);
        }
    };
    info!(
        topology = %config.topology,
        connections = report.stats.connections,
        neurons = report.stats.neurons,
        "rendered"
    );

    println!("{}", report.summary());

    if report.is_complete() {
        ExitCode::SUCCESS
    } else {
        for e in &report.failures {
            eprintln!("error: {e}");
        }
        ExitCode::from(EXIT_EXPORT)
    }
}
