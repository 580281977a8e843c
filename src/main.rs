//! PanelCut command-line interface

use anyhow::Context;
use clap::{Parser, Subcommand};
use panelcut::report::render_summary;
use panelcut::{init_logging, load_config, CuttingRequest, PanelOptimizer, BUILD_DATE, VERSION};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "panelcut")]
#[command(about = "Cutting layout optimizer for rectangular panels on stock boards")]
#[command(version)]
struct Cli {
    /// Config file (.toml or .json); defaults to the platform config directory
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimize a cutting request and print the result as JSON
    Optimize {
        /// Path to the JSON cutting request
        request: PathBuf,

        /// Board width in mm
        #[arg(long)]
        board_width: Option<f64>,

        /// Board length in mm
        #[arg(long)]
        board_length: Option<f64>,

        /// Saw kerf in mm; a kerf in the request still takes precedence
        #[arg(long)]
        kerf: Option<f64>,

        /// Output file for the result (JSON); stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print a human-readable summary to stderr
        #[arg(short, long)]
        summary: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;
    info!("PanelCut {} (built {})", VERSION, BUILD_DATE);

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Optimize {
            request,
            board_width,
            board_length,
            kerf,
            output,
            summary,
        } => {
            if let Some(width) = board_width {
                config.board.width_mm = width;
            }
            if let Some(length) = board_length {
                config.board.length_mm = length;
            }
            if let Some(kerf) = kerf {
                config.board.kerf_mm = kerf;
            }
            config.validate().context("Invalid board options")?;

            let cutting_request = CuttingRequest::load_from_file(&request)
                .with_context(|| format!("Failed to read request {}", request.display()))?;

            let optimizer = PanelOptimizer::new(config.board_parameters())?
                .with_limits(config.validation_limits());
            let result = optimizer
                .run(&cutting_request)
                .with_context(|| format!("Request {} rejected", request.display()))?;
            let json = result.to_json()?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Wrote result to {}", path.display());
                }
                None => println!("{}", json),
            }

            if summary {
                eprint!(
                    "{}",
                    render_summary(&result, config.display.measurement_system)
                );
            }
        }
        Commands::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}
