//! Local network gateway building block CLI
//!
//! Entry point for the `gateway-block` command-line tool.

use clap::{Parser, Subcommand};
use gateway_block::logging::init_logging;
use gateway_block::{process, Parameters, TransformError};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "gateway-block")]
#[command(about = "Local network gateway building block", version)]
struct Cli {
    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a deployment parameters document
    Transform {
        /// Parameters file (JSON, or TOML by extension)
        #[arg(long, short = 'p')]
        parameters: PathBuf,

        /// Defaults file layered over defaults embedded in the parameters
        #[arg(long, short = 'd')]
        defaults: Option<PathBuf>,

        /// Write the document here instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Emit canonical (RFC 8785) JSON
        #[arg(long)]
        canonical: bool,
    },

    /// Report every violation without building a document
    Validate {
        /// Parameters file (JSON, or TOML by extension)
        #[arg(long, short = 'p')]
        parameters: PathBuf,

        /// Defaults file layered over defaults embedded in the parameters
        #[arg(long, short = 'd')]
        defaults: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Transform {
            parameters,
            defaults,
            output,
            canonical,
        } => run_transform(parameters, defaults, output, canonical),
        Commands::Validate { parameters, defaults } => run_validate(parameters, defaults),
    }
}

fn load_parameters(path: &Path, defaults: Option<&Path>) -> Parameters {
    match Parameters::load(path, defaults) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error loading parameters: {}", e);
            process::exit(1);
        }
    }
}

fn run_transform(
    parameters_path: PathBuf,
    defaults_path: Option<PathBuf>,
    output: Option<PathBuf>,
    canonical: bool,
) {
    let parameters = load_parameters(&parameters_path, defaults_path.as_deref());

    let document = match process(&parameters) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let json = match document.to_json(canonical) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = fs::write(&path, json) {
                eprintln!("Error writing {}: {}", path.display(), e);
                process::exit(1);
            }
            tracing::info!(path = %path.display(), "wrote deployment document");
        }
        None => println!("{}", json),
    }
}

fn run_validate(parameters_path: PathBuf, defaults_path: Option<PathBuf>) {
    let parameters = load_parameters(&parameters_path, defaults_path.as_deref());

    let mut report = Vec::new();
    for (index, result) in parameters.transform_each().into_iter().enumerate() {
        if let Err(e) = result {
            report.push(failure_entry(index, &e));
        }
    }

    if report.is_empty() {
        println!("Settings valid: {}", parameters_path.display());
        return;
    }

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing output: {}", e),
    }
    process::exit(1);
}

fn failure_entry(index: usize, error: &TransformError) -> serde_json::Value {
    let stage = match error {
        TransformError::BuildingBlock(_) => "buildingBlockSettings",
        TransformError::Settings(_) => "settings",
        _ => "transform",
    };
    match error.violations() {
        Some(violations) => serde_json::json!({
            "index": index,
            "stage": stage,
            "violations": violations,
        }),
        None => serde_json::json!({
            "index": index,
            "stage": stage,
            "message": error.to_string(),
        }),
    }
}
