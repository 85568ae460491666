use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use merec_aroman::adapters::{exporter_for, reader_for};
use merec_aroman::application::{EvaluateDecisionCommand, EvaluateDecisionHandler};
use merec_aroman::config::{AppConfig, LoggingConfig};
use merec_aroman::domain::foundation::DomainError;
use merec_aroman::ports::{ExportFormat, ImportError, ImportFormat};

/// Rank alternatives with MEREC weights and AROMAN scores
#[derive(Parser, Debug)]
#[command(name = "merec-aroman")]
#[command(version, about = "Rank alternatives with MEREC weights and AROMAN scores", long_about = None)]
struct Args {
    /// Decision matrix file (.csv, .json, .yaml or .yml)
    input: PathBuf,

    /// Report format: table or json
    #[arg(short, long)]
    format: Option<ExportFormat>,

    /// Decimals for sums and scores in table output
    #[arg(short, long)]
    precision: Option<usize>,

    /// Treat the named CSV column as a cost criterion (repeatable)
    #[arg(short, long = "cost", value_name = "NAME")]
    cost: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {}", message);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("Error: failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&args, &config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Environment configuration with command line overrides applied.
fn load_config(args: &Args) -> Result<AppConfig, String> {
    let mut config = AppConfig::load().map_err(|e| e.to_string())?;
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(precision) = args.precision {
        config.output.precision = precision;
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    // Reports go to stdout, so logs use stderr.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}

fn run(args: &Args, config: &AppConfig) -> Result<String, DomainError> {
    info!("Starting merec-aroman v{}", env!("CARGO_PKG_VERSION"));

    let format = ImportFormat::from_path(&args.input)?;
    debug!(input = %args.input.display(), ?format, "Reading decision problem");

    let mut file = File::open(&args.input).map_err(ImportError::from)?;
    let problem = reader_for(format, &args.cost).read_problem(&mut file)?;

    let result = EvaluateDecisionHandler::new().handle(EvaluateDecisionCommand { problem })?;

    let exporter = exporter_for(
        config.output.format,
        config.output.precision,
        config.output.pretty_json,
    );
    Ok(exporter.export(&result.report)?)
}
