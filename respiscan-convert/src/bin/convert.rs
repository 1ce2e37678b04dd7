//! Convert the RespiScan Keras model into a TensorFlow.js graph model.
//!
//! Installs the `tensorflowjs` Python package when needed, checks that the
//! source model exists and runs the converter, printing a manual retry
//! command if it fails.

use anyhow::Result;
use clap::Parser;
use respiscan_convert::config::{
    default_python, DEFAULT_MODEL_PATH, DEFAULT_OUTPUT_DIR, DEFAULT_SHARD_SIZE,
};
use respiscan_convert::{run, ConvertConfig, Reporter, SystemRunner};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "respiscan-convert", version, about)]
struct Args {
    /// Python interpreter used for pip and the converter
    #[arg(long, env = "RESPISCAN_PYTHON", default_value = default_python())]
    python: String,

    /// Keras model to convert
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    input: PathBuf,

    /// Directory that receives model.json and the weight shards
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Maximum size of each weight shard in bytes
    #[arg(long, default_value_t = DEFAULT_SHARD_SIZE)]
    shard_size: u64,

    /// Directory the paths are relative to
    #[arg(short = 'C', long, default_value = ".")]
    workdir: PathBuf,

    /// Do not check for or install the tensorflowjs package
    #[arg(long)]
    skip_install: bool,

    /// Print the converter command without running anything
    #[arg(long)]
    dry_run: bool,

    /// Log filter (RUST_LOG syntax); defaults to $RUST_LOG, then "warn"
    #[arg(long)]
    log: Option<String>,
}

impl From<Args> for ConvertConfig {
    fn from(args: Args) -> Self {
        Self {
            python: args.python,
            input: args.input,
            output: args.output,
            workdir: args.workdir,
            shard_size: args.shard_size,
            skip_install: args.skip_install,
            dry_run: args.dry_run,
            ..ConvertConfig::default()
        }
    }
}

/// Application entry point for converting the model.
pub struct ConvertApp {
    config: ConvertConfig,
}

impl ConvertApp {
    /// Create a new conversion application.
    pub fn new(config: ConvertConfig) -> Self {

        Self { config }
    }

    /// Execute the conversion and return the process exit code.
    pub fn run(&self) -> i32 {

        let stdout = io::stdout();
        let mut reporter = Reporter::new(stdout.lock());
        match run(&self.config, &mut SystemRunner, &mut reporter) {
            Ok(outcome) => {
                tracing::debug!(?outcome, "done");
                0
            }
            Err(err) => {
                tracing::error!(error = %err, "conversion aborted");
                err.exit_code()
            }
        }
    }
}

fn init_logging(filter: Option<&str>) -> Result<()> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {

    let args = Args::parse();
    init_logging(args.log.as_deref())?;
    let app = ConvertApp::new(args.into());
    let code = app.run();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())

}
