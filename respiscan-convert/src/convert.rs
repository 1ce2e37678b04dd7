//! Building and running the `tensorflowjs` converter command.

use crate::command::CommandSpec;
use crate::config::{ConvertConfig, CONVERTER_MODULE};
use crate::error::{ConvertError, Result};
use crate::runner::CommandRunner;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Fixed-shape description of one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPlan {
    pub python: String,
    pub module: String,
    pub input_format: String,
    pub output_format: String,
    pub shard_size: u64,
    pub input: PathBuf,
    pub output: PathBuf,
    pub workdir: PathBuf,
}

impl ConversionPlan {
    pub fn from_config(config: &ConvertConfig) -> Self {
        Self {
            python: config.python.clone(),
            module: CONVERTER_MODULE.to_string(),
            input_format: config.input_format.clone(),
            output_format: config.output_format.clone(),
            shard_size: config.shard_size,
            input: config.input.clone(),
            output: config.output.clone(),
            workdir: config.workdir.clone(),
        }
    }

    /// The converter invocation. Paths are passed exactly as configured and
    /// resolved by the child relative to `workdir`.
    pub fn command(&self) -> CommandSpec {
        CommandSpec::new(self.python.as_str())
            .args(["-m", self.module.as_str()])
            .args(["--input_format", self.input_format.as_str()])
            .args(["--output_format", self.output_format.as_str()])
            .args(["--weight_shard_size_bytes".to_string(), self.shard_size.to_string()])
            .arg(self.input.to_string_lossy())
            .arg(self.output.to_string_lossy())
            .current_dir(self.workdir.as_path())
    }

    /// Run the converter and wait for it. Only a zero exit counts as success.
    pub fn execute<R: CommandRunner + ?Sized>(&self, runner: &mut R) -> Result<()> {
        let cmd = self.command();
        info!(
            input = %self.input.display(),
            output = %self.output.display(),
            "running converter"
        );
        debug!(command = %cmd);
        match runner.run(&cmd) {
            Ok(Some(0)) => Ok(()),
            Ok(code) => {
                warn!(?code, "converter failed");
                Err(ConvertError::ConversionFailed {
                    code,
                    command: cmd.display_line(),
                })
            }
            Err(source) => {
                warn!(error = %source, "converter could not start");
                Err(ConvertError::Spawn {
                    command: cmd.display_line(),
                    source,
                })
            }
        }
    }
}
