//! Guard, validate, convert, report: the whole run in sequence.

use crate::config::ConvertConfig;
use crate::convert::ConversionPlan;
use crate::error::{ConvertError, Result};
use crate::guard::{ensure_dependency, DependencyStatus};
use crate::report::Reporter;
use crate::runner::CommandRunner;
use crate::validate::check_input;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Terminal success states of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted {
        dependency: DependencyStatus,
        output: PathBuf,
    },
    DryRun { command: String },
}

/// Execute one conversion. Every failure has already been reported on
/// `reporter` by the time it is returned; callers only map it to an exit
/// code.
pub fn run<R, W>(
    config: &ConvertConfig,
    runner: &mut R,
    reporter: &mut Reporter<W>,
) -> Result<Outcome>
where
    R: CommandRunner + ?Sized,
    W: Write,
{
    let dependency = if config.skip_install || config.dry_run {
        DependencyStatus::Skipped
    } else {
        ensure_dependency(
            runner,
            reporter,
            &config.python,
            &config.dependency_module,
            &config.packages,
        )?
    };

    check_input(config, reporter)?;

    let plan = ConversionPlan::from_config(config);
    if config.dry_run {
        let cmd = plan.command();
        reporter.dry_run(&cmd)?;
        return Ok(Outcome::DryRun {
            command: cmd.display_line(),
        });
    }

    reporter.converting(&plan.input, &plan.output, &plan.output_format)?;
    match plan.execute(runner) {
        Ok(()) => {
            let output = config.absolute_output()?;
            info!(output = %output.display(), "conversion finished");
            reporter.success(&output)?;
            Ok(Outcome::Converted { dependency, output })
        }
        Err(err) => {
            match &err {
                ConvertError::ConversionFailed { code, command } => {
                    reporter.conversion_failed(*code, command)?
                }
                ConvertError::Spawn { command, source } => reporter.launch_failed(source, command)?,
                _ => {}
            }
            Err(err)
        }
    }
}
