//! Makes sure the Python converter package is importable, installing it
//! with pip when it is not.

use crate::command::CommandSpec;
use crate::error::{describe_code, ConvertError, Result};
use crate::report::Reporter;
use crate::runner::CommandRunner;
use std::io::Write;
use tracing::{debug, info, warn};

/// What the guard had to do before conversion could start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyStatus {
    AlreadyInstalled,
    Installed,
    Skipped,
}

/// `<python> -c "import <module>"`, with the ImportError traceback
/// discarded.
pub fn probe_command(python: &str, module: &str) -> CommandSpec {
    CommandSpec::new(python)
        .args(["-c".to_string(), format!("import {module}")])
        .quiet()
}

/// `<python> -m pip install <package> --quiet`
pub fn install_command(python: &str, package: &str) -> CommandSpec {
    CommandSpec::new(python).args(["-m", "pip", "install", package, "--quiet"])
}

/// Probe for `module`; if it cannot be imported, install `packages` in
/// order. The first failed install aborts the sequence.
pub fn ensure_dependency<R, W>(
    runner: &mut R,
    reporter: &mut Reporter<W>,
    python: &str,
    module: &str,
    packages: &[String],
) -> Result<DependencyStatus>
where
    R: CommandRunner + ?Sized,
    W: Write,
{
    let probe = probe_command(python, module);
    let present = match runner.run(&probe) {
        Ok(code) => code == Some(0),
        Err(err) => {
            debug!(error = %err, "import probe could not start");
            false
        }
    };
    if present {
        info!(module, "dependency present");
        reporter.already_installed(module)?;
        return Ok(DependencyStatus::AlreadyInstalled);
    }

    reporter.dependency_missing(module)?;
    for package in packages {
        reporter.installing(package)?;
        let cmd = install_command(python, package);
        let reason = match runner.run(&cmd) {
            Ok(Some(0)) => continue,
            Ok(code) => format!("`{cmd}` exited with {}", describe_code(code)),
            Err(err) => format!("`{cmd}` could not start: {err}"),
        };
        warn!(package = package.as_str(), %reason, "install failed");
        reporter.install_failed(&reason, packages)?;
        return Err(ConvertError::InstallFailed {
            package: package.clone(),
            reason,
        });
    }
    info!(?packages, "dependencies installed");
    Ok(DependencyStatus::Installed)
}
