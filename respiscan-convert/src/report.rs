//! Human-readable console messages.
//!
//! Nothing here is meant to be parsed; the lines mirror what an operator
//! running the conversion by hand expects to see.

use crate::command::CommandSpec;
use std::io::Write;
use std::path::Path;

/// Writes status lines for every step of a run.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn already_installed(&mut self, module: &str) -> std::io::Result<()> {
        writeln!(self.out, "✅ {module} is already installed.")
    }

    pub fn dependency_missing(&mut self, module: &str) -> std::io::Result<()> {
        writeln!(self.out, "⚠️ {module} not found. Attempting to auto-install...")
    }

    pub fn installing(&mut self, package: &str) -> std::io::Result<()> {
        writeln!(self.out, "Installing {package}...")
    }

    /// Install failure plus the command the user should run instead.
    pub fn install_failed(&mut self, cause: &str, packages: &[String]) -> std::io::Result<()> {
        writeln!(self.out, "❌ Failed to install packages: {cause}")?;
        writeln!(self.out, "👉 Please try running: pip install {}", packages.join(" "))
    }

    pub fn missing_input(&mut self, path: &Path, workdir: &Path) -> std::io::Result<()> {
        if workdir == Path::new(".") {
            writeln!(
                self.out,
                "❌ Error: Source file '{}' not found in current directory!",
                path.display()
            )
        } else {
            writeln!(
                self.out,
                "❌ Error: Source file '{}' not found in '{}'!",
                path.display(),
                workdir.display()
            )
        }
    }

    pub fn converting(
        &mut self,
        input: &Path,
        output: &Path,
        format: &str,
    ) -> std::io::Result<()> {
        writeln!(
            self.out,
            "🚀 Converting '{}' to '{}' (Format: {format})...",
            input.display(),
            output.display()
        )
    }

    pub fn dry_run(&mut self, cmd: &CommandSpec) -> std::io::Result<()> {
        writeln!(self.out, "Dry run, not executing:")?;
        writeln!(self.out, "{cmd}")
    }

    pub fn success(&mut self, absolute_output: &Path) -> std::io::Result<()> {
        writeln!(self.out, "\n✅ Conversion SUCCESSFUL!")?;
        writeln!(self.out, "📂 Files saved to: {}", absolute_output.display())?;
        writeln!(self.out, "👉 Now refresh your browser (Ctrl+F5) to test.")
    }

    /// Converter exited unsuccessfully; echo the command for a manual retry.
    pub fn conversion_failed(&mut self, code: Option<i32>, command: &str) -> std::io::Result<()> {
        match code {
            Some(code) => writeln!(self.out, "\n❌ Conversion FAILED with error code {code}")?,
            None => writeln!(self.out, "\n❌ Conversion FAILED: terminated by a signal")?,
        }
        self.retry_hint(command)
    }

    pub fn launch_failed(&mut self, err: &std::io::Error, command: &str) -> std::io::Result<()> {
        writeln!(self.out, "\n❌ Could not launch converter: {err}")?;
        self.retry_hint(command)
    }

    fn retry_hint(&mut self, command: &str) -> std::io::Result<()> {
        writeln!(self.out, "Try running this command manually:")?;
        writeln!(self.out, "{command}")
    }
}
