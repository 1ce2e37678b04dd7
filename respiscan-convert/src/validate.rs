use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};
use crate::report::Reporter;
use std::io::Write;
use tracing::warn;

/// Fail with [`ConvertError::MissingInput`] unless the configured model
/// file exists under the working directory.
pub fn check_input<W: Write>(
    config: &ConvertConfig,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    if config.resolved_input().exists() {
        return Ok(());
    }
    warn!(path = %config.input.display(), "input model missing");
    reporter.missing_input(&config.input, &config.workdir)?;
    Err(ConvertError::MissingInput {
        path: config.input.clone(),
    })
}
