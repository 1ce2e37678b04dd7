use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to install {package}: {reason}")]
    InstallFailed { package: String, reason: String },
    #[error("source file '{}' not found", .path.display())]
    MissingInput { path: PathBuf },
    #[error("converter failed with status {code:?}")]
    ConversionFailed { code: Option<i32>, command: String },
    #[error("could not launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Process exit code the binary should terminate with.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::InstallFailed { .. }
            | ConvertError::MissingInput { .. }
            | ConvertError::ConversionFailed { .. }
            | ConvertError::Spawn { .. }
            | ConvertError::Io(_) => 1,
        }
    }
}

pub(crate) fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(c) => format!("error code {c}"),
        None => "terminated by a signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
