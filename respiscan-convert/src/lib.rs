//! Library crate behind the `respiscan-convert` binary.
//!
//! Turns the trained Keras model into a TensorFlow.js graph model by
//! driving the Python `tensorflowjs` converter. Each step of the run lives
//! in its own module and returns a `Result`; the binary decides exit codes.

pub mod command;
pub mod config;
pub mod convert;
pub mod error;
pub mod guard;
pub mod pipeline;
pub mod report;
pub mod runner;
pub mod validate;

pub use command::CommandSpec;
pub use config::ConvertConfig;
pub use convert::ConversionPlan;
pub use error::{ConvertError, Result};
pub use guard::DependencyStatus;
pub use pipeline::{run, Outcome};
pub use report::Reporter;
pub use runner::{CommandRunner, SystemRunner};
