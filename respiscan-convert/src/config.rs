//! Run configuration.
//!
//! Defaults reproduce the fixed layout of the RespiScan web app: the Keras
//! model sits next to the app and the graph model is served from
//! `public/AI`.

use std::path::{Component, Path, PathBuf};

pub const DEFAULT_MODEL_PATH: &str = "RespiScan_Final_Model.h5";
pub const DEFAULT_OUTPUT_DIR: &str = "public/AI";
/// 4 MiB weight shards.
pub const DEFAULT_SHARD_SIZE: u64 = 4_194_304;
pub const CONVERTER_MODULE: &str = "tensorflowjs.converters.converter";
pub const DEPENDENCY_MODULE: &str = "tensorflowjs";
pub const REQUIRED_PACKAGES: [&str; 2] = ["tensorflowjs", "h5py"];

/// Interpreter used when none is configured.
pub fn default_python() -> &'static str {
    if cfg!(windows) {
        "python"
    } else {
        "python3"
    }
}

/// Everything a conversion run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub python: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub workdir: PathBuf,
    pub input_format: String,
    pub output_format: String,
    pub shard_size: u64,
    pub dependency_module: String,
    pub packages: Vec<String>,
    pub skip_install: bool,
    pub dry_run: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            python: default_python().to_string(),
            input: PathBuf::from(DEFAULT_MODEL_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            workdir: PathBuf::from("."),
            input_format: "keras".to_string(),
            output_format: "tfjs_graph_model".to_string(),
            shard_size: DEFAULT_SHARD_SIZE,
            dependency_module: DEPENDENCY_MODULE.to_string(),
            packages: REQUIRED_PACKAGES.iter().map(|p| p.to_string()).collect(),
            skip_install: false,
            dry_run: false,
        }
    }
}

impl ConvertConfig {
    /// Location of the input model as seen from this process.
    pub fn resolved_input(&self) -> PathBuf {
        self.workdir.join(&self.input)
    }

    /// Absolute output directory, computed lexically; it need not exist.
    pub fn absolute_output(&self) -> std::io::Result<PathBuf> {
        let joined = std::path::absolute(&self.workdir)?.join(&self.output);
        Ok(normalize(&joined))
    }
}

/// Collapse `.` and `..` without touching the filesystem. `..` at the root
/// stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            Component::RootDir | Component::Prefix(_) | Component::Normal(_) => {
                out.push(component)
            }
        }
    }
    out
}
