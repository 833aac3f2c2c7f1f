#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::model::ConversionJob;
use crate::utils::error::{ConvertError, Result};
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Input and output file names, converted in this order.
pub const DEFAULT_JOBS: [(&str, &str); 2] = [
    ("dataset-qual.csv", "dataset-qual.json"),
    ("dataset-time-series.csv", "dataset-time-series.json"),
];

/// The job table resolved against `base_dir`.
pub fn default_jobs(base_dir: &Path) -> Vec<ConversionJob> {
    DEFAULT_JOBS
        .iter()
        .map(|(input, output)| ConversionJob::new(*input, *output).resolve(base_dir))
        .collect()
}

/// Directory holding the running executable. Job paths are relative to it,
/// not to the working directory.
pub fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        ConvertError::validation(format!(
            "executable path has no parent directory: {}",
            exe.display()
        ))
    })
}
