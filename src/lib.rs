pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{default_jobs, program_dir, DEFAULT_JOBS};
pub use crate::core::converter::{
    convert, convert_job, read_dataset, run_pipeline, try_convert, write_dataset, CsvJsonPipeline,
};
pub use crate::core::orchestrator::{run, run_jobs};
pub use domain::ports::Pipeline;
pub use domain::model::{ConversionJob, ConversionResult, ConversionSummary, Dataset, Record};
pub use utils::error::{ConvertError, ErrorKind, Result};
pub use utils::monitor::RunMonitor;
