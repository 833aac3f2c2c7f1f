use crate::domain::model::{ConversionJob, ConversionResult, Dataset, Record};
use crate::domain::ports::Pipeline;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::Validate;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Parses a UTF-8 CSV file with a header row into a [`Dataset`]. Cell text
/// is kept verbatim.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConvertError::not_found(path));
        }
        Err(e) => return Err(e.into()),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let fields: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    tracing::debug!("Header of {}: {:?}", path.display(), fields);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(Record::from_row(&fields, row.iter()));
    }

    Ok(Dataset { fields, records })
}

/// Renders records as a 2-space indented JSON array. Non-ASCII text is
/// written as-is.
pub fn to_json_string(dataset: &Dataset) -> Result<String> {
    Ok(serde_json::to_string_pretty(&dataset.records)?)
}

/// Overwrites `path` with the JSON form of `dataset`.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &dataset.records)?;
    writer.flush()?;
    Ok(())
}

/// Reads the job's CSV input and writes its JSON output.
pub struct CsvJsonPipeline<'a> {
    job: &'a ConversionJob,
}

impl<'a> CsvJsonPipeline<'a> {
    pub fn new(job: &'a ConversionJob) -> Self {
        Self { job }
    }
}

impl Pipeline for CsvJsonPipeline<'_> {
    fn extract(&self) -> Result<Dataset> {
        tracing::debug!("Reading {}", self.job.input.display());
        read_dataset(&self.job.input)
    }

    fn load(&self, dataset: &Dataset) -> Result<()> {
        write_dataset(&self.job.output, dataset)?;
        tracing::debug!("Wrote {}", self.job.output.display());
        Ok(())
    }
}

/// Extracts, validates the job, then loads. Nothing is written unless the
/// extract step succeeded.
pub fn run_pipeline<P: Pipeline>(job: &ConversionJob, pipeline: &P) -> Result<ConversionResult> {
    let dataset = pipeline.extract()?;
    tracing::debug!("Parsed {} records", dataset.len());

    job.validate()?;
    pipeline.load(&dataset)?;

    Ok(ConversionResult::succeeded(job.clone(), &dataset))
}

pub fn try_convert(job: &ConversionJob) -> Result<ConversionResult> {
    run_pipeline(job, &CsvJsonPipeline::new(job))
}

/// Runs one job and prints its status. Failures go to stderr and never
/// escape as errors.
pub fn convert_job(job: &ConversionJob) -> ConversionResult {
    match try_convert(job) {
        Ok(result) => {
            println!(
                "✓ Successfully converted {} to {}",
                job.input.display(),
                job.output.display()
            );
            println!("  - Records converted: {}", result.record_count);
            if !result.fields.is_empty() {
                println!("  - Fields: {}", result.fields.join(", "));
            }
            tracing::info!(
                "Converted {} ({} records)",
                job.input.display(),
                result.record_count
            );
            result
        }
        Err(e) => {
            match &e {
                ConvertError::NotFound { path } => {
                    eprintln!("✗ Error: File not found: {}", path.display());
                }
                other => {
                    eprintln!("✗ Error converting {}: {}", job.input.display(), other);
                }
            }
            tracing::error!(
                "❌ Conversion of {} failed ({:?}): {}",
                job.input.display(),
                e.kind(),
                e
            );
            ConversionResult::failed(job.clone(), &e)
        }
    }
}

pub fn convert(input: &Path, output: &Path) -> bool {
    convert_job(&ConversionJob::new(input, output)).success
}
