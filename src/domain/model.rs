use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::utils::error::ConvertError;

/// One CSV data row, keyed by header name in header order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    /// Pairs `row` with `headers`. Missing trailing cells become empty
    /// strings; cells past the last header are dropped. A repeated header
    /// keeps its first position and takes the later value.
    pub fn from_row<'a>(headers: &[String], row: impl IntoIterator<Item = &'a str>) -> Self {
        let mut cells = row.into_iter();
        let mut data = Map::with_capacity(headers.len());
        for header in headers {
            let cell = cells.next().unwrap_or_default();
            data.insert(header.clone(), Value::String(cell.to_string()));
        }
        Self { data }
    }

    pub fn field_names(&self) -> Vec<String> {
        self.data.keys().cloned().collect()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.data.get(field).and_then(Value::as_str)
    }
}

/// Rows of one CSV file in file order, plus its header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub fields: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConversionJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Joins both paths onto `base_dir`.
    pub fn resolve(&self, base_dir: &Path) -> Self {
        Self {
            input: base_dir.join(&self.input),
            output: base_dir.join(&self.output),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub job: ConversionJob,
    pub success: bool,
    pub record_count: usize,
    /// Field names of the first record; empty when there were no records.
    pub fields: Vec<String>,
    pub error: Option<String>,
}

impl ConversionResult {
    pub fn succeeded(job: ConversionJob, dataset: &Dataset) -> Self {
        Self {
            job,
            success: true,
            record_count: dataset.len(),
            fields: dataset
                .records
                .first()
                .map(Record::field_names)
                .unwrap_or_default(),
            error: None,
        }
    }

    pub fn failed(job: ConversionJob, error: &ConvertError) -> Self {
        Self {
            job,
            success: false,
            record_count: 0,
            fields: Vec::new(),
            error: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConversionSummary {
    pub results: Vec<ConversionResult>,
}

impl ConversionSummary {
    pub fn push(&mut self, result: ConversionResult) {
        self.results.push(result);
    }

    pub fn successes(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.successes() == self.total()
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_succeeded() {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_record_keeps_header_order() {
        let record = Record::from_row(&headers(&["zeta", "alpha", "mid"]), ["1", "2", "3"]);
        assert_eq!(record.field_names(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(record.get("alpha"), Some("2"));
    }

    #[test]
    fn test_short_row_fills_empty_strings() {
        let record = Record::from_row(&headers(&["a", "b", "c"]), ["1"]);
        assert_eq!(record.get("a"), Some("1"));
        assert_eq!(record.get("b"), Some(""));
        assert_eq!(record.get("c"), Some(""));
    }

    #[test]
    fn test_long_row_drops_extra_cells() {
        let record = Record::from_row(&headers(&["a", "b"]), ["1", "2", "3", "4"]);
        assert_eq!(record.data.len(), 2);
        assert_eq!(record.get("b"), Some("2"));
    }

    #[test]
    fn test_duplicate_header_last_value_wins() {
        let record = Record::from_row(&headers(&["a", "b", "a"]), ["1", "2", "3"]);
        assert_eq!(record.field_names(), vec!["a", "b"]);
        assert_eq!(record.get("a"), Some("3"));
    }

    #[test]
    fn test_resolve_joins_base_dir() {
        let job = ConversionJob::new("in.csv", "out.json").resolve(Path::new("/opt/app"));
        assert_eq!(job.input, PathBuf::from("/opt/app/in.csv"));
        assert_eq!(job.output, PathBuf::from("/opt/app/out.json"));
    }

    #[test]
    fn test_summary_exit_code() {
        let job = ConversionJob::new("a.csv", "a.json");
        let mut summary = ConversionSummary::default();
        summary.push(ConversionResult::succeeded(job.clone(), &Dataset::default()));
        assert_eq!(summary.exit_code(), 0);

        summary.push(ConversionResult::failed(job, &ConvertError::not_found("a.csv")));
        assert_eq!(summary.successes(), 1);
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.exit_code(), 1);
    }

    #[test]
    fn test_empty_summary_succeeds() {
        assert!(ConversionSummary::default().all_succeeded());
    }
}
