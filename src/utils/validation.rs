use crate::domain::model::ConversionJob;
use crate::utils::error::{ConvertError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(ConvertError::validation(format!(
            "{}: path cannot be empty",
            field_name
        )));
    }

    if path.to_string_lossy().contains('\0') {
        return Err(ConvertError::validation(format!(
            "{}: path contains null bytes: {}",
            field_name,
            path.display()
        )));
    }

    Ok(())
}

pub fn validate_distinct(input: &Path, output: &Path) -> Result<()> {
    if input == output {
        return Err(ConvertError::validation(format!(
            "input and output are the same file: {}",
            input.display()
        )));
    }
    Ok(())
}

/// File names are not checked; any readable text file converts.
impl Validate for ConversionJob {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        validate_distinct(&self.input, &self.output)
    }
}
