use crate::domain::model::Dataset;
use crate::utils::error::Result;

/// One conversion: pull a dataset from the source, push it to the sink.
pub trait Pipeline {
    fn extract(&self) -> Result<Dataset>;
    fn load(&self, dataset: &Dataset) -> Result<()>;
}
