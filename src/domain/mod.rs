// Domain layer: records, datasets, per-job outcomes and the pipeline port. No I/O here.

pub mod model;
pub mod ports;
