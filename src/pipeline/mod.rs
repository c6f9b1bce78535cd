//! Batch pipeline over configured algorithms.

mod coordinator;
mod discovery;

pub use coordinator::{
    AlgorithmJob, AlgorithmOutcome, AlgorithmReport, BatchReport, InputSource, run_algorithm,
    run_batch,
};
pub use discovery::{is_measurement_file, newest_csv};
