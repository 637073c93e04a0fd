use super::energy::EnergyParseError;
use super::runner::RunnerError;
use crate::core::templates::TemplateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobError {
    #[error("Job has not been prepared; call `prepare` first")]
    NotPrepared,

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to extract the result from '{path}': {source}")]
    Parse {
        path: String,
        source: EnergyParseError,
    },

    #[error("Input rendering failed: {0}")]
    Template(#[from] TemplateError),

    #[error("Runner failed: {0}")]
    Runner(#[from] RunnerError),
}
