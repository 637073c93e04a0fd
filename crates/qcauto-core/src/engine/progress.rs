use super::runner::RunStatus;
use crate::core::templates::Program;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum JobEvent {
    Prepared { input_file: PathBuf },
    RunStarted { program: Program },
    RunFinished { status: RunStatus },
    Finalized { energy: Option<f64> },
}

pub type ProgressCallback<'a> = Box<dyn Fn(JobEvent) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: JobEvent) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
