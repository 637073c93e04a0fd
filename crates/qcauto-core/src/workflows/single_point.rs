use crate::engine::error::JobError;
use crate::engine::job::ChemistryJob;
use crate::engine::progress::{JobEvent, ProgressReporter};
use std::path::Path;
use tracing::{info, instrument};

/// Runs `job` end to end with its own runner and returns the extracted energy.
///
/// `Ok(None)` means the runner did not report success (for example the default
/// null runner), which is not an error.
///
/// # Errors
///
/// Propagates any error from preparing the input, running the program or reading the
/// output; see [`JobError`].
#[instrument(skip_all, name = "single_point_workflow", fields(job = %job.name))]
pub fn run(job: &mut ChemistryJob, reporter: &ProgressReporter) -> Result<Option<f64>, JobError> {
    job.prepare()?;
    let invocation = job.invocation()?;
    reporter.report(JobEvent::Prepared {
        input_file: job.input_file().map(Path::to_path_buf).unwrap_or_default(),
    });

    info!("Running {} for job '{}'.", invocation.program, job.name);
    reporter.report(JobEvent::RunStarted {
        program: invocation.program,
    });
    let status = job.runner().run(&invocation)?;
    job.record_run(status);
    reporter.report(JobEvent::RunFinished { status });

    let energy = job.finalize()?;
    reporter.report(JobEvent::Finalized { energy });

    match energy {
        Some(value) => info!("Job '{}' complete. Energy: {value}", job.name),
        None => info!("Job '{}' complete without a result ({status:?}).", job.name),
    }
    Ok(energy)
}
