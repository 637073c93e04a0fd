use crate::core::templates::Program;
use std::ffi::OsString;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::{debug, info};

/// Everything a runner needs to execute one prepared job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: Program,
    /// Ordered command-line arguments; for every current job this is the input file.
    pub arguments: Vec<OsString>,
    /// Where the program's output is expected to end up.
    pub output_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Succeeded,
    Failed { code: Option<i32> },
    /// The runner deliberately executed nothing.
    Skipped,
}

impl RunStatus {
    pub fn is_success(self) -> bool {
        matches!(self, RunStatus::Succeeded)
    }
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Failed to launch '{executable}': {source}")]
    Spawn {
        executable: String,
        source: std::io::Error,
    },
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Executes an external program for a prepared job.
///
/// A runner only reports how the execution went; the caller records that outcome on
/// the job (see [`ChemistryJob::record_run`](super::job::ChemistryJob::record_run)).
pub trait Runner: fmt::Debug + Send + Sync {
    fn run(&self, invocation: &Invocation) -> Result<RunStatus, RunnerError>;
}

/// A runner that never executes anything. Jobs run through it are never successful.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRunner;

impl Runner for NullRunner {
    fn run(&self, invocation: &Invocation) -> Result<RunStatus, RunnerError> {
        debug!(
            "Null runner skipping {} with {} argument(s)",
            invocation.program,
            invocation.arguments.len()
        );
        Ok(RunStatus::Skipped)
    }
}

/// Runs the program as a child process with the invocation's arguments and writes its
/// standard output to the invocation's output file.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    executable: Option<PathBuf>,
}

impl ProcessRunner {
    /// Uses each program's default executable name, resolved through `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: Some(executable.into()),
        }
    }

    pub fn executable_for(&self, program: Program) -> &Path {
        self.executable
            .as_deref()
            .unwrap_or_else(|| Path::new(program.default_executable()))
    }
}

impl Runner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<RunStatus, RunnerError> {
        let executable = self.executable_for(invocation.program);
        let output = File::create(&invocation.output_file).map_err(|e| RunnerError::Io {
            path: invocation.output_file.to_string_lossy().to_string(),
            source: e,
        })?;

        info!(
            "Launching {} with output to {}",
            executable.display(),
            invocation.output_file.display()
        );
        let status = Command::new(executable)
            .args(&invocation.arguments)
            .stdin(Stdio::null())
            .stdout(Stdio::from(output))
            .status()
            .map_err(|e| RunnerError::Spawn {
                executable: executable.to_string_lossy().to_string(),
                source: e,
            })?;

        if status.success() {
            Ok(RunStatus::Succeeded)
        } else {
            debug!("{} exited with {status}", executable.display());
            Ok(RunStatus::Failed {
                code: status.code(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn invocation(dir: &Path, input: &str) -> Invocation {
        let input_file = dir.join("job.stdin");
        fs::write(&input_file, input).unwrap();
        Invocation {
            program: Program::Tonto,
            arguments: vec![input_file.into_os_string()],
            output_file: dir.join("job.stdout"),
        }
    }

    #[test]
    fn null_runner_skips_and_touches_nothing() {
        let dir = tempdir().unwrap();
        let invocation = invocation(dir.path(), "");
        let status = NullRunner.run(&invocation).unwrap();
        assert_eq!(status, RunStatus::Skipped);
        assert!(!status.is_success());
        assert!(!invocation.output_file.exists());
    }

    #[test]
    fn only_succeeded_counts_as_success() {
        assert!(RunStatus::Succeeded.is_success());
        assert!(!RunStatus::Failed { code: Some(1) }.is_success());
        assert!(!RunStatus::Skipped.is_success());
    }

    #[test]
    fn process_runner_defaults_to_program_executable() {
        let runner = ProcessRunner::new();
        assert_eq!(runner.executable_for(Program::Tonto), Path::new("tonto"));
        assert_eq!(runner.executable_for(Program::Gaussian), Path::new("g16"));

        let custom = ProcessRunner::with_executable("/opt/tonto/bin/tonto");
        assert_eq!(
            custom.executable_for(Program::Tonto),
            Path::new("/opt/tonto/bin/tonto")
        );
    }

    #[cfg(unix)]
    #[test]
    fn process_runner_captures_stdout_into_output_file() {
        let dir = tempdir().unwrap();
        let invocation = invocation(dir.path(), "echo 'Total energy = -1.5'\n");
        let status = ProcessRunner::with_executable("sh").run(&invocation).unwrap();
        assert_eq!(status, RunStatus::Succeeded);
        let output = fs::read_to_string(&invocation.output_file).unwrap();
        assert_eq!(output, "Total energy = -1.5\n");
    }

    #[cfg(unix)]
    #[test]
    fn process_runner_reports_non_zero_exit() {
        let dir = tempdir().unwrap();
        let invocation = invocation(dir.path(), "exit 3\n");
        let status = ProcessRunner::with_executable("sh").run(&invocation).unwrap();
        assert_eq!(status, RunStatus::Failed { code: Some(3) });
    }

    #[test]
    fn process_runner_fails_to_spawn_missing_executable() {
        let dir = tempdir().unwrap();
        let invocation = invocation(dir.path(), "");
        let runner = ProcessRunner::with_executable(dir.path().join("no-such-program"));
        assert!(matches!(
            runner.run(&invocation),
            Err(RunnerError::Spawn { .. })
        ));
    }

    #[test]
    fn process_runner_fails_when_output_cannot_be_created() {
        let dir = tempdir().unwrap();
        let mut invocation = invocation(dir.path(), "");
        invocation.output_file = dir.path().join("missing-dir").join("job.stdout");
        assert!(matches!(
            ProcessRunner::with_executable("sh").run(&invocation),
            Err(RunnerError::Io { .. })
        ));
    }
}
