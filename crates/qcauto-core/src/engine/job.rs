use super::config::{
    ConfigError, DEFAULT_BASIS_SET, DEFAULT_JOB_NAME, DEFAULT_METHOD, DEFAULT_OUTPUT_SOURCE,
    EnergyParsing, JobConfig, RunnerKind,
};
use super::energy::extract_energy;
use super::error::JobError;
use super::runner::{Invocation, NullRunner, ProcessRunner, RunStatus, Runner};
use crate::core::models::geometry::Geometry;
use crate::core::templates::{ContextSource, RenderContext, Template};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Where a job is in its prepare / run / finalize lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JobState {
    /// Constructed; no files have been written.
    #[default]
    Created,
    /// The input file has been written and the paths are known.
    Prepared,
    /// A runner has reported its outcome.
    Executed,
    /// The result has been extracted from a successful run's output.
    Finalized,
}

/// Describes one invocation of an external quantum-chemistry program.
///
/// The job renders the program's input file, exposes the arguments a [`Runner`] needs,
/// and extracts the energy from the output once the run has been reported as
/// successful. It never launches a process itself.
///
/// File names are derived from `name + method + basis_set` followed by the extensions
/// of the template's program, so a job named `water` running `HF/3-21G` through Tonto
/// writes `waterHF3-21G.stdin` and reads `waterHF3-21G.stdout`.
#[derive(Debug, Clone)]
pub struct ChemistryJob {
    /// Basis set passed through to the program (default `3-21G`).
    pub basis_set: String,
    /// Electronic-structure method (default `HF`).
    pub method: String,
    /// Auxiliary file read by the program, such as a formatted checkpoint
    /// (default `test.fchk`).
    pub output_source: String,
    /// Job name, the first component of every file name (default `tonto_job`).
    pub name: String,
    geometry: Geometry,
    runner: Arc<dyn Runner>,
    template: Template,
    working_dir: Option<PathBuf>,
    energy_parsing: EnergyParsing,
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    success: bool,
    result: Option<f64>,
    state: JobState,
}

impl ChemistryJob {
    /// Creates a job for `geometry` with every other setting at its default.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            basis_set: DEFAULT_BASIS_SET.to_string(),
            method: DEFAULT_METHOD.to_string(),
            output_source: DEFAULT_OUTPUT_SOURCE.to_string(),
            name: DEFAULT_JOB_NAME.to_string(),
            geometry,
            runner: Arc::new(NullRunner),
            template: Template::default(),
            working_dir: None,
            energy_parsing: EnergyParsing::default(),
            input_file: None,
            output_file: None,
            success: false,
            result: None,
            state: JobState::Created,
        }
    }

    pub fn builder(geometry: Geometry) -> ChemistryJobBuilder {
        ChemistryJobBuilder::new(geometry)
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn set_template(&mut self, template: Template) {
        self.template = template;
    }

    pub fn runner(&self) -> &dyn Runner {
        self.runner.as_ref()
    }

    pub fn set_runner(&mut self, runner: Arc<dyn Runner>) {
        self.runner = runner;
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    pub fn energy_parsing(&self) -> EnergyParsing {
        self.energy_parsing
    }

    pub fn state(&self) -> JobState {
        self.state
    }

    /// `name + method + basis_set`, the stem shared by the input and output files.
    pub fn base_name(&self) -> String {
        format!("{}{}{}", self.name, self.method, self.basis_set)
    }

    /// Path of the rendered input file; `None` until the job is prepared.
    pub fn input_file(&self) -> Option<&Path> {
        self.input_file.as_deref()
    }

    /// Path of the program's output file; `None` until the job is prepared.
    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }

    pub fn success(&self) -> bool {
        self.success
    }

    /// Records whether the external run succeeded. Called once the runner is done.
    pub fn set_success(&mut self, success: bool) {
        self.success = success;
        self.state = JobState::Executed;
    }

    pub fn record_run(&mut self, status: RunStatus) {
        self.set_success(status.is_success());
    }

    /// The extracted energy, present only after a successful [`finalize`](Self::finalize).
    pub fn result(&self) -> Option<f64> {
        self.result
    }

    /// Derives the file paths and writes the rendered input file.
    ///
    /// Preparing again with unchanged settings rewrites identical bytes. Any previous
    /// run outcome and result are cleared, since a freshly written input starts a new
    /// run cycle. If rendering or writing fails the job is left in
    /// [`JobState::Created`] with no paths, so [`arguments`](Self::arguments) reports
    /// [`JobError::NotPrepared`].
    ///
    /// # Errors
    ///
    /// Returns [`JobError::Template`] if rendering fails and [`JobError::Io`] if the
    /// input file cannot be written.
    pub fn prepare(&mut self) -> Result<(), JobError> {
        self.input_file = None;
        self.output_file = None;
        self.success = false;
        self.result = None;
        self.state = JobState::Created;

        let base_name = self.base_name();
        let program = self.template.program();
        let input_file = self.resolve(format!("{base_name}{}", program.input_extension()));
        let output_file = self.resolve(format!("{base_name}{}", program.output_extension()));

        let input = self.render_with_paths(&input_file, &output_file)?;
        debug!("Writing input file to {}", input_file.display());
        fs::write(&input_file, input).map_err(|e| JobError::Io {
            path: input_file.to_string_lossy().to_string(),
            source: e,
        })?;

        self.input_file = Some(input_file);
        self.output_file = Some(output_file);
        self.state = JobState::Prepared;
        Ok(())
    }

    /// Renders the input text without touching the filesystem.
    pub fn render_input(&self) -> Result<String, JobError> {
        let mut context = RenderContext::new();
        context.extend_from(self).extend_from(&self.geometry);
        Ok(self.template.render(&context)?)
    }

    /// The ordered argument list for the runner: exactly the input file path.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::NotPrepared`] before [`prepare`](Self::prepare) has run.
    pub fn arguments(&self) -> Result<Vec<OsString>, JobError> {
        let input_file = self.input_file.as_ref().ok_or(JobError::NotPrepared)?;
        Ok(vec![input_file.clone().into_os_string()])
    }

    pub fn invocation(&self) -> Result<Invocation, JobError> {
        let arguments = self.arguments()?;
        let output_file = self.output_file.clone().ok_or(JobError::NotPrepared)?;
        Ok(Invocation {
            program: self.template.program(),
            arguments,
            output_file,
        })
    }

    /// Extracts the energy from the output file of a successful run.
    ///
    /// If the run was not successful this does nothing and returns `Ok(None)`; callers
    /// detect failed runs by the absent result. Otherwise the first line containing the
    /// program's energy marker is located and its first signed number becomes the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::Io`] if the output file cannot be read, and
    /// [`JobError::Parse`] if no energy can be extracted while parsing is
    /// [`EnergyParsing::Strict`].
    pub fn finalize(&mut self) -> Result<Option<f64>, JobError> {
        if !self.success {
            debug!("Job '{}' did not succeed; no result to extract", self.name);
            return Ok(None);
        }

        let output_file = self.output_file.clone().ok_or(JobError::NotPrepared)?;
        let output = fs::read_to_string(&output_file).map_err(|e| JobError::Io {
            path: output_file.to_string_lossy().to_string(),
            source: e,
        })?;

        match extract_energy(&output, self.template.program().energy_marker()) {
            Ok(energy) => {
                debug!("Job '{}' finished with energy {energy}", self.name);
                self.result = Some(energy);
            }
            Err(source) => match self.energy_parsing {
                EnergyParsing::Strict => {
                    return Err(JobError::Parse {
                        path: output_file.to_string_lossy().to_string(),
                        source,
                    });
                }
                EnergyParsing::Lenient => {
                    warn!(
                        "No energy found in {}: {source}; leaving result unset",
                        output_file.display()
                    );
                    self.result = None;
                }
            },
        }

        self.state = JobState::Finalized;
        Ok(self.result)
    }

    fn render_with_paths(
        &self,
        input_file: &Path,
        output_file: &Path,
    ) -> Result<String, JobError> {
        let mut context = RenderContext::new();
        context.extend_from(self).extend_from(&self.geometry);
        context.insert("job.input_file", input_file.display());
        context.insert("job.output_file", output_file.display());
        Ok(self.template.render(&context)?)
    }

    fn resolve(&self, file_name: String) -> PathBuf {
        match &self.working_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}

impl ContextSource for ChemistryJob {
    fn populate(&self, context: &mut RenderContext) {
        context.insert("job.name", &self.name);
        context.insert("job.method", &self.method);
        context.insert("job.basis_set", &self.basis_set);
        context.insert("job.output_source", &self.output_source);
        context.insert("job.input_file", path_or_empty(self.input_file()));
        context.insert("job.output_file", path_or_empty(self.output_file()));
    }
}

fn path_or_empty(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}

/// Builds a [`ChemistryJob`], validating the settings that the job relies on.
pub struct ChemistryJobBuilder {
    geometry: Geometry,
    runner: Option<Arc<dyn Runner>>,
    basis_set: Option<String>,
    method: Option<String>,
    output_source: Option<String>,
    name: Option<String>,
    template: Option<Template>,
    working_dir: Option<PathBuf>,
    energy_parsing: Option<EnergyParsing>,
}

impl ChemistryJobBuilder {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            runner: None,
            basis_set: None,
            method: None,
            output_source: None,
            name: None,
            template: None,
            working_dir: None,
            energy_parsing: None,
        }
    }

    pub fn runner(mut self, runner: Arc<dyn Runner>) -> Self {
        self.runner = Some(runner);
        self
    }
    pub fn basis_set(mut self, basis_set: impl Into<String>) -> Self {
        self.basis_set = Some(basis_set.into());
        self
    }
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }
    pub fn output_source(mut self, output_source: impl Into<String>) -> Self {
        self.output_source = Some(output_source.into());
        self
    }
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
    pub fn template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
    pub fn energy_parsing(mut self, mode: EnergyParsing) -> Self {
        self.energy_parsing = Some(mode);
        self
    }

    /// Applies every field set in `config`, overriding earlier builder calls.
    pub fn apply_config(mut self, config: &JobConfig) -> Result<Self, ConfigError> {
        if let Some(template) = config.resolve_template()? {
            self.template = Some(template);
        }
        if let Some(name) = &config.name {
            self.name = Some(name.clone());
        }
        if let Some(method) = &config.method {
            self.method = Some(method.clone());
        }
        if let Some(basis_set) = &config.basis_set {
            self.basis_set = Some(basis_set.clone());
        }
        if let Some(output_source) = &config.output_source {
            self.output_source = Some(output_source.clone());
        }
        if let Some(dir) = &config.working_dir {
            self.working_dir = Some(dir.clone());
        }
        if let Some(mode) = config.energy_parsing {
            self.energy_parsing = Some(mode);
        }
        match (config.runner, &config.executable) {
            (Some(RunnerKind::Process), Some(executable)) => {
                self.runner = Some(Arc::new(ProcessRunner::with_executable(executable)));
            }
            (Some(RunnerKind::Process), None) => {
                self.runner = Some(Arc::new(ProcessRunner::new()));
            }
            (Some(RunnerKind::Null), None) => {
                self.runner = Some(Arc::new(NullRunner));
            }
            (Some(RunnerKind::Null) | None, Some(_)) => {
                return Err(ConfigError::InvalidParameter {
                    name: "executable",
                    reason: "requires `runner = \"process\"`".to_string(),
                });
            }
            (None, None) => {}
        }
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if the name, method or basis set is
    /// empty.
    pub fn build(self) -> Result<ChemistryJob, ConfigError> {
        let mut job = ChemistryJob::new(self.geometry);
        if let Some(name) = self.name {
            job.name = name;
        }
        if let Some(method) = self.method {
            job.method = method;
        }
        if let Some(basis_set) = self.basis_set {
            job.basis_set = basis_set;
        }
        if let Some(output_source) = self.output_source {
            job.output_source = output_source;
        }
        if let Some(template) = self.template {
            job.template = template;
        }
        if let Some(runner) = self.runner {
            job.runner = runner;
        }
        job.working_dir = self.working_dir;
        job.energy_parsing = self.energy_parsing.unwrap_or_default();

        for (name, value) in [
            ("name", &job.name),
            ("method", &job.method),
            ("basis_set", &job.basis_set),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidParameter {
                    name,
                    reason: "must not be empty".to_string(),
                });
            }
        }

        Ok(job)
    }
}
