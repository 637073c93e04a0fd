use crate::core::templates::{Program, Template, TemplateError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_BASIS_SET: &str = "3-21G";
pub const DEFAULT_METHOD: &str = "HF";
pub const DEFAULT_OUTPUT_SOURCE: &str = "test.fchk";
pub const DEFAULT_JOB_NAME: &str = "tonto_job";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// How [`finalize`](super::job::ChemistryJob::finalize) treats a successful run whose
/// output lacks a readable energy line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyParsing {
    /// Report the missing energy as an error.
    #[default]
    Strict,
    /// Log a warning and leave the result unset.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunnerKind {
    #[default]
    Null,
    Process,
}

/// Job settings as read from a TOML file. Every field is optional; unset fields keep
/// the job defaults.
///
/// ```toml
/// name = "water"
/// method = "B3LYP"
/// basis-set = "6-31G*"
/// template = "tonto_dft"
/// working-dir = "runs"
/// energy-parsing = "lenient"
/// runner = "process"
/// executable = "/opt/tonto/bin/tonto"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct JobConfig {
    pub name: Option<String>,
    pub method: Option<String>,
    pub basis_set: Option<String>,
    pub output_source: Option<String>,
    /// Id of a bundled template.
    pub template: Option<String>,
    /// Path to a template file; mutually exclusive with `template`.
    pub template_file: Option<PathBuf>,
    /// Program consuming `template-file`. Ignored for bundled templates.
    pub program: Option<Program>,
    pub working_dir: Option<PathBuf>,
    pub energy_parsing: Option<EnergyParsing>,
    pub runner: Option<RunnerKind>,
    pub executable: Option<PathBuf>,
}

impl JobConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Toml { source, .. } => ConfigError::Toml {
                path: path.to_string_lossy().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: "<string>".to_string(),
            source: e,
        })
    }

    /// Resolves the configured template, if any.
    pub fn resolve_template(&self) -> Result<Option<Template>, ConfigError> {
        match (&self.template, &self.template_file) {
            (Some(_), Some(_)) => Err(ConfigError::InvalidParameter {
                name: "template",
                reason: "`template` and `template-file` cannot both be set".to_string(),
            }),
            (Some(id), None) => Ok(Some(Template::builtin(id)?)),
            (None, Some(path)) => Ok(Some(Template::from_path(
                path,
                self.program.unwrap_or_default(),
            )?)),
            (None, None) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn from_toml_str_reads_all_fields() {
        let config = JobConfig::from_toml_str(
            r#"
            name = "water"
            method = "B3LYP"
            basis-set = "6-31G*"
            output-source = "water.fchk"
            template = "tonto_dft"
            working-dir = "runs"
            energy-parsing = "lenient"
            runner = "process"
            executable = "/opt/tonto/bin/tonto"
            "#,
        )
        .unwrap();

        assert_eq!(config.name.as_deref(), Some("water"));
        assert_eq!(config.method.as_deref(), Some("B3LYP"));
        assert_eq!(config.basis_set.as_deref(), Some("6-31G*"));
        assert_eq!(config.output_source.as_deref(), Some("water.fchk"));
        assert_eq!(config.template.as_deref(), Some("tonto_dft"));
        assert_eq!(config.working_dir, Some(PathBuf::from("runs")));
        assert_eq!(config.energy_parsing, Some(EnergyParsing::Lenient));
        assert_eq!(config.runner, Some(RunnerKind::Process));
        assert_eq!(config.executable, Some(PathBuf::from("/opt/tonto/bin/tonto")));
    }

    #[test]
    fn empty_document_leaves_everything_unset() {
        assert_eq!(JobConfig::from_toml_str("").unwrap(), JobConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = JobConfig::from_toml_str(r#"basis_set = "STO-3G""#);
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn load_reports_path_for_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("job.toml");
        fs::write(&path, "this is not toml").unwrap();
        match JobConfig::load(&path) {
            Err(ConfigError::Toml { path: reported, .. }) => {
                assert!(reported.ends_with("job.toml"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = JobConfig::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn resolve_template_handles_builtin_file_and_conflicts() {
        let dir = tempdir().unwrap();
        let template_path = dir.path().join("custom.template");
        fs::write(&template_path, "# ${job.method}").unwrap();

        let builtin = JobConfig {
            template: Some("gaussian_spe".into()),
            ..Default::default()
        };
        let resolved = builtin.resolve_template().unwrap().unwrap();
        assert_eq!(resolved.program(), Program::Gaussian);

        let file = JobConfig {
            template_file: Some(template_path.clone()),
            program: Some(Program::Gaussian),
            ..Default::default()
        };
        let resolved = file.resolve_template().unwrap().unwrap();
        assert_eq!(resolved.source(), "# ${job.method}");
        assert_eq!(resolved.program(), Program::Gaussian);

        let both = JobConfig {
            template: Some("empty".into()),
            template_file: Some(template_path),
            ..Default::default()
        };
        assert!(matches!(
            both.resolve_template(),
            Err(ConfigError::InvalidParameter { name: "template", .. })
        ));

        assert!(JobConfig::default().resolve_template().unwrap().is_none());
    }

    #[test]
    fn resolve_template_fails_for_unknown_builtin() {
        let config = JobConfig {
            template: Some("nope".into()),
            ..Default::default()
        };
        assert!(matches!(
            config.resolve_template(),
            Err(ConfigError::Template(TemplateError::UnknownTemplate(_)))
        ));
    }
}
