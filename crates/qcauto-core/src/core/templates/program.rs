use serde::Deserialize;
use std::fmt;

/// An external quantum-chemistry program whose input a job can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Program {
    #[default]
    Tonto,
    Gaussian,
}

impl Program {
    /// Extension appended to a job's base name to form its input file path.
    pub const fn input_extension(self) -> &'static str {
        match self {
            Self::Tonto => ".stdin",
            Self::Gaussian => ".gjf",
        }
    }

    /// Extension appended to a job's base name to form its output file path.
    pub const fn output_extension(self) -> &'static str {
        match self {
            Self::Tonto => ".stdout",
            Self::Gaussian => ".log",
        }
    }

    /// Substring identifying the output line that carries the final energy.
    pub const fn energy_marker(self) -> &'static str {
        match self {
            Self::Tonto => "Total energy",
            Self::Gaussian => "SCF Done",
        }
    }

    pub const fn default_executable(self) -> &'static str {
        match self {
            Self::Tonto => "tonto",
            Self::Gaussian => "g16",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tonto => "tonto",
            Self::Gaussian => "gaussian",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tonto_uses_stdin_and_stdout_extensions() {
        assert_eq!(Program::Tonto.input_extension(), ".stdin");
        assert_eq!(Program::Tonto.output_extension(), ".stdout");
        assert_eq!(Program::Tonto.energy_marker(), "Total energy");
    }

    #[test]
    fn gaussian_uses_gjf_and_log_extensions() {
        assert_eq!(Program::Gaussian.input_extension(), ".gjf");
        assert_eq!(Program::Gaussian.output_extension(), ".log");
        assert_eq!(Program::Gaussian.energy_marker(), "SCF Done");
    }

    #[test]
    fn default_program_is_tonto() {
        assert_eq!(Program::default(), Program::Tonto);
        assert_eq!(Program::default().default_executable(), "tonto");
    }

    #[test]
    fn program_deserializes_from_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            program: Program,
        }
        let parsed: Wrapper = toml::from_str(r#"program = "gaussian""#).unwrap();
        assert_eq!(parsed.program, Program::Gaussian);
        assert!(toml::from_str::<Wrapper>(r#"program = "orca""#).is_err());
    }
}
