use super::program::Program;
use super::render::{Template, TemplateError};
use phf::{Map, phf_map};

/// Id of the template a job uses unless told otherwise.
pub const DEFAULT_TEMPLATE: &str = "tonto_roby";

const TONTO_ROBY_SOURCE: &str = include_str!("../../../templates/tonto_roby.template");

#[derive(Debug, Clone, Copy)]
struct BuiltinTemplate {
    program: Program,
    source: &'static str,
}

static BUILTIN_TEMPLATES: Map<&'static str, BuiltinTemplate> = phf_map! {
    "tonto_roby" => BuiltinTemplate {
        program: Program::Tonto,
        source: TONTO_ROBY_SOURCE,
    },
    "tonto_dft" => BuiltinTemplate {
        program: Program::Tonto,
        source: include_str!("../../../templates/tonto_dft.template"),
    },
    "gaussian_spe" => BuiltinTemplate {
        program: Program::Gaussian,
        source: include_str!("../../../templates/gaussian_spe.template"),
    },
    "gaussian_wave" => BuiltinTemplate {
        program: Program::Gaussian,
        source: include_str!("../../../templates/gaussian_wave.template"),
    },
    "empty" => BuiltinTemplate {
        program: Program::Tonto,
        source: "",
    },
};

impl Template {
    /// Resolves one of the templates bundled with the library.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::UnknownTemplate`] if no bundled template has this id.
    pub fn builtin(id: &str) -> Result<Self, TemplateError> {
        BUILTIN_TEMPLATES
            .get_entry(id)
            .map(|(&key, builtin)| Template::from_static(key, builtin.program, builtin.source))
            .ok_or_else(|| TemplateError::UnknownTemplate(id.to_string()))
    }

    /// Ids of all bundled templates, sorted.
    pub fn builtin_ids() -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = BUILTIN_TEMPLATES.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for Template {
    fn default() -> Self {
        Template::from_static(DEFAULT_TEMPLATE, Program::Tonto, TONTO_ROBY_SOURCE)
    }
}
