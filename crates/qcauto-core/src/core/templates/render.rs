use super::program::Program;
use regex::Regex;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_.]*)\}").expect("placeholder pattern is valid")
});

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),
    #[error("Template '{template}' references '{key}', which is not in the render context")]
    MissingValue { template: String, key: String },
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// The key/value mapping a [`Template`] is rendered against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    values: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a value, formatted with its `Display` implementation.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.values.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Lets `source` add its keys to this context.
    pub fn extend_from(&mut self, source: &impl ContextSource) -> &mut Self {
        source.populate(self);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A value that can describe itself to the template engine.
pub trait ContextSource {
    /// Adds this value's keys to `context`. Keys are namespaced by the implementor
    /// (e.g. `job.name`, `geometry.charge`).
    fn populate(&self, context: &mut RenderContext);
}

/// Input template text for a specific [`Program`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    id: Cow<'static, str>,
    program: Program,
    source: Cow<'static, str>,
}

impl Template {
    pub(super) const fn from_static(
        id: &'static str,
        program: Program,
        source: &'static str,
    ) -> Self {
        Self {
            id: Cow::Borrowed(id),
            program,
            source: Cow::Borrowed(source),
        }
    }

    /// Creates a template from in-memory text.
    pub fn inline(id: impl Into<String>, program: Program, source: impl Into<String>) -> Self {
        Self {
            id: Cow::Owned(id.into()),
            program,
            source: Cow::Owned(source.into()),
        }
    }

    /// Reads template text from a file. The file path becomes the template id.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Io`] if the file cannot be read.
    pub fn from_path(path: &Path, program: Program) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path).map_err(|e| TemplateError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(Self::inline(path.to_string_lossy(), program, source))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn program(&self) -> Program {
        self.program
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Distinct placeholder keys in order of first appearance.
    pub fn placeholders(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for captures in PLACEHOLDER.captures_iter(&self.source) {
            if let Some(key) = captures.get(1) {
                if !keys.iter().any(|k| k == key.as_str()) {
                    keys.push(key.as_str().to_string());
                }
            }
        }
        keys
    }

    /// Substitutes every `${key}` placeholder with its value from `context`. Text
    /// outside placeholders is copied verbatim, so rendering is deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingValue`] for the first placeholder whose key is
    /// absent from the context.
    pub fn render(&self, context: &RenderContext) -> Result<String, TemplateError> {
        let mut rendered = String::with_capacity(self.source.len());
        let mut last = 0;

        for captures in PLACEHOLDER.captures_iter(&self.source) {
            let (Some(whole), Some(key)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            let value = context
                .get(key.as_str())
                .ok_or_else(|| TemplateError::MissingValue {
                    template: self.id.to_string(),
                    key: key.as_str().to_string(),
                })?;
            rendered.push_str(&self.source[last..whole.start()]);
            rendered.push_str(value);
            last = whole.end();
        }
        rendered.push_str(&self.source[last..]);

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    struct Labels;

    impl ContextSource for Labels {
        fn populate(&self, context: &mut RenderContext) {
            context.insert("job.name", "water");
            context.insert("job.method", "HF");
        }
    }

    #[test]
    fn render_substitutes_all_placeholders() {
        let template = Template::inline(
            "t",
            Program::Tonto,
            "name= ${job.name} kind= ${job.method}\n",
        );
        let mut context = RenderContext::new();
        context.extend_from(&Labels);
        assert_eq!(template.render(&context).unwrap(), "name= water kind= HF\n");
    }

    #[test]
    fn render_repeats_values_for_repeated_placeholders() {
        let template = Template::inline("t", Program::Tonto, "${a}-${a}");
        let mut context = RenderContext::new();
        context.insert("a", 7);
        assert_eq!(template.render(&context).unwrap(), "7-7");
    }

    #[test]
    fn render_leaves_text_without_placeholders_untouched() {
        let source = "{\n   $ not a placeholder { } $name\n}\n";
        let template = Template::inline("t", Program::Tonto, source);
        assert_eq!(template.render(&RenderContext::new()).unwrap(), source);
    }

    #[test]
    fn render_fails_for_missing_value() {
        let template = Template::inline("roby", Program::Tonto, "${job.name} ${geometry.atoms}");
        let mut context = RenderContext::new();
        context.insert("job.name", "water");
        let err = template.render(&context).unwrap_err();
        match err {
            TemplateError::MissingValue { template, key } => {
                assert_eq!(template, "roby");
                assert_eq!(key, "geometry.atoms");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn render_is_deterministic() {
        let template = Template::inline("t", Program::Gaussian, "# ${job.method}\n\n${job.name}\n");
        let mut context = RenderContext::new();
        context.extend_from(&Labels);
        assert_eq!(template.render(&context).unwrap(), template.render(&context).unwrap());
    }

    #[test]
    fn placeholders_are_listed_once_in_order() {
        let template = Template::inline("t", Program::Tonto, "${b} ${a} ${b} ${c.d}");
        assert_eq!(template.placeholders(), ["b", "a", "c.d"]);
    }

    #[test]
    fn insert_overwrites_existing_values() {
        let mut context = RenderContext::new();
        context.insert("k", 1);
        context.insert("k", "two");
        assert_eq!(context.get("k"), Some("two"));
        assert_eq!(context.len(), 1);
    }

    #[test]
    fn from_path_reads_template_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.template");
        fs::write(&path, "basis= ${job.basis_set}").unwrap();

        let template = Template::from_path(&path, Program::Tonto).unwrap();
        assert_eq!(template.source(), "basis= ${job.basis_set}");
        assert_eq!(template.program(), Program::Tonto);
        assert!(template.id().ends_with("custom.template"));
    }

    #[test]
    fn from_path_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = Template::from_path(&dir.path().join("missing.template"), Program::Tonto);
        assert!(matches!(result, Err(TemplateError::Io { .. })));
    }
}
