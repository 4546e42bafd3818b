//! Placeholder templates.
//!
//! Templates are plain text with `{PLACEHOLDER}` tokens. Filling is literal:
//! every occurrence of a token is replaced, tokens without a value are left
//! untouched, and nothing is parsed.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// Placeholder tokens recognized by the generator templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `{HAL_NAME}` — dotted HAL name.
    HalName,
    /// `{HAL_NAME_DIR}` — HAL name as a directory path.
    HalNameDir,
    /// `{HAL_VERSION}` — HAL version string.
    HalVersion,
    /// `{HAL_IFACE_NAME}` — interface name without spec extension.
    HalIfaceName,
    /// `{TEST_NAME}` — test module name.
    TestName,
}

impl Placeholder {
    /// The literal token as it appears in template text.
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::HalName => "{HAL_NAME}",
            Placeholder::HalNameDir => "{HAL_NAME_DIR}",
            Placeholder::HalVersion => "{HAL_VERSION}",
            Placeholder::HalIfaceName => "{HAL_IFACE_NAME}",
            Placeholder::TestName => "{TEST_NAME}",
        }
    }
}

/// Ordered placeholder values. Replacements are applied in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    entries: Vec<(Placeholder, String)>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value for a placeholder (builder style).
    pub fn with(mut self, placeholder: Placeholder, value: impl Into<String>) -> Self {
        self.entries.push((placeholder, value.into()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Placeholder, &str)> {
        self.entries.iter().map(|(p, v)| (*p, v.as_str()))
    }
}

/// Immutable template text.
#[derive(Debug, Clone)]
pub struct Template {
    source: Option<PathBuf>,
    text: String,
}

impl Template {
    /// Read a template from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CoreError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded template");
        Ok(Template {
            source: Some(path.to_path_buf()),
            text,
        })
    }

    /// Build a template from in-memory text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Template {
            source: None,
            text: text.into(),
        }
    }

    /// The file this template was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Produce a filled copy of the template.
    pub fn fill(&self, substitutions: &Substitutions) -> String {
        substitutions
            .iter()
            .fold(self.text.clone(), |text, (placeholder, value)| {
                text.replace(placeholder.token(), value)
            })
    }
}
