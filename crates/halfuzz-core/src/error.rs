//! Error types for generator operations.

use std::path::PathBuf;

use crate::target::HalTarget;

/// Errors that can occur while generating fuzzer build rules and configs.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The Android build root was not provided.
    #[error("ANDROID_BUILD_TOP is not set. Run \"lunch\" command first.")]
    MissingBuildTop,

    /// A template file could not be read.
    #[error("cannot read template {}: {source}", path.display())]
    TemplateRead {
        /// The template path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The catalog could not enumerate HAL targets.
    #[error("spec catalog error: {detail}")]
    Catalog {
        /// Description of the failure.
        detail: String,
    },

    /// The catalog could not list interface specs for a target.
    #[error("cannot list interface specs for {target}: {detail}")]
    SpecLookup {
        /// The target being looked up.
        target: HalTarget,
        /// Description of the failure.
        detail: String,
    },

    /// A generated file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, CoreError>;
