//! Shared building blocks for the halfuzz generators.
//!
//! Both generators walk the same catalog of HAL targets, derive the same
//! directory names and write through the same file writer. This crate holds
//! those collaborators behind small traits so the generators can be driven by
//! in-memory fakes in tests.
//!
//! ## Modules
//!
//! - [`target`] — HAL (name, version) pairs and interface spec names
//! - [`naming`] — Directory segments derived from HAL names and versions
//! - [`template`] — Placeholder templates and literal substitution
//! - [`writer`] — Writing generated files (filesystem or in-memory)
//! - [`catalog`] — Spec catalog backends
//! - [`layout`] — Where inputs and outputs live under the build root
//! - [`error`] — Error type shared by all generators

pub mod catalog;
pub mod error;
pub mod layout;
pub mod naming;
pub mod target;
pub mod template;
pub mod writer;

pub use catalog::{HalInterfacesCatalog, SpecCatalog, StaticCatalog, TomlCatalog};
pub use error::{CoreError, Result};
pub use layout::ProjectLayout;
pub use naming::{HalNaming, VtsNaming};
pub use target::HalTarget;
pub use template::{Placeholder, Substitutions, Template};
pub use writer::{FileWriter, FsWriter, MemoryWriter};

/// Header prepended to every generated build rule unless configured otherwise.
pub const DEFAULT_WARNING_HEADER: &str = "\
// This file was auto-generated. Do not edit manually.
// Use test/vts-testcase/fuzz/script/update_makefiles.py to generate this file.

";
