//! Spec catalogs: which HALs exist and which interface specs each one has.
//!
//! Three backends are provided:
//!
//! - [`HalInterfacesCatalog`] scans a `hardware/interfaces` source tree.
//! - [`TomlCatalog`] reads a pinned catalog file.
//! - [`StaticCatalog`] is built in memory.
//!
//! TOML catalog layout:
//! ```text
//! [[hal]]
//! name = "vibrator"
//! version = "1.0"
//! specs = ["types.vts", "IVibrator.vts"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CoreError, Result};
use crate::target::{HalTarget, SPEC_EXTENSION};

/// Source of HAL targets and their interface spec names.
pub trait SpecCatalog {
    /// Every known HAL target. Callers must not rely on the order.
    fn hal_targets(&self) -> Result<Vec<HalTarget>>;

    /// Interface spec identifiers for one target, e.g. `IVibrator.vts`.
    fn interface_specs(&self, target: &HalTarget) -> Result<Vec<String>>;
}

/// In-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<(HalTarget, Vec<String>)>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target with its spec names (builder style).
    pub fn with_target<S: Into<String>>(
        mut self,
        target: HalTarget,
        specs: impl IntoIterator<Item = S>,
    ) -> Self {
        self.insert(target, specs);
        self
    }

    /// Add a target. Specs for a target already present are appended.
    pub fn insert<S: Into<String>>(
        &mut self,
        target: HalTarget,
        specs: impl IntoIterator<Item = S>,
    ) {
        let specs = specs.into_iter().map(Into::<String>::into);
        match self.entries.iter_mut().find(|(t, _)| *t == target) {
            Some((_, existing)) => existing.extend(specs),
            None => self.entries.push((target, specs.collect())),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

}

impl SpecCatalog for StaticCatalog {
    fn hal_targets(&self) -> Result<Vec<HalTarget>> {
        Ok(self.entries.iter().map(|(t, _)| t.clone()).collect())
    }

    fn interface_specs(&self, target: &HalTarget) -> Result<Vec<String>> {
        self.entries
            .iter()
            .find(|(t, _)| t == target)
            .map(|(_, specs)| specs.clone())
            .ok_or_else(|| CoreError::SpecLookup {
                target: target.clone(),
                detail: "target is not in the catalog".into(),
            })
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    hal: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    version: String,
    #[serde(default)]
    specs: Vec<String>,
}

/// Catalog read from a TOML file.
#[derive(Debug, Clone)]
pub struct TomlCatalog {
    inner: StaticCatalog,
}

impl TomlCatalog {
    /// Load a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CoreError::Catalog {
                detail: format!("catalog file not found: {}", path.display()),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), targets = catalog.inner.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Parse a catalog from a TOML string.
    ///
    /// Entries with an empty name, name segment or version are rejected.
    pub fn parse(toml_str: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(toml_str)?;
        let mut inner = StaticCatalog::new();
        for entry in file.hal {
            let target = HalTarget::new(entry.name, entry.version);
            target.validate()?;
            inner.insert(target, entry.specs);
        }
        Ok(TomlCatalog { inner })
    }
}

impl SpecCatalog for TomlCatalog {
    fn hal_targets(&self) -> Result<Vec<HalTarget>> {
        self.inner.hal_targets()
    }

    fn interface_specs(&self, target: &HalTarget) -> Result<Vec<String>> {
        self.inner.interface_specs(target)
    }
}

/// Catalog derived from a `hardware/interfaces` source tree.
///
/// A HAL version is a directory named `<major>.<minor>` holding `.hal` files.
/// The HAL name is the path from the root down to that directory, dotted:
/// `automotive/vehicle/2.0/IVehicle.hal` is `automotive.vehicle` version
/// `2.0` with spec `IVehicle.vts`.
#[derive(Debug, Clone)]
pub struct HalInterfacesCatalog {
    root: PathBuf,
}

impl HalInterfacesCatalog {
    pub fn new(root: PathBuf) -> Self {
        HalInterfacesCatalog { root }
    }

    /// The interfaces tree under an Android build root.
    pub fn under_build_top(build_top: &Path) -> Self {
        Self::new(build_top.join("hardware").join("interfaces"))
    }

    fn version_dir(&self, target: &HalTarget) -> PathBuf {
        let mut dir = self.root.clone();
        dir.extend(target.name.split('.'));
        dir.push(&target.version);
        dir
    }

    fn scan(&self, dir: &Path, name: &mut Vec<String>, found: &mut Vec<HalTarget>) -> Result<()> {
        let mut subdirs = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                subdirs.push(entry.path());
            }
        }
        subdirs.sort();

        for sub in subdirs {
            let Some(segment) = sub.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            if segment.starts_with('.') {
                continue;
            }
            if is_version(segment) {
                if !name.is_empty() && !hal_files(&sub)?.is_empty() {
                    found.push(HalTarget::new(name.join("."), segment));
                }
                continue;
            }
            name.push(segment.to_string());
            self.scan(&sub, name, found)?;
            name.pop();
        }
        Ok(())
    }
}

impl SpecCatalog for HalInterfacesCatalog {
    fn hal_targets(&self) -> Result<Vec<HalTarget>> {
        if !self.root.is_dir() {
            return Err(CoreError::Catalog {
                detail: format!("interfaces directory not found: {}", self.root.display()),
            });
        }
        let mut found = Vec::new();
        self.scan(&self.root, &mut Vec::new(), &mut found)?;
        tracing::debug!(
            root = %self.root.display(),
            targets = found.len(),
            "scanned HAL interfaces"
        );
        Ok(found)
    }

    fn interface_specs(&self, target: &HalTarget) -> Result<Vec<String>> {
        let dir = self.version_dir(target);
        if !dir.is_dir() {
            return Err(CoreError::SpecLookup {
                target: target.clone(),
                detail: format!("{} is not a directory", dir.display()),
            });
        }
        let files = hal_files(&dir).map_err(|e| CoreError::SpecLookup {
            target: target.clone(),
            detail: e.to_string(),
        })?;
        Ok(files
            .into_iter()
            .map(|stem| format!("{stem}{SPEC_EXTENSION}"))
            .collect())
    }
}

/// `<digits>.<digits>`
fn is_version(segment: &str) -> bool {
    match segment.split_once('.') {
        Some((major, minor)) => {
            !major.is_empty()
                && !minor.is_empty()
                && major.chars().all(|c| c.is_ascii_digit())
                && minor.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

/// Sorted stems of the `.hal` files directly inside `dir`.
fn hal_files(dir: &Path) -> Result<Vec<String>> {
    let mut stems = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "hal") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                stems.push(stem.to_string());
            }
        }
    }
    stems.sort();
    Ok(stems)
}
