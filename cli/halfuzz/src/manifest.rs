//! `halfuzz.toml` parsing and run settings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use halfuzz_core::{
    CoreError, HalInterfacesCatalog, ProjectLayout, SpecCatalog, TomlCatalog,
    DEFAULT_WARNING_HEADER,
};
use serde::{Deserialize, Serialize};

/// Manifest file name, searched for upward from the working directory.
pub const MANIFEST_FILE: &str = "halfuzz.toml";

/// The top-level manifest structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HalfuzzManifest {
    /// Generator options.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Path overrides.
    #[serde(default)]
    pub paths: PathsConfig,
}

/// `[generator]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Header prepended to generated build rules.
    #[serde(default)]
    pub warning_header: Option<String>,
    /// Pinned TOML catalog instead of scanning `hardware/interfaces`.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

/// `[paths]` section. Every entry replaces one path of the default layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default)]
    pub project: Option<PathBuf>,
    #[serde(default)]
    pub fuzzer_root: Option<PathBuf>,
    #[serde(default)]
    pub config_root: Option<PathBuf>,
    #[serde(default)]
    pub build_template: Option<PathBuf>,
    #[serde(default)]
    pub config_template_dir: Option<PathBuf>,
}

impl HalfuzzManifest {
    /// Search upward from `start_dir` for `halfuzz.toml`, parse it, and make
    /// its relative paths absolute against the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let mut manifest: HalfuzzManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                manifest.rebase(&dir);
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing halfuzz.toml")
    }

    fn rebase(&mut self, base: &Path) {
        let paths = [
            &mut self.generator.catalog,
            &mut self.paths.project,
            &mut self.paths.fuzzer_root,
            &mut self.paths.config_root,
            &mut self.paths.build_template,
            &mut self.paths.config_template_dir,
        ];
        for path in paths.into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Everything a generator run needs, resolved from flags, environment and
/// manifest.
pub struct Settings {
    pub layout: ProjectLayout,
    pub warning_header: String,
    pub catalog: Box<dyn SpecCatalog>,
}

impl Settings {
    /// Resolve settings. Flags win over the manifest.
    ///
    /// The build root may only be omitted when the manifest names both the
    /// project directory and a catalog; otherwise
    /// [`CoreError::MissingBuildTop`] is returned.
    pub fn resolve(
        build_top: Option<&Path>,
        catalog_flag: Option<&Path>,
        manifest: Option<&HalfuzzManifest>,
    ) -> Result<Self> {
        let default = HalfuzzManifest::default();
        let manifest = manifest.unwrap_or(&default);
        let build_top = build_top.filter(|p| !p.as_os_str().is_empty());

        let mut layout = match (&manifest.paths.project, build_top) {
            (Some(project), _) => ProjectLayout::for_project(project.clone()),
            (None, top) => ProjectLayout::from_build_top(top)?,
        };
        let overrides = &manifest.paths;
        if let Some(p) = &overrides.fuzzer_root {
            layout.fuzzer_root = p.clone();
        }
        if let Some(p) = &overrides.config_root {
            layout.config_root = p.clone();
        }
        if let Some(p) = &overrides.build_template {
            layout.build_template = p.clone();
        }
        if let Some(p) = &overrides.config_template_dir {
            layout.config_template_dir = p.clone();
        }

        let catalog_path = catalog_flag
            .map(Path::to_path_buf)
            .or_else(|| manifest.generator.catalog.clone());
        let catalog: Box<dyn SpecCatalog> = match (catalog_path, build_top) {
            (Some(path), _) => Box::new(
                TomlCatalog::load(&path)
                    .with_context(|| format!("loading catalog {}", path.display()))?,
            ),
            (None, Some(top)) => Box::new(HalInterfacesCatalog::under_build_top(top)),
            (None, None) => return Err(CoreError::MissingBuildTop.into()),
        };

        let warning_header = manifest
            .generator
            .warning_header
            .clone()
            .unwrap_or_else(|| DEFAULT_WARNING_HEADER.to_string());

        tracing::debug!(project = %layout.project.display(), "resolved settings");
        Ok(Settings {
            layout,
            warning_header,
            catalog,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_manifest_parses() {
        let manifest = HalfuzzManifest::from_str("").unwrap();
        assert!(manifest.generator.catalog.is_none());
        assert!(manifest.paths.project.is_none());
    }

    #[test]
    fn find_and_load_rebases_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            "[generator]\ncatalog = \"hal_catalog.toml\"\n\n[paths]\nfuzzer_root = \"/abs/func_fuzzer\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let (manifest, found) = HalfuzzManifest::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(found, dir.path());
        assert_eq!(
            manifest.generator.catalog.as_deref(),
            Some(dir.path().join("hal_catalog.toml").as_path())
        );
        assert_eq!(
            manifest.paths.fuzzer_root.as_deref(),
            Some(Path::new("/abs/func_fuzzer"))
        );
    }

    #[test]
    fn resolve_without_build_top_fails() {
        let err = Settings::resolve(None, None, None).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::MissingBuildTop)
        ));
    }

    #[test]
    fn resolve_defaults_under_build_top() {
        let settings = Settings::resolve(Some(Path::new("/aosp")), None, None).unwrap();
        assert_eq!(
            settings.layout.fuzzer_root,
            Path::new("/aosp/test/vts-testcase/fuzz/func_fuzzer")
        );
        assert_eq!(settings.warning_header, DEFAULT_WARNING_HEADER);
    }

    #[test]
    fn manifest_project_and_catalog_replace_build_top() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("hal_catalog.toml");
        std::fs::write(&catalog, "[[hal]]\nname = \"nfc\"\nversion = \"1.0\"\n").unwrap();
        let manifest = HalfuzzManifest {
            generator: GeneratorConfig {
                warning_header: Some("# generated\n".into()),
                catalog: Some(catalog),
            },
            paths: PathsConfig {
                project: Some(dir.path().join("fuzz")),
                config_root: Some(dir.path().join("cfg")),
                ..Default::default()
            },
        };
        let settings = Settings::resolve(None, None, Some(&manifest)).unwrap();
        assert_eq!(settings.layout.fuzzer_root, dir.path().join("fuzz/func_fuzzer"));
        assert_eq!(settings.layout.config_root, dir.path().join("cfg"));
        assert_eq!(settings.warning_header, "# generated\n");
        assert_eq!(settings.catalog.hal_targets().unwrap().len(), 1);
    }
}
