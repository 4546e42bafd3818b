//! Locations of templates and generated output under the Android build root.
//!
//! ```text
//! <build-top>/test/vts-testcase/fuzz/
//!   func_fuzzer/                          — generated build rules
//!   config/                               — generated test configs
//!   script/build/template/func_fuzzer_build_template.bp
//!   script/config/template/template.mk
//!   script/config/template/template.xml
//! ```

use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// File name of every generated build rule.
pub const BUILD_RULE_FILE: &str = "Android.bp";
/// File name of the generated build config.
pub const CONFIG_MK_FILE: &str = "Android.mk";
/// File name of the generated test descriptor.
pub const CONFIG_XML_FILE: &str = "AndroidTest.xml";
/// Directory under `<config-root>/<name-dir>/<ver-dir>` holding config files.
pub const FUNC_FUZZER_DIR: &str = "func_fuzzer";

/// Resolved input and output paths for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// `test/vts-testcase/fuzz` under the build root.
    pub project: PathBuf,
    /// Root of the generated build rule tree.
    pub fuzzer_root: PathBuf,
    /// Root of the generated config tree.
    pub config_root: PathBuf,
    /// Template for one fuzzer build target.
    pub build_template: PathBuf,
    /// Directory holding `template.mk` and `template.xml`.
    pub config_template_dir: PathBuf,
}

impl ProjectLayout {
    /// Derive the default layout from the build root.
    ///
    /// Fails with [`CoreError::MissingBuildTop`] when no root is given or it
    /// is empty, before anything touches the filesystem.
    pub fn from_build_top(build_top: Option<&Path>) -> Result<Self> {
        match build_top {
            Some(top) if !top.as_os_str().is_empty() => Ok(Self::for_project(
                top.join("test").join("vts-testcase").join("fuzz"),
            )),
            _ => Err(CoreError::MissingBuildTop),
        }
    }

    /// Default layout for an explicit project directory.
    pub fn for_project(project: PathBuf) -> Self {
        ProjectLayout {
            fuzzer_root: project.join("func_fuzzer"),
            config_root: project.join("config"),
            build_template: project
                .join("script")
                .join("build")
                .join("template")
                .join("func_fuzzer_build_template.bp"),
            config_template_dir: project.join("script").join("config").join("template"),
            project,
        }
    }

    pub fn config_mk_template(&self) -> PathBuf {
        self.config_template_dir.join("template.mk")
    }

    pub fn config_xml_template(&self) -> PathBuf {
        self.config_template_dir.join("template.xml")
    }
}

/// Append a `/`-separated relative directory to `base`.
pub fn join_segments(base: &Path, rel: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    path.extend(rel.split('/').filter(|s| !s.is_empty()));
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_build_top_is_startup_error() {
        assert!(matches!(
            ProjectLayout::from_build_top(None),
            Err(CoreError::MissingBuildTop)
        ));
        assert!(matches!(
            ProjectLayout::from_build_top(Some(Path::new(""))),
            Err(CoreError::MissingBuildTop)
        ));
    }

    #[test]
    fn missing_build_top_mentions_lunch() {
        assert!(CoreError::MissingBuildTop.to_string().contains("lunch"));
    }

    #[test]
    fn default_layout_under_build_top() {
        let layout = ProjectLayout::from_build_top(Some(Path::new("/aosp"))).unwrap();
        let project = Path::new("/aosp/test/vts-testcase/fuzz");
        assert_eq!(layout.project, project);
        assert_eq!(layout.fuzzer_root, project.join("func_fuzzer"));
        assert_eq!(layout.config_root, project.join("config"));
        assert_eq!(
            layout.build_template,
            project.join("script/build/template/func_fuzzer_build_template.bp")
        );
        assert_eq!(
            layout.config_xml_template(),
            project.join("script/config/template/template.xml")
        );
    }

    #[test]
    fn join_segments_splits_slashes() {
        assert_eq!(
            join_segments(Path::new("/out"), "automotive/vehicle/V2_0"),
            Path::new("/out").join("automotive").join("vehicle").join("V2_0")
        );
    }
}
