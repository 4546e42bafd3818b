//! Directory names derived from HAL names and versions.

use crate::target::HalTarget;

/// Converts HAL names and versions into directory path segments.
///
/// Segments always use `/` as the separator so they can be embedded directly
/// in generated build rules.
pub trait HalNaming {
    /// Directory for a HAL name, e.g. `automotive.vehicle` → `automotive/vehicle`.
    fn name_dir(&self, hal_name: &str) -> String;

    /// Directory for a HAL version, e.g. `7.4` → `V7_4`.
    fn version_dir(&self, hal_version: &str) -> String;

    /// `name_dir/version_dir` for a target.
    fn hal_dir(&self, target: &HalTarget) -> String {
        format!(
            "{}/{}",
            self.name_dir(&target.name),
            self.version_dir(&target.version)
        )
    }
}

/// The naming convention used across the VTS test tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct VtsNaming;

impl HalNaming for VtsNaming {
    fn name_dir(&self, hal_name: &str) -> String {
        hal_name.replace('.', "/")
    }

    fn version_dir(&self, hal_version: &str) -> String {
        format!("V{}", hal_version.replace('.', "_"))
    }
}
