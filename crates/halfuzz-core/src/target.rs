//! HAL targets and interface spec names.

use std::fmt;

use crate::error::{CoreError, Result};

/// Extension carried by interface spec identifiers returned from a catalog.
pub const SPEC_EXTENSION: &str = ".vts";

/// One version of one HAL interface family, e.g. `("vibrator", "1.0")`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HalTarget {
    /// Dotted HAL name, e.g. `automotive.vehicle`.
    pub name: String,
    /// `<major>.<minor>` version string.
    pub version: String,
}

impl HalTarget {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        HalTarget {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Reject targets whose directories would collapse into a parent.
    ///
    /// An empty name, an empty dotted segment (`.foo`, `a..b`) or an empty
    /// version would put its build rules on top of another tier's.
    pub fn validate(&self) -> Result<()> {
        let detail = if self.name.split('.').any(str::is_empty) {
            "HAL name has an empty segment"
        } else if self.version.is_empty() {
            "HAL version is empty"
        } else {
            return Ok(());
        };
        Err(CoreError::Catalog {
            detail: format!("invalid target {self:?}: {detail}"),
        })
    }
}

impl fmt::Display for HalTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// Strip the spec extension from a catalog identifier.
///
/// `"IVibrator.vts"` becomes `"IVibrator"`. Every occurrence is removed, so an
/// identifier is never left with a dangling marker.
pub fn interface_name(spec_name: &str) -> String {
    spec_name.replace(SPEC_EXTENSION, "")
}
