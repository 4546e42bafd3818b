//! The build rule generator.

use std::collections::BTreeMap;
use std::path::PathBuf;

use halfuzz_core::layout::{join_segments, BUILD_RULE_FILE};
use halfuzz_core::target::interface_name;
use halfuzz_core::{
    FileWriter, HalNaming, HalTarget, Placeholder, Result, SpecCatalog, Substitutions, Template,
};

use crate::rules::{is_fuzzable, only_subdirs_rule};

/// Generates `Android.bp` files for function fuzzers.
pub struct BuildRuleGenerator<'a> {
    fuzzer_root: PathBuf,
    build_template: PathBuf,
    warning_header: String,
    catalog: &'a dyn SpecCatalog,
    naming: &'a dyn HalNaming,
    writer: &'a dyn FileWriter,
}

impl<'a> BuildRuleGenerator<'a> {
    /// Create a generator writing under `fuzzer_root`, filling the target
    /// template at `build_template`.
    pub fn new(
        fuzzer_root: PathBuf,
        build_template: PathBuf,
        warning_header: impl Into<String>,
        catalog: &'a dyn SpecCatalog,
        naming: &'a dyn HalNaming,
        writer: &'a dyn FileWriter,
    ) -> Self {
        BuildRuleGenerator {
            fuzzer_root,
            build_template,
            warning_header: warning_header.into(),
            catalog,
            naming,
            writer,
        }
    }

    /// Regenerate every tier. Returns the written paths.
    ///
    /// Every target is validated before the first write.
    pub fn update_all(&self) -> Result<Vec<PathBuf>> {
        let targets = self.catalog.hal_targets()?;
        for target in &targets {
            target.validate()?;
        }
        tracing::info!(
            targets = targets.len(),
            root = %self.fuzzer_root.display(),
            "updating build rules"
        );

        let mut written = vec![self.update_top_level_rule()?];
        written.extend(self.update_second_level_rules(&targets)?);
        written.extend(self.update_hal_dir_rules(&targets)?);
        Ok(written)
    }

    /// `<fuzzer-root>/Android.bp`, including every subdirectory.
    pub fn update_top_level_rule(&self) -> Result<PathBuf> {
        let path = self.fuzzer_root.join(BUILD_RULE_FILE);
        self.writer
            .write_file(&path, &only_subdirs_rule(&self.warning_header, &["*"]))?;
        Ok(path)
    }

    /// `<fuzzer-root>/<namespace>/Android.bp` for each top-level namespace.
    pub fn update_second_level_rules(&self, targets: &[HalTarget]) -> Result<Vec<PathBuf>> {
        for target in targets {
            target.validate()?;
        }
        let mut written = Vec::new();
        for (top_dir, subdirs) in self.group_by_top_dir(targets) {
            let path = join_segments(&self.fuzzer_root, &top_dir).join(BUILD_RULE_FILE);
            self.writer
                .write_file(&path, &only_subdirs_rule(&self.warning_header, subdirs.as_slice()))?;
            written.push(path);
        }
        Ok(written)
    }

    /// `<fuzzer-root>/<name-dir>/<ver-dir>/Android.bp` for each target.
    ///
    /// The template is read once per call.
    pub fn update_hal_dir_rules(&self, targets: &[HalTarget]) -> Result<Vec<PathBuf>> {
        let template = Template::load(&self.build_template)?;
        let mut written = Vec::with_capacity(targets.len());
        for target in targets {
            let hal_dir = self.naming.hal_dir(target);
            let path = join_segments(&self.fuzzer_root, &hal_dir).join(BUILD_RULE_FILE);
            let rule = self.hal_dir_rule(target, &template)?;
            self.writer.write_file(&path, &rule)?;
            written.push(path);
        }
        Ok(written)
    }

    /// Groups HAL directories by their first segment, with members relative
    /// to it in lexical order.
    pub fn group_by_top_dir(&self, targets: &[HalTarget]) -> BTreeMap<String, Vec<String>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for target in targets {
            let hal_dir = self.naming.hal_dir(target);
            let (top_dir, rest) = hal_dir.split_once('/').unwrap_or((hal_dir.as_str(), ""));
            groups
                .entry(top_dir.to_string())
                .or_default()
                .push(rest.to_string());
        }
        for members in groups.values_mut() {
            members.sort();
        }
        groups
    }

    /// Warning header followed by one filled template block per fuzzable
    /// interface of `target`.
    pub fn hal_dir_rule(&self, target: &HalTarget, template: &Template) -> Result<String> {
        let specs = self.catalog.interface_specs(target)?;
        let mut rule = self.warning_header.clone();
        for spec in &specs {
            let iface = interface_name(spec);
            if !is_fuzzable(&iface) {
                tracing::trace!(%target, interface = %iface, "skipping non-fuzzable interface");
                continue;
            }
            let subs = Substitutions::new()
                .with(Placeholder::HalName, target.name.as_str())
                .with(Placeholder::HalNameDir, self.naming.name_dir(&target.name))
                .with(Placeholder::HalVersion, target.version.as_str())
                .with(Placeholder::HalIfaceName, iface);
            rule.push_str(&template.fill(&subs));
        }
        Ok(rule)
    }
}
