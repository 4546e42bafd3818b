//! The config generator.

use std::path::PathBuf;

use halfuzz_core::layout::{join_segments, CONFIG_MK_FILE, CONFIG_XML_FILE, FUNC_FUZZER_DIR};
use halfuzz_core::{
    FileWriter, HalNaming, HalTarget, Placeholder, Result, SpecCatalog, Substitutions, Template,
};

use crate::naming::{func_fuzzer_test_name, is_testable};

/// Generates `Android.mk` and `AndroidTest.xml` for function fuzzers.
pub struct ConfigGenerator<'a> {
    config_root: PathBuf,
    mk_template: PathBuf,
    xml_template: PathBuf,
    catalog: &'a dyn SpecCatalog,
    naming: &'a dyn HalNaming,
    writer: &'a dyn FileWriter,
}

impl<'a> ConfigGenerator<'a> {
    pub fn new(
        config_root: PathBuf,
        mk_template: PathBuf,
        xml_template: PathBuf,
        catalog: &'a dyn SpecCatalog,
        naming: &'a dyn HalNaming,
        writer: &'a dyn FileWriter,
    ) -> Self {
        ConfigGenerator {
            config_root,
            mk_template,
            xml_template,
            catalog,
            naming,
            writer,
        }
    }

    /// Regenerate the config pair of every testable target.
    ///
    /// Both templates are read before anything is written. The first failed
    /// write aborts the pass. Returns the written paths.
    pub fn update_func_fuzzer_configs(&self) -> Result<Vec<PathBuf>> {
        let mk_template = Template::load(&self.mk_template)?;
        let xml_template = Template::load(&self.xml_template)?;
        let targets = self.catalog.hal_targets()?;
        for target in &targets {
            target.validate()?;
        }
        tracing::info!(
            targets = targets.len(),
            root = %self.config_root.display(),
            "updating func fuzzer configs"
        );

        let mut written = Vec::new();
        for target in &targets {
            if !is_testable(&target.name) {
                tracing::warn!(%target, "skipping untestable HAL");
                continue;
            }
            let dir = self.config_dir(target);
            let subs = self.substitutions(target);
            let outputs = [
                (CONFIG_MK_FILE, &mk_template),
                (CONFIG_XML_FILE, &xml_template),
            ];
            for (file, template) in outputs {
                let path = dir.join(file);
                if let Err(e) = self.writer.write_file(&path, &template.fill(&subs)) {
                    tracing::error!(%target, error = %e, "config generation failed");
                    return Err(e);
                }
                written.push(path);
            }
        }
        Ok(written)
    }

    /// `<config-root>/<name-dir>/<ver-dir>/func_fuzzer`
    pub fn config_dir(&self, target: &HalTarget) -> PathBuf {
        join_segments(&self.config_root, &self.naming.hal_dir(target)).join(FUNC_FUZZER_DIR)
    }

    /// Values for `{TEST_NAME}`, `{HAL_NAME}` and `{HAL_VERSION}`.
    pub fn substitutions(&self, target: &HalTarget) -> Substitutions {
        Substitutions::new()
            .with(
                Placeholder::TestName,
                func_fuzzer_test_name(self.naming, &target.name, &target.version),
            )
            .with(Placeholder::HalName, target.name.as_str())
            .with(Placeholder::HalVersion, target.version.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use halfuzz_core::{CoreError, MemoryWriter, StaticCatalog, VtsNaming};

    use super::*;

    struct Templates {
        _dir: tempfile::TempDir,
        mk: PathBuf,
        xml: PathBuf,
    }

    fn templates() -> Templates {
        let dir = tempfile::tempdir().unwrap();
        let mk = dir.path().join("template.mk");
        let xml = dir.path().join("template.xml");
        std::fs::write(
            &mk,
            "LOCAL_MODULE := {TEST_NAME}\nHAL := {HAL_NAME}@{HAL_VERSION}\n",
        )
        .unwrap();
        std::fs::write(&xml, "<test module=\"{TEST_NAME}\" hal=\"{HAL_NAME}\" />\n").unwrap();
        Templates { _dir: dir, mk, xml }
    }

    #[test]
    fn writes_pair_per_testable_target() {
        let t = templates();
        let catalog = StaticCatalog::new()
            .with_target(HalTarget::new("vibrator", "7.4"), ["IVibrator.vts"])
            .with_target(HalTarget::new("tests.foo", "1.0"), ["IFoo.vts"]);
        let writer = MemoryWriter::new();
        let gen = ConfigGenerator::new(
            PathBuf::from("/cfg"),
            t.mk.clone(),
            t.xml.clone(),
            &catalog,
            &VtsNaming,
            &writer,
        );
        let written = gen.update_func_fuzzer_configs().unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(writer.len(), 2);

        let mk = writer
            .get(Path::new("/cfg/vibrator/V7_4/func_fuzzer/Android.mk"))
            .unwrap();
        assert_eq!(
            mk,
            "LOCAL_MODULE := VtsHalVibratorV7_4FuncFuzzer\nHAL := vibrator@7.4\n"
        );
        let xml = writer
            .get(Path::new("/cfg/vibrator/V7_4/func_fuzzer/AndroidTest.xml"))
            .unwrap();
        assert_eq!(
            xml,
            "<test module=\"VtsHalVibratorV7_4FuncFuzzer\" hal=\"vibrator\" />\n"
        );
    }

    #[test]
    fn config_dir_mirrors_hal_namespace() {
        let catalog = StaticCatalog::new();
        let writer = MemoryWriter::new();
        let gen = ConfigGenerator::new(
            PathBuf::from("/cfg"),
            PathBuf::new(),
            PathBuf::new(),
            &catalog,
            &VtsNaming,
            &writer,
        );
        assert_eq!(
            gen.config_dir(&HalTarget::new("automotive.vehicle", "2.0")),
            Path::new("/cfg/automotive/vehicle/V2_0/func_fuzzer")
        );
    }

    #[test]
    fn empty_version_is_rejected_before_writing() {
        let t = templates();
        let catalog = StaticCatalog::new()
            .with_target(HalTarget::new("nfc", "1.0"), ["INfc.vts"])
            .with_target(HalTarget::new("light", ""), ["ILight.vts"]);
        let writer = MemoryWriter::new();
        let gen = ConfigGenerator::new(
            PathBuf::from("/cfg"),
            t.mk.clone(),
            t.xml.clone(),
            &catalog,
            &VtsNaming,
            &writer,
        );
        let err = gen.update_func_fuzzer_configs().unwrap_err();
        assert!(matches!(err, CoreError::Catalog { .. }));
        assert!(writer.is_empty());
    }

    #[test]
    fn missing_template_writes_nothing() {
        let t = templates();
        let catalog =
            StaticCatalog::new().with_target(HalTarget::new("nfc", "1.0"), ["INfc.vts"]);
        let writer = MemoryWriter::new();
        let gen = ConfigGenerator::new(
            PathBuf::from("/cfg"),
            t.mk.clone(),
            t.mk.with_file_name("absent.xml"),
            &catalog,
            &VtsNaming,
            &writer,
        );
        let err = gen.update_func_fuzzer_configs().unwrap_err();
        assert!(matches!(err, CoreError::TemplateRead { .. }));
        assert!(writer.is_empty());
    }
}
