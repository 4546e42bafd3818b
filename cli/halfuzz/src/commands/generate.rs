//! `halfuzz build-rules`, `halfuzz configs` and `halfuzz all`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use halfuzz_build::BuildRuleGenerator;
use halfuzz_config::ConfigGenerator;
use halfuzz_core::{FileWriter, FsWriter, MemoryWriter, VtsNaming};

use crate::manifest::Settings;

/// Which generators to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outputs {
    BuildRules,
    Configs,
    All,
}

impl Outputs {
    fn build_rules(self) -> bool {
        matches!(self, Outputs::BuildRules | Outputs::All)
    }

    fn configs(self) -> bool {
        matches!(self, Outputs::Configs | Outputs::All)
    }
}

/// Regenerate the selected outputs.
///
/// With `dry_run`, files are rendered in memory and only their paths are
/// printed.
pub fn run(settings: &Settings, outputs: Outputs, dry_run: bool) -> Result<()> {
    if dry_run {
        let writer = MemoryWriter::new();
        generate(settings, outputs, &writer)?;
        for path in writer.paths() {
            println!("{}", path.display());
        }
        println!("{} files would be written (dry run)", writer.len());
    } else {
        let written = generate(settings, outputs, &FsWriter)?;
        println!("Wrote {} files", written.len());
    }
    Ok(())
}

pub(crate) fn generate(
    settings: &Settings,
    outputs: Outputs,
    writer: &dyn FileWriter,
) -> Result<Vec<PathBuf>> {
    let naming = VtsNaming;
    let mut written = Vec::new();

    if outputs.build_rules() {
        let generator = BuildRuleGenerator::new(
            settings.layout.fuzzer_root.clone(),
            settings.layout.build_template.clone(),
            settings.warning_header.as_str(),
            &*settings.catalog,
            &naming,
            writer,
        );
        written.extend(generator.update_all().context("updating build rules")?);
    }

    if outputs.configs() {
        let generator = ConfigGenerator::new(
            settings.layout.config_root.clone(),
            settings.layout.config_mk_template(),
            settings.layout.config_xml_template(),
            &*settings.catalog,
            &naming,
            writer,
        );
        written.extend(
            generator
                .update_func_fuzzer_configs()
                .context("updating func fuzzer configs")?,
        );
    }

    Ok(written)
}
