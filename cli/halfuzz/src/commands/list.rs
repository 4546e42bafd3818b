//! `halfuzz list` — what the catalog holds and what would be generated.

use anyhow::Result;
use halfuzz_build::is_fuzzable;
use halfuzz_config::{func_fuzzer_test_name, is_testable};
use halfuzz_core::target::interface_name;
use halfuzz_core::{HalNaming, SpecCatalog, VtsNaming};
use serde::Serialize;

/// One catalog entry with the outputs derived from it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TargetSummary {
    pub name: String,
    pub version: String,
    pub hal_dir: String,
    pub fuzzable_interfaces: Vec<String>,
    /// Present when the target gets a config pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_name: Option<String>,
}

/// Summaries for every catalog target, sorted by name then version.
pub fn summarize(catalog: &dyn SpecCatalog) -> Result<Vec<TargetSummary>> {
    let naming = VtsNaming;
    let mut targets = catalog.hal_targets()?;
    targets.sort();

    let mut summaries = Vec::with_capacity(targets.len());
    for target in targets {
        let fuzzable_interfaces = catalog
            .interface_specs(&target)?
            .iter()
            .map(|spec| interface_name(spec))
            .filter(|iface| is_fuzzable(iface))
            .collect();
        let test_name = is_testable(&target.name)
            .then(|| func_fuzzer_test_name(&naming, &target.name, &target.version));
        summaries.push(TargetSummary {
            hal_dir: naming.hal_dir(&target),
            name: target.name,
            version: target.version,
            fuzzable_interfaces,
            test_name,
        });
    }
    Ok(summaries)
}

/// Print the catalog as text or JSON.
pub fn run(catalog: &dyn SpecCatalog, json: bool) -> Result<()> {
    let summaries = summarize(catalog)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No HAL targets found.");
        return Ok(());
    }
    for s in &summaries {
        println!("{}@{}  ({})", s.name, s.version, s.hal_dir);
        if s.fuzzable_interfaces.is_empty() {
            println!("  no fuzzable interfaces");
        }
        for iface in &s.fuzzable_interfaces {
            println!("  fuzz: {iface}");
        }
        match &s.test_name {
            Some(test) => println!("  config: {test}"),
            None => println!("  config: skipped (test HAL)"),
        }
    }
    Ok(())
}
