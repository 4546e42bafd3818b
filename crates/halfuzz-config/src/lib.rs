//! Test configuration generation for HAL function fuzzers.
//!
//! For every testable HAL target, fills the `template.mk` / `template.xml`
//! pair and writes them to
//! `<config-root>/<name-dir>/<ver-dir>/func_fuzzer/{Android.mk,AndroidTest.xml}`.

pub mod generator;
pub mod naming;

pub use generator::ConfigGenerator;
pub use naming::{func_fuzzer_test_name, is_testable};
