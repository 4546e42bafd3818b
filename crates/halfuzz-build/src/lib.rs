//! Build rule generation for HAL function fuzzers.
//!
//! Writes three tiers of `Android.bp` files under the fuzzer root:
//!
//! ```text
//! func_fuzzer/
//!   Android.bp                  — subdirs = ["*"]
//!   automotive/
//!     Android.bp                — subdirs = ["vehicle/V2_0", ...]
//!     vehicle/V2_0/Android.bp   — one fuzzer target per fuzzable interface
//! ```

pub mod generator;
pub mod rules;

pub use generator::BuildRuleGenerator;
pub use rules::{is_fuzzable, only_subdirs_rule};
