//! Build rule text and the interface fuzzability rule.

/// Interface spec reserved for type-only definitions.
const TYPES_SPEC: &str = "types";
/// Suffix of asynchronous callback interfaces.
const CALLBACK_SUFFIX: &str = "Callback";

/// Whether a fuzzer target should be generated for an interface.
///
/// `interface` is the spec name without its extension. Type definitions and
/// callback interfaces have nothing to call into and are skipped. Matching is
/// case-sensitive.
pub fn is_fuzzable(interface: &str) -> bool {
    interface != TYPES_SPEC && !interface.ends_with(CALLBACK_SUFFIX)
}

/// A build rule that only pulls in the listed subdirectories.
pub fn only_subdirs_rule<S: AsRef<str>>(warning_header: &str, subdirs: &[S]) -> String {
    let mut rule = String::from(warning_header);
    rule.push_str("subdirs = [\n");
    for subdir in subdirs {
        rule.push_str(&format!("    \"{}\",\n", subdir.as_ref()));
    }
    rule.push_str("]\n");
    rule
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_is_not_fuzzable() {
        assert!(!is_fuzzable("types"));
    }

    #[test]
    fn callbacks_are_not_fuzzable() {
        assert!(!is_fuzzable("IVibratorCallback"));
        assert!(!is_fuzzable("ICallback"));
        assert!(!is_fuzzable("xCallback"));
    }

    #[test]
    fn other_interfaces_are_fuzzable() {
        assert!(is_fuzzable("IVibrator"));
        assert!(is_fuzzable("Types"));
        assert!(is_fuzzable("types2"));
        assert!(is_fuzzable("ICallbackRegistry"));
        assert!(is_fuzzable("IVibratorcallback"));
    }

    #[test]
    fn subdirs_rule_format() {
        let rule = only_subdirs_rule("// header\n\n", &["V1_0", "V1_1"]);
        assert_eq!(
            rule,
            "// header\n\nsubdirs = [\n    \"V1_0\",\n    \"V1_1\",\n]\n"
        );
    }

    #[test]
    fn wildcard_subdirs_rule() {
        assert_eq!(only_subdirs_rule("", &["*"]), "subdirs = [\n    \"*\",\n]\n");
    }
}
