//! Test module names and the testability rule.

use halfuzz_core::HalNaming;

const TEST_NAME_PREFIX: &str = "VtsHal";
const TEST_NAME_SUFFIX: &str = "FuncFuzzer";

/// Whether a config pair should be generated for a HAL.
///
/// HALs that exist only to exercise the test infrastructure carry `tests`
/// somewhere in their name.
pub fn is_testable(hal_name: &str) -> bool {
    !hal_name.contains("tests")
}

/// Test module name for a HAL target.
///
/// `("vibrator", "7.4")` → `VtsHalVibratorV7_4FuncFuzzer`.
pub fn func_fuzzer_test_name(naming: &dyn HalNaming, hal_name: &str, hal_version: &str) -> String {
    let mut name = String::from(TEST_NAME_PREFIX);
    for segment in hal_name.split('.') {
        name.push_str(&title_case(segment));
    }
    name.push_str(&naming.version_dir(hal_version));
    name.push_str(TEST_NAME_SUFFIX);
    name
}

/// Uppercase the first letter of every run of letters and lowercase the rest.
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut in_word = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use halfuzz_core::VtsNaming;

    use super::*;

    #[test]
    fn names_containing_tests_are_not_testable() {
        assert!(!is_testable("tests.foo"));
        assert!(!is_testable("foo.tests"));
        assert!(!is_testable("mytestsuite"));
        assert!(is_testable("vibrator"));
        assert!(is_testable("test.foo"));
        assert!(is_testable("Tests"));
    }

    #[test]
    fn test_name_single_segment() {
        assert_eq!(
            func_fuzzer_test_name(&VtsNaming, "vibrator", "7.4"),
            "VtsHalVibratorV7_4FuncFuzzer"
        );
    }

    #[test]
    fn test_name_multiple_segments() {
        assert_eq!(
            func_fuzzer_test_name(&VtsNaming, "foo.bar", "1.0"),
            "VtsHalFooBarV1_0FuncFuzzer"
        );
        assert_eq!(
            func_fuzzer_test_name(&VtsNaming, "automotive.vehicle", "2.0"),
            "VtsHalAutomotiveVehicleV2_0FuncFuzzer"
        );
    }

    #[test]
    fn title_case_follows_letter_runs() {
        assert_eq!(title_case("vibrator"), "Vibrator");
        assert_eq!(title_case("NFC"), "Nfc");
        assert_eq!(title_case("a2dp"), "A2Dp");
        assert_eq!(title_case("wifi_hostapd"), "Wifi_Hostapd");
        assert_eq!(title_case(""), "");
    }
}
