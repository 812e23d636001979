// Input validation utilities

use anyhow::Result;
use log::error;
use regex::Regex;
use std::sync::OnceLock;

/// Exactly five ASCII digits. `\d` would also accept non-ASCII Unicode digits.
const POSTCODE_PATTERN: &str = r"^[0-9]{5}$";
const OFFICE_PREFIX_PATTERN: &str = r"^[0-9]{2}$";

type RegexCell = OnceLock<std::result::Result<Regex, String>>;

/// Compile `pattern` once per cell; a broken pattern stays an error on every call.
fn cached_regex(cell: &'static RegexCell, pattern: &str) -> Result<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| {
            anyhow::anyhow!(
                "Internal error: failed to compile regex '{}': {}",
                pattern,
                e
            )
        })
}

fn postcode_regex() -> Result<&'static Regex> {
    static RE: RegexCell = OnceLock::new();
    cached_regex(&RE, POSTCODE_PATTERN)
}

fn office_prefix_regex() -> Result<&'static Regex> {
    static RE: RegexCell = OnceLock::new();
    cached_regex(&RE, OFFICE_PREFIX_PATTERN)
}

/// True when the (already trimmed) value is a 5-digit postal code.
pub fn is_five_digit_postcode(value: &str) -> bool {
    match postcode_regex() {
        Ok(re) => re.is_match(value),
        Err(e) => {
            error!("[PHASE: validation] [STEP: postcode] {:#}", e);
            false
        }
    }
}

/// Postal-code proximity check: the first two characters must equal the office prefix.
///
/// Blank or too-short input never matches.
pub fn check_postcode_prefix(postcode: &str, office_prefix: &str) -> bool {
    let clean = postcode.trim();
    if clean.is_empty() {
        return false;
    }
    match clean.get(..2) {
        Some(head) => head == office_prefix,
        None => false,
    }
}

/// Validate a configured office prefix: exactly two ASCII digits.
pub fn validate_office_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(anyhow::anyhow!("Office postcode prefix cannot be empty"));
    }

    if !office_prefix_regex()?.is_match(prefix) {
        return Err(anyhow::anyhow!(
            "Office postcode prefix must be exactly two digits, got '{}'",
            prefix
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Regex cache
    // -------------------------------------------------------------------------

    #[test]
    fn broken_pattern_reports_error_every_time() {
        static BROKEN: RegexCell = OnceLock::new();
        for _ in 0..2 {
            let err = cached_regex(&BROKEN, "([0-9]").unwrap_err();
            assert!(
                err.to_string().contains("failed to compile regex"),
                "Unexpected error: {}",
                err
            );
        }
    }

    #[test]
    fn compiled_patterns_are_reused() {
        let first = office_prefix_regex().expect("prefix regex");
        let second = office_prefix_regex().expect("prefix regex");
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(
            postcode_regex().expect("postcode regex"),
            postcode_regex().expect("postcode regex")
        ));
    }

    #[test]
    fn five_digit_postcode_accepts_only_ascii_digits() {
        assert!(is_five_digit_postcode("10115"));
        assert!(is_five_digit_postcode("00000"));

        assert!(!is_five_digit_postcode("1011"));
        assert!(!is_five_digit_postcode("101150"));
        assert!(!is_five_digit_postcode("1O115"));
        assert!(!is_five_digit_postcode(""));
        // Arabic-Indic digits are Unicode digits, not postal codes.
        assert!(!is_five_digit_postcode("١٠١١٥"));
    }

    #[test]
    fn prefix_check_compares_first_two_characters() {
        assert!(check_postcode_prefix("10115", "10"));
        assert!(check_postcode_prefix("  10999 ", "10"));
        assert!(!check_postcode_prefix("20115", "10"));
        assert!(!check_postcode_prefix("01115", "10"));
    }

    #[test]
    fn prefix_check_rejects_blank_and_short_input() {
        assert!(!check_postcode_prefix("", "10"));
        assert!(!check_postcode_prefix("   ", "10"));
        assert!(!check_postcode_prefix("1", "10"));
    }

    #[test]
    fn prefix_check_does_not_panic_on_multibyte_input() {
        assert!(!check_postcode_prefix("é1234", "10"));
    }

    #[test]
    fn office_prefix_must_be_two_digits() {
        assert!(validate_office_prefix("10").is_ok());
        assert!(validate_office_prefix("99").is_ok());

        for bad in ["", "1", "101", "ab", "1a"] {
            assert!(
                validate_office_prefix(bad).is_err(),
                "Prefix '{}' should be rejected",
                bad
            );
        }
    }
}
