//! Phone number format validation.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex for international phone numbers: a leading `+`, a non-zero
/// first digit, then 9 to 14 more ASCII digits (10-15 digits total).
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9][0-9]{9,14}$").unwrap());

/// Validates a phone number in international format.
///
/// Spaces and dashes are stripped before matching, so `"+91 8767-763794"`
/// is accepted. The cleaned form is used for validation only: callers
/// forward the original string downstream unchanged, matching the behavior
/// of the deployed service (see DESIGN.md).
///
/// Malformed input never errors; it simply returns `false`.
pub fn validate_phone_number(raw: &str) -> bool {
    let cleaned: String = raw.chars().filter(|c| *c != ' ' && *c != '-').collect();
    PHONE_REGEX.is_match(&cleaned)
}
