//! Phone number utilities
//!
//! Normalization and format checks for SMS recipient numbers. The accepted
//! format is E.164-like: a leading `+`, a non-zero first digit, then 6 to 14
//! further digits (7 to 15 digits total).

use once_cell::sync::Lazy;
use regex::Regex;

// E.164-like recipient number: +, digit 1-9, then 6 to 14 digits
static SMS_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9][0-9]{6,14}$").unwrap()
});

/// Normalize a phone number by stripping common formatting characters:
/// whitespace, dashes, parentheses, and dots. Other characters are left in
/// place so that genuinely malformed input still fails the format check.
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| {
            !c.is_whitespace() && !matches!(c, '-' | '(' | ')' | '.')
        })
        .collect()
}

/// Check whether a phone number is a valid SMS recipient after normalization.
pub fn is_valid_sms_phone(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    SMS_PHONE_REGEX.is_match(&normalized)
}

/// Check whether an already-normalized number matches the recipient format.
pub fn matches_sms_phone_format(normalized: &str) -> bool {
    SMS_PHONE_REGEX.is_match(normalized)
}
