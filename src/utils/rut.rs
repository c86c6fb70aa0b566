//! Chilean RUT helpers.
//!
//! A RUT is written `NNNNNNNN-D`: a 7–8 digit body and a check digit computed
//! with the modulo-11 algorithm (`0`–`9` or `K`).

use regex::Regex;
use std::sync::LazyLock;

/// Accepted RUT format. Only the shape is checked, not the check digit.
pub static RUT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{7,8}-[0-9kK]$").expect("valid RUT regex"));

/// Computes the check digit for a RUT body.
///
/// Digits are weighted 2, 3, 4, 5, 6, 7, 2, 3, ... from the right. The
/// remainder `11 - (sum mod 11)` maps 11 to `0` and 10 to `K`.
pub fn check_digit(body: u32) -> char {
    let mut body = body;
    let mut sum = 0u32;
    let mut weight = 2u32;

    while body > 0 {
        sum += (body % 10) * weight;
        body /= 10;
        weight = if weight == 7 { 2 } else { weight + 1 };
    }

    match 11 - (sum % 11) {
        11 => '0',
        10 => 'K',
        d => char::from_digit(d, 10).unwrap_or('0'),
    }
}

/// Formats a RUT body with its computed check digit.
pub fn format(body: u32) -> String {
    format!("{}-{}", body, check_digit(body))
}
