// piimask-scan/src/validate/mod.rs
//! Numeric validity checks applied after a structural match.
//!
//! These reduce false positives: a digit run with the right shape is only
//! reported when its values are plausible for the category.
//!
//! License: MIT OR Apache-2.0

/// Luhn contribution of one digit, `position` counted from the rightmost digit (0).
///
/// Every second digit from the right is doubled; a doubled value above 9 has 9 subtracted.
#[inline]
pub fn luhn_digit(digit: u32, position: usize) -> u32 {
    if position % 2 == 1 {
        let doubled = digit * 2;
        if doubled > 9 {
            doubled - 9
        } else {
            doubled
        }
    } else {
        digit
    }
}

/// Validates a string of ASCII digits using the Luhn (mod 10) algorithm.
///
/// Returns `false` for empty input or any non-digit byte.
pub fn is_valid_luhn(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0;
    for (position, &b) in digits.iter().rev().enumerate() {
        if !b.is_ascii_digit() {
            return false;
        }
        sum += luhn_digit(u32::from(b - b'0'), position);
    }

    sum % 10 == 0
}

/// Checks SSN components against the never-issued ranges.
///
/// Area `000`, `666` and `900-999`, group `00` and serial `0000` are invalid.
pub fn is_valid_ssn_parts(area: u32, group: u32, serial: u32) -> bool {
    let invalid_area = area == 0 || area == 666 || area >= 900;
    let invalid_group = group == 0;
    let invalid_serial = serial == 0;

    !(invalid_area || invalid_group || invalid_serial)
}

/// Earliest year accepted in a date of birth.
pub const MIN_YEAR: u32 = 1900;
/// Latest year accepted in a date of birth.
pub const MAX_YEAR: u32 = 2099;

pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`; 0 for an invalid month.
pub fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// True for a real calendar date with a year in `MIN_YEAR..=MAX_YEAR`.
pub fn is_valid_date(year: u32, month: u32, day: u32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year) && day >= 1 && day <= days_in_month(year, month)
}
