//! Format checks for card fields.

use chrono::{Datelike, NaiveDate};

const MAX_YEARS_AHEAD: i32 = 19;
const MAX_HOLDER_NAME_LEN: usize = 255;

/// Card number with spaces and dashes removed.
pub fn compact_number(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, ' ' | '-')).collect()
}

pub fn is_valid_number(raw: &str) -> bool {
    let number = compact_number(raw.trim());
    (12..=19).contains(&number.len())
        && number.bytes().all(|b| b.is_ascii_digit())
        && luhn(&number)
}

fn luhn(number: &str) -> bool {
    let sum: u32 = number
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(i, d)| match (i % 2, d * 2) {
            (0, _) => d,
            (_, doubled) if doubled > 9 => doubled - 9,
            (_, doubled) => doubled,
        })
        .sum();
    sum % 10 == 0
}

/// The card is usable through the end of its expiry month.
pub fn is_valid_expiration(raw: &str, today: NaiveDate) -> bool {
    let Some((month, year)) = parse_expiration(raw.trim()) else {
        return false;
    };

    (year, month) >= (today.year(), today.month()) && year <= today.year() + MAX_YEARS_AHEAD
}

fn parse_expiration(raw: &str) -> Option<(u32, i32)> {
    let (month, year) = match raw.split_once(['/', '-', ' ']) {
        Some((m, y)) => (m.trim(), y.trim()),
        None if raw.len() == 4 || raw.len() == 6 => raw.split_at_checked(2)?,
        None => return None,
    };

    if month.is_empty() || month.len() > 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let month: u32 = month.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }

    let year: i32 = match year.len() {
        2 => 2000 + year.parse::<i32>().ok()?,
        4 => year.parse().ok()?,
        _ => return None,
    };
    Some((month, year))
}

/// Rejects blanks, oversized names and strings that look like a card number.
pub fn is_valid_holder_name(raw: &str) -> bool {
    let name = raw.trim();
    !name.is_empty()
        && name.chars().count() <= MAX_HOLDER_NAME_LEN
        && !name.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
}

pub fn is_valid_cvv(raw: &str) -> bool {
    let cvv = raw.trim();
    (3..=4).contains(&cvv.len()) && cvv.bytes().all(|b| b.is_ascii_digit())
}
