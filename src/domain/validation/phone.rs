use crate::domain::error::CheckoutError;

const COUNTRY_CODE: &str = "55";

/// Area codes (DDD) in use in Brazil.
const AREA_CODES: [u8; 67] = [
    11, 12, 13, 14, 15, 16, 17, 18, 19, //
    21, 22, 24, 27, 28, //
    31, 32, 33, 34, 35, 37, 38, //
    41, 42, 43, 44, 45, 46, 47, 48, 49, //
    51, 53, 54, 55, //
    61, 62, 63, 64, 65, 66, 67, 68, 69, //
    71, 73, 74, 75, 77, 79, //
    81, 82, 83, 84, 85, 86, 87, 88, 89, //
    91, 92, 93, 94, 95, 96, 97, 98, 99,
];

/// Validates a Brazilian mobile number and renders it as E.164.
///
/// Accepts `+55 (11) 98765-4321`, `11987654321`, `011 98765 4321` and
/// `5511987654321`. Numbers with a country code other than +55 are rejected.
pub fn normalize_mobile(raw: &str) -> Result<String, CheckoutError> {
    let invalid = || CheckoutError::Validation("customerMobile is not a mobile number".into());

    let raw = raw.trim();
    if raw.chars().count() < 10 {
        return Err(invalid());
    }

    let (international, rest) = match raw.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };

    let mut digits = String::with_capacity(rest.len());
    for c in rest.chars() {
        match c {
            '0'..='9' => digits.push(c),
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return Err(invalid()),
        }
    }

    let national = if international {
        digits.strip_prefix(COUNTRY_CODE).and_then(national_mobile)
    } else {
        national_mobile(&digits).or_else(|| {
            digits
                .strip_prefix(COUNTRY_CODE)
                .and_then(national_mobile)
        })
    };

    national
        .map(|n| format!("+{COUNTRY_CODE}{n}"))
        .ok_or_else(invalid)
}

/// `DD9XXXXXXXX`, optionally behind the `0` trunk prefix.
fn national_mobile(digits: &str) -> Option<&str> {
    let digits = digits.strip_prefix('0').unwrap_or(digits);
    if digits.len() != 11 {
        return None;
    }

    let area: u8 = digits[..2].parse().ok()?;
    if !AREA_CODES.contains(&area) || !digits[2..].starts_with('9') {
        return None;
    }
    Some(digits)
}
