//! CPF / CNPJ check-digit validation.

use crate::domain::{error::CheckoutError, transaction::TaxDocument};

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Parses a tax id written with or without the usual `.`, `-`, `/` punctuation.
///
/// Exactly one of the CPF and CNPJ algorithms has to accept the digits.
pub fn parse_tax_document(raw: &str) -> Result<TaxDocument, CheckoutError> {
    let digits = strip_punctuation(raw)
        .ok_or_else(|| CheckoutError::Validation("customerDocument has invalid characters".into()))?;

    match (is_valid_cpf(&digits), is_valid_cnpj(&digits)) {
        (true, false) => Ok(TaxDocument::Cpf(to_string(&digits))),
        (false, true) => Ok(TaxDocument::Cnpj(to_string(&digits))),
        _ => Err(CheckoutError::Validation(
            "customerDocument is not a valid CPF / CNPJ".into(),
        )),
    }
}

pub fn is_valid_cpf(digits: &[u32]) -> bool {
    if digits.len() != 11 || all_same(digits) {
        return false;
    }

    [9, 10].iter().all(|&n| {
        let sum: u32 = digits[..n]
            .iter()
            .enumerate()
            .map(|(i, d)| d * (n as u32 + 1 - i as u32))
            .sum();
        (sum * 10) % 11 % 10 == digits[n]
    })
}

pub fn is_valid_cnpj(digits: &[u32]) -> bool {
    if digits.len() != 14 || all_same(digits) {
        return false;
    }

    cnpj_digit(&digits[..12], &CNPJ_FIRST_WEIGHTS) == digits[12]
        && cnpj_digit(&digits[..13], &CNPJ_SECOND_WEIGHTS) == digits[13]
}

fn cnpj_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        0 | 1 => 0,
        r => 11 - r,
    }
}

fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

fn strip_punctuation(raw: &str) -> Option<Vec<u32>> {
    let mut digits = Vec::with_capacity(14);
    for c in raw.trim().chars() {
        match c {
            '.' | '-' | '/' | ' ' => {}
            c => digits.push(c.to_digit(10)?),
        }
    }
    Some(digits)
}

fn to_string(digits: &[u32]) -> String {
    digits
        .iter()
        .filter_map(|&d| char::from_digit(d, 10))
        .collect()
}
