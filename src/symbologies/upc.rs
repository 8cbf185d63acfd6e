use tracing::warn;

use crate::core::checksum::mod10_weight3;
use crate::core::encoding::{Encoding, SymbologyEncoder};
use crate::core::error::EncodeError;
use crate::core::validate::{digits_to_string, numeric_digits};
use crate::symbologies::ean::{
    CENTER_GUARD, EDGE_GUARD, L_CODES, R_CODES, push_left, with_check_digit,
};

/// UPC-E parity of the six data digits for number system 0, indexed by check digit.
/// Number system 1 uses the complement.
const UPCE_PARITY_NS0: [&str; 10] = [
    "GGGLLL", "GGLGLL", "GGLLGL", "GGLLLG", "GLGGLL", "GLLGGL", "GLLLGG", "GLGLGL", "GLGLLG",
    "GLLGLG",
];

const UPCE_END_GUARD: &str = "010101";

/// UPC-A: 11 digits, or 12 with the check digit recomputed.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpcA;

impl SymbologyEncoder for UpcA {
    fn name(&self) -> &'static str {
        "UPC-A"
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        let len = raw.chars().count();
        if len != 11 && len != 12 {
            return Err(EncodeError::structural(
                "EUPCA-1",
                "Data length invalid. (Length must be 11 or 12)",
            ));
        }
        let digits = numeric_digits(raw, "EUPCA-2", "Numeric Data Only")?;
        let digits = with_check_digit(&digits[..11], digits.get(11).copied(), "UPC-A");

        let mut out = String::with_capacity(95);
        out.push_str(EDGE_GUARD);
        for d in &digits[..6] {
            out.push_str(L_CODES[usize::from(*d)]);
        }
        out.push_str(CENTER_GUARD);
        for d in &digits[6..] {
            out.push_str(R_CODES[usize::from(*d)]);
        }
        out.push_str(EDGE_GUARD);
        Ok(Encoding::new(out, digits_to_string(&digits)).with_check(digits_to_string(&digits[11..])))
    }
}

/// UPC-E (zero-suppressed UPC-A).
///
/// Accepts the six data digits (number system 0), number system + six digits,
/// number system + six digits + check digit, or a 12-digit UPC-A to compress.
/// The canonical value is always the 8-digit form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpcE;

impl SymbologyEncoder for UpcE {
    fn name(&self) -> &'static str {
        "UPC-E"
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        let len = raw.chars().count();
        if !matches!(len, 6 | 7 | 8 | 12) {
            return Err(EncodeError::structural(
                "EUPCE-1",
                "Invalid data length. (6, 7, 8 or 12 numbers only)",
            ));
        }
        let digits = numeric_digits(raw, "EUPCE-2", "Numeric only.")?;
        let (number_system, data) = match len {
            6 => (0, digits.clone()),
            12 => (digits[0], compress_upca(&digits)?),
            _ => (digits[0], digits[1..7].to_vec()),
        };
        if number_system > 1 {
            return Err(EncodeError::structural(
                "EUPCE-3",
                "Invalid Number System (only 0 & 1 are valid)",
            ));
        }

        let upca = expand_upce(number_system, &data);
        let supplied = match len {
            8 => Some(digits[7]),
            12 => Some(digits[11]),
            _ => None,
        };
        let check = mod10_weight3(&upca);
        if let Some(given) = supplied.filter(|given| *given != check) {
            warn!(
                symbology = "UPC-E",
                given,
                computed = check,
                "replacing supplied check digit"
            );
        }

        let ns0 = UPCE_PARITY_NS0[usize::from(check)].as_bytes();
        let mut out = String::with_capacity(51);
        out.push_str(EDGE_GUARD);
        for (d, p) in data.iter().zip(ns0) {
            let parity = match (number_system, *p) {
                (0, p) => p,
                (_, b'G') => b'L',
                _ => b'G',
            };
            push_left(&mut out, *d, parity);
        }
        out.push_str(UPCE_END_GUARD);

        let mut canonical = vec![number_system];
        canonical.extend_from_slice(&data);
        canonical.push(check);
        Ok(Encoding::new(out, digits_to_string(&canonical)).with_check(digits_to_string(&[check])))
    }
}

/// Expand six UPC-E data digits to the 11-digit UPC-A body (number system included).
fn expand_upce(number_system: u8, d: &[u8]) -> Vec<u8> {
    let mut upca = vec![number_system];
    match d[5] {
        0..=2 => {
            upca.extend_from_slice(&[d[0], d[1], d[5], 0, 0]);
            upca.extend_from_slice(&[0, 0, d[2], d[3], d[4]]);
        }
        3 => {
            upca.extend_from_slice(&[d[0], d[1], d[2], 0, 0]);
            upca.extend_from_slice(&[0, 0, 0, d[3], d[4]]);
        }
        4 => {
            upca.extend_from_slice(&[d[0], d[1], d[2], d[3], 0]);
            upca.extend_from_slice(&[0, 0, 0, 0, d[4]]);
        }
        _ => {
            upca.extend_from_slice(&d[..5]);
            upca.extend_from_slice(&[0, 0, 0, 0, d[5]]);
        }
    }
    upca
}

/// Zero-suppress a 12-digit UPC-A into six UPC-E data digits.
fn compress_upca(digits: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let m = &digits[1..6];
    let p = &digits[6..11];
    let product_below = |limit: u32| {
        p.iter().fold(0u32, |acc, d| acc * 10 + u32::from(*d)) <= limit
    };
    let data = if m[3..] == [0, 0] && m[2] <= 2 && product_below(999) {
        vec![m[0], m[1], p[2], p[3], p[4], m[2]]
    } else if m[3..] == [0, 0] && product_below(99) {
        vec![m[0], m[1], m[2], p[3], p[4], 3]
    } else if m[4] == 0 && product_below(9) {
        vec![m[0], m[1], m[2], m[3], p[4], 4]
    } else if p[..4] == [0, 0, 0, 0] && (5..=9).contains(&p[4]) {
        vec![m[0], m[1], m[2], m[3], m[4], p[4]]
    } else {
        return Err(EncodeError::structural(
            "EUPCE-4",
            "Illegal UPC-A entered for conversion. Unable to convert.",
        ));
    };
    Ok(data)
}
