//! EAN-13, EAN-8 and the EAN-13 front ends (JAN-13, ISBN/Bookland).
//!
//! The digit tables here are shared with UPC-A, UPC-E and the UPC supplements.

use tracing::{instrument, warn};

use crate::core::checksum::mod10_weight3;
use crate::core::encoding::{Encoding, SymbologyEncoder};
use crate::core::error::EncodeError;
use crate::core::validate::{digits_to_string, numeric_digits};
use crate::symbologies::gs1::country_for_prefix;

/// Left-hand odd parity ("A") digit patterns.
pub(crate) const L_CODES: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011", "0110001", "0101111", "0111011",
    "0110111", "0001011",
];
/// Left-hand even parity ("B") digit patterns.
pub(crate) const G_CODES: [&str; 10] = [
    "0100111", "0110011", "0011011", "0100001", "0011101", "0111001", "0000101", "0010001",
    "0001001", "0010111",
];
/// Right-hand ("C") digit patterns.
pub(crate) const R_CODES: [&str; 10] = [
    "1110010", "1100110", "1101100", "1000010", "1011100", "1001110", "1010000", "1000100",
    "1001000", "1110100",
];

pub(crate) const EDGE_GUARD: &str = "101";
pub(crate) const CENTER_GUARD: &str = "01010";

/// Parity of the six left-hand digits, selected by the leading (13th) digit.
const EAN13_PARITY: [&str; 10] = [
    "LLLLLL", "LLGLGG", "LLGGLG", "LLGGGL", "LGLLGG", "LGGLLG", "LGGGLL", "LGLGLG", "LGLGGL",
    "LGGLGL",
];

/// Push the left-hand pattern of `digit` for parity `L` or `G`.
pub(crate) fn push_left(out: &mut String, digit: u8, parity: u8) {
    let table = if parity == b'G' { &G_CODES } else { &L_CODES };
    out.push_str(table[usize::from(digit)]);
}

/// Append the recomputed GTIN check digit to `body`. A supplied digit that differs is
/// replaced, with a warning.
pub(crate) fn with_check_digit(body: &[u8], supplied: Option<u8>, name: &str) -> Vec<u8> {
    let check = mod10_weight3(body);
    if let Some(given) = supplied.filter(|given| *given != check) {
        warn!(
            symbology = name,
            given, computed = check, "replacing supplied check digit"
        );
    }
    let mut digits = body.to_vec();
    digits.push(check);
    digits
}

/// Module pattern of a complete 13-digit EAN.
pub(crate) fn ean13_modules(digits: &[u8]) -> String {
    let mut out = String::with_capacity(95);
    out.push_str(EDGE_GUARD);
    let parity = EAN13_PARITY[usize::from(digits[0])].as_bytes();
    for (d, p) in digits[1..7].iter().zip(parity) {
        push_left(&mut out, *d, *p);
    }
    out.push_str(CENTER_GUARD);
    for d in &digits[7..13] {
        out.push_str(R_CODES[usize::from(*d)]);
    }
    out.push_str(EDGE_GUARD);
    out
}

fn ean13_from_body(body: &[u8], supplied: Option<u8>) -> Encoding {
    let digits = with_check_digit(body, supplied, "EAN-13");
    let check = digits[12];
    Encoding::new(ean13_modules(&digits), digits_to_string(&digits))
        .with_check(digits_to_string(&[check]))
        .with_country(country_for_prefix(&digits))
}

/// EAN-13: 12 digits, or 13 with the check digit recomputed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ean13;

impl SymbologyEncoder for Ean13 {
    fn name(&self) -> &'static str {
        "EAN-13"
    }

    #[instrument(level = "debug", skip(self))]
    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        let len = raw.chars().count();
        if len != 12 && len != 13 {
            return Err(EncodeError::structural(
                "EEAN13-1",
                "Data length invalid. (Length must be 12 or 13)",
            ));
        }
        let digits = numeric_digits(raw, "EEAN13-2", "Numeric Data Only")?;
        Ok(ean13_from_body(&digits[..12], digits.get(12).copied()))
    }
}

/// EAN-8: 7 digits, or 8 with the check digit recomputed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ean8;

impl SymbologyEncoder for Ean8 {
    fn name(&self) -> &'static str {
        "EAN-8"
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        let len = raw.chars().count();
        if len != 7 && len != 8 {
            return Err(EncodeError::structural(
                "EEAN8-1",
                "Invalid data length. (7 or 8 numbers only)",
            ));
        }
        let digits = numeric_digits(raw, "EEAN8-2", "Numeric only.")?;
        let digits = with_check_digit(&digits[..7], digits.get(7).copied(), "EAN-8");

        let mut out = String::with_capacity(67);
        out.push_str(EDGE_GUARD);
        for d in &digits[..4] {
            out.push_str(L_CODES[usize::from(*d)]);
        }
        out.push_str(CENTER_GUARD);
        for d in &digits[4..] {
            out.push_str(R_CODES[usize::from(*d)]);
        }
        out.push_str(EDGE_GUARD);
        Ok(Encoding::new(out, digits_to_string(&digits)).with_check(digits_to_string(&digits[7..])))
    }
}

/// JAN-13: an EAN-13 carrying a Japanese (45 or 49) prefix.
#[derive(Debug, Default, Clone, Copy)]
pub struct Jan13;

impl SymbologyEncoder for Jan13 {
    fn name(&self) -> &'static str {
        "JAN-13"
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        if !(raw.starts_with("45") || raw.starts_with("49")) {
            return Err(EncodeError::structural(
                "EJAN13-1",
                "Invalid Country Code for JAN13 (45 or 49 required)",
            ));
        }
        Ean13.encode(raw)
    }
}

/// ISBN / Bookland: ISBN-10 bodies are moved under the 978 prefix, ISBN-13 values
/// are encoded as EAN-13. Hyphens and spaces are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct Isbn;

impl SymbologyEncoder for Isbn {
    fn name(&self) -> &'static str {
        "ISBN"
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        let cleaned: String = raw.chars().filter(|c| !matches!(c, '-' | ' ')).collect();
        let len = cleaned.chars().count();
        // The ISBN-10 check character may be 'X'; it is dropped along with any check digit.
        let body = match len {
            10 => cleaned
                .strip_suffix(|c: char| c.is_ascii_digit() || c == 'X' || c == 'x')
                .unwrap_or(&cleaned),
            _ => cleaned.as_str(),
        };
        let digits = numeric_digits(body, "EBOOKLANDISBN-1", "Numeric Data Only")?;
        let bookland = digits.starts_with(&[9, 7, 8]) || digits.starts_with(&[9, 7, 9]);
        let body: Vec<u8> = match (len, bookland) {
            (9 | 10, _) => [9, 7, 8].into_iter().chain(digits).collect(),
            (12, true) => digits,
            (13, true) => digits[..12].to_vec(),
            _ => {
                return Err(EncodeError::structural(
                    "EBOOKLANDISBN-2",
                    "Invalid input. Must start with 978 or 979 and be 9, 10, 12 or 13 characters long.",
                ));
            }
        };
        // An ISBN-13's own check digit is validated by the EAN-13 rules; ISBN-10 check
        // characters use a different formula and are never compared.
        let supplied = if len == 13 {
            cleaned.bytes().nth(12).map(|b| b - b'0')
        } else {
            None
        };
        Ok(ean13_from_body(&body, supplied))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ean13_layout_and_country() {
        let enc = Ean13.encode("400638133393").unwrap();
        assert_eq!(enc.canonical, "4006381333931");
        assert_eq!(enc.bits.len(), 95);
        assert!(enc.bits.starts_with("101"));
        assert!(enc.bits.ends_with("101"));
        assert_eq!(&enc.bits[45..50], CENTER_GUARD);
        assert_eq!(enc.metadata.country.as_deref(), Some("GERMANY"));
        assert_eq!(enc.metadata.check.as_deref(), Some("1"));
        // leading 4 selects LGLLGG for the left half; first left digit '0' uses L
        assert_eq!(&enc.bits[3..10], L_CODES[0]);
        assert_eq!(&enc.bits[10..17], G_CODES[0]);
    }

    #[test]
    fn ean13_replaces_wrong_check_digit() {
        let enc = Ean13.encode("4006381333930").unwrap();
        assert_eq!(enc.canonical, "4006381333931");
    }

    #[test]
    fn ean13_rejects_bad_length_and_letters() {
        assert_eq!(Ean13.encode("12345").unwrap_err().code(), "EEAN13-1");
        assert_eq!(Ean13.encode("40063813339A").unwrap_err().code(), "EEAN13-2");
    }

    #[test]
    fn ean8_computes_check_digit() {
        let enc = Ean8.encode("9638507").unwrap();
        assert_eq!(enc.canonical, "96385074");
        assert_eq!(enc.bits.len(), 67);
        assert_eq!(&enc.bits[3..10], L_CODES[9]);
        assert_eq!(&enc.bits[57..64], R_CODES[4]);
    }

    #[test]
    fn jan13_requires_japanese_prefix() {
        assert_eq!(Jan13.encode("590123412345").unwrap_err().code(), "EJAN13-1");
        let enc = Jan13.encode("490123456789").unwrap();
        assert_eq!(enc.metadata.country.as_deref(), Some("JAPAN"));
    }

    #[test]
    fn isbn10_moves_under_bookland_prefix() {
        let enc = Isbn.encode("0-306-40615-2").unwrap();
        assert_eq!(enc.canonical, "9780306406157");
        let with_x = Isbn.encode("080442957X").unwrap();
        assert_eq!(with_x.canonical, "9780804429573");
    }

    #[test]
    fn isbn13_is_plain_ean13() {
        let isbn = Isbn.encode("9780306406157").unwrap();
        let ean = Ean13.encode("9780306406157").unwrap();
        assert_eq!(isbn.bits, ean.bits);
        assert_eq!(Isbn.encode("1234567890123").unwrap_err().code(), "EBOOKLANDISBN-2");
    }
}
