//! USPS symbols: POSTNET and the Facing Identification Marks.

use crate::core::encoding::{Encoding, SymbologyEncoder};
use crate::core::error::EncodeError;
use crate::core::validate::{digits_to_string, numeric_digits};

/// POSTNET digits as five bars each; `1` is a full bar, `0` a half bar.
const POSTNET_CODES: [&str; 10] = [
    "11000", "00011", "00101", "00110", "01001", "01010", "01100", "10001", "10010", "10100",
];
const POSTNET_FRAME: &str = "1";

/// POSTNET (ZIP, ZIP+4, delivery point). Dashes and spaces are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct Postnet;

impl SymbologyEncoder for Postnet {
    fn name(&self) -> &'static str {
        "Postnet"
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        let cleaned: String = raw.chars().filter(|c| !matches!(c, '-' | ' ')).collect();
        if !matches!(cleaned.chars().count(), 5 | 6 | 9 | 11) {
            return Err(EncodeError::structural(
                "EPOSTNET-1",
                "Invalid data length. (5, 6, 9, or 11 digits only)",
            ));
        }
        let mut digits = numeric_digits(&cleaned, "EPOSTNET-2", "Numeric Data Only")?;
        let sum: u32 = digits.iter().map(|d| u32::from(*d)).sum();
        let check = ((10 - sum % 10) % 10) as u8;
        digits.push(check);

        let mut out = String::from(POSTNET_FRAME);
        for d in &digits {
            out.push_str(POSTNET_CODES[usize::from(*d)]);
        }
        out.push_str(POSTNET_FRAME);
        Ok(Encoding::new(out, digits_to_string(&digits)).with_check(digits_to_string(&[check])))
    }
}

const FIM_CODES: [(char, &str); 4] = [
    ('A', "110010011"),
    ('B', "101101101"),
    ('C', "110101011"),
    ('D', "111010111"),
];

/// Facing Identification Mark A–D.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fim;

impl SymbologyEncoder for Fim {
    fn name(&self) -> &'static str {
        "FIM"
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        let letter = raw.trim().to_ascii_uppercase();
        let pattern = FIM_CODES
            .iter()
            .find(|(c, _)| letter.len() == 1 && letter.starts_with(*c))
            .map(|(_, p)| *p)
            .ok_or_else(|| {
                EncodeError::structural(
                    "EFIM-1",
                    "Could not determine encoding type. (Only pass in A, B, C, or D)",
                )
            })?;

        let mut out = String::with_capacity(pattern.len() * 2);
        for (i, module) in pattern.chars().enumerate() {
            if i > 0 {
                out.push('0');
            }
            out.push(module);
        }
        Ok(Encoding::new(out, letter))
    }
}
