//! UPC/EAN 2- and 5-digit add-on symbols.

use crate::core::encoding::{Encoding, SymbologyEncoder};
use crate::core::error::EncodeError;
use crate::core::validate::numeric_digits;
use crate::symbologies::ean::push_left;

const ADDON_START: &str = "1011";
const ADDON_SEPARATOR: &str = "01";

const SUPP2_PARITY: [&str; 4] = ["LL", "LG", "GL", "GG"];
const SUPP5_PARITY: [&str; 10] = [
    "GGLLL", "GLGLL", "GLLGL", "GLLLG", "LGGLL", "LLGGL", "LLLGG", "LGLGL", "LGLLG", "LLGLG",
];

fn addon_modules(digits: &[u8], parity: &[u8]) -> String {
    let mut out = String::from(ADDON_START);
    for (i, (d, p)) in digits.iter().zip(parity).enumerate() {
        if i > 0 {
            out.push_str(ADDON_SEPARATOR);
        }
        push_left(&mut out, *d, *p);
    }
    out
}

/// Two-digit add-on; parity chosen by the value mod 4.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpcSupplement2;

impl SymbologyEncoder for UpcSupplement2 {
    fn name(&self) -> &'static str {
        "UPC Supplemental 2"
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        if raw.chars().count() != 2 {
            return Err(EncodeError::structural(
                "EUPC-SUP2-1",
                "Invalid data length. (Length = 2 required)",
            ));
        }
        let digits = numeric_digits(raw, "EUPC-SUP2-2", "Numeric Data Only")?;
        let value = digits[0] * 10 + digits[1];
        let parity = SUPP2_PARITY[usize::from(value % 4)].as_bytes();
        Ok(Encoding::new(addon_modules(&digits, parity), raw))
    }
}

/// Five-digit add-on; parity chosen by `(3·(d1+d3+d5) + 9·(d2+d4)) mod 10`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpcSupplement5;

impl SymbologyEncoder for UpcSupplement5 {
    fn name(&self) -> &'static str {
        "UPC Supplemental 5"
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        if raw.chars().count() != 5 {
            return Err(EncodeError::structural(
                "EUPC-SUP5-1",
                "Invalid data length. (Length = 5 required)",
            ));
        }
        let digits = numeric_digits(raw, "EUPC-SUP5-2", "Numeric Data Only")?;
        let odd: u32 = [0, 2, 4].iter().map(|i| u32::from(digits[*i])).sum();
        let even: u32 = [1, 3].iter().map(|i| u32::from(digits[*i])).sum();
        let check = ((odd * 3 + even * 9) % 10) as usize;
        let parity = SUPP5_PARITY[check].as_bytes();
        Ok(Encoding::new(addon_modules(&digits, parity), raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbologies::ean::{G_CODES, L_CODES};
    use pretty_assertions::assert_eq;

    #[test]
    fn two_digit_addon() {
        // 12 % 4 == 0 -> LL
        let enc = UpcSupplement2.encode("12").unwrap();
        let expected = format!("1011{}01{}", L_CODES[1], L_CODES[2]);
        assert_eq!(enc.bits, expected);
    }

    #[test]
    fn five_digit_addon() {
        // 3*(5+4+5) + 9*(2+9) = 141 -> parity GLGLL
        let enc = UpcSupplement5.encode("52495").unwrap();
        assert_eq!(enc.bits.len(), 4 + 5 * 7 + 4 * 2);
        assert_eq!(&enc.bits[4..11], G_CODES[5]);
        assert_eq!(&enc.bits[13..20], L_CODES[2]);
    }

    #[test]
    fn lengths_must_be_exact() {
        assert_eq!(UpcSupplement2.encode("123").unwrap_err().code(), "EUPC-SUP2-1");
        assert_eq!(UpcSupplement5.encode("1234").unwrap_err().code(), "EUPC-SUP5-1");
        assert_eq!(UpcSupplement5.encode("1234x").unwrap_err().code(), "EUPC-SUP5-2");
    }
}
