//! MSI (Modified Plessey) and its check-digit variants.

use crate::core::checksum::{msi_mod10, msi_mod11};
use crate::core::encoding::{Encoding, SymbologyEncoder};
use crate::core::error::EncodeError;
use crate::core::validate::{digits_to_string, numeric_digits};

const MSI_HEADER: &str = "110";
const MSI_TRAILER: &str = "1001";
const MSI_ZERO: &str = "100";
const MSI_ONE: &str = "110";

/// Which check digits follow the data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MsiCheck {
    /// Modified Plessey: no check digit.
    #[default]
    None,
    Mod10,
    TwoMod10,
    Mod11,
    Mod11Mod10,
}

fn push_mod10(digits: &mut Vec<u8>) {
    let check = msi_mod10(digits);
    digits.push(check);
}

/// A mod 11 result of 10 is written as the two digits `1 0`.
fn push_mod11(digits: &mut Vec<u8>) {
    match msi_mod11(digits) {
        10 => digits.extend_from_slice(&[1, 0]),
        check => digits.push(check),
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Msi {
    pub check: MsiCheck,
}

impl SymbologyEncoder for Msi {
    fn name(&self) -> &'static str {
        match self.check {
            MsiCheck::None => "Modified Plessey",
            MsiCheck::Mod10 => "MSI Mod 10",
            MsiCheck::TwoMod10 => "MSI 2 Mod 10",
            MsiCheck::Mod11 => "MSI Mod 11",
            MsiCheck::Mod11Mod10 => "MSI Mod 11 Mod 10",
        }
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        let mut digits = numeric_digits(raw, "EMSI-1", "Numeric Data Only")?;
        let data_len = digits.len();
        match self.check {
            MsiCheck::None => {}
            MsiCheck::Mod10 => push_mod10(&mut digits),
            MsiCheck::TwoMod10 => {
                push_mod10(&mut digits);
                push_mod10(&mut digits);
            }
            MsiCheck::Mod11 => push_mod11(&mut digits),
            MsiCheck::Mod11Mod10 => {
                push_mod11(&mut digits);
                push_mod10(&mut digits);
            }
        }

        let mut out = String::with_capacity(MSI_HEADER.len() + digits.len() * 12 + 4);
        out.push_str(MSI_HEADER);
        for d in &digits {
            for bit in (0..4).rev() {
                out.push_str(if (d >> bit) & 1 == 1 { MSI_ONE } else { MSI_ZERO });
            }
        }
        out.push_str(MSI_TRAILER);

        let enc = Encoding::new(out, digits_to_string(&digits));
        Ok(if digits.len() > data_len {
            enc.with_check(digits_to_string(&digits[data_len..]))
        } else {
            enc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn digit_bits_are_msb_first() {
        let enc = Msi { check: MsiCheck::None }.encode("5").unwrap();
        // 5 = 0101
        assert_eq!(enc.bits, "110".to_string() + "100110100110" + "1001");
    }

    #[test]
    fn mod11_then_mod10() {
        // mod 11 of 1234 = 3, mod 10 of 12343 = 0
        let enc = Msi { check: MsiCheck::Mod11Mod10 }.encode("1234").unwrap();
        assert_eq!(enc.canonical, "123430");
        assert_eq!(enc.metadata.check.as_deref(), Some("30"));
        assert!(enc.bits.starts_with(MSI_HEADER));
        assert!(enc.bits.ends_with(MSI_TRAILER));
        assert_eq!(enc.bits.len(), 3 + 6 * 12 + 4);
    }

    #[test]
    fn mod10_variants() {
        assert_eq!(Msi { check: MsiCheck::Mod10 }.encode("1234").unwrap().canonical, "12344");
        let two = Msi { check: MsiCheck::TwoMod10 }.encode("1234").unwrap();
        assert_eq!(two.canonical, "123448");
    }

    #[test]
    fn mod11_ten_becomes_two_digits() {
        // 6*2 = 12, 12 % 11 = 1 -> 11 - 1 = 10
        let enc = Msi { check: MsiCheck::Mod11 }.encode("6").unwrap();
        assert_eq!(enc.canonical, "610");
    }

    #[test]
    fn rejects_non_numeric() {
        let err = Msi { check: MsiCheck::Mod10 }.encode("12a").unwrap_err();
        assert_eq!(err.code(), "EMSI-1");
    }
}
