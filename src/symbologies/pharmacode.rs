use crate::core::encoding::{Encoding, SymbologyEncoder};
use crate::core::error::EncodeError;
use crate::core::validate::numeric_digits;

const THIN_BAR: &str = "1";
const THICK_BAR: &str = "111";
const GAP: &str = "00";

const MAX_DIGITS: usize = 6;
const MIN_VALUE: u32 = 3;
const MAX_VALUE: u32 = 131_070;

/// One-track Pharmacode: the value is decomposed into thin (odd) and thick (even)
/// bars, least significant bar rightmost.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pharmacode;

impl SymbologyEncoder for Pharmacode {
    fn name(&self) -> &'static str {
        "Pharmacode"
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        let digits = numeric_digits(raw, "EPHARM-1", "Numeric Data Only")?;
        if digits.len() > MAX_DIGITS {
            return Err(EncodeError::structural(
                "EPHARM-2",
                "Data too long. (Max 6 digits)",
            ));
        }
        let value = digits.iter().fold(0u32, |acc, d| acc * 10 + u32::from(*d));
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(EncodeError::structural(
                "EPHARM-3",
                format!("Invalid value. (Must be between {MIN_VALUE} and {MAX_VALUE})"),
            ));
        }

        let mut bars: Vec<&str> = Vec::new();
        let mut n = value;
        while n != 0 {
            if n % 2 == 0 {
                bars.push(THICK_BAR);
                n = (n - 2) / 2;
            } else {
                bars.push(THIN_BAR);
                n = (n - 1) / 2;
            }
        }
        bars.reverse();
        Ok(Encoding::new(bars.join(GAP), value.to_string()))
    }
}
