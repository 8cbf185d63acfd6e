//! Standard (industrial) and interleaved 2-of-5, plus ITF-14.

use crate::core::checksum::mod10_weight3;
use crate::core::encoding::{Encoding, SymbologyEncoder, widths_to_modules};
use crate::core::error::EncodeError;
use crate::core::validate::{digits_to_string, numeric_digits};
use crate::symbologies::ean::with_check_digit;

/// Standard 2-of-5 digits, inter-character space included.
const STANDARD_CODES: [&str; 10] = [
    "10101110111010",
    "11101010101110",
    "10111010101110",
    "11101110101010",
    "10101110101110",
    "11101011101010",
    "10111011101010",
    "10101011101110",
    "11101010111010",
    "10111010111010",
];
const STANDARD_START: &str = "11011010";
const STANDARD_STOP: &str = "1101011";

/// Narrow/wide layout of each digit; interleaving pairs a bar digit with a space digit.
const INTERLEAVED_WIDTHS: [&[u8; 5]; 10] = [
    b"NNWWN", b"WNNNW", b"NWNNW", b"WWNNN", b"NNWNW", b"WNWNN", b"NWWNN", b"NNNWW", b"WNNWN",
    b"NWNWN",
];
const INTERLEAVED_START: &str = "1010";
const INTERLEAVED_STOP: &str = "1101";

/// Standard 2-of-5; the Industrial identifiers are routed here too.
#[derive(Debug, Clone, Copy)]
pub struct Standard2of5 {
    pub checksum: bool,
}

impl SymbologyEncoder for Standard2of5 {
    fn name(&self) -> &'static str {
        "Standard 2 of 5"
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        let mut digits = numeric_digits(raw, "ES25-1", "Numeric Data Only")?;
        let check = self.checksum.then(|| mod10_weight3(&digits));
        digits.extend(check);

        let mut out = String::from(STANDARD_START);
        for d in &digits {
            out.push_str(STANDARD_CODES[usize::from(*d)]);
        }
        out.push_str(STANDARD_STOP);

        let enc = Encoding::new(out, digits_to_string(&digits));
        Ok(match check {
            Some(c) => enc.with_check(digits_to_string(&[c])),
            None => enc,
        })
    }
}

/// Interleave digit pairs: first digit in the bars, second in the spaces.
fn interleave(digits: &[u8], out: &mut String) {
    for pair in digits.chunks_exact(2) {
        let bars = INTERLEAVED_WIDTHS[usize::from(pair[0])];
        let spaces = INTERLEAVED_WIDTHS[usize::from(pair[1])];
        let mut widths = [0u8; 10];
        for i in 0..5 {
            widths[2 * i] = bars[i];
            widths[2 * i + 1] = spaces[i];
        }
        widths_to_modules(&widths, 1, 2, out);
    }
}

/// Interleaved 2-of-5. Without a check digit the data length must be even; with one,
/// odd (the check digit completes the last pair).
#[derive(Debug, Clone, Copy)]
pub struct Interleaved2of5 {
    pub checksum: bool,
}

impl SymbologyEncoder for Interleaved2of5 {
    fn name(&self) -> &'static str {
        "Interleaved 2 of 5"
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        let wanted_parity = usize::from(self.checksum);
        if raw.chars().count() % 2 != wanted_parity {
            let rule = if self.checksum { "odd" } else { "even" };
            return Err(EncodeError::structural(
                "EI25-1",
                format!("Data length invalid. (Length must be {rule})"),
            ));
        }
        let mut digits = numeric_digits(raw, "EI25-2", "Numeric Data Only")?;
        let check = self.checksum.then(|| mod10_weight3(&digits));
        digits.extend(check);

        let mut out = String::from(INTERLEAVED_START);
        interleave(&digits, &mut out);
        out.push_str(INTERLEAVED_STOP);

        let enc = Encoding::new(out, digits_to_string(&digits));
        Ok(match check {
            Some(c) => enc.with_check(digits_to_string(&[c])),
            None => enc,
        })
    }
}

/// ITF-14: a GTIN-14 in interleaved 2-of-5. Bearer bars belong to the renderer, which
/// sizes them from the module count.
#[derive(Debug, Default, Clone, Copy)]
pub struct Itf14;

impl SymbologyEncoder for Itf14 {
    fn name(&self) -> &'static str {
        "ITF-14"
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        let len = raw.chars().count();
        if len != 13 && len != 14 {
            return Err(EncodeError::structural(
                "EITF14-1",
                "Data length invalid. (Length must be 13 or 14)",
            ));
        }
        let digits = numeric_digits(raw, "EITF14-2", "Numeric only.")?;
        let digits = with_check_digit(&digits[..13], digits.get(13).copied(), "ITF-14");

        let mut out = String::from(INTERLEAVED_START);
        interleave(&digits, &mut out);
        out.push_str(INTERLEAVED_STOP);
        Ok(Encoding::new(out, digits_to_string(&digits)).with_check(digits_to_string(&digits[13..])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn standard_without_check_digit() {
        let enc = Standard2of5 { checksum: false }.encode("1234").unwrap();
        let body: String = [1, 2, 3, 4].iter().map(|d| STANDARD_CODES[*d]).collect();
        assert_eq!(enc.bits, format!("{STANDARD_START}{body}{STANDARD_STOP}"));
        assert_eq!(enc.canonical, "1234");
    }

    #[test]
    fn standard_mod10_appends_weighted_digit() {
        // 4*3 + 3 + 2*3 + 1 = 22 -> 8
        let enc = Standard2of5 { checksum: true }.encode("1234").unwrap();
        assert_eq!(enc.canonical, "12348");
        assert!(enc.bits.starts_with("11011010"));
        assert!(enc.bits.ends_with(&format!("{}1101011", STANDARD_CODES[8])));
    }

    #[test]
    fn interleaved_pairs_bars_and_spaces() {
        let enc = Interleaved2of5 { checksum: false }.encode("12").unwrap();
        // 1 = WNNNW in bars, 2 = NWNNW in spaces
        assert_eq!(enc.bits, "1010".to_string() + "11010010101100" + "1101");
    }

    #[test]
    fn interleaved_length_follows_checksum() {
        let plain = Interleaved2of5 { checksum: false };
        let mod10 = Interleaved2of5 { checksum: true };
        assert_eq!(plain.encode("123").unwrap_err().code(), "EI25-1");
        assert_eq!(mod10.encode("1234").unwrap_err().code(), "EI25-1");
        assert_eq!(mod10.encode("123").unwrap().canonical, "1236");
        assert_eq!(plain.encode("12a4").unwrap_err().code(), "EI25-2");
    }

    #[test]
    fn itf14_completes_gtin() {
        let enc = Itf14.encode("1540014128876").unwrap();
        assert_eq!(enc.canonical, "15400141288763");
        assert_eq!(enc.bits.len(), 4 + 7 * 14 + 4);
        assert_eq!(Itf14.encode("154001412887").unwrap_err().code(), "EITF14-1");
    }
}
