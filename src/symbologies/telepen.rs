//! Telepen, with numeric compression chosen from the leading and trailing digit runs.

use std::fmt;

use tracing::{debug, instrument};

use crate::core::checksum::telepen_mod127;
use crate::core::encoding::{Encoding, SymbologyEncoder};
use crate::core::error::EncodeError;
use crate::core::validate::require_data;

/// Sixteen-module patterns for ASCII 0..=127 (even parity, least significant bit first).
const TELEPEN_CODES: [&str; 128] = [
    "1110111011101110", "1011101110111010", "1110001110111010", "1010111011101110",
    "1110101110111010", "1011100011101110", "1000100011101110", "1010101110111010",
    "1110111000111010", "1011101011101110", "1110001011101110", "1010111000111010",
    "1110101011101110", "1010001000111010", "1000101000111010", "1010101011101110",
    "1110111010111010", "1011101110001110", "1110001110001110", "1010111010111010",
    "1110101110001110", "1011100010111010", "1000100010111010", "1010101110001110",
    "1110100010001110", "1011101010111010", "1110001010111010", "1010100010001110",
    "1110101010111010", "1010001010001110", "1000101010001110", "1010101010111010",
    "1110111011100010", "1011101110101110", "1110001110101110", "1010111011100010",
    "1110101110101110", "1011100011100010", "1000100011100010", "1010101110101110",
    "1110111000101110", "1011101011100010", "1110001011100010", "1010111000101110",
    "1110101011100010", "1010001000101110", "1000101000101110", "1010101011100010",
    "1110111010101110", "1011101000100010", "1110001000100010", "1010111010101110",
    "1110101000100010", "1011100010101110", "1000100010101110", "1010101000100010",
    "1110100010100010", "1011101010101110", "1110001010101110", "1010100010100010",
    "1110101010101110", "1010001010100010", "1000101010100010", "1010101010101110",
    "1110111011101010", "1011101110111000", "1110001110111000", "1010111011101010",
    "1110101110111000", "1011100011101010", "1000100011101010", "1010101110111000",
    "1110111000111000", "1011101011101010", "1110001011101010", "1010111000111000",
    "1110101011101010", "1010001000111000", "1000101000111000", "1010101011101010",
    "1110111010111000", "1011101110001010", "1110001110001010", "1010111010111000",
    "1110101110001010", "1011100010111000", "1000100010111000", "1010101110001010",
    "1110100010001010", "1011101010111000", "1110001010111000", "1010100010001010",
    "1110101010111000", "1010001010001010", "1000101010001010", "1010101010111000",
    "1110111010001000", "1011101110101010", "1110001110101010", "1010111010001000",
    "1110101110101010", "1011100010001000", "1000100010001000", "1010101110101010",
    "1110111000101010", "1011101010001000", "1110001010001000", "1010111000101010",
    "1110101010001000", "1010001000101010", "1000101000101010", "1010101010001000",
    "1110111010101010", "1011101000101000", "1110001000101000", "1010111010101010",
    "1110101000101000", "1011100010101010", "1000100010101010", "1010101000101000",
    "1110100010101000", "1011101010101010", "1110001010101010", "1010100010101000",
    "1110101010101010", "1010001010101000", "1000101010101000", "1010101010101010",
];

/// `_` opens every symbol and `z` closes it; neither counts toward the check.
const START: u8 = b'_';
const STOP: u8 = b'z';
/// Toggles between ASCII and numeric-pair interpretation.
const DLE: u8 = 16;
/// Numeric pairs `00..=99` travel as characters `27..=126`.
const PAIR_OFFSET: u8 = 27;
/// Digit runs shorter than this stay in ASCII.
const MIN_NUMERIC_RUN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelepenMode {
    Ascii,
    Numeric,
    NumericThenAscii,
    AsciiThenNumeric,
}

impl fmt::Display for TelepenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TelepenMode::Ascii => "ascii",
            TelepenMode::Numeric => "numeric",
            TelepenMode::NumericThenAscii => "numeric-ascii",
            TelepenMode::AsciiThenNumeric => "ascii-numeric",
        };
        f.write_str(label)
    }
}

/// Chosen mode plus where the numeric part begins and ends (byte offsets into ASCII data).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelepenPlan {
    pub mode: TelepenMode,
    pub numeric: (usize, usize),
}

fn even(n: usize) -> usize {
    n - n % 2
}

/// Decide the mode from the leading and trailing digit counts. The longer run (at
/// least four digits) is compressed; a tie keeps ASCII first.
pub fn plan(data: &[u8]) -> TelepenPlan {
    let len = data.len();
    let lead = data.iter().take_while(|b| b.is_ascii_digit()).count();
    let trail = data.iter().rev().take_while(|b| b.is_ascii_digit()).count();

    if lead == len {
        return TelepenPlan { mode: TelepenMode::Numeric, numeric: (0, even(len)) };
    }
    if lead < MIN_NUMERIC_RUN && trail < MIN_NUMERIC_RUN {
        return TelepenPlan { mode: TelepenMode::Ascii, numeric: (0, 0) };
    }
    if lead > trail {
        TelepenPlan { mode: TelepenMode::NumericThenAscii, numeric: (0, even(lead)) }
    } else {
        TelepenPlan { mode: TelepenMode::AsciiThenNumeric, numeric: (len - even(trail), len) }
    }
}

fn push_pairs(digits: &[u8], out: &mut Vec<u8>) {
    for pair in digits.chunks_exact(2) {
        out.push(PAIR_OFFSET + (pair[0] - b'0') * 10 + (pair[1] - b'0'));
    }
}

/// Character values between start and check: data, pairs and DLE switches.
pub fn symbol_values(data: &[u8], plan: TelepenPlan) -> Vec<u8> {
    let (from, to) = plan.numeric;
    let mut out = Vec::with_capacity(data.len() + 2);
    match plan.mode {
        TelepenMode::Ascii => out.extend_from_slice(data),
        TelepenMode::Numeric | TelepenMode::NumericThenAscii => {
            out.push(DLE);
            push_pairs(&data[from..to], &mut out);
            if to < data.len() {
                out.push(DLE);
                out.extend_from_slice(&data[to..]);
            }
        }
        TelepenMode::AsciiThenNumeric => {
            out.extend_from_slice(&data[..from]);
            out.push(DLE);
            push_pairs(&data[from..to], &mut out);
        }
    }
    out
}

/// Telepen (full ASCII), always with the mod 127 check character.
#[derive(Debug, Default, Clone, Copy)]
pub struct Telepen;

impl SymbologyEncoder for Telepen {
    fn name(&self) -> &'static str {
        "Telepen"
    }

    #[instrument(level = "debug", skip(self))]
    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        require_data(raw, "ETELEPEN-2")?;
        if !raw.is_ascii() {
            return Err(EncodeError::charset(
                "ETELEPEN-1",
                "Invalid data. (Telepen accepts ASCII 0-127 only)",
            ));
        }
        let data = raw.as_bytes();
        let plan = plan(data);
        debug!(mode = %plan.mode, numeric = ?plan.numeric, "telepen mode");

        let values = symbol_values(data, plan);
        let sum: u32 = values.iter().map(|v| u32::from(*v)).sum();
        let check = telepen_mod127(sum);

        let mut bits = String::with_capacity((values.len() + 3) * 16);
        bits.push_str(TELEPEN_CODES[usize::from(START)]);
        for v in values.iter().chain(std::iter::once(&check)) {
            bits.push_str(TELEPEN_CODES[usize::from(*v)]);
        }
        bits.push_str(TELEPEN_CODES[usize::from(STOP)]);

        Ok(Encoding::new(bits, raw)
            .with_check(check.to_string())
            .with_mode(plan.mode.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mode_selection() {
        assert_eq!(plan(b"ABC").mode, TelepenMode::Ascii);
        assert_eq!(plan(b"123ABC456").mode, TelepenMode::Ascii);
        assert_eq!(plan(b"123456"), TelepenPlan { mode: TelepenMode::Numeric, numeric: (0, 6) });
        assert_eq!(plan(b"12345"), TelepenPlan { mode: TelepenMode::Numeric, numeric: (0, 4) });
        assert_eq!(
            plan(b"12345AB"),
            TelepenPlan { mode: TelepenMode::NumericThenAscii, numeric: (0, 4) }
        );
        assert_eq!(
            plan(b"AB12345"),
            TelepenPlan { mode: TelepenMode::AsciiThenNumeric, numeric: (3, 7) }
        );
        assert_eq!(plan(b"1234AB5678").mode, TelepenMode::AsciiThenNumeric);
    }

    #[test]
    fn numeric_pairs_are_offset() {
        let values = symbol_values(b"1234", plan(b"1234"));
        assert_eq!(values, vec![DLE, 27 + 12, 27 + 34]);
        // odd digit goes back to ASCII after a DLE
        let values = symbol_values(b"123", plan(b"123"));
        assert_eq!(values, vec![DLE, 27 + 12, DLE, b'3']);
    }

    #[test]
    fn ascii_symbol_layout() {
        // 'A' = 65, 65 % 127 = 65 -> check 62
        let enc = Telepen.encode("A").unwrap();
        assert_eq!(enc.metadata.check.as_deref(), Some("62"));
        assert_eq!(enc.bits.len(), 4 * 16);
        assert!(enc.bits.starts_with("1010101010111000"));
        assert!(enc.bits.ends_with("1110001010101010"));
        assert_eq!(&enc.bits[16..32], TELEPEN_CODES[65]);
        assert_eq!(&enc.bits[32..48], TELEPEN_CODES[62]);
    }

    #[test]
    fn hybrid_orders_place_dle_at_the_switch() {
        let values = symbol_values(b"12345AB", plan(b"12345AB"));
        assert_eq!(values, vec![DLE, 27 + 12, 27 + 34, DLE, b'5', b'A', b'B']);
        let values = symbol_values(b"AB12345", plan(b"AB12345"));
        assert_eq!(values, vec![b'A', b'B', b'1', DLE, 27 + 23, 27 + 45]);
    }

    #[test]
    fn dle_counts_toward_the_check() {
        // 16 + 39 + 61 + 16 + 53 + 65 + 66 = 316, 316 % 127 = 62 -> 65
        let enc = Telepen.encode("12345AB").unwrap();
        assert_eq!(enc.metadata.check.as_deref(), Some("65"));
        // 65 + 66 + 49 + 16 + 50 + 72 = 318, 318 % 127 = 64 -> 63
        let enc = Telepen.encode("AB12345").unwrap();
        assert_eq!(enc.metadata.check.as_deref(), Some("63"));
    }

    #[test]
    fn check_recomputes_from_decoded_modules() {
        for data in ["Hello", "123456", "12345AB", "AB12345", "ABC1234567", "987"] {
            let enc = Telepen.encode(data).unwrap();
            let symbols: Vec<u8> = enc
                .bits
                .as_bytes()
                .chunks(16)
                .map(|chunk| {
                    let chunk = std::str::from_utf8(chunk).unwrap();
                    TELEPEN_CODES.iter().position(|p| *p == chunk).unwrap() as u8
                })
                .collect();
            let [first, inner @ .., check, last] = symbols.as_slice() else {
                panic!("{data}: too few symbols");
            };
            assert_eq!((*first, *last), (START, STOP));
            let sum: u32 = inner.iter().map(|v| u32::from(*v)).sum();
            assert_eq!(telepen_mod127(sum), *check, "{data}");
            assert_eq!(enc.metadata.check, Some(check.to_string()));
        }
    }

    #[test]
    fn empty_data_is_rejected() {
        assert_eq!(Telepen.encode("").unwrap_err().code(), "ETELEPEN-2");
    }

    #[test]
    fn rejects_non_ascii() {
        assert_eq!(Telepen.encode("£5").unwrap_err().code(), "ETELEPEN-1");
    }
}
