use crate::core::checksum::weighted_from_right;
use crate::core::encoding::{Encoding, SymbologyEncoder, join_patterns};
use crate::core::error::EncodeError;
use crate::core::validate::require_data;

/// Digits 0-9 then `-` (value 10).
const CODE11_CODES: [&str; 11] = [
    "101011", "1101011", "1001011", "1100101", "1011011", "1101101", "1001101", "1010011",
    "1101001", "110101", "101101",
];
const CODE11_START_STOP: &str = "1011001";

/// Data of this length or more gets the second (K) check character.
const K_CHECK_FROM_LENGTH: usize = 10;

fn value(ch: char) -> Option<u8> {
    match ch {
        '0'..='9' => Some(ch as u8 - b'0'),
        '-' => Some(10),
        _ => None,
    }
}

fn label(value: u8) -> char {
    if value == 10 { '-' } else { char::from(b'0' + value) }
}

/// Code 11 (USD-8). Always carries the C check character, plus K for data of ten or
/// more characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Code11;

impl SymbologyEncoder for Code11 {
    fn name(&self) -> &'static str {
        "Code 11"
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        require_data(raw, "EC11-2")?;
        let mut values = raw
            .chars()
            .map(value)
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| EncodeError::charset("EC11-1", "Numeric data and '-' Only"))?;

        let data_len = values.len();
        let c = weighted_from_right(&values, 10, 11);
        values.push(c);
        let mut check = String::from(label(c));
        if data_len >= K_CHECK_FROM_LENGTH {
            let k = weighted_from_right(&values, 9, 11);
            values.push(k);
            check.push(label(k));
        }

        let patterns = std::iter::once(CODE11_START_STOP)
            .chain(values.iter().map(|v| CODE11_CODES[usize::from(*v)]))
            .chain(std::iter::once(CODE11_START_STOP));
        let bits = join_patterns(patterns, "0");
        Ok(Encoding::new(bits, format!("{raw}{check}")).with_check(check))
    }
}
