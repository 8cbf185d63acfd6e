use crate::core::checksum::weighted_from_right;
use crate::core::encoding::{Encoding, SymbologyEncoder};
use crate::core::error::EncodeError;
use crate::core::validate::require_data;
use crate::symbologies::code39::{AsciiSymbol, CODE39_CHARSET, full_ascii};

/// Values 0..=42 share Code 39's character order; 43..=46 are the shift symbols
/// `($) (%) (/) (+)`; 47 is the `*` start/stop.
const CODE93_CODES: [&str; 48] = [
    "100010100", "101001000", "101000100", "101000010",
    "100101000", "100100100", "100100010", "101010000",
    "100010010", "100001010", "110101000", "110100100",
    "110100010", "110010100", "110010010", "110001010",
    "101101000", "101100100", "101100010", "100110100",
    "100011010", "101011000", "101001100", "101000110",
    "100101100", "100010110", "110110100", "110110010",
    "110101100", "110100110", "110010110", "110011010",
    "101101100", "101100110", "100110110", "100111010",
    "100101110", "111010100", "111010010", "111001010",
    "101101110", "101110110", "110101110", "100100110",
    "111011010", "111010110", "100110010", "101011110",
];
const CODE93_STAR: usize = 47;
const TERMINATION_BAR: &str = "1";

fn shift_value(shift: char) -> Option<u8> {
    match shift {
        '$' => Some(43),
        '%' => Some(44),
        '/' => Some(45),
        '+' => Some(46),
        _ => None,
    }
}

fn native_value(ch: char) -> Option<u8> {
    CODE39_CHARSET.find(ch).map(|i| i as u8)
}

fn symbol_label(value: u8) -> String {
    match value {
        43 => "($)".into(),
        44 => "(%)".into(),
        45 => "(/)".into(),
        46 => "(+)".into(),
        v => {
            let at = usize::from(v);
            CODE39_CHARSET[at..=at].to_string()
        }
    }
}

/// Code 93 in full-ASCII form, with the mandatory C and K check symbols.
#[derive(Debug, Default, Clone, Copy)]
pub struct Code93;

impl Code93 {
    fn values(raw: &str) -> Result<Vec<u8>, EncodeError> {
        let invalid =
            || EncodeError::charset("EC93-1", "Invalid data. (Code93 accepts ASCII 0-127 only)");
        let mut values = Vec::with_capacity(raw.len());
        for ch in raw.chars() {
            if let Some(v) = native_value(ch) {
                values.push(v);
                continue;
            }
            match full_ascii(ch).ok_or_else(invalid)? {
                AsciiSymbol::Native(c) => values.extend(native_value(c)),
                AsciiSymbol::Shifted(shift, c) => {
                    values.extend(shift_value(shift));
                    values.extend(native_value(c));
                }
            }
        }
        Ok(values)
    }
}

impl SymbologyEncoder for Code93 {
    fn name(&self) -> &'static str {
        "Code 93"
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        require_data(raw, "EC93-2")?;
        let mut values = Self::values(raw)?;
        let c = weighted_from_right(&values, 20, 47);
        values.push(c);
        let k = weighted_from_right(&values, 15, 47);
        values.push(k);

        let mut out = String::with_capacity((values.len() + 2) * 9 + 1);
        out.push_str(CODE93_CODES[CODE93_STAR]);
        for v in &values {
            out.push_str(CODE93_CODES[usize::from(*v)]);
        }
        out.push_str(CODE93_CODES[CODE93_STAR]);
        out.push_str(TERMINATION_BAR);

        let check = format!("{}{}", symbol_label(c), symbol_label(k));
        Ok(Encoding::new(out, raw).with_check(check))
    }
}
