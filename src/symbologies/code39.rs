//! Code 39, its full-ASCII (extended) form and the Mod 43 check character.
//!
//! The full-ASCII shift mapping lives here and is shared with Code 93.

use crate::core::checksum::sum_mod;
use crate::core::encoding::{Encoding, SymbologyEncoder, join_patterns};
use crate::core::error::EncodeError;
use crate::core::validate::require_data;

/// Native Code 39 characters, in check-value order.
pub(crate) const CODE39_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";

/// Patterns indexed by check value; index 43 is the `*` start/stop.
const CODE39_CODES: [&str; 44] = [
    "101001101101", "110100101011", "101100101011", "110110010101", "101001101011",
    "110100110101", "101100110101", "101001011011", "110100101101", "101100101101",
    "110101001011", "101101001011", "110110100101", "101011001011", "110101100101",
    "101101100101", "101010011011", "110101001101", "101101001101", "101011001101",
    "110101010011", "101101010011", "110110101001", "101011010011", "110101101001",
    "101101101001", "101010110011", "110101011001", "101101011001", "101011011001",
    "110010101011", "100110101011", "110011010101", "100101101011", "110010110101",
    "100110110101", "100101011011", "110010101101", "100110101101", "100100100101",
    "100100101001", "100101001001", "101001001001", "100101101101",
];
const CODE39_STAR: u8 = 43;

/// One character of full-ASCII data: either native, or a shift symbol plus a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AsciiSymbol {
    Native(char),
    Shifted(char, char),
}

fn offset(base: u8, ch: char, first: char) -> char {
    char::from(base + (ch as u8 - first as u8))
}

/// Full-ASCII translation. `$ % / +` themselves are shifted (`/D /E /O /K`), so the
/// native set is digits, capitals, space, `-` and `.`.
pub(crate) fn full_ascii(ch: char) -> Option<AsciiSymbol> {
    use AsciiSymbol::{Native, Shifted};
    let symbol = match ch {
        '0'..='9' | 'A'..='Z' | ' ' | '-' | '.' => Native(ch),
        '\0' => Shifted('%', 'U'),
        '\u{01}'..='\u{1a}' => Shifted('$', offset(b'A', ch, '\u{01}')),
        '\u{1b}'..='\u{1f}' => Shifted('%', offset(b'A', ch, '\u{1b}')),
        '!'..=',' => Shifted('/', offset(b'A', ch, '!')),
        '/' => Shifted('/', 'O'),
        ':' => Shifted('/', 'Z'),
        ';'..='?' => Shifted('%', offset(b'F', ch, ';')),
        '@' => Shifted('%', 'V'),
        '['..='_' => Shifted('%', offset(b'K', ch, '[')),
        '`' => Shifted('%', 'W'),
        'a'..='z' => Shifted('+', ch.to_ascii_uppercase()),
        '{'..='\u{7f}' => Shifted('%', offset(b'P', ch, '{')),
        _ => return None,
    };
    Some(symbol)
}

fn code39_value(ch: char) -> Option<u8> {
    CODE39_CHARSET.find(ch).map(|i| i as u8)
}

/// Code 39. `extended` enables full-ASCII input; `checksum` appends the Mod 43 character.
/// LOGMARS is plain Code 39.
#[derive(Debug, Default, Clone, Copy)]
pub struct Code39 {
    pub extended: bool,
    pub checksum: bool,
}

impl Code39 {
    fn values(&self, data: &str) -> Result<Vec<u8>, EncodeError> {
        let mut values = Vec::with_capacity(data.len());
        for ch in data.chars() {
            if !self.extended {
                let value = code39_value(ch).ok_or_else(|| {
                    EncodeError::charset("EC39-1", "Invalid data. (Try using Extended Code39)")
                })?;
                values.push(value);
                continue;
            }
            match full_ascii(ch) {
                Some(AsciiSymbol::Native(c)) => values.extend(code39_value(c)),
                Some(AsciiSymbol::Shifted(shift, c)) => {
                    values.extend(code39_value(shift));
                    values.extend(code39_value(c));
                }
                None => {
                    return Err(EncodeError::charset(
                        "EC39-2",
                        "Invalid data. (Extended Code39 accepts ASCII 0-127 only)",
                    ));
                }
            }
        }
        Ok(values)
    }
}

impl SymbologyEncoder for Code39 {
    fn name(&self) -> &'static str {
        match (self.extended, self.checksum) {
            (true, _) => "Code 39 Extended",
            (false, true) => "Code 39 Mod 43",
            (false, false) => "Code 39",
        }
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        // A surrounding `*` pair is the caller spelling out start/stop; inner stars are data.
        let data = raw
            .strip_prefix('*')
            .and_then(|rest| rest.strip_suffix('*'))
            .unwrap_or(raw);
        require_data(data, "EC39-3")?;
        let mut values = self.values(data)?;

        let check = self.checksum.then(|| sum_mod(&values, 43));
        values.extend(check);

        let patterns = std::iter::once(CODE39_STAR)
            .chain(values)
            .chain(std::iter::once(CODE39_STAR))
            .map(|v| CODE39_CODES[usize::from(v)]);
        let bits = join_patterns(patterns, "0");

        Ok(match check {
            Some(value) => {
                let at = usize::from(value);
                let check_char = CODE39_CHARSET[at..=at].to_string();
                Encoding::new(bits, format!("{data}{check_char}")).with_check(check_char)
            }
            None => Encoding::new(bits, data),
        })
    }
}
