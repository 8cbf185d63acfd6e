use crate::core::encoding::{Encoding, SymbologyEncoder, join_patterns};
use crate::core::error::EncodeError;

static CODABAR_CODES: &[(char, &str)] = &[
    ('0', "101010011"),
    ('1', "101011001"),
    ('2', "101001011"),
    ('3', "110010101"),
    ('4', "101101001"),
    ('5', "110101001"),
    ('6', "100101011"),
    ('7', "100101101"),
    ('8', "100110101"),
    ('9', "110100101"),
    ('-', "101001101"),
    ('$', "101100101"),
    (':', "1101011011"),
    ('/', "1101101011"),
    ('.', "1101101101"),
    ('+', "1011011011"),
    ('A', "1011001001"),
    ('B', "1010010011"),
    ('C', "1001001011"),
    ('D', "1010011001"),
];

fn pattern(ch: char) -> Option<&'static str> {
    let up = ch.to_ascii_uppercase();
    CODABAR_CODES
        .iter()
        .find(|(c, _)| *c == up)
        .map(|(_, p)| *p)
}

fn is_start_stop(ch: char) -> bool {
    matches!(ch.to_ascii_uppercase(), 'A'..='D')
}

/// Codabar. The data must be framed by start/stop letters A–D (either case);
/// the canonical value has them stripped.
#[derive(Debug, Default, Clone, Copy)]
pub struct Codabar;

impl SymbologyEncoder for Codabar {
    fn name(&self) -> &'static str {
        "Codabar"
    }

    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        let chars: Vec<char> = raw.chars().collect();
        let [first, .., last] = chars.as_slice() else {
            return Err(EncodeError::structural(
                "ECODABAR-1",
                "Data format invalid. (Invalid length)",
            ));
        };
        if !is_start_stop(*first) {
            return Err(EncodeError::structural(
                "ECODABAR-2",
                "Data format invalid. (Invalid START character)",
            ));
        }
        if !is_start_stop(*last) {
            return Err(EncodeError::structural(
                "ECODABAR-3",
                "Data format invalid. (Invalid STOP character)",
            ));
        }
        let patterns = chars
            .iter()
            .map(|c| pattern(*c))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                EncodeError::charset("ECODABAR-4", "Data contains invalid characters.")
            })?;

        let canonical: String = chars[1..chars.len() - 1].iter().collect();
        Ok(Encoding::new(join_patterns(patterns, "0"), canonical))
    }
}
