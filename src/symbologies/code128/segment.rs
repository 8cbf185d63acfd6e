//! Segmentation: split the input into runs that each stay in one code set.

use crate::core::error::EncodeError;
use crate::core::options::Code128Set;

use super::table::{FNC1_CHAR, in_set, is_function, start_code, switch_code};

/// A contiguous run of data encoded in one code set. Set C runs always hold an even
/// number of digits (FNC1 may sit between pairs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSegment {
    pub set: Code128Set,
    /// START codeword for the first segment, CODE switch codeword for the rest.
    pub entry: u8,
    pub text: String,
}

impl ModeSegment {
    fn open(set: Code128Set, first: bool) -> Self {
        let entry = if first { start_code(set) } else { switch_code(set) };
        Self { set, entry, text: String::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    /// Digits bound for set C, already padded to an even count.
    Digits(String),
    Char(char),
}

fn is_encodable(ch: char) -> bool {
    ch.is_ascii() || is_function(ch)
}

/// Group the input into set-C digit runs and single literal characters.
///
/// A run of two or more digits goes to set C, as does a single digit next to an FNC1.
/// Odd runs get a leading `0`.
fn items(data: &str) -> Vec<Item> {
    let chars: Vec<char> = data.chars().collect();
    let mut items = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            items.push(Item::Char(chars[i]));
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        let run = &chars[start..i];
        let beside_fnc1 = (start > 0 && chars[start - 1] == FNC1_CHAR)
            || chars.get(i) == Some(&FNC1_CHAR);
        if run.len() >= 2 || beside_fnc1 {
            let mut digits = String::with_capacity(run.len() + 1);
            if run.len() % 2 == 1 {
                digits.push('0');
            }
            digits.extend(run);
            items.push(Item::Digits(digits));
        } else {
            items.extend(run.iter().map(|c| Item::Char(*c)));
        }
    }
    items
}

/// How many literal characters from the front of `items` fit in `set`.
fn literal_reach(items: &[Item], set: Code128Set) -> usize {
    items
        .iter()
        .take_while(|item| matches!(item, Item::Char(c) if in_set(set, *c)))
        .count()
}

/// Pick A or B for the literal run at the front of `items`; B wins ties.
fn literal_set(items: &[Item]) -> Code128Set {
    if literal_reach(items, Code128Set::A) > literal_reach(items, Code128Set::B) {
        Code128Set::A
    } else {
        Code128Set::B
    }
}

/// Whether a literal character can extend a segment already in `set`. Set C takes
/// only FNC1 this way; its digits arrive as whole runs.
fn continues_in(set: Code128Set, ch: char) -> bool {
    match set {
        Code128Set::C => ch == FNC1_CHAR,
        set => in_set(set, ch),
    }
}

/// Segment `data` for dynamic set selection.
pub fn segment(data: &str) -> Result<Vec<ModeSegment>, EncodeError> {
    if !data.chars().all(is_encodable) {
        return Err(EncodeError::charset(
            "EC128-1",
            "Invalid data. (Only ASCII 0-127 and the FNC1-FNC4 sentinels are allowed)",
        ));
    }

    let items = items(data);
    let mut segments: Vec<ModeSegment> = Vec::new();
    for (at, item) in items.iter().enumerate() {
        match item {
            Item::Digits(digits) => match segments.last_mut() {
                Some(current) if current.set == Code128Set::C => current.text.push_str(digits),
                _ => {
                    let mut seg = ModeSegment::open(Code128Set::C, segments.is_empty());
                    seg.text.push_str(digits);
                    segments.push(seg);
                }
            },
            Item::Char(ch) => {
                if let Some(current) = segments
                    .last_mut()
                    .filter(|current| continues_in(current.set, *ch))
                {
                    current.text.push(*ch);
                    continue;
                }
                let set = if *ch == FNC1_CHAR && matches!(items.get(at + 1), Some(Item::Digits(_)))
                {
                    Code128Set::C
                } else {
                    literal_set(&items[at..])
                };
                let mut seg = ModeSegment::open(set, segments.is_empty());
                seg.text.push(*ch);
                segments.push(seg);
            }
        }
    }
    Ok(segments)
}

/// Treat the whole input as one segment in `set`. Set C pads each digit run between
/// FNC1s to an even count; characters outside the set are caught at emission.
pub fn single_set(data: &str, set: Code128Set) -> Vec<ModeSegment> {
    let mut seg = ModeSegment::open(set, true);
    if set != Code128Set::C {
        seg.text.push_str(data);
        return vec![seg];
    }
    for (i, run) in data.split(FNC1_CHAR).enumerate() {
        if i > 0 {
            seg.text.push(FNC1_CHAR);
        }
        if run.chars().count() % 2 == 1 {
            seg.text.push('0');
        }
        seg.text.push_str(run);
    }
    vec![seg]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::symbologies::code128::table::{CODE_A, CODE_B, CODE_C, START_A, START_B, START_C};

    fn seg(set: Code128Set, entry: u8, text: &str) -> ModeSegment {
        ModeSegment { set, entry, text: text.to_string() }
    }

    #[test]
    fn odd_digit_run_is_padded() {
        assert_eq!(segment("1234567").unwrap(), vec![seg(Code128Set::C, START_C, "01234567")]);
    }

    #[test]
    fn single_digits_stay_literal() {
        assert_eq!(segment("A1B").unwrap(), vec![seg(Code128Set::B, START_B, "A1B")]);
    }

    #[test]
    fn mixed_runs_alternate_sets() {
        assert_eq!(
            segment("AB1234cd").unwrap(),
            vec![
                seg(Code128Set::B, START_B, "AB"),
                seg(Code128Set::C, CODE_C, "1234"),
                seg(Code128Set::B, CODE_B, "cd"),
            ]
        );
    }

    #[test]
    fn control_characters_pick_set_a() {
        assert_eq!(
            segment("AB\tC").unwrap(),
            vec![seg(Code128Set::A, START_A, "AB\tC")]
        );
        // stays in B while possible, switches only for the control character
        assert_eq!(
            segment("ab\r").unwrap(),
            vec![seg(Code128Set::B, START_B, "ab"), seg(Code128Set::A, CODE_A, "\r")]
        );
    }

    #[test]
    fn fnc1_joins_digit_runs() {
        let data = format!("{FNC1_CHAR}0104{FNC1_CHAR}5");
        assert_eq!(
            segment(&data).unwrap(),
            vec![seg(Code128Set::C, START_C, &format!("{FNC1_CHAR}0104{FNC1_CHAR}05"))]
        );
    }

    #[test]
    fn rejects_non_ascii() {
        assert_eq!(segment("héllo").unwrap_err().code(), "EC128-1");
    }

    #[test]
    fn forced_c_pads_each_run() {
        assert_eq!(single_set("123", Code128Set::C), vec![seg(Code128Set::C, START_C, "0123")]);
        assert_eq!(single_set("abc", Code128Set::B), vec![seg(Code128Set::B, START_B, "abc")]);
    }
}
