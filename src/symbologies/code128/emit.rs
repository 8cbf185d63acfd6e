//! Emission: turn mode segments into codewords, then into modules.

use crate::core::checksum::code128_mod103;
use crate::core::error::EncodeError;
use crate::core::options::Code128Set;

use super::segment::ModeSegment;
use super::table::{FNC1, FNC1_CHAR, PATTERNS, STOP, TERMINATION, value_in_a, value_in_b};

fn unavailable(set: Code128Set) -> EncodeError {
    EncodeError::charset(
        "EC128-2",
        format!("Invalid data. (Character not available in code set {set})"),
    )
}

fn push_pairs(text: &str, out: &mut Vec<u8>) -> Result<(), EncodeError> {
    let mut pending: Option<u8> = None;
    for ch in text.chars() {
        if ch == FNC1_CHAR && pending.is_none() {
            out.push(FNC1);
            continue;
        }
        let digit = ch
            .to_digit(10)
            .ok_or_else(|| {
                EncodeError::charset("EC128-3", "Invalid data. (Code set C accepts digits only)")
            })? as u8;
        match pending.take() {
            Some(tens) => out.push(tens * 10 + digit),
            None => pending = Some(digit),
        }
    }
    if pending.is_some() {
        return Err(EncodeError::structural(
            "EC128-4",
            "Invalid data. (Code set C needs digit pairs)",
        ));
    }
    Ok(())
}

/// Codewords for `segments`: each segment's entry codeword followed by its data,
/// without the check or stop codewords.
pub fn codewords(segments: &[ModeSegment]) -> Result<Vec<u8>, EncodeError> {
    if segments.is_empty() {
        return Err(EncodeError::structural(
            "EC128-5",
            "Data format invalid. (No data to encode)",
        ));
    }
    let mut out = Vec::new();
    for seg in segments {
        out.push(seg.entry);
        match seg.set {
            Code128Set::C => push_pairs(&seg.text, &mut out)?,
            Code128Set::A => {
                for ch in seg.text.chars() {
                    out.push(value_in_a(ch).ok_or_else(|| unavailable(Code128Set::A))?);
                }
            }
            Code128Set::B => {
                for ch in seg.text.chars() {
                    out.push(value_in_b(ch).ok_or_else(|| unavailable(Code128Set::B))?);
                }
            }
        }
    }
    Ok(out)
}

/// Append the mod 103 check and STOP, and expand everything to modules.
/// Returns the modules and the check value.
pub fn finish(mut codewords: Vec<u8>) -> (String, u8) {
    let check = code128_mod103(&codewords);
    codewords.push(check);
    codewords.push(STOP);

    let mut bits = String::with_capacity(codewords.len() * 11 + TERMINATION.len());
    for cw in &codewords {
        bits.push_str(PATTERNS[usize::from(*cw)]);
    }
    bits.push_str(TERMINATION);
    (bits, check)
}
