//! Code 128 symbol patterns and per-set character values.

use crate::core::options::Code128Set;

/// Eleven-module patterns indexed by codeword value; 106 is STOP.
pub(crate) const PATTERNS: [&str; 107] = [
    "11011001100", "11001101100", "11001100110", "10010011000",
    "10010001100", "10001001100", "10011001000", "10011000100",
    "10001100100", "11001001000", "11001000100", "11000100100",
    "10110011100", "10011011100", "10011001110", "10111001100",
    "10011101100", "10011100110", "11001110010", "11001011100",
    "11001001110", "11011100100", "11001110100", "11101101110",
    "11101001100", "11100101100", "11100100110", "11101100100",
    "11100110100", "11100110010", "11011011000", "11011000110",
    "11000110110", "10100011000", "10001011000", "10001000110",
    "10110001000", "10001101000", "10001100010", "11010001000",
    "11000101000", "11000100010", "10110111000", "10110001110",
    "10001101110", "10111011000", "10111000110", "10001110110",
    "11101110110", "11010001110", "11000101110", "11011101000",
    "11011100010", "11011101110", "11101011000", "11101000110",
    "11100010110", "11101101000", "11101100010", "11100011010",
    "11101111010", "11001000010", "11110001010", "10100110000",
    "10100001100", "10010110000", "10010000110", "10000101100",
    "10000100110", "10110010000", "10110000100", "10011010000",
    "10011000010", "10000110100", "10000110010", "11000010010",
    "11001010000", "11110111010", "11000010100", "10001111010",
    "10100111100", "10010111100", "10010011110", "10111100100",
    "10011110100", "10011110010", "11110100100", "11110010100",
    "11110010010", "11011011110", "11011110110", "11110110110",
    "10101111000", "10100011110", "10001011110", "10111101000",
    "10111100010", "11110101000", "11110100010", "10111011110",
    "10111101110", "11101011110", "11110101110", "11010000100",
    "11010010000", "11010011100", "11000111010",
];

/// Two-module bar completing the STOP symbol.
pub(crate) const TERMINATION: &str = "11";

pub(crate) const FNC3: u8 = 96;
pub(crate) const FNC2: u8 = 97;
pub(crate) const CODE_C: u8 = 99;
/// CODE_B in sets A and C; FNC4 in set B.
pub(crate) const CODE_B: u8 = 100;
/// CODE_A in sets B and C; FNC4 in set A.
pub(crate) const CODE_A: u8 = 101;
pub(crate) const FNC1: u8 = 102;
pub(crate) const START_A: u8 = 103;
pub(crate) const START_B: u8 = 104;
pub(crate) const START_C: u8 = 105;
pub(crate) const STOP: u8 = 106;

/// Sentinel characters callers embed in the data to request function codewords.
pub const FNC1_CHAR: char = '\u{C8}';
pub const FNC2_CHAR: char = '\u{C9}';
pub const FNC3_CHAR: char = '\u{CA}';
pub const FNC4_CHAR: char = '\u{CB}';

pub(crate) fn is_function(ch: char) -> bool {
    matches!(ch, FNC1_CHAR..=FNC4_CHAR)
}

/// Value of `ch` in code set A: punctuation, digits, capitals and control characters.
pub(crate) fn value_in_a(ch: char) -> Option<u8> {
    match ch {
        ' '..='_' => Some(ch as u8 - 32),
        '\0'..='\u{1f}' => Some(ch as u8 + 64),
        FNC1_CHAR => Some(FNC1),
        FNC2_CHAR => Some(FNC2),
        FNC3_CHAR => Some(FNC3),
        FNC4_CHAR => Some(CODE_A),
        _ => None,
    }
}

/// Value of `ch` in code set B: printable ASCII and DEL.
pub(crate) fn value_in_b(ch: char) -> Option<u8> {
    match ch {
        ' '..='\u{7f}' => Some(ch as u8 - 32),
        FNC1_CHAR => Some(FNC1),
        FNC2_CHAR => Some(FNC2),
        FNC3_CHAR => Some(FNC3),
        FNC4_CHAR => Some(CODE_B),
        _ => None,
    }
}

pub(crate) fn in_set(set: Code128Set, ch: char) -> bool {
    match set {
        Code128Set::A => value_in_a(ch).is_some(),
        Code128Set::B => value_in_b(ch).is_some(),
        Code128Set::C => ch.is_ascii_digit() || ch == FNC1_CHAR,
    }
}

pub(crate) fn start_code(set: Code128Set) -> u8 {
    match set {
        Code128Set::A => START_A,
        Code128Set::B => START_B,
        Code128Set::C => START_C,
    }
}

/// Switch codeword into `set`; the same value is valid from either other set.
pub(crate) fn switch_code(set: Code128Set) -> u8 {
    match set {
        Code128Set::A => CODE_A,
        Code128Set::B => CODE_B,
        Code128Set::C => CODE_C,
    }
}
