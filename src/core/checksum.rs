//! Check-digit arithmetic shared by the encoders.
//!
//! Every function takes the canonical pre-checksum data only.

/// Modulus-10 with weights 3,1,3,... starting from the rightmost digit.
///
/// This is the GTIN check digit (UPC, EAN, ITF-14) and the 2-of-5 Mod10 digit.
pub fn mod10_weight3(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| u32::from(*d) * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// MSI modulus-10: the digits in odd positions from the right form a number that is
/// doubled; the digits of that product and of the even-position digits are summed.
pub fn msi_mod10(digits: &[u8]) -> u8 {
    let mut odds = Vec::new();
    let mut evens_sum = 0u32;
    for (i, d) in digits.iter().rev().enumerate() {
        if i % 2 == 0 {
            odds.push(*d);
        } else {
            evens_sum += u32::from(*d);
        }
    }
    // `odds` holds the number least-significant digit first; double it in place.
    let mut carry = 0u8;
    let mut doubled_sum = 0u32;
    for d in odds {
        let v = d * 2 + carry;
        doubled_sum += u32::from(v % 10);
        carry = v / 10;
    }
    doubled_sum += u32::from(carry);
    let rem = (doubled_sum + evens_sum) % 10;
    if rem == 0 { 0 } else { (10 - rem) as u8 }
}

/// MSI modulus-11 with weights cycling 2..=7 from the right. May return 10.
pub fn msi_mod11(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| u32::from(*d) * (2 + (i as u32 % 6)))
        .sum();
    let rem = sum % 11;
    if rem == 0 { 0 } else { (11 - rem) as u8 }
}

/// Sum of symbol values weighted 1,2,..,`max_weight`,1,2,.. from the right, modulo `modulus`.
///
/// Code93 uses (20, 47) and (15, 47); Code11 uses (10, 11) and (9, 11).
pub fn weighted_from_right(values: &[u8], max_weight: u32, modulus: u32) -> u8 {
    let sum: u32 = values
        .iter()
        .rev()
        .enumerate()
        .map(|(i, v)| u32::from(*v) * (i as u32 % max_weight + 1))
        .sum();
    (sum % modulus) as u8
}

/// Plain sum of symbol values modulo `modulus` (Code39 Mod43).
pub fn sum_mod(values: &[u8], modulus: u32) -> u8 {
    let sum: u32 = values.iter().map(|v| u32::from(*v)).sum();
    (sum % modulus) as u8
}

/// Code128: position-weighted modulo 103, the start codeword at position 0 weighing 1.
pub fn code128_mod103(codewords: &[u8]) -> u8 {
    let sum: u32 = codewords
        .iter()
        .enumerate()
        .map(|(i, v)| u32::from(*v) * (i as u32).max(1))
        .sum();
    (sum % 103) as u8
}

/// Telepen: `127 - (sum mod 127)`, which is 127 when the sum divides evenly.
pub fn telepen_mod127(sum: u32) -> u8 {
    (127 - sum % 127) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mod10_weight3_matches_gtin_examples() {
        // UPC-A 03600029145 -> 2
        assert_eq!(mod10_weight3(&[0, 3, 6, 0, 0, 0, 2, 9, 1, 4, 5]), 2);
        // EAN-13 400638133393 -> 1
        assert_eq!(mod10_weight3(&[4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3]), 1);
        // 2-of-5 "1234": 4*3 + 3 + 2*3 + 1 = 22 -> 8
        assert_eq!(mod10_weight3(&[1, 2, 3, 4]), 8);
    }

    #[test]
    fn msi_mod10_doubles_odd_group() {
        // odds (from right) 4,2 -> 24*2 = 48 -> 12; evens 3+1 = 4; 16 -> 4
        assert_eq!(msi_mod10(&[1, 2, 3, 4]), 4);
        // 12343 -> odds 133*2 = 266 -> 14; evens 2+4; 20 -> 0
        assert_eq!(msi_mod10(&[1, 2, 3, 4, 3]), 0);
        // carries out of the top digit
        assert_eq!(msi_mod10(&[9, 0, 9]), 2);
    }

    #[test]
    fn msi_mod11_cycles_weights() {
        // 4*2 + 3*3 + 2*4 + 1*5 = 30 -> 30 % 11 = 8 -> 3
        assert_eq!(msi_mod11(&[1, 2, 3, 4]), 3);
        // seven digits wrap back to weight 2 on the leftmost digit
        assert_eq!(msi_mod11(&[1, 0, 0, 0, 0, 0, 0]), 9);
    }

    #[test]
    fn code128_first_position_weighs_one() {
        // START_B(104) 'A'(33): 104 + 33 = 137 -> 34
        assert_eq!(code128_mod103(&[104, 33]), 34);
        assert_eq!(code128_mod103(&[105, 12, 34]), (105 + 12 + 68) % 103);
    }

    #[test]
    fn telepen_wraps_to_127() {
        assert_eq!(telepen_mod127(127), 127);
        assert_eq!(telepen_mod127(130), 124);
    }

    #[test]
    fn weighted_from_right_wraps() {
        let values = [1u8; 21];
        // weights 1..=20 then 1 again: 210 + 1
        assert_eq!(weighted_from_right(&values, 20, 47), (211 % 47) as u8);
    }
}
