use crate::core::error::EncodeError;

/// True when `text` is non-empty and made of ASCII digits only.
pub fn is_numeric_only(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Digit values of `text`, or a charset error with the caller's code and message.
pub fn numeric_digits(
    text: &str,
    code: &'static str,
    message: &str,
) -> Result<Vec<u8>, EncodeError> {
    if !is_numeric_only(text) {
        return Err(EncodeError::charset(code, message));
    }
    Ok(text.bytes().map(|b| b - b'0').collect())
}

/// Reject data with nothing left to encode. Encoders whose alphabet has no length rule
/// call this so a bare start/stop frame is never emitted.
pub fn require_data(text: &str, code: &'static str) -> Result<(), EncodeError> {
    if text.is_empty() {
        return Err(EncodeError::structural(
            code,
            "Data format invalid. (No data to encode)",
        ));
    }
    Ok(())
}

/// Render digit values back into text.
pub fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_only_rejects_blank_and_symbols() {
        assert!(is_numeric_only("0123456789"));
        assert!(!is_numeric_only(""));
        assert!(!is_numeric_only("12 3"));
        assert!(!is_numeric_only("12a"));
        assert!(!is_numeric_only("١٢"));
    }

    #[test]
    fn empty_data_is_structural() {
        assert!(require_data("A", "E-2").is_ok());
        let err = require_data("", "E-2").unwrap_err();
        assert_eq!(err.kind(), crate::core::error::ErrorKind::Structural);
        assert_eq!(err.code(), "E-2");
    }

    #[test]
    fn digits_round_trip_text() {
        let digits = numeric_digits("907", "E-1", "Numeric only").unwrap();
        assert_eq!(digits, vec![9, 0, 7]);
        assert_eq!(digits_to_string(&digits), "907");
        let err = numeric_digits("9x", "E-1", "Numeric only").unwrap_err();
        assert_eq!(err.to_string(), "E-1: Numeric only");
    }
}
