use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Code128 sub-alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Code128Set {
    A,
    B,
    C,
}

impl fmt::Display for Code128Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code128Set::A => write!(f, "A"),
            Code128Set::B => write!(f, "B"),
            Code128Set::C => write!(f, "C"),
        }
    }
}

impl FromStr for Code128Set {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Code128Set::A),
            "b" => Ok(Code128Set::B),
            "c" => Ok(Code128Set::C),
            other => Err(format!("unknown Code128 set '{other}' (expected a, b or c)")),
        }
    }
}

/// Per-call flags. `None` keeps the identifier's own default.
///
/// - `extended`: Code39 full-ASCII mode.
/// - `checksum`: Code39 Mod43 and the 2-of-5 Mod10 check digit.
/// - `code128_set`: pins dynamic Code128 to one code set.
///
/// Symbologies a flag does not apply to ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncodeOptions {
    pub extended: Option<bool>,
    pub checksum: Option<bool>,
    pub code128_set: Option<Code128Set>,
}

impl EncodeOptions {
    pub fn with_extended(mut self, extended: bool) -> Self {
        self.extended = Some(extended);
        self
    }

    pub fn with_checksum(mut self, checksum: bool) -> Self {
        self.checksum = Some(checksum);
        self
    }

    pub fn with_code128_set(mut self, set: Code128Set) -> Self {
        self.code128_set = Some(set);
        self
    }

    /// Fill every unset field from `fallback`.
    pub fn or(self, fallback: EncodeOptions) -> Self {
        Self {
            extended: self.extended.or(fallback.extended),
            checksum: self.checksum.or(fallback.checksum),
            code128_set: self.code128_set.or(fallback.code128_set),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn options_deserialize_partially() {
        let opts: EncodeOptions = serde_json::from_str(r#"{"code128_set":"c"}"#).unwrap();
        assert_eq!(opts, EncodeOptions::default().with_code128_set(Code128Set::C));
        assert!(serde_json::from_str::<EncodeOptions>(r#"{"bogus":true}"#).is_err());
    }

    #[test]
    fn explicit_fields_win_over_fallback() {
        let cli = EncodeOptions::default().with_checksum(false);
        let file = EncodeOptions::default()
            .with_checksum(true)
            .with_extended(true);
        let merged = cli.or(file);
        assert_eq!(merged.checksum, Some(false));
        assert_eq!(merged.extended, Some(true));
        assert_eq!(merged.code128_set, None);
    }
}
