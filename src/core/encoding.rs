use serde::{Deserialize, Serialize};

use crate::core::error::{EncodeError, ErrorRecord};
use crate::core::symbology::Symbology;

/// Shape every symbology implementation exposes.
///
/// Implementations hold only their configuration; all working state lives on the
/// stack of one `encode` call, so a shared encoder may be used from many threads.
pub trait SymbologyEncoder: Send + Sync {
    fn name(&self) -> &'static str;

    /// Turn `raw` into a module pattern, or fail on the first invalid input.
    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError>;
}

/// Output of a single encoder: the bit pattern plus the canonical data it encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    pub bits: String,
    pub canonical: String,
    pub metadata: Metadata,
}

impl Encoding {
    pub fn new(bits: String, canonical: impl Into<String>) -> Self {
        Self {
            bits,
            canonical: canonical.into(),
            metadata: Metadata::default(),
        }
    }

    pub fn with_check(mut self, check: impl Into<String>) -> Self {
        self.metadata.check = Some(check.into());
        self
    }

    pub fn with_country(mut self, country: Option<&'static str>) -> Self {
        self.metadata.country = country.map(str::to_string);
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.metadata.mode = Some(mode.into());
        self
    }
}

/// Facts derived while encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Check character(s) appended to the data, in emission order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
    /// Country or region assigning the manufacturer code (EAN-13 family).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Selected encoding mode, for symbologies that choose one (Code128, Telepen).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Successful encode: both the caller's input and the canonical value are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub symbology: Symbology,
    pub raw_data: String,
    pub canonical_data: String,
    pub bits: String,
    pub metadata: Metadata,
}

impl Encoded {
    /// Number of modules in the pattern, for downstream sizing (e.g. ITF-14 bearers).
    pub fn module_count(&self) -> usize {
        self.bits.len()
    }
}

/// Either/or record handed to consumers: a pattern with no errors, or errors with
/// no pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedResult {
    pub symbology: Symbology,
    pub raw_data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_data: Option<String>,
    pub bits: String,
    pub errors: Vec<ErrorRecord>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl EncodedResult {
    pub fn failed(symbology: Symbology, raw_data: &str, err: &EncodeError) -> Self {
        Self {
            symbology,
            raw_data: raw_data.to_string(),
            canonical_data: None,
            bits: String::new(),
            errors: vec![ErrorRecord::from(err)],
            metadata: Metadata::default(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn module_count(&self) -> usize {
        self.bits.len()
    }
}

impl From<Encoded> for EncodedResult {
    fn from(value: Encoded) -> Self {
        Self {
            symbology: value.symbology,
            raw_data: value.raw_data,
            canonical_data: Some(value.canonical_data),
            bits: value.bits,
            errors: Vec::new(),
            metadata: value.metadata,
        }
    }
}

/// Append one pattern per symbol with `gap` between neighbours (none after the last).
pub(crate) fn join_patterns<'a, I>(patterns: I, gap: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for (i, pattern) in patterns.into_iter().enumerate() {
        if i > 0 {
            out.push_str(gap);
        }
        out.push_str(pattern);
    }
    out
}

/// Expand bar/space element widths (first element is a bar) into modules.
pub(crate) fn widths_to_modules(widths: &[u8], narrow: usize, wide: usize, out: &mut String) {
    for (i, w) in widths.iter().enumerate() {
        let module = if i % 2 == 0 { '1' } else { '0' };
        let n = if *w == b'W' { wide } else { narrow };
        out.extend(std::iter::repeat_n(module, n));
    }
}
