//! Linear barcode encoding: text in, module-exact bar/space pattern out.
//!
//! ```
//! use barcode_bits::{EncodeOptions, Symbology, encode};
//!
//! let encoded = encode(Symbology::Codabar, "A1234B", &EncodeOptions::default()).unwrap();
//! assert!(encoded.bits.starts_with("1011001001"));
//! assert_eq!(encoded.canonical_data, "1234");
//! ```

pub mod core;
mod dispatch;
pub mod symbologies;

pub use crate::core::{
    CatalogEntry, Code128Set, EncodeError, EncodeOptions, Encoded, EncodedResult, Encoding,
    ErrorKind, ErrorRecord, Family, Metadata, Symbology, SymbologyEncoder, is_numeric_only,
};
pub use dispatch::{encode, encode_result, encoder_for};
pub use symbologies::code128::{FNC1_CHAR, FNC2_CHAR, FNC3_CHAR, FNC4_CHAR};
