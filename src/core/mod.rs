//! Shared contract for every encoder: identifiers, options, results, errors and the
//! check-digit arithmetic.

pub mod checksum;
pub mod encoding;
pub mod error;
pub mod options;
pub mod symbology;
pub mod validate;

pub use encoding::{Encoded, EncodedResult, Encoding, Metadata, SymbologyEncoder};
pub use error::{EncodeError, ErrorKind, ErrorRecord};
pub use options::{Code128Set, EncodeOptions};
pub use symbology::{CatalogEntry, Family, Symbology};
pub use validate::is_numeric_only;
