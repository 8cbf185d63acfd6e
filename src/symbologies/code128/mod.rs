//! Code 128 with dynamic code-set selection.
//!
//! Encoding runs in two passes: [`segment`] splits the data into [`ModeSegment`]s,
//! then [`emit`] turns those into codewords, the mod 103 check and modules.

pub mod emit;
pub mod segment;
pub mod table;

use tracing::{debug, instrument};

use crate::core::encoding::{Encoding, SymbologyEncoder};
use crate::core::error::EncodeError;
use crate::core::options::Code128Set;
use crate::core::validate::require_data;

pub use segment::ModeSegment;
pub use table::{FNC1_CHAR, FNC2_CHAR, FNC3_CHAR, FNC4_CHAR};

/// Code 128. `set: None` selects code sets dynamically; `Some` pins the whole message.
#[derive(Debug, Default, Clone, Copy)]
pub struct Code128 {
    pub set: Option<Code128Set>,
}

fn mode_label(segments: &[ModeSegment]) -> String {
    segments
        .iter()
        .map(|seg| seg.set.to_string())
        .collect::<Vec<_>>()
        .join(">")
}

impl SymbologyEncoder for Code128 {
    fn name(&self) -> &'static str {
        match self.set {
            None => "Code 128",
            Some(Code128Set::A) => "Code 128-A",
            Some(Code128Set::B) => "Code 128-B",
            Some(Code128Set::C) => "Code 128-C",
        }
    }

    #[instrument(level = "debug", skip(self), fields(set = ?self.set))]
    fn encode(&self, raw: &str) -> Result<Encoding, EncodeError> {
        require_data(raw, "EC128-5")?;
        let segments = match self.set {
            None => segment::segment(raw)?,
            Some(set) => segment::single_set(raw, set),
        };
        debug!(?segments, "code 128 segments");

        let codewords = emit::codewords(&segments)?;
        let (bits, check) = emit::finish(codewords);
        let canonical: String = segments.iter().map(|seg| seg.text.as_str()).collect();
        Ok(Encoding::new(bits, canonical)
            .with_check(check.to_string())
            .with_mode(mode_label(&segments)))
    }
}
