//! Routing from a requested [`Symbology`] to the encoder that implements it.

use tracing::{debug, instrument};

use crate::core::encoding::{Encoded, EncodedResult, Encoding, SymbologyEncoder};
use crate::core::error::EncodeError;
use crate::core::options::{Code128Set, EncodeOptions};
use crate::core::symbology::{Family, Symbology};
use crate::symbologies::{
    Codabar, Code11, Code39, Code93, Code128, Ean8, Ean13, Fim, Interleaved2of5, Isbn, Itf14,
    Jan13, Msi, MsiCheck, Pharmacode, Postnet, Standard2of5, Telepen, UpcA, UpcE, UpcSupplement2,
    UpcSupplement5,
};

fn unspecified() -> EncodeError {
    EncodeError::configuration("EENCODE-3", "Unspecified encoding type.")
}

/// Log flags that the chosen identifier does not use. They are never an error.
fn note_ignored(symbology: Symbology, family: Family, options: &EncodeOptions) {
    if options.extended.is_some() && family != Family::Code39 {
        debug!(%symbology, "ignoring `extended` flag");
    }
    let takes_checksum = matches!(
        family,
        Family::Code39 | Family::Standard2of5 | Family::Interleaved2of5
    );
    if options.checksum.is_some() && !takes_checksum {
        debug!(%symbology, "ignoring `checksum` flag");
    }
    if options.code128_set.is_some() && symbology != Symbology::Code128 {
        debug!(%symbology, "ignoring `code128_set` flag");
    }
}

/// Build the encoder for `symbology`, applying `options` on top of the identifier's
/// own defaults.
pub fn encoder_for(
    symbology: Symbology,
    options: &EncodeOptions,
) -> Result<Box<dyn SymbologyEncoder>, EncodeError> {
    use Symbology as S;

    let family = symbology.family().ok_or_else(unspecified)?;
    note_ignored(symbology, family, options);

    let encoder: Box<dyn SymbologyEncoder> = match family {
        Family::UpcA => Box::new(UpcA),
        Family::UpcE => Box::new(UpcE),
        Family::UpcSupplement2 => Box::new(UpcSupplement2),
        Family::UpcSupplement5 => Box::new(UpcSupplement5),
        Family::Ean13 => Box::new(Ean13),
        Family::Ean8 => Box::new(Ean8),
        Family::Jan13 => Box::new(Jan13),
        Family::Isbn => Box::new(Isbn),
        Family::Interleaved2of5 => Box::new(Interleaved2of5 {
            checksum: options
                .checksum
                .unwrap_or(symbology == S::Interleaved2of5Mod10),
        }),
        Family::Standard2of5 => Box::new(Standard2of5 {
            checksum: options.checksum.unwrap_or(matches!(
                symbology,
                S::Standard2of5Mod10 | S::Industrial2of5Mod10
            )),
        }),
        Family::Code39 => Box::new(Code39 {
            extended: options.extended.unwrap_or(symbology == S::Code39Extended),
            checksum: options.checksum.unwrap_or(symbology == S::Code39Mod43),
        }),
        Family::Codabar => Box::new(Codabar),
        Family::Postnet => Box::new(Postnet),
        Family::Msi => Box::new(Msi {
            check: match symbology {
                S::MsiMod10 => MsiCheck::Mod10,
                S::Msi2Mod10 => MsiCheck::TwoMod10,
                S::MsiMod11 => MsiCheck::Mod11,
                S::MsiMod11Mod10 => MsiCheck::Mod11Mod10,
                _ => MsiCheck::None,
            },
        }),
        Family::Code11 => Box::new(Code11),
        Family::Code128 => Box::new(Code128 {
            set: match symbology {
                S::Code128A => Some(Code128Set::A),
                S::Code128B => Some(Code128Set::B),
                S::Code128C => Some(Code128Set::C),
                _ => options.code128_set,
            },
        }),
        Family::Itf14 => Box::new(Itf14),
        Family::Code93 => Box::new(Code93),
        Family::Telepen => Box::new(Telepen),
        Family::Fim => Box::new(Fim),
        Family::Pharmacode => Box::new(Pharmacode),
    };
    Ok(encoder)
}

/// Encode `raw` as `symbology`.
///
/// Blank input and `Unspecified` are configuration errors. Any failure aborts the
/// whole encode; there is no partial pattern.
#[instrument(level = "debug", skip(options), fields(symbology = %symbology))]
pub fn encode(
    symbology: Symbology,
    raw: &str,
    options: &EncodeOptions,
) -> Result<Encoded, EncodeError> {
    if raw.trim().is_empty() {
        return Err(EncodeError::configuration(
            "EENCODE-1",
            "Input data not allowed to be blank.",
        ));
    }
    let encoder = encoder_for(symbology, options)?;
    let Encoding {
        bits,
        canonical,
        metadata,
    } = encoder.encode(raw)?;
    debug!(encoder = encoder.name(), modules = bits.len(), "encoded");

    Ok(Encoded {
        symbology,
        raw_data: raw.to_string(),
        canonical_data: canonical,
        bits,
        metadata,
    })
}

/// [`encode`], flattened into the record shape consumers store and display.
pub fn encode_result(symbology: Symbology, raw: &str, options: &EncodeOptions) -> EncodedResult {
    match encode(symbology, raw, options) {
        Ok(encoded) => encoded.into(),
        Err(err) => EncodedResult::failed(symbology, raw, &err),
    }
}
