use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::EncodeError;

/// Requestable barcode standard.
///
/// Several identifiers share one encoder implementation; see [`Symbology::family`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Symbology {
    #[default]
    Unspecified,
    #[serde(rename = "upc-a")]
    UpcA,
    #[serde(rename = "upc-e")]
    UpcE,
    #[serde(rename = "upc-supplemental-2")]
    UpcSupplemental2,
    #[serde(rename = "upc-supplemental-5")]
    UpcSupplemental5,
    #[serde(rename = "ean-13")]
    Ean13,
    #[serde(rename = "ean-8")]
    Ean8,
    #[serde(rename = "interleaved-2of5")]
    Interleaved2of5,
    #[serde(rename = "interleaved-2of5-mod10")]
    Interleaved2of5Mod10,
    #[serde(rename = "standard-2of5")]
    Standard2of5,
    #[serde(rename = "standard-2of5-mod10")]
    Standard2of5Mod10,
    #[serde(rename = "industrial-2of5")]
    Industrial2of5,
    #[serde(rename = "industrial-2of5-mod10")]
    Industrial2of5Mod10,
    Code39,
    #[serde(rename = "code39-extended")]
    Code39Extended,
    #[serde(rename = "code39-mod43")]
    Code39Mod43,
    Codabar,
    Postnet,
    Bookland,
    Isbn,
    #[serde(rename = "jan-13")]
    Jan13,
    #[serde(rename = "msi-mod10")]
    MsiMod10,
    #[serde(rename = "msi-2mod10")]
    Msi2Mod10,
    #[serde(rename = "msi-mod11")]
    MsiMod11,
    #[serde(rename = "msi-mod11-mod10")]
    MsiMod11Mod10,
    ModifiedPlessey,
    Code11,
    #[serde(rename = "usd-8")]
    Usd8,
    #[serde(rename = "ucc-12")]
    Ucc12,
    #[serde(rename = "ucc-13")]
    Ucc13,
    Logmars,
    Code128,
    #[serde(rename = "code128-a")]
    Code128A,
    #[serde(rename = "code128-b")]
    Code128B,
    #[serde(rename = "code128-c")]
    Code128C,
    #[serde(rename = "itf-14")]
    Itf14,
    Code93,
    Telepen,
    Fim,
    Pharmacode,
}

/// Encoder implementation an identifier is routed to. Serialises as its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    UpcA,
    UpcE,
    UpcSupplement2,
    UpcSupplement5,
    Ean13,
    Ean8,
    Jan13,
    Isbn,
    Interleaved2of5,
    Standard2of5,
    Code39,
    Codabar,
    Postnet,
    Msi,
    Code11,
    Code128,
    Itf14,
    Code93,
    Telepen,
    Fim,
    Pharmacode,
}

/// Catalog entry: identifier, stable name, display name.
pub struct CatalogEntry {
    pub symbology: Symbology,
    pub name: &'static str,
    pub display: &'static str,
}

macro_rules! entry {
    ($sym:ident, $name:expr, $display:expr) => {
        CatalogEntry {
            symbology: Symbology::$sym,
            name: $name,
            display: $display,
        }
    };
}

static CATALOG: &[CatalogEntry] = &[
    entry!(UpcA, "upc-a", "UPC-A"),
    entry!(UpcE, "upc-e", "UPC-E"),
    entry!(UpcSupplemental2, "upc-supplemental-2", "UPC Supplemental 2-digit"),
    entry!(UpcSupplemental5, "upc-supplemental-5", "UPC Supplemental 5-digit"),
    entry!(Ean13, "ean-13", "EAN-13"),
    entry!(Ean8, "ean-8", "EAN-8"),
    entry!(Interleaved2of5, "interleaved-2of5", "Interleaved 2 of 5"),
    entry!(Interleaved2of5Mod10, "interleaved-2of5-mod10", "Interleaved 2 of 5 Mod 10"),
    entry!(Standard2of5, "standard-2of5", "Standard 2 of 5"),
    entry!(Standard2of5Mod10, "standard-2of5-mod10", "Standard 2 of 5 Mod 10"),
    entry!(Industrial2of5, "industrial-2of5", "Industrial 2 of 5"),
    entry!(Industrial2of5Mod10, "industrial-2of5-mod10", "Industrial 2 of 5 Mod 10"),
    entry!(Code39, "code39", "Code 39"),
    entry!(Code39Extended, "code39-extended", "Code 39 Extended"),
    entry!(Code39Mod43, "code39-mod43", "Code 39 Mod 43"),
    entry!(Codabar, "codabar", "Codabar"),
    entry!(Postnet, "postnet", "PostNet"),
    entry!(Bookland, "bookland", "Bookland"),
    entry!(Isbn, "isbn", "ISBN"),
    entry!(Jan13, "jan-13", "JAN-13"),
    entry!(MsiMod10, "msi-mod10", "MSI Mod 10"),
    entry!(Msi2Mod10, "msi-2mod10", "MSI 2 Mod 10"),
    entry!(MsiMod11, "msi-mod11", "MSI Mod 11"),
    entry!(MsiMod11Mod10, "msi-mod11-mod10", "MSI Mod 11 Mod 10"),
    entry!(ModifiedPlessey, "modified-plessey", "Modified Plessey"),
    entry!(Code11, "code11", "Code 11"),
    entry!(Usd8, "usd-8", "USD-8"),
    entry!(Ucc12, "ucc-12", "UCC-12"),
    entry!(Ucc13, "ucc-13", "UCC-13"),
    entry!(Logmars, "logmars", "LOGMARS"),
    entry!(Code128, "code128", "Code 128"),
    entry!(Code128A, "code128-a", "Code 128-A"),
    entry!(Code128B, "code128-b", "Code 128-B"),
    entry!(Code128C, "code128-c", "Code 128-C"),
    entry!(Itf14, "itf-14", "ITF-14"),
    entry!(Code93, "code93", "Code 93"),
    entry!(Telepen, "telepen", "Telepen"),
    entry!(Fim, "fim", "FIM"),
    entry!(Pharmacode, "pharmacode", "Pharmacode"),
];

impl Symbology {
    /// Every requestable identifier, in catalog order. `Unspecified` is not listed.
    pub fn catalog() -> &'static [CatalogEntry] {
        CATALOG
    }

    fn entry(self) -> Option<&'static CatalogEntry> {
        CATALOG.iter().find(|e| e.symbology == self)
    }

    pub fn name(self) -> &'static str {
        self.entry().map_or("unspecified", |e| e.name)
    }

    pub fn display_name(self) -> &'static str {
        self.entry().map_or("Unspecified", |e| e.display)
    }

    /// Encoder implementation this identifier is routed to, `None` for `Unspecified`.
    pub fn family(self) -> Option<Family> {
        use Symbology::*;
        let family = match self {
            Unspecified => return None,
            UpcA | Ucc12 => Family::UpcA,
            UpcE => Family::UpcE,
            UpcSupplemental2 => Family::UpcSupplement2,
            UpcSupplemental5 => Family::UpcSupplement5,
            Ean13 | Ucc13 => Family::Ean13,
            Ean8 => Family::Ean8,
            Jan13 => Family::Jan13,
            Isbn | Bookland => Family::Isbn,
            Interleaved2of5 | Interleaved2of5Mod10 => Family::Interleaved2of5,
            Standard2of5 | Standard2of5Mod10 | Industrial2of5 | Industrial2of5Mod10 => {
                Family::Standard2of5
            }
            Code39 | Code39Extended | Code39Mod43 | Logmars => Family::Code39,
            Codabar => Family::Codabar,
            Postnet => Family::Postnet,
            MsiMod10 | Msi2Mod10 | MsiMod11 | MsiMod11Mod10 | ModifiedPlessey => Family::Msi,
            Code11 | Usd8 => Family::Code11,
            Code128 | Code128A | Code128B | Code128C => Family::Code128,
            Itf14 => Family::Itf14,
            Code93 => Family::Code93,
            Telepen => Family::Telepen,
            Fim => Family::Fim,
            Pharmacode => Family::Pharmacode,
        };
        Some(family)
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::UpcA => "upc-a",
            Family::UpcE => "upc-e",
            Family::UpcSupplement2 => "upc-supplement-2",
            Family::UpcSupplement5 => "upc-supplement-5",
            Family::Ean13 => "ean-13",
            Family::Ean8 => "ean-8",
            Family::Jan13 => "jan-13",
            Family::Isbn => "isbn",
            Family::Interleaved2of5 => "interleaved-2of5",
            Family::Standard2of5 => "standard-2of5",
            Family::Code39 => "code39",
            Family::Codabar => "codabar",
            Family::Postnet => "postnet",
            Family::Msi => "msi",
            Family::Code11 => "code11",
            Family::Code128 => "code128",
            Family::Itf14 => "itf-14",
            Family::Code93 => "code93",
            Family::Telepen => "telepen",
            Family::Fim => "fim",
            Family::Pharmacode => "pharmacode",
        };
        f.write_str(name)
    }
}

impl Serialize for Family {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepts catalog names case-insensitively, ignoring `-`, `_` and spaces
/// (`UPC_A`, `upca` and `upc-a` are the same identifier).
impl FromStr for Symbology {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = squash(s);
        CATALOG
            .iter()
            .find(|e| squash(e.name) == wanted)
            .map(|e| e.symbology)
            .ok_or_else(|| {
                EncodeError::configuration(
                    "EENCODE-2",
                    format!("Unsupported encoding type specified. ('{}')", s.trim()),
                )
            })
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
