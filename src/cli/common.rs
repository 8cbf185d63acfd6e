//! Shared clap helper types for CLI commands.

use barcode_bits::{Code128Set, EncodeOptions, Symbology};
use clap::{Args, ValueEnum};

/// Clap value parser for symbology identifiers (`code128`, `UPC_A`, `ean13`, ...).
pub fn parse_symbology(input: &str) -> Result<Symbology, String> {
    input.parse::<Symbology>().map_err(|err| err.to_string())
}

/// Code128 set selector.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Code128SetArg {
    A,
    B,
    C,
}

impl From<Code128SetArg> for Code128Set {
    fn from(value: Code128SetArg) -> Code128Set {
        match value {
            Code128SetArg::A => Code128Set::A,
            Code128SetArg::B => Code128Set::B,
            Code128SetArg::C => Code128Set::C,
        }
    }
}

/// How a successful pattern is printed.
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum RenderArg {
    /// The raw `0`/`1` module string.
    #[default]
    Bits,
    /// A terminal preview, one block per bar module.
    Blocks,
}

/// Per-symbology flags shared by `encode` and `check`.
#[derive(Args, Debug, Default)]
pub struct OptionArgs {
    /// Code39 full-ASCII mode.
    #[arg(long)]
    pub extended: Option<bool>,
    /// Append the optional check character (Code39 Mod43, 2 of 5 Mod10).
    #[arg(long)]
    pub checksum: Option<bool>,
    /// Pin dynamic Code128 to one code set.
    #[arg(long = "set", value_enum)]
    pub set: Option<Code128SetArg>,
    /// JSON file with default options; flags given here take precedence.
    #[arg(long = "options")]
    pub options: Option<std::path::PathBuf>,
}

impl OptionArgs {
    /// Flags given on the command line, without the options file.
    pub fn flags(&self) -> EncodeOptions {
        EncodeOptions {
            extended: self.extended,
            checksum: self.checksum,
            code128_set: self.set.map(Code128Set::from),
        }
    }
}
