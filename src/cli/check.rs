//! Validation without output (`barcode check ...`).

use anyhow::Result;
use barcode_bits::{Symbology, encode_result};
use clap::Args;

use crate::cli::common::{OptionArgs, parse_symbology};
use crate::cli::encode::fail_on_errors;
use crate::cli::utils::resolve_options;

/// Arguments for `barcode check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Symbology identifier (see `barcode list`).
    #[arg(value_parser = parse_symbology)]
    pub symbology: Symbology,
    /// Data to validate.
    pub data: String,
    #[command(flatten)]
    pub options: OptionArgs,
}

/// Execute a check command.
pub fn handle(args: CheckArgs) -> Result<()> {
    let options = resolve_options(&args.options)?;
    let result = encode_result(args.symbology, &args.data, &options);
    fail_on_errors(&result)?;
    println!(
        "ok: {} as {} ({} modules)",
        result.canonical_data.as_deref().unwrap_or_default(),
        args.symbology.display_name(),
        result.module_count()
    );
    Ok(())
}
