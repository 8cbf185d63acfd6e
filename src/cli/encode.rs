//! Encoding (`barcode encode ...`).

use std::path::PathBuf;

use anyhow::{Result, bail};
use barcode_bits::{EncodedResult, Symbology, encode_result};
use clap::Args;

use crate::cli::common::{OptionArgs, RenderArg, parse_symbology};
use crate::cli::utils::{read_text_arg, render_blocks, resolve_options};

/// Arguments for `barcode encode`.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Symbology identifier (see `barcode list`).
    #[arg(value_parser = parse_symbology)]
    pub symbology: Symbology,
    /// Input data (falls back to stdin if omitted).
    #[arg(long)]
    pub text: Option<String>,
    /// Read input from file (`-` for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
    #[command(flatten)]
    pub options: OptionArgs,
    /// Print the full result record as JSON.
    #[arg(long)]
    pub json: bool,
    /// Output form for the pattern.
    #[arg(long, value_enum, default_value_t = RenderArg::Bits)]
    pub render: RenderArg,
}

/// Execute an encode command.
pub fn handle(args: EncodeArgs) -> Result<()> {
    let text = read_text_arg(args.text.clone(), args.from.clone())?;
    let options = resolve_options(&args.options)?;
    let result = encode_result(args.symbology, &text, &options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_ok() {
        match args.render {
            RenderArg::Bits => println!("{}", result.bits),
            RenderArg::Blocks => {
                let row = render_blocks(&result.bits);
                for _ in 0..4 {
                    println!("{row}");
                }
                println!("{}", result.canonical_data.as_deref().unwrap_or_default());
            }
        }
    }
    fail_on_errors(&result)
}

/// Turn a failed record into the process error (and non-zero exit status).
pub fn fail_on_errors(result: &EncodedResult) -> Result<()> {
    if result.is_ok() {
        return Ok(());
    }
    let messages: Vec<String> = result.errors.iter().map(|e| e.text()).collect();
    bail!("{}", messages.join("; "))
}
