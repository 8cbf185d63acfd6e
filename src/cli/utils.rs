//! Convenience helpers shared across command handlers.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use barcode_bits::EncodeOptions;
use tracing::debug;

use crate::cli::common::OptionArgs;

/// Resolve input for commands that accept either an inline string or a file.
///
/// File and stdin input lose one trailing line ending; inline text is used verbatim.
pub fn read_text_arg(text: Option<String>, from: Option<PathBuf>) -> Result<String> {
    if let Some(t) = text {
        return Ok(t);
    }
    let content = match from {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => read_stdin()?,
    };
    Ok(strip_line_ending(&content).to_string())
}

/// Read the entire stdin stream into memory.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    Ok(buffer)
}

fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

/// Load an options file (JSON, same field names as [`EncodeOptions`]).
pub fn load_options(path: &Path) -> Result<EncodeOptions> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read options {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse options {}", path.display()))
}

/// Command-line flags layered over the optional options file.
pub fn resolve_options(args: &OptionArgs) -> Result<EncodeOptions> {
    let flags = args.flags();
    let Some(path) = &args.options else {
        return Ok(flags);
    };
    let file = load_options(path)?;
    debug!(?file, ?flags, "merging options file under command-line flags");
    Ok(flags.or(file))
}

/// Terminal preview of a module pattern: a full block per bar, a space per gap.
pub fn render_blocks(bits: &str) -> String {
    bits.chars()
        .map(|module| if module == '1' { '█' } else { ' ' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_one_line_ending() {
        assert_eq!(strip_line_ending("123\n"), "123");
        assert_eq!(strip_line_ending("123\r\n"), "123");
        assert_eq!(strip_line_ending("123\n\n"), "123\n");
        assert_eq!(strip_line_ending("123"), "123");
    }

    #[test]
    fn blocks_follow_modules() {
        assert_eq!(render_blocks("1101"), "██ █");
    }
}
