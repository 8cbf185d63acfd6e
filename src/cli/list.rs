//! Catalog listing (`barcode list`).

use anyhow::Result;
use barcode_bits::{Family, Symbology};
use clap::Args;
use serde::Serialize;

/// Arguments for `barcode list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the catalog as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Row {
    name: &'static str,
    display: &'static str,
    family: Option<Family>,
}

/// Execute a list command.
pub fn handle(args: ListArgs) -> Result<()> {
    let rows: Vec<Row> = Symbology::catalog()
        .iter()
        .map(|entry| Row {
            name: entry.name,
            display: entry.display,
            family: entry.symbology.family(),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for row in rows {
        let family = row.family.map(|f| f.to_string()).unwrap_or_default();
        println!("{:<24} {:<28} {}", row.name, row.display, family);
    }
    Ok(())
}
