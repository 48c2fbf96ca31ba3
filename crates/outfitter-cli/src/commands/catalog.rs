//! Catalog listing commands.

use anyhow::{Context, Result};

use outfitter_cli::output::{hull_table, outfit_table, render_json, OutputFormat};
use outfitter_lib::Catalog;

/// Handle the hulls subcommand.
pub fn handle_list_hulls(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let hulls = catalog.hulls();
    match format {
        OutputFormat::Text => print!("{}", hull_table(&hulls)),
        OutputFormat::Json => render_json(&hulls).context("failed to write hull list")?,
    }
    Ok(())
}

/// Handle the outfits subcommand.
pub fn handle_list_outfits(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let outfits = catalog.outfits();
    match format {
        OutputFormat::Text => print!("{}", outfit_table(&outfits)),
        OutputFormat::Json => render_json(&outfits).context("failed to write outfit list")?,
    }
    Ok(())
}
