//! Dates command implementation
//!
//! Prints the dates at which an asset's remaining depreciation is recognised.

use std::io::Write;
use std::path::Path;

use asset_core::types::Date;
use asset_models::depreciation::depreciation_dates;
use tracing::info;

use crate::input::load_asset;
use crate::Result;

/// Run the dates command
pub fn run(asset_path: &Path) -> Result<()> {
    info!("Generating depreciation dates...");
    info!("  Asset file: {}", asset_path.display());

    let (asset, _) = load_asset(asset_path)?;
    let dates = depreciation_dates(&asset);
    info!("  Dates: {}", dates.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&dates, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write one ISO date per line
pub fn render<W: Write>(dates: &[Date], out: &mut W) -> Result<()> {
    for date in dates {
        writeln!(out, "{}", date)?;
    }
    Ok(())
}
