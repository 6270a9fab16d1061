//! Check command implementation
//!
//! Validates an asset file and summarises what remains to depreciate.

use std::io::Write;
use std::path::Path;

use asset_core::types::Currency;
use asset_models::depreciation::{depreciation_dates, AssetSchedule};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::input::load_asset;
use crate::Result;

/// Run the check command
pub fn run(asset_path: &Path, config: &CliConfig) -> Result<()> {
    info!("Checking asset file...");
    info!("  Asset file: {}", asset_path.display());

    let (asset, currency) = load_asset(asset_path)?;
    let currency = currency.unwrap_or(config.currency);

    if asset.depreciable_basis() <= Decimal::ZERO {
        warn!("Asset is fully depreciated; schedule will be empty");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&asset, currency, &mut out)?;
    out.flush()?;

    info!("Check complete");
    Ok(())
}

/// Write a summary of `asset` to `out`
pub fn render<W: Write>(asset: &AssetSchedule, currency: Currency, out: &mut W) -> Result<()> {
    let basis = asset.depreciable_basis();
    let remaining = depreciation_dates(asset);

    writeln!(out, "Asset OK")?;
    writeln!(out, "  Value:              {} {}", asset.value(), currency)?;
    writeln!(out, "  Residual value:     {} {}", asset.residual_value(), currency)?;
    writeln!(
        out,
        "  Period:             {} to {} ({}, {})",
        asset.start_date(),
        asset.end_date(),
        asset.frequency(),
        asset.depreciation_method()
    )?;
    writeln!(out, "  Posted lines:       {}", asset.posted_lines().len())?;
    writeln!(out, "  Depreciated:        {} {}", asset.depreciated_amount(), currency)?;
    writeln!(out, "  Depreciable basis:  {} {}", basis, currency)?;
    if basis > Decimal::ZERO {
        writeln!(out, "  Remaining dates:    {}", remaining.len())?;
    } else {
        writeln!(out, "  Remaining dates:    0 (nothing left to depreciate)")?;
    }
    Ok(())
}
