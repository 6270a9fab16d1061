//! Schedule command implementation
//!
//! Computes the remaining depreciation schedule of an asset file and prints
//! it as a table, JSON or CSV.

use std::io::Write;
use std::path::Path;

use asset_core::types::{Currency, Rounding};
use asset_models::depreciation::{DepreciationSchedule, DepreciationScheduler, ScheduleLine};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::config::{parse_currency, CliConfig, OutputFormat};
use crate::input::load_asset;
use crate::Result;

const CSV_HEADERS: [&str; 6] = [
    "date",
    "acquired_value",
    "depreciable_basis",
    "depreciation",
    "accumulated_depreciation",
    "actual_value",
];

/// Run the schedule command
pub fn run(asset_path: &Path, currency: Option<&str>, config: &CliConfig) -> Result<()> {
    info!("Computing depreciation schedule...");
    info!("  Asset file: {}", asset_path.display());

    let (asset, file_currency) = load_asset(asset_path)?;
    let currency = match currency {
        Some(code) => parse_currency(code)?,
        None => file_currency.unwrap_or(config.currency),
    };
    let rounding = config.rounding_for(currency);
    info!("  Currency: {} ({})", currency, rounding.mode());
    info!("  Output format: {}", config.format);

    let scheduler = DepreciationScheduler::new(&asset, rounding);
    let schedule = scheduler.depreciate();
    info!("  Lines: {}", schedule.len());

    let report = ScheduleReport::new(currency, rounding, scheduler.depreciable_basis(), &schedule);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&report, config.format, &mut out)?;
    out.flush()?;

    info!("Schedule complete");
    Ok(())
}

/// Computed schedule with the context it was computed in
#[derive(Debug, Serialize)]
pub struct ScheduleReport<'a> {
    pub currency: &'static str,
    pub rounding: &'static str,
    pub depreciable_basis: Decimal,
    pub total_depreciation: Decimal,
    pub lines: Vec<&'a ScheduleLine>,
}

impl<'a> ScheduleReport<'a> {
    pub fn new(
        currency: Currency,
        rounding: Rounding,
        depreciable_basis: Decimal,
        schedule: &'a DepreciationSchedule,
    ) -> Self {
        Self {
            currency: currency.code(),
            rounding: rounding.mode().name(),
            depreciable_basis,
            total_depreciation: schedule.total_depreciation(),
            lines: schedule.iter().collect(),
        }
    }
}

/// Write `report` to `out` in `format`
pub fn render<W: Write>(report: &ScheduleReport<'_>, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(report, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => render_csv(report, out),
    }
}

fn render_table<W: Write>(report: &ScheduleReport<'_>, out: &mut W) -> Result<()> {
    if report.lines.is_empty() {
        writeln!(
            out,
            "Nothing left to depreciate (depreciable basis {} {})",
            report.depreciable_basis, report.currency
        )?;
        return Ok(());
    }

    let rule = "─".repeat(16);
    writeln!(out, "┌────────────┬{rule}┬{rule}┬{rule}┬{rule}┬{rule}┐")?;
    writeln!(
        out,
        "│ {:<10} │ {:>14} │ {:>14} │ {:>14} │ {:>14} │ {:>14} │",
        "Date", "Acquired", "Basis", "Depreciation", "Accumulated", "Actual"
    )?;
    writeln!(out, "├────────────┼{rule}┼{rule}┼{rule}┼{rule}┼{rule}┤")?;
    for line in &report.lines {
        writeln!(
            out,
            "│ {:<10} │ {:>14} │ {:>14} │ {:>14} │ {:>14} │ {:>14} │",
            line.date.to_string(),
            line.acquired_value.to_string(),
            line.depreciable_basis.to_string(),
            line.depreciation.to_string(),
            line.accumulated_depreciation.to_string(),
            line.actual_value.to_string(),
        )?;
    }
    writeln!(out, "└────────────┴{rule}┴{rule}┴{rule}┴{rule}┴{rule}┘")?;
    writeln!(
        out,
        "Total depreciation: {} {} over {} lines",
        report.total_depreciation,
        report.currency,
        report.lines.len()
    )?;
    Ok(())
}

fn render_csv<W: Write>(report: &ScheduleReport<'_>, out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADERS)?;
    for line in &report.lines {
        writer.write_record([
            line.date.to_string(),
            line.acquired_value.to_string(),
            line.depreciable_basis.to_string(),
            line.depreciation.to_string(),
            line.accumulated_depreciation.to_string(),
            line.actual_value.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
