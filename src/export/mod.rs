mod csv;
mod fs_utils;
mod json;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Report;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the summary report to `path` in the requested format.
/// Refuses to overwrite an existing file unless `force` is set.
pub fn export_report(
    report: &Report,
    cfg: &Config,
    format: &ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => csv::write_csv(path, report, cfg)?,
        ExportFormat::Json => json::write_json(path, report)?,
    }

    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));
    Ok(())
}
