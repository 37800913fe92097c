use crate::errors::AppResult;
use crate::models::Report;
use std::path::Path;

/// Write the report as pretty-printed JSON.
pub fn write_json(path: &Path, report: &Report) -> AppResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}
