use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Report;
use crate::utils::formatting::mins2readable;
use csv::Writer;
use std::path::Path;

/// Write the per-label totals as CSV.
pub fn write_csv(path: &Path, report: &Report, cfg: &Config) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["description", "total_minutes", "total"])?;

    for entry in &report.entries {
        let label = if entry.label.is_empty() {
            cfg.empty_label_placeholder.as_str()
        } else {
            entry.label.as_str()
        };

        let minutes = entry.total_minutes.to_string();
        let total = mins2readable(entry.total_minutes, cfg.short_totals());
        wtr.write_record([label, minutes.as_str(), total.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
