pub mod check;
pub mod config;
pub mod interactive;
pub mod sum;

use crate::config::Config;
use crate::core::session::{Field, Session};
use crate::errors::{AppError, AppResult};
use crate::models::Report;
use crate::ui::messages::header;
use crate::utils::formatting::{bold, duration_preview, mins2readable};
use crate::utils::table::{Column, Table};

/// Split a "IN,OUT,LABEL" spec into its three raw fields.
/// A blank spec stands for an unused row; a spec with a single field is
/// rejected since it can never validate.
pub(crate) fn parse_row_spec(spec: &str) -> AppResult<(String, String, String)> {
    if spec.trim().is_empty() {
        return Ok((String::new(), String::new(), String::new()));
    }

    let mut parts = spec.splitn(3, ',');
    let entry = parts.next().unwrap_or("").trim().to_string();
    let exit = parts.next().map(str::trim).map(String::from);
    let label = parts.next().map(|s| s.trim().to_string()).unwrap_or_default();

    match exit {
        Some(exit) => Ok((entry, exit, label)),
        None => Err(AppError::InvalidRowSpec(spec.to_string())),
    }
}

/// Feed one parsed spec into the session through the event interface.
pub(crate) fn apply_row(session: &mut Session, idx: usize, spec: &str) -> AppResult<()> {
    let (entry, exit, label) = parse_row_spec(spec)?;
    session.on_field_edit(idx, Field::Entry, &entry);
    session.on_field_edit(idx, Field::Exit, &exit);
    session.on_field_edit(idx, Field::Label, &label);
    Ok(())
}

/// Print the row table (In / Out / Total / Description).
pub(crate) fn print_rows(session: &Session) {
    let mut table = Table::new(vec![
        Column {
            header: "In".into(),
            width: 5,
        },
        Column {
            header: "Out".into(),
            width: 5,
        },
        Column {
            header: "Total".into(),
            width: 5,
        },
        Column {
            header: "Description".into(),
            width: 11,
        },
    ]);

    for (i, row) in session.rows().iter().enumerate() {
        if !row.is_used() {
            continue;
        }
        table.add_row(vec![
            row.entry_text.clone(),
            row.exit_text.clone(),
            duration_preview(session.duration_preview(i)),
            row.label.clone(),
        ]);
    }

    table.autofit();
    print!("{}", table.render());
}

/// Print the per-description summary block.
pub(crate) fn print_report(report: &Report, cfg: &Config) {
    header("Summary");

    if report.is_empty() {
        println!("No saved timestamps yet.");
        return;
    }

    let mut table = Table::new(vec![
        Column {
            header: "Description".into(),
            width: 11,
        },
        Column {
            header: "Total".into(),
            width: 5,
        },
    ]);

    for entry in &report.entries {
        let label = if entry.label.is_empty() {
            cfg.empty_label_placeholder.clone()
        } else {
            entry.label.clone()
        };
        table.add_row(vec![
            label,
            mins2readable(entry.total_minutes, cfg.short_totals()),
        ]);
    }

    table.autofit();
    print!("{}", table.render());

    let rule_width = table.columns.iter().map(|c| c.width + 1).sum::<usize>();
    println!("{}", cfg.separator_char.repeat(rule_width));
    println!(
        "{} {}",
        bold("Total:"),
        mins2readable(report.total_minutes, cfg.short_totals())
    );
}
