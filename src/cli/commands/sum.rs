use crate::cli::commands::{apply_row, print_report, print_rows};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, export_report};
use std::io::BufRead;
use std::path::Path;

/// One-shot confirmation: build a session from row specs, confirm, and print
/// (or export) the summary. Any invalid row aborts with the full error list.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sum {
        rows,
        format,
        file,
        force,
    } = cmd
    {
        //
        // 1. Collect row specs (args, or stdin when none given)
        //
        let specs: Vec<String> = if rows.is_empty() {
            std::io::stdin()
                .lock()
                .lines()
                .collect::<Result<_, _>>()?
        } else {
            rows.clone()
        };

        //
        // 2. Feed them through the event interface
        //
        let mut session = Session::new();
        for (i, spec) in specs.iter().enumerate() {
            apply_row(&mut session, i, spec)?;
        }

        //
        // 3. Confirm: all rows commit, or none do
        //
        session
            .on_confirm()
            .map_err(|errs| AppError::Validation(errs.join("\n")))?;

        //
        // 4. Render or export
        //
        print_rows(&session);
        let report = session.report();

        match (format, file) {
            (Some(fmt), Some(path)) => {
                export_report(&report, cfg, fmt, Path::new(path), *force)?
            }
            (Some(_), None) => {
                return Err(AppError::Export("--format requires --file".to_string()));
            }
            _ => print_report(&report, cfg),
        }
    }

    Ok(())
}
