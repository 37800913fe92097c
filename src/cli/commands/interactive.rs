use crate::cli::commands::{print_report, print_rows};
use crate::config::Config;
use crate::core::session::{Field, Session};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::io::BufRead;

const HELP: &str = "\
Commands:
  row N IN OUT [LABEL]   set row N (1-based); use '-' for an empty field
  show                   print rows and summary
  confirm                validate and save all used rows
  clear                  drop saved entries and blank all rows
  help                   this text
  quit                   exit";

fn blank_if_dash(s: &str) -> &str {
    if s == "-" { "" } else { s }
}

/// Line-driven session over stdin, exercising the full event interface.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = Session::new();
    info("Interactive session. Type 'help' for commands.");

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();

        match words.next() {
            None => continue,
            Some("quit") | Some("exit") => break,
            Some("help") => println!("{HELP}"),
            Some("show") => {
                print_rows(&session);
                print_report(&session.report(), cfg);
            }
            Some("confirm") => match session.on_confirm().map(|e| e.to_vec()) {
                Ok(entries) => {
                    success(format!("Saved {} entries.", entries.len()));
                    for e in &entries {
                        println!("  {} - {}  {}", e.entry_str(), e.exit_str(), e.label);
                    }
                    print_report(&session.report(), cfg);
                }
                Err(errors) => {
                    warning("Please fix the following:");
                    for e in &errors {
                        warning(e);
                    }
                }
            },
            Some("clear") => {
                session.on_clear();
                info("Saved timestamps removed, rows cleared.");
            }
            Some("row") => {
                let idx = words
                    .next()
                    .and_then(|n| n.parse::<usize>().ok())
                    .and_then(|n| n.checked_sub(1))
                    .ok_or_else(|| AppError::InvalidRowIndex(line.clone()))?;

                let entry = blank_if_dash(words.next().unwrap_or("")).to_string();
                let exit = blank_if_dash(words.next().unwrap_or("")).to_string();
                let label = words.collect::<Vec<_>>().join(" ");

                let e = session.on_field_edit(idx, Field::Entry, &entry);
                if !e.valid {
                    warning(format!("Row {}: entry time out of range", idx + 1));
                }
                let x = session.on_field_edit(idx, Field::Exit, &exit);
                if !x.valid {
                    warning(format!("Row {}: exit time out of range", idx + 1));
                }
                session.on_field_edit(idx, Field::Label, &label);

                println!(
                    "row {} = {} {} {}",
                    idx + 1,
                    if e.formatted.is_empty() { "-" } else { &e.formatted },
                    if x.formatted.is_empty() { "-" } else { &x.formatted },
                    session.rows()[idx].label
                );
            }
            Some(other) => warning(format!("Unknown command '{}'. Try 'help'.", other)),
        }
    }

    Ok(())
}
