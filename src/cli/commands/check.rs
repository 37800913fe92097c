use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::format::{is_field_valid, normalize_time_text};
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Run a single field edit: print the normalized text and flag range problems.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Check { text } = cmd {
        let formatted = normalize_time_text(text);
        println!("{}", formatted);

        if !is_field_valid(&formatted) {
            warning("Time outside 00:00-23:59.");
        }
    }

    Ok(())
}
