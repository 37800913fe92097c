use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;

/// Manage the configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        init,
        print_config,
        check,
    } = cmd
    {
        if *init {
            let path = Config::init_all()?;
            success(format!("Config file written: {}", path.display()));
            return Ok(());
        }

        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                print!("{}", fs::read_to_string(&path)?);
            } else {
                info("No config file found, using defaults:");
                let yaml = serde_yaml::to_string(cfg)
                    .map_err(|e| AppError::Config(e.to_string()))?;
                print!("{yaml}");
            }
            return Ok(());
        }

        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                success("Configuration OK.");
            } else {
                for p in problems {
                    warning(format!("Invalid field: {}", p));
                }
                return Err(AppError::Config("configuration check failed".to_string()));
            }
            return Ok(());
        }

        info(format!("Config file: {}", Config::config_file().display()));
    }

    Ok(())
}
