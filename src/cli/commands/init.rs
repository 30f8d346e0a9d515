use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        Config::init(config_path, *force)?;
    }
    Ok(())
}
