use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        day,
        force,
    } = cmd
    {
        let trip = Core::load(input, day.as_deref())?;
        let format = format.unwrap_or(cfg.default_format);
        ExportLogic::export(&trip, format, file, *force, cfg)?;
    }
    Ok(())
}
