use crate::cli::parser::Commands;
use crate::core::classify::ClassifyLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Classify { statuses } = cmd {
        ClassifyLogic::print(statuses);
    }
    Ok(())
}
