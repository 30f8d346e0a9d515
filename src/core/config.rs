use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration as YAML.
    pub fn print(cfg: &Config, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg)?;
        println!("📄 Configuration ({}):\n", path.display());
        println!("{yaml}");
        Ok(())
    }

    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open the config file in `editor`, falling back to the platform editor.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist, run `dutylog init` first",
                path.display()
            )));
        }

        let fallback = Self::default_editor();
        let requested = editor.clone().unwrap_or_else(|| fallback.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited with '{requested}'"));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{requested}' not available, falling back to '{fallback}'"
            )),
        }

        let status = Command::new(&fallback)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot start '{fallback}': {e}")))?;

        if status.success() {
            success(format!("Configuration edited with fallback '{fallback}'"));
            Ok(())
        } else {
            Err(AppError::Config(format!("editor '{fallback}' exited with {status}")))
        }
    }
}
