use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    A4,
    Letter,
}

impl PageSize {
    /// Landscape width and height in PDF points.
    pub fn landscape(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (842.0, 595.0),
            PageSize::Letter => (792.0, 612.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_timeline_width")]
    pub timeline_width: usize,
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default = "default_true")]
    pub show_totals: bool,
    #[serde(default = "default_format")]
    pub default_format: ExportFormat,
    #[serde(default = "default_page_size")]
    pub page_size: PageSize,
    #[serde(default = "default_svg_track_width")]
    pub svg_track_width: f64,
}

fn default_timeline_width() -> usize {
    48
}
fn default_true() -> bool {
    true
}
fn default_format() -> ExportFormat {
    ExportFormat::Json
}
fn default_page_size() -> PageSize {
    PageSize::Letter
}
fn default_svg_track_width() -> f64 {
    768.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeline_width: default_timeline_width(),
            color: default_true(),
            show_totals: default_true(),
            default_format: default_format(),
            page_size: default_page_size(),
            svg_track_width: default_svg_track_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dutylog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dutylog.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.timeline_width < 24 {
            return Err(AppError::Config(format!(
                "timeline_width must be at least 24 columns, got {}",
                self.timeline_width
            )));
        }
        if !(self.svg_track_width.is_finite() && self.svg_track_width >= 96.0) {
            return Err(AppError::Config(format!(
                "svg_track_width must be at least 96 pixels, got {}",
                self.svg_track_width
            )));
        }
        Ok(())
    }

    /// Write the default configuration to `path`.
    pub fn init(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        success(format!("Config file: {}", path.display()));
        Ok(())
    }
}
