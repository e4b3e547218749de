use pix_engine::Color;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

const DEFAULT_BRUSH_COLOR: &str = "#C8C8C8";
const DEFAULT_BACKGROUND_COLOR: &str = "#1F5F6F";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Options {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    /// Displayed size of one cell, used to map pointer coordinates
    #[serde(default = "default_cell_size")]
    pub cell_size: f64,
    #[serde(default = "default_brush_color")]
    pub brush_color: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    /// Maximum number of undo steps, unbounded if not set
    #[serde(default)]
    pub max_undo_depth: Option<usize>,
}

fn default_width() -> i32 {
    16
}

fn default_height() -> i32 {
    16
}

fn default_cell_size() -> f64 {
    50.0
}

fn default_brush_color() -> String {
    DEFAULT_BRUSH_COLOR.to_string()
}

fn default_background_color() -> String {
    DEFAULT_BACKGROUND_COLOR.to_string()
}

impl Default for Options {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            cell_size: default_cell_size(),
            brush_color: default_brush_color(),
            background_color: default_background_color(),
            max_undo_depth: None,
        }
    }
}

impl Options {
    /// Loads `options.toml` from the configuration directory, defaults if missing or broken.
    pub fn load_options() -> Self {
        if let Some(dir) = Self::get_config_dir() {
            let options_file = dir.join("options.toml");
            if options_file.exists() {
                match Self::load_from(&options_file) {
                    Ok(options) => return options,
                    Err(err) => log::error!("Error reading options file: {err}"),
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let txt = fs::read_to_string(path)?;
        Self::parse(&txt)
    }

    pub fn parse(txt: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    pub fn brush_color(&self) -> pix_engine::Result<Color> {
        Color::from_hex(&self.brush_color)
    }

    pub fn background_color(&self) -> pix_engine::Result<Color> {
        Color::from_hex(&self.background_color)
    }

    /// Returns the configuration directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", "pix_replay").map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }

    /// Returns the log directory path, created on demand
    pub fn get_log_dir() -> Option<PathBuf> {
        let dir = Self::get_config_dir()?;
        if !dir.exists() {
            fs::create_dir_all(&dir).ok()?;
        }
        Some(dir)
    }
}
