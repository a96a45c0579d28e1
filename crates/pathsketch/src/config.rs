use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::theme::NodeColor;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "pathsketch";

pub const DEFAULT_WINDOW_WIDTH: f32 = 1000.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 650.0;
const MIN_WINDOW_DIM: f32 = 200.0;
const MAX_WINDOW_DIM: f32 = 8000.0;

pub const KEYS: &[&str] = &[
    "defaults.node_color",
    "defaults.theme",
    "defaults.window_width",
    "defaults.window_height",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_color: Option<NodeColor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_width: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_height: Option<f32>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `pathsketch config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!(error = %e, "using default config");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# pathsketch configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let defaults = self.defaults.get_or_insert_with(DefaultsConfig::default);
        match key {
            "defaults.node_color" => {
                let Some(color) = NodeColor::from_name(value) else {
                    anyhow::bail!(
                        "Invalid node color: {value}. Must be 'red', 'green', 'blue', or 'yellow'."
                    );
                };
                defaults.node_color = Some(color);
            }
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                defaults.theme = Some(value.to_string());
            }
            "defaults.window_width" => {
                defaults.window_width = Some(parse_window_dim(key, value)?);
            }
            "defaults.window_height" => {
                defaults.window_height = Some(parse_window_dim(key, value)?);
            }
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {}", KEYS.join(", ")),
        }
        Ok(())
    }

    pub fn node_color(&self) -> NodeColor {
        self.defaults
            .as_ref()
            .and_then(|d| d.node_color)
            .unwrap_or_default()
    }

    pub fn theme(&self) -> &str {
        self.defaults
            .as_ref()
            .and_then(|d| d.theme.as_deref())
            .unwrap_or("light")
    }

    /// Configured window size. Values outside the accepted range (a hand-edited file can
    /// hold anything) fall back to the built-in default.
    pub fn window_size(&self) -> [f32; 2] {
        let d = self.defaults.as_ref();
        [
            window_dim_or(d.and_then(|d| d.window_width), DEFAULT_WINDOW_WIDTH),
            window_dim_or(d.and_then(|d| d.window_height), DEFAULT_WINDOW_HEIGHT),
        ]
    }
}

fn is_valid_window_dim(dim: f32) -> bool {
    (MIN_WINDOW_DIM..=MAX_WINDOW_DIM).contains(&dim)
}

fn window_dim_or(dim: Option<f32>, default: f32) -> f32 {
    match dim {
        Some(dim) if is_valid_window_dim(dim) => dim,
        Some(dim) => {
            tracing::warn!(dim, default, "ignoring out-of-range window dimension in config");
            default
        }
        None => default,
    }
}

fn parse_window_dim(key: &str, value: &str) -> Result<f32> {
    let dim: f32 = value
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid {key}: {value}. Must be a number."))?;
    if !is_valid_window_dim(dim) {
        anyhow::bail!("Invalid {key}: {value}. Must be between {MIN_WINDOW_DIM} and {MAX_WINDOW_DIM}.");
    }
    Ok(dim)
}
