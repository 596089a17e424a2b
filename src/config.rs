use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::color::{self, Color};
use crate::error::{ConfigError, ConfigResult};
use crate::tool::{ToolKind, ToolSettings, WorkingColors};

/// Startup settings for the editor.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub canvas_width: usize,
    pub canvas_height: usize,
    /// Grid the tile stamp snaps to, and the size of captured tiles
    pub tile_size: usize,
    /// Screen pixels per canvas pixel
    pub display_scale: f32,
    pub colors: WorkingColors,
    pub palette: Vec<Color>,
    pub initial_tool: ToolKind,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 64,
            canvas_height: 64,
            tile_size: 16,
            display_scale: 8.0,
            colors: WorkingColors::default(),
            palette: color::default_palette(),
            initial_tool: ToolKind::default(),
        }
    }
}

impl EditorConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Like [`EditorConfig::load`], falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{}; using default config", e);
            Self::default()
        })
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas must not be empty, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.tile_size == 0 {
            return Err(ConfigError::Invalid("tile_size must be positive".to_string()));
        }
        if !self.display_scale.is_finite() || self.display_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "display_scale must be positive, got {}",
                self.display_scale
            )));
        }
        Ok(())
    }

    /// A blank canvas of the configured size
    pub fn new_canvas(&self) -> Canvas {
        Canvas::new(self.canvas_width, self.canvas_height)
    }

    pub fn tool_settings(&self) -> ToolSettings {
        ToolSettings {
            colors: self.colors,
            tile: None,
            tile_size: self.tile_size,
        }
    }
}
