// ABOUTME: Presentation configuration handling.
// ABOUTME: Loads and saves slide geometry and layout policy from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::Color;

/// Slide aspect presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SlideSize {
    /// 4:3, 10 x 7.5 inches
    #[default]
    Standard,
    /// 16:9, 13.333 x 7.5 inches
    Widescreen,
}

impl SlideSize {
    /// Width and height in inches
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            SlideSize::Standard => (10.0, 7.5),
            SlideSize::Widescreen => (40.0 / 3.0, 7.5),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SlideSize::Standard => "4:3",
            SlideSize::Widescreen => "16:9",
        }
    }
}

/// Slide dimensions: a preset, optionally overridden by explicit inches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SlideSettings {
    pub size: SlideSize,
    /// Custom width in inches (overrides the preset)
    pub width: Option<f64>,
    /// Custom height in inches (overrides the preset)
    pub height: Option<f64>,
}

impl SlideSettings {
    pub fn dimensions(&self) -> (f64, f64) {
        let (width, height) = self.size.dimensions();
        (self.width.unwrap_or(width), self.height.unwrap_or(height))
    }
}

/// What to do when sibling weights do not add up to a full grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightPolicy {
    /// Lay out as given, overflow and gaps included
    Permissive,
    /// Lay out as given and log a warning
    #[default]
    Warn,
    /// Reject the design before anything is drawn
    Strict,
}

/// Defaults applied to text boxes that don't set their own style
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextDefaults {
    /// Font size in points
    pub font_size: f64,
    pub font_color: Color,
    pub fill_color: Option<Color>,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            font_color: Color::BLACK,
            fill_color: Some(Color::WHITE),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Slide dimensions
    pub slide: SlideSettings,

    /// Space reserved for the slide title, in inches
    pub header_height: f64,

    /// Space reserved at the bottom of the slide, in inches
    pub footer_height: f64,

    /// Horizontal slide margins, in inches
    pub left_margin: f64,
    pub right_margin: f64,

    /// Sibling weight validation
    pub weight_policy: WeightPolicy,

    /// Text box styling defaults
    pub text: TextDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slide: SlideSettings::default(),
            header_height: 1.5,
            footer_height: 1.0,
            left_margin: 0.25,
            right_margin: 0.25,
            weight_policy: WeightPolicy::default(),
            text: TextDefaults::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// The platform reports no per-user config directory
    #[error("Could not determine config directory")]
    NoConfigPath,
}

impl Config {
    /// `<config dir>/grid-deck/config.toml`, or `None` on platforms without a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("grid-deck").join("config.toml"))
    }

    /// Read a TOML config. Keys the file leaves out keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// The config at `default_path`, or defaults when there is no usable file there
    pub fn load_or_default() -> Self {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Write the config as TOML, creating missing parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = self.to_toml()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Save to `default_path` and return where the file went
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigPath)?;
        self.save(&path)?;
        Ok(path)
    }

    /// Pretty-printed TOML, the same text `save` writes
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Slide width and height in inches
    pub fn slide_dimensions(&self) -> (f64, f64) {
        self.slide.dimensions()
    }
}
