//! Console configuration
//!
//! Layout, animation and colour settings loaded from `.game-console.toml`.
//! Pixel values are in viewport units, so a host that renders into terminal
//! cells can shrink them to fit.

use serde::{Deserialize, Serialize};

/// RGBA colour with components in `0.0..=1.0`
pub type Rgba = [f32; 4];

/// Console configuration loaded from `.game-console.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// Fraction of the viewport height the open console covers
    #[serde(default = "default_open_fraction")]
    pub open_fraction: f32,

    /// Slide animation speed in viewport units per second
    #[serde(default = "default_slide_speed")]
    pub slide_speed: f32,

    /// Extra spacing added to the font line height
    #[serde(default = "default_line_padding")]
    pub line_padding: f32,

    /// Left margin for the input line and log lines
    #[serde(default = "default_x_border")]
    pub x_border: f32,

    /// Distance of the FPS readout from the right edge
    #[serde(default = "default_fps_right_offset")]
    pub fps_right_offset: f32,

    /// Drop of the FPS readout below the top of the entry row
    #[serde(default = "default_fps_baseline_offset")]
    pub fps_baseline_offset: f32,

    /// Drop of the input text below the top of the entry row
    #[serde(default = "default_input_baseline_offset")]
    pub input_baseline_offset: f32,

    /// Rows reserved besides the log (input row and FPS row)
    #[serde(default = "default_scroll_margin")]
    pub scroll_margin: usize,

    /// Translucent console background
    #[serde(default = "default_background_color")]
    pub background_color: Rgba,

    /// Thin highlight rule along the entry row
    #[serde(default = "default_rule_color")]
    pub rule_color: Rgba,

    /// First line shown in the log
    #[serde(default = "default_welcome_line")]
    pub welcome_line: String,

    /// Message published when tab is typed
    #[serde(default = "default_quick_command")]
    pub quick_command: String,
}

fn default_open_fraction() -> f32 {
    0.65
}

fn default_slide_speed() -> f32 {
    1500.0
}

fn default_line_padding() -> f32 {
    8.0
}

fn default_x_border() -> f32 {
    42.0
}

fn default_fps_right_offset() -> f32 {
    175.0
}

fn default_fps_baseline_offset() -> f32 {
    10.0
}

fn default_input_baseline_offset() -> f32 {
    5.0
}

fn default_scroll_margin() -> usize {
    2
}

fn default_background_color() -> Rgba {
    [0.15, 0.6, 0.25, 0.3]
}

fn default_rule_color() -> Rgba {
    [1.0, 1.0, 0.9, 0.5]
}

fn default_welcome_line() -> String {
    "    -= welcome =-".to_string()
}

fn default_quick_command() -> String {
    "edit".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            open_fraction: default_open_fraction(),
            slide_speed: default_slide_speed(),
            line_padding: default_line_padding(),
            x_border: default_x_border(),
            fps_right_offset: default_fps_right_offset(),
            fps_baseline_offset: default_fps_baseline_offset(),
            input_baseline_offset: default_input_baseline_offset(),
            scroll_margin: default_scroll_margin(),
            background_color: default_background_color(),
            rule_color: default_rule_color(),
            welcome_line: default_welcome_line(),
            quick_command: default_quick_command(),
        }
    }
}

impl ConsoleConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    pub fn load() -> Self {
        Self::from_content(crate::load_config_file())
    }

    /// Build the config from optional file content.
    ///
    /// Missing or malformed content falls back to defaults.
    pub fn from_content(content: Option<String>) -> Self {
        if let Some(content) = content {
            match Self::from_toml(&content) {
                Ok(config) => {
                    log::info!("Loaded console config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file, using defaults: {}", e);
                }
            }
        }

        log::debug!("Using default console config");
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(content)?;
        Ok(config.validate())
    }

    /// Replace values the console cannot work with by their defaults
    pub fn validate(mut self) -> Self {
        if !(self.open_fraction > 0.0 && self.open_fraction <= 1.0) {
            log::warn!(
                "open_fraction {} out of range (0, 1], using {}",
                self.open_fraction,
                default_open_fraction()
            );
            self.open_fraction = default_open_fraction();
        }
        if !(self.slide_speed > 0.0) {
            log::warn!(
                "slide_speed {} must be positive, using {}",
                self.slide_speed,
                default_slide_speed()
            );
            self.slide_speed = default_slide_speed();
        }
        if self.line_padding < 0.0 {
            log::warn!("line_padding {} is negative, using 0", self.line_padding);
            self.line_padding = 0.0;
        }
        self
    }
}
