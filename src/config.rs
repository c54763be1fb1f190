//! Application-level configuration constants and the runtime widget settings.

use serde::Deserialize;
use thiserror::Error;

// Decomposition
pub const STACK_SIZE: u64 = 64;

// Rendering
pub const MAX_SLOTS: usize = 64;
pub const FULL_STACK_ICON_SIZE: u32 = 48;
pub const LEFTOVER_ICON_SIZE: u32 = 36;
pub const ICON_INSET: u32 = 4;
pub const FADE_MS: u32 = 300;
pub const PLACEHOLDER_COLOR: &str = "#ccc";

// Messages
pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid positive integer";
pub const INPUT_PLACEHOLDER: &str = "Enter a positive integer";

// Default asset locations, served next to the wasm bundle
pub const DEFAULT_FULL_STACK_ICON: &str = "assets/diamond.jpg";
pub const DEFAULT_LEFTOVER_ICON: &str = "assets/grassBlock.jpg";
pub const DEFAULT_HOVER_SOUND: &str = "assets/hover.mp3";

/// DOM id of the optional JSON block carrying a [`WidgetConfig`].
pub const CONFIG_ELEMENT_ID: &str = "stack-calculator-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed widget config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

/// Runtime settings for one calculator instance.
///
/// Every field is optional in the JSON form; missing fields take the
/// classic (silent) defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub heading: String,
    pub tagline: String,
    /// Play `hover_sound_src` when the pointer enters an icon.
    pub hover_sound: bool,
    pub full_stack_icon: String,
    pub leftover_icon: String,
    pub hover_sound_src: String,
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            heading: "Stack Calculator".to_string(),
            tagline: "Calculate how many stacks you need with your very own blocks!".to_string(),
            hover_sound: false,
            full_stack_icon: DEFAULT_FULL_STACK_ICON.to_string(),
            leftover_icon: DEFAULT_LEFTOVER_ICON.to_string(),
            hover_sound_src: DEFAULT_HOVER_SOUND.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    /// The variant that plays a click sound over the icons.
    pub fn with_hover_sound() -> Self {
        Self {
            heading: "Minecraft Stack Calculator".to_string(),
            hover_sound: true,
            ..Self::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
