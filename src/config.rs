//! Tuning values for the sticker and the host page.
//!
//! Every field has a default, so a stored config only needs to name what it overrides.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::spring::SpringSpec;
use crate::util::js_error_message;

pub const CONFIG_STORAGE_KEY: &str = "sticker_config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanSettings {
    /// Travel from the press point before a pan starts delivering motion.
    pub activation_distance: f64,
}

impl Default for PanSettings {
    fn default() -> Self {
        Self {
            activation_distance: 10.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TapSettings {
    pub count: u32,
    /// Longest press-to-release time for one tap.
    pub max_duration_ms: f64,
    /// Longest release-to-next-press gap inside a sequence.
    pub max_delay_ms: f64,
    /// Allowed travel from the first press of the sequence.
    pub max_distance: f64,
}

impl Default for TapSettings {
    fn default() -> Self {
        Self {
            count: 2,
            max_duration_ms: 500.0,
            max_delay_ms: 500.0,
            max_distance: 10.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StickerConfig {
    /// Fixed `top` offset of the sticker container, so it starts above the lower chrome.
    pub vertical_shift: f64,
    pub spring: SpringSpec,
    pub pan: PanSettings,
    pub tap: TapSettings,
    pub sticker_size: f64,
    pub sticker_source: String,
    pub background_source: String,
    pub debug_log: bool,
}

impl Default for StickerConfig {
    fn default() -> Self {
        Self {
            vertical_shift: -350.0,
            spring: SpringSpec::default(),
            pan: PanSettings::default(),
            tap: TapSettings::default(),
            sticker_size: 40.0,
            sticker_source: "assets/images/emoji1.png".to_string(),
            background_source: "assets/images/background-image.png".to_string(),
            debug_log: false,
        }
    }
}

impl StickerConfig {
    /// Parses a stored config. Spring constants that could never settle are rejected.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if !config.spring.is_valid() {
            return Err(ConfigError::InvalidSpring(config.spring));
        }
        Ok(config)
    }

    /// Reads the stored override, if any. `Ok(None)` means nothing is stored.
    pub fn read_stored() -> Result<Option<Self>, ConfigError> {
        let store = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(ConfigError::StorageUnavailable)?;
        let raw = store
            .get_item(CONFIG_STORAGE_KEY)
            .map_err(|e| ConfigError::Storage(js_error_message(&e)))?;
        raw.as_deref().map(Self::from_json).transpose()
    }

    /// Stored config, or defaults when nothing usable is stored.
    pub fn load() -> Self {
        match Self::read_stored() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                gloo::console::warn!(format!("sticker config: {e}; using defaults"));
                Self::default()
            }
        }
    }
}
