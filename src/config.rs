//! Round configuration
//!
//! Palette and phase durations are supplied once at round construction; there
//! is no runtime reconfiguration.

use serde::{Deserialize, Serialize};

use crate::consts::{COUNTDOWN_MS, RESULT_HOLD_MS};

/// Configuration errors, surfaced at round construction
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The palette must hold at least one color
    #[error("palette must contain at least one color")]
    EmptyPalette,
}

/// Fixed ordered list of display colors (0xRRGGBB), cycled through for
/// successive contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<u32>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                0x33B5E5, // holo blue
                0xAA66CC, // holo purple
                0x99CC00, // holo green
                0xFFBB33, // holo orange
                0xFF4444, // holo red
                0x0099CC,
                0x9933CC,
                0x669900,
            ],
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<u32>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at a palette index, wrapping past the end
    pub fn color(&self, index: usize) -> u32 {
        self.colors[index % self.colors.len()]
    }
}

/// One round's configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Colors handed out to successive contacts
    pub palette: Palette,
    /// Countdown phase duration in milliseconds
    pub countdown_ms: u64,
    /// Result display duration in milliseconds
    pub result_hold_ms: u64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            countdown_ms: COUNTDOWN_MS,
            result_hold_ms: RESULT_HOLD_MS,
        }
    }
}

impl RoundConfig {
    /// Parse a config from JSON, e.g. a host-provided settings blob
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Check construction-time preconditions
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }
}
