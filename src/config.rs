//! Session configuration chosen in the menu or on the command line.
//!
//! A `SessionConfig` is a plain value handed to the simulation when it
//! starts; nothing here is shared or mutated afterwards.

use std::str::FromStr;
use thiserror::Error;

use crate::domain::{CellTier, RuleKind, ScaleConfig};

/// Selectable window widths in pixels
pub const WIDTH_PRESETS: [u32; 3] = [640, 800, 1024];
/// Selectable window heights in pixels
pub const HEIGHT_PRESETS: [u32; 3] = [480, 600, 768];

/// Initial step delay, in nanoseconds of pacing
pub const DEFAULT_STEP_DELAY: i64 = 50_000_000;

/// Errors raised when building or validating a session configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("window width {0} is not one of 640, 800 or 1024")]
    InvalidWidth(u32),
    #[error("window height {0} is not one of 480, 600 or 768")]
    InvalidHeight(u32),
    #[error("cell tier {0} must be between 1 and 10")]
    InvalidTier(u8),
    #[error("unknown rule '{0}' (expected highlife or conway)")]
    UnknownRule(String),
    #[error("unknown start mode '{0}' (expected blank or random)")]
    UnknownSeedMode(String),
}

/// How the grid is populated when a session starts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SeedMode {
    #[default]
    Blank,
    Random,
}

impl FromStr for SeedMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blank" => Ok(SeedMode::Blank),
            "random" => Ok(SeedMode::Random),
            _ => Err(ConfigError::UnknownSeedMode(s.to_owned())),
        }
    }
}

impl FromStr for RuleKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "highlife" | "b36/s23" => Ok(RuleKind::HighLife),
            "conway" | "b3/s23" => Ok(RuleKind::Conway),
            _ => Err(ConfigError::UnknownRule(s.to_owned())),
        }
    }
}

/// Window size in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: WIDTH_PRESETS[0],
            height: HEIGHT_PRESETS[0],
        }
    }
}

/// Everything a simulation session needs to start
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub window: WindowSize,
    pub tier: CellTier,
    pub seed_mode: SeedMode,
    pub rule: RuleKind,
    /// Fixed seed for the random source; None seeds from the clock
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Set start mode (builder pattern)
    pub fn with_seed_mode(mut self, seed_mode: SeedMode) -> Self {
        self.seed_mode = seed_mode;
        self
    }

    /// Check window dimensions against the presets
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !WIDTH_PRESETS.contains(&self.window.width) {
            return Err(ConfigError::InvalidWidth(self.window.width));
        }
        if !HEIGHT_PRESETS.contains(&self.window.height) {
            return Err(ConfigError::InvalidHeight(self.window.height));
        }
        Ok(())
    }

    /// Grid size and render scale for this configuration
    pub fn scale(&self) -> ScaleConfig {
        ScaleConfig::from_tier(self.tier, self.window.width, self.window.height)
    }
}

/// Parse a tier number into a validated `CellTier`
pub fn parse_tier(tier: u8) -> Result<CellTier, ConfigError> {
    CellTier::new(tier).ok_or(ConfigError::InvalidTier(tier))
}
