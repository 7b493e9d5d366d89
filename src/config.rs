//! Screen and seeding configuration.
//!
//! Two screen presets exist; the grid size is derived from the screen size
//! and the pixel block size. Values can be overridden from the environment.

use thiserror::Error;

pub const PRESET_ENV: &str = "LIFE_PRESET";
pub const DENSITY_ENV: &str = "LIFE_DENSITY";
pub const SEED_ENV: &str = "LIFE_SEED";

/// One live cell in twenty on a fresh seeding
pub const DEFAULT_SEED_DENOMINATOR: u32 = 20;

/// Errors produced while building or validating a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown screen preset `{0}` (expected `standard` or `hd`)")]
    UnknownPreset(String),
    #[error("{key} must be an unsigned integer, got `{value}`")]
    InvalidNumber { key: &'static str, value: String },
    #[error("block size must be non-zero")]
    ZeroBlockSize,
    #[error("seed denominator must be non-zero")]
    ZeroSeedDenominator,
    #[error("screen {width}x{height} is smaller than one {block_size}px block")]
    ScreenTooSmall {
        width: usize,
        height: usize,
        block_size: usize,
    },
}

/// Static configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeConfig {
    /// Window width in pixels
    pub screen_width: usize,
    /// Window height in pixels
    pub screen_height: usize,
    /// Width and height of one cell in pixels
    pub block_size: usize,
    /// A cell is seeded alive with probability `1 / seed_denominator`
    pub seed_denominator: u32,
    /// Optional RNG seed for reproducible runs
    pub rng_seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl LifeConfig {
    /// 960×540 window with 10px blocks
    pub const fn standard() -> Self {
        Self {
            screen_width: 960,
            screen_height: 540,
            block_size: 10,
            seed_denominator: DEFAULT_SEED_DENOMINATOR,
            rng_seed: None,
        }
    }

    /// 1920×1080 window with 6px blocks
    pub const fn hd() -> Self {
        Self {
            screen_width: 1920,
            screen_height: 1080,
            block_size: 6,
            ..Self::standard()
        }
    }

    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::standard()),
            "hd" => Ok(Self::hd()),
            _ => Err(ConfigError::UnknownPreset(name.to_owned())),
        }
    }

    /// Grid (width, height) in cells
    pub const fn grid_dimensions(&self) -> (usize, usize) {
        (
            self.screen_width / self.block_size,
            self.screen_height / self.block_size,
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        if self.seed_denominator == 0 {
            return Err(ConfigError::ZeroSeedDenominator);
        }
        if self.screen_width < self.block_size || self.screen_height < self.block_size {
            return Err(ConfigError::ScreenTooSmall {
                width: self.screen_width,
                height: self.screen_height,
                block_size: self.block_size,
            });
        }
        Ok(())
    }

    /// Build from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; missing keys keep preset values
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(PRESET_ENV) {
            Some(name) => Self::preset(&name)?,
            None => Self::default(),
        };

        if let Some(value) = lookup(DENSITY_ENV) {
            config.seed_denominator = parse_number(DENSITY_ENV, &value)?;
        }
        if let Some(value) = lookup(SEED_ENV) {
            config.rng_seed = Some(parse_number(SEED_ENV, &value)?);
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: value.to_owned(),
    })
}
