//! TOML tank presets.
//!
//! A preset file describes one tank:
//!
//! ```toml
//! capacity = 50.0
//! fuel = 20.0
//! ```
//!
//! The raw floats are validated through [`Liters::new`] and
//! [`FuelTank::new`], so a preset cannot produce a tank the library
//! would reject. TOML admits `nan` and `inf` float literals; those die
//! at the volume boundary.

use std::path::{Path, PathBuf};

use fueltank::{FuelTank, TankError};
use fueltank_types::{Liters, VolumeError};
use serde::Deserialize;
use thiserror::Error;

/// Raw, unvalidated preset contents.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TankPreset {
    capacity: f64,
    fuel: f64,
}

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("failed to read preset file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML preset at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("preset volume is invalid: {0}")]
    Volume(#[from] VolumeError),

    #[error("preset describes an invalid tank: {0}")]
    Tank(#[from] TankError),
}

/// Loads a preset file and validates it into a tank.
pub fn load_tank(path: &Path) -> Result<FuelTank, PresetError> {
    let text = std::fs::read_to_string(path).map_err(|source| PresetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let preset: TankPreset = toml::from_str(&text).map_err(|source| PresetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let capacity = Liters::new(preset.capacity)?;
    let fuel = Liters::new(preset.fuel)?;
    Ok(FuelTank::new(capacity, fuel)?)
}
