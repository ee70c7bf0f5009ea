//! # fueltank-types: Core types for the fueltank crates
//!
//! This crate contains the value types shared across the workspace:
//! - Fuel volumes ([`Liters`])
//! - Boundary validation errors ([`VolumeError`])
//!
//! Volumes enter the system as text (CLI arguments) or as raw floats
//! (TOML presets). Both paths funnel through [`Liters::new`], which
//! rejects non-finite values, so the range checks in `fueltank` never
//! see a NaN.

use std::{
    fmt::Display,
    ops::{Add, Sub},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Liters - Copy (cheap 8-byte volume value)
// ============================================================================

/// A volume of fuel in liters.
///
/// `Liters` is the only way a raw float enters the tank API. Construction
/// rejects NaN and infinities; negative volumes are representable (they
/// are rejected by the tank, with a message naming the offending value).
///
/// # Examples
///
/// ```
/// # use fueltank_types::Liters;
/// let volume = Liters::new(12.5).unwrap();
/// assert_eq!(volume.as_f64(), 12.5);
/// assert!(Liters::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Liters(f64);

impl Liters {
    /// The zero volume.
    pub const ZERO: Liters = Liters(0.0);

    /// Creates a volume from a raw liter count.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::NonFinite`] if `value` is NaN or infinite.
    pub fn new(value: f64) -> Result<Self, VolumeError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(VolumeError::NonFinite(value))
        }
    }

    /// Returns the raw liter count.
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Returns true if this is exactly zero liters.
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

// Plain component arithmetic. A sum of two finite volumes can leave the
// finite range; tank operations compare before storing, so a stored
// level is always finite.
impl Add for Liters {
    type Output = Liters;

    fn add(self, rhs: Self) -> Self::Output {
        Liters(self.0 + rhs.0)
    }
}

impl Sub for Liters {
    type Output = Liters;

    fn sub(self, rhs: Self) -> Self::Output {
        Liters(self.0 - rhs.0)
    }
}

impl Display for Liters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} L", self.0)
    }
}

impl FromStr for Liters {
    type Err = VolumeError;

    /// Parses a decimal liter count.
    ///
    /// A string that is not a number at all is the "wrong type" failure
    /// of the tank API, as opposed to a number outside its valid range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fueltank_types::{Liters, VolumeError};
    /// assert_eq!("20".parse::<Liters>().unwrap().as_f64(), 20.0);
    /// assert!(matches!("x".parse::<Liters>(), Err(VolumeError::NotNumeric(_))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| VolumeError::NotNumeric(s.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<f64> for Liters {
    type Error = VolumeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Liters> for f64 {
    fn from(volume: Liters) -> Self {
        volume.0
    }
}

// ============================================================================
// VolumeError - boundary validation failures
// ============================================================================

/// Error for input that fails to become a usable volume at a text or
/// deserialization boundary.
///
/// Inside the typed API these cases are unrepresentable; they can only
/// occur where untrusted input enters the system.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VolumeError {
    /// The text is not a number at all.
    #[error("not a number: {0:?}")]
    NotNumeric(String),

    /// The number is NaN or infinite.
    #[error("volume must be a finite number, got {0}")]
    NonFinite(f64),
}

#[cfg(test)]
mod tests;
