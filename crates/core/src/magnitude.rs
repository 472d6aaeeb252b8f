//! Seismic magnitude values.

use serde::Serialize;
use std::fmt;

use crate::error::{Error, Result};

/// A finite earthquake magnitude.
///
/// Feeds report magnitudes as plain JSON numbers that may be negative for
/// micro-events. NaN and infinities are rejected at construction, so every
/// `Magnitude` can be classified and scaled without further checks.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Magnitude(f64);

impl Magnitude {
    /// Magnitude zero.
    pub const ZERO: Self = Self(0.0);

    /// Create a magnitude, failing with [`Error::InvalidMagnitude`] for
    /// non-finite input.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(Error::InvalidMagnitude(value))
        }
    }

    /// The raw magnitude value.
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Magnitude {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Magnitude> for f64 {
    fn from(m: Magnitude) -> Self {
        m.0
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
