//! Shared primitive types used across the entire simulation.

use crate::geo::{clamp_lat, wrap_lon};
use serde::{Deserialize, Serialize};

/// A simulated year. One engine tick = one year.
pub type Year = u64;

/// An angle or distance measured in degrees.
pub type Degrees = f64;

/// A point on the lat/lon plane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub lat: Degrees,
    pub lon: Degrees,
}

impl Position {
    /// Build a position, pinning latitude to the poles and wrapping longitude once.
    pub fn new(lat: Degrees, lon: Degrees) -> Self {
        Self {
            lat: clamp_lat(lat),
            lon: wrap_lon(lon),
        }
    }

    /// Shift by a latitude/longitude delta and re-normalise.
    pub fn offset(self, d_lat: Degrees, d_lon: Degrees) -> Self {
        Self::new(self.lat + d_lat, self.lon + d_lon)
    }
}
