//! Coordinate arithmetic on the flat lat/lon plane.
//!
//! Degrees are treated as Cartesian units. There is no great-circle math and
//! no longitude wraparound in `distance`: 179.9 and -179.9 are ~359.8 apart.

use crate::types::{Degrees, Position};

pub const MAX_LAT: Degrees = 90.0;
pub const MAX_LON: Degrees = 180.0;
const FULL_TURN: Degrees = 360.0;

/// Pin latitude to [-90, 90].
pub fn clamp_lat(lat: Degrees) -> Degrees {
    lat.clamp(-MAX_LAT, MAX_LAT)
}

/// Wrap longitude into (-180, 180] with a single pass.
/// Values more than a full turn out of range stay out of range.
pub fn wrap_lon(lon: Degrees) -> Degrees {
    if lon > MAX_LON {
        lon - FULL_TURN
    } else if lon < -MAX_LON {
        lon + FULL_TURN
    } else {
        lon
    }
}

/// Euclidean distance between two positions in degree space.
pub fn distance(a: Position, b: Position) -> Degrees {
    let d_lat = a.lat - b.lat;
    let d_lon = a.lon - b.lon;
    (d_lat * d_lat + d_lon * d_lon).sqrt()
}

/// Render a year count with comma thousands separators: 1234567 -> "1,234,567".
pub fn format_years(years: u64) -> String {
    let digits = years.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
