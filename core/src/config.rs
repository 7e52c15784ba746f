//! Fixed simulation parameters.
//!
//! These are not read from the command line or from disk. `SimConfig::default()`
//! is the canonical run; tests build variants to pin down motion.

use crate::{
    error::{SimError, SimResult},
    types::{Degrees, Year},
};
use serde::{Deserialize, Serialize};

pub const YEARS_PER_BREATH: Year = 100;
pub const SUCCESS_RADIUS: Degrees = 0.01;

/// A closed-open sampling interval `[lo, hi)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Span {
    pub lo: f64,
    pub hi: f64,
}

impl Span {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    fn check(&self, field: &'static str) -> SimResult<()> {
        if !self.lo.is_finite() || !self.hi.is_finite() || self.lo > self.hi {
            return Err(SimError::InvalidConfig {
                field,
                reason: format!("expected finite lo <= hi, got [{}, {}]", self.lo, self.hi),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurtleConfig {
    /// Annual swim distance in km.
    pub speed_km: Span,
    /// Divisor turning the annual speed into a degree displacement.
    pub speed_divisor: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YokeConfig {
    pub seasonal_amplitude: Degrees,
    /// Years per radian of the seasonal sine.
    pub seasonal_period: f64,
    pub current_lat: Degrees,
    pub current_lon: Degrees,
    pub wind: Degrees,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimConfig {
    pub years_per_breath: Year,
    pub success_radius:   Degrees,
    pub spawn_lat:        Span,
    pub spawn_lon:        Span,
    pub turtle:           TurtleConfig,
    pub yoke:             YokeConfig,
    /// Optional safety bound on simulated years. `None` runs until success.
    #[serde(default)]
    pub max_years:        Option<Year>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            years_per_breath: YEARS_PER_BREATH,
            success_radius:   SUCCESS_RADIUS,
            spawn_lat:        Span::new(-60.0, 60.0),
            spawn_lon:        Span::new(-180.0, 180.0),
            turtle: TurtleConfig {
                speed_km:      Span::new(1000.0, 3000.0),
                speed_divisor: 111_000.0,
            },
            yoke: YokeConfig {
                seasonal_amplitude: 0.01,
                seasonal_period:    50.0,
                current_lat:        0.005,
                current_lon:        0.01,
                wind:               0.002,
            },
            max_years: None,
        }
    }
}

impl SimConfig {
    pub fn with_max_years(mut self, max_years: Option<Year>) -> Self {
        self.max_years = max_years;
        self
    }

    /// A config where neither entity moves. Used to pin positions in scenario tests.
    pub fn frozen() -> Self {
        let mut cfg = Self::default();
        cfg.turtle.speed_km = Span::new(0.0, 0.0);
        cfg.yoke = YokeConfig {
            seasonal_amplitude: 0.0,
            seasonal_period:    50.0,
            current_lat:        0.0,
            current_lon:        0.0,
            wind:               0.0,
        };
        cfg
    }

    /// Upper bound on the turtle's displacement in one year.
    pub fn max_turtle_step(&self) -> Degrees {
        self.turtle.speed_km.hi / self.turtle.speed_divisor
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.years_per_breath == 0 {
            return Err(invalid("years_per_breath", "must be greater than zero"));
        }
        if !self.success_radius.is_finite() || self.success_radius < 0.0 {
            return Err(invalid(
                "success_radius",
                format!("must be finite and non-negative, got {}", self.success_radius),
            ));
        }
        self.spawn_lat.check("spawn_lat")?;
        self.spawn_lon.check("spawn_lon")?;
        self.turtle.speed_km.check("turtle.speed_km")?;
        if !self.turtle.speed_divisor.is_normal() {
            return Err(invalid("turtle.speed_divisor", "must be a non-zero finite number"));
        }
        if !self.yoke.seasonal_period.is_normal() {
            return Err(invalid("yoke.seasonal_period", "must be a non-zero finite number"));
        }
        let half_widths = [
            ("yoke.seasonal_amplitude", self.yoke.seasonal_amplitude),
            ("yoke.current_lat", self.yoke.current_lat),
            ("yoke.current_lon", self.yoke.current_lon),
            ("yoke.wind", self.yoke.wind),
        ];
        for (field, value) in half_widths {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, format!("must be finite and non-negative, got {value}")));
            }
        }
        if self.max_years == Some(0) {
            return Err(invalid("max_years", "must be greater than zero when set"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> SimError {
    SimError::InvalidConfig { field, reason: reason.into() }
}
