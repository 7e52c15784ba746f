//! The floating yoke: slow drift from currents, wind and a seasonal swing.

use crate::{
    config::SimConfig,
    mover::Mover,
    rng::SimRng,
    types::{Degrees, Position, Year},
};
use std::f64::consts::TAU;

#[derive(Debug, Clone, PartialEq)]
pub struct Yoke {
    pub position: Position,
    season_phase: f64,
}

impl Yoke {
    /// Drop a yoke inside the spawn band with a random seasonal phase.
    pub fn spawn(rng: &mut SimRng, config: &SimConfig) -> Self {
        let lat = rng.uniform(config.spawn_lat.lo, config.spawn_lat.hi);
        let lon = rng.uniform(config.spawn_lon.lo, config.spawn_lon.hi);
        let season_phase = rng.uniform(0.0, TAU);
        Self::at(Position::new(lat, lon), season_phase)
    }

    pub fn at(position: Position, season_phase: f64) -> Self {
        Self { position, season_phase }
    }

    pub fn season_phase(&self) -> f64 {
        self.season_phase
    }

    /// Latitude push from the seasonal oscillation in a given year.
    pub fn seasonal_drift(&self, year: Year, config: &SimConfig) -> Degrees {
        let motion = &config.yoke;
        let angle = self.season_phase + year as f64 / motion.seasonal_period;
        motion.seasonal_amplitude * angle.sin()
    }

    /// Drift for one year.
    pub fn drift(&mut self, year: Year, rng: &mut SimRng, config: &SimConfig) {
        let motion = &config.yoke;
        let seasonal = self.seasonal_drift(year, config);

        let current_lat = rng.symmetric(motion.current_lat);
        let current_lon = rng.symmetric(motion.current_lon);

        let wind_lat = rng.symmetric(motion.wind);
        let wind_lon = rng.symmetric(motion.wind);

        self.position = self.position.offset(
            current_lat + wind_lat + seasonal,
            current_lon + wind_lon,
        );
    }
}

impl Mover for Yoke {
    fn position(&self) -> Position { self.position }

    fn advance(&mut self, year: Year, rng: &mut SimRng, config: &SimConfig) {
        self.drift(year, rng, config);
    }
}
