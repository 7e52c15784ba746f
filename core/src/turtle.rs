//! The sea turtle: a memoryless random walk.
//!
//! Every year it picks a fresh heading and a fresh annual speed.
//! Nothing carries over between years.

use crate::{
    config::SimConfig,
    mover::Mover,
    rng::SimRng,
    types::{Position, Year},
};
use std::f64::consts::TAU;

#[derive(Debug, Clone, PartialEq)]
pub struct Turtle {
    pub position: Position,
}

impl Turtle {
    /// Drop a turtle at a random spot inside the spawn band.
    pub fn spawn(rng: &mut SimRng, config: &SimConfig) -> Self {
        let lat = rng.uniform(config.spawn_lat.lo, config.spawn_lat.hi);
        let lon = rng.uniform(config.spawn_lon.lo, config.spawn_lon.hi);
        Self::at(Position::new(lat, lon))
    }

    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Swim for one year.
    pub fn swim(&mut self, rng: &mut SimRng, config: &SimConfig) {
        let motion = &config.turtle;
        let heading = rng.uniform(0.0, TAU);
        let speed_km = rng.uniform(motion.speed_km.lo, motion.speed_km.hi);
        let step = speed_km / motion.speed_divisor;

        self.position = self
            .position
            .offset(step * heading.sin(), step * heading.cos());
    }
}

impl Mover for Turtle {
    fn position(&self) -> Position { self.position }

    fn advance(&mut self, _year: Year, rng: &mut SimRng, config: &SimConfig) {
        self.swim(rng, config);
    }
}
