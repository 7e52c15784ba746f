//! Mover trait.
//!
//! RULE: Every entity that walks the plane implements Mover.
//! The engine advances each mover once per simulated year,
//! turtle first, then yoke. The order is fixed.
//! Motion parameters live only in the engine's SimConfig.

use crate::{
    config::SimConfig,
    rng::SimRng,
    types::{Position, Year},
};

pub trait Mover {
    fn position(&self) -> Position;

    /// Called once per year by the engine.
    ///
    /// - `year`:   the year count before this step is counted
    /// - `rng`:    this mover's deterministic RNG stream
    /// - `config`: the run's motion parameters
    fn advance(&mut self, year: Year, rng: &mut SimRng, config: &SimConfig);
}
