//! The simulation engine: one turtle, one yoke, one clock.
//!
//! ONE TICK = ONE YEAR, in this fixed order:
//!   1. Turtle swims        (its own RNG stream)
//!   2. Yoke drifts         (its own RNG stream, sees the year BEFORE the increment)
//!   3. Clock advances
//!   4. On breath years: measure, report, and stop if within the success radius
//!   5. Otherwise stop only if the optional year bound is exhausted
//!
//! RULES:
//!   - Success is only checked on breath years. Close passes between
//!     breaths go unnoticed.
//!   - All randomness flows through the RngBank.

use crate::{
    clock::SimClock,
    config::SimConfig,
    error::{SimError, SimResult},
    event::SimEvent,
    geo::distance,
    mover::Mover,
    rng::{EntitySlot, RngBank, SimRng},
    turtle::Turtle,
    types::Year,
    yoke::Yoke,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RunState {
    Running,
    Reunited { year: Year, breath: u64 },
    LimitReached { year: Year },
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunState::Running)
    }
}

/// How a finished (or interrupted) run ended up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimOutcome {
    pub state:           RunState,
    pub final_year:      Year,
    pub years_simulated: Year,
    pub breaths:         u64,
}

pub struct SimEngine {
    pub clock:  SimClock,
    pub turtle: Turtle,
    pub yoke:   Yoke,
    config:     SimConfig,
    seed:       u64,
    start_year: Year,
    turtle_rng: SimRng,
    yoke_rng:   SimRng,
    state:      RunState,
}

impl SimEngine {
    /// Build a fresh run: both entities spawned from the seed's streams at year 0.
    pub fn build(seed: u64, config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let bank = RngBank::new(seed);
        let mut turtle_rng = bank.for_entity(EntitySlot::Turtle);
        let mut yoke_rng = bank.for_entity(EntitySlot::Yoke);
        let turtle = Turtle::spawn(&mut turtle_rng, &config);
        let yoke = Yoke::spawn(&mut yoke_rng, &config);

        log::info!(
            "seed={seed} turtle=({:.4}, {:.4}) yoke=({:.4}, {:.4}) phase={:.4}",
            turtle.position.lat,
            turtle.position.lon,
            yoke.position.lat,
            yoke.position.lon,
            yoke.season_phase()
        );

        Ok(Self {
            clock: SimClock::new(config.years_per_breath),
            turtle,
            yoke,
            config,
            seed,
            start_year: 0,
            turtle_rng,
            yoke_rng,
            state: RunState::Running,
        })
    }

    /// Assemble a run from pre-placed entities, starting the clock at `start_year`.
    /// The entities move under `config`, like a built run.
    pub fn from_parts(
        seed: u64,
        config: SimConfig,
        turtle: Turtle,
        yoke: Yoke,
        start_year: Year,
    ) -> SimResult<Self> {
        config.validate()?;
        let bank = RngBank::new(seed);
        Ok(Self {
            clock: SimClock::starting_at(start_year, config.years_per_breath),
            turtle,
            yoke,
            turtle_rng: bank.for_entity(EntitySlot::Turtle),
            yoke_rng: bank.for_entity(EntitySlot::Yoke),
            config,
            seed,
            start_year,
            state: RunState::Running,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn years_simulated(&self) -> Year {
        self.clock.current_year - self.start_year
    }

    pub fn outcome(&self) -> SimOutcome {
        SimOutcome {
            state:           self.state,
            final_year:      self.clock.current_year,
            years_simulated: self.years_simulated(),
            breaths:         self.clock.breaths,
        }
    }

    /// The event describing where everything starts.
    pub fn initial_event(&self) -> SimEvent {
        SimEvent::RunInitialized {
            seed:         self.seed,
            turtle:       self.turtle.position(),
            yoke:         self.yoke.position(),
            season_phase: self.yoke.season_phase(),
        }
    }

    /// Advance one year. This is the core simulation step.
    pub fn tick(&mut self) -> SimResult<Vec<SimEvent>> {
        if self.state.is_terminal() {
            return Err(SimError::RunFinished { year: self.clock.current_year });
        }

        let year = self.clock.current_year;
        self.turtle.advance(year, &mut self.turtle_rng, &self.config);
        self.yoke.advance(year, &mut self.yoke_rng, &self.config);
        let year = self.clock.advance();

        log::trace!(
            "year={year} turtle=({:.6}, {:.6}) yoke=({:.6}, {:.6})",
            self.turtle.position.lat,
            self.turtle.position.lon,
            self.yoke.position.lat,
            self.yoke.position.lon
        );

        let mut events = Vec::new();

        if self.clock.is_breath_year() {
            let breath = self.clock.record_breath();
            let turtle = self.turtle.position();
            let yoke = self.yoke.position();
            let gap = distance(turtle, yoke);

            log::debug!("breath={breath} year={year} distance={gap:.6}");
            events.push(SimEvent::Breath { breath, year, turtle, yoke, distance: gap });

            if gap <= self.config.success_radius {
                log::info!("reunited at year {year} on breath {breath}");
                self.state = RunState::Reunited { year, breath };
                events.push(SimEvent::Reunited { breath, year });
                return Ok(events);
            }
        }

        if let Some(max_years) = self.config.max_years {
            if self.years_simulated() >= max_years {
                log::warn!("gave up after {max_years} simulated years");
                self.state = RunState::LimitReached { year };
                events.push(SimEvent::LimitReached { year });
            }
        }

        Ok(events)
    }

    /// Run until a terminal state.
    pub fn run(&mut self) -> SimResult<SimOutcome> {
        self.run_with(|_| {})
    }

    /// Run until a terminal state, handing every event to `observer` as it happens.
    /// A run that has not stepped yet reports its RunInitialized event first.
    pub fn run_with<F>(&mut self, mut observer: F) -> SimResult<SimOutcome>
    where
        F: FnMut(&SimEvent),
    {
        if self.years_simulated() == 0 && !self.state.is_terminal() {
            observer(&self.initial_event());
        }
        while !self.state.is_terminal() {
            for event in self.tick()? {
                observer(&event);
            }
        }
        Ok(self.outcome())
    }
}
