//! Simulation clock. Owns the year counter and the breath cadence.

use crate::types::Year;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimClock {
    pub current_year:     Year,
    pub breaths:          u64,
    pub years_per_breath: Year,
}

impl SimClock {
    pub fn new(years_per_breath: Year) -> Self {
        Self::starting_at(0, years_per_breath)
    }

    pub fn starting_at(year: Year, years_per_breath: Year) -> Self {
        Self {
            current_year: year,
            breaths: 0,
            years_per_breath,
        }
    }

    /// Advance one year. Returns the new year number.
    pub fn advance(&mut self) -> Year {
        self.current_year += 1;
        self.current_year
    }

    /// True when the current year is a surfacing year.
    pub fn is_breath_year(&self) -> bool {
        self.current_year % self.years_per_breath == 0
    }

    /// Count a breath. Returns its 1-based number.
    pub fn record_breath(&mut self) -> u64 {
        self.breaths += 1;
        self.breaths
    }
}
