//! Everything the engine reports about a run.
//!
//! The runner renders these as text or JSON lines; tests compare
//! their serialized form to check determinism.

use crate::{
    error::SimResult,
    types::{Degrees, Position, Year},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    RunInitialized {
        seed: u64,
        turtle: Position,
        yoke: Position,
        season_phase: f64,
    },

    /// The turtle surfaced and looked around.
    Breath {
        breath: u64,
        year: Year,
        turtle: Position,
        yoke: Position,
        distance: Degrees,
    },

    Reunited {
        breath: u64,
        year: Year,
    },

    LimitReached {
        year: Year,
    },
}

impl SimEvent {
    /// Stable name of the variant, matching its serde tag.
    pub fn kind(&self) -> &'static str {
        match self {
            SimEvent::RunInitialized { .. } => "run_initialized",
            SimEvent::Breath { .. }         => "breath",
            SimEvent::Reunited { .. }       => "reunited",
            SimEvent::LimitReached { .. }   => "limit_reached",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SimEvent::Reunited { .. } | SimEvent::LimitReached { .. })
    }

    /// One JSON object, no trailing newline.
    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
