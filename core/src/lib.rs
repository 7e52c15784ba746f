//! Core of the turtle-and-yoke simulation.
//!
//! A sea turtle and a floating yoke random-walk a flat lat/lon plane.
//! Every hundred years the turtle surfaces; if the yoke is within the
//! success radius at that moment, the run ends.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod geo;
pub mod mover;
pub mod report;
pub mod rng;
pub mod turtle;
pub mod types;
pub mod yoke;
