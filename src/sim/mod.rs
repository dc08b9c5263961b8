//! Batch simulation: many independent games from reusable seat configs.

mod batch;

pub use batch::{GameRecord, Simulation, SimulationReport};
