//! Simulation orchestration.
//!
//! Owns the waiting line, the dismissal log, and the event log for one run
//! and applies script commands to them strictly in order.

pub mod engine;

pub use engine::{Simulation, SimulationError, SimulationReport};
