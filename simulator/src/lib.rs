//! Exam Line Simulator - Core Engine
//!
//! Deterministic simulation of an oral-exam waiting line driven by a finite
//! command script.
//!
//! # Architecture
//!
//! - **command**: Input grammar (`READY` / `PASSED` / `EXTRA`) and script parsing
//! - **models**: Domain types (WaitingLine, DismissedLog, Event)
//! - **orchestrator**: The command fold and its final report
//!
//! # Critical Invariants
//!
//! 1. Commands are applied strictly in script order, one line mutation each
//! 2. No participant is ever duplicated or lost by the line
//! 3. The dismissal log is append-only and ordered by dismissal
//! 4. Identical scripts produce identical reports (no clock, no RNG)

// Module declarations
pub mod command;
pub mod models;
pub mod orchestrator;

// Re-exports for convenience
pub use command::{parse_script, Command, CommandError};
pub use models::{
    dismissal::DismissedLog,
    event::{Event, EventLog},
    line::{LineError, WaitingLine},
};
pub use orchestrator::{Simulation, SimulationError, SimulationReport};
