//! Simulation engine.
//!
//! A deterministic left-to-right fold over the command sequence. Each
//! command performs exactly one mutation to the waiting line and, for
//! `PASSED`, one append to the dismissal log:
//!
//! ```text
//! For each command, in script order:
//! 1. READY <id> - <id> joins the back of the line
//! 2. PASSED     - the front participant is dismissed into the log
//! 3. EXTRA      - the front participant rotates to the back
//! then log the resulting event
//! ```
//!
//! No look-ahead, no reordering, no batching. A `PASSED` or `EXTRA` on an
//! empty line is fatal: skipping it would misstate the dismissal count and
//! shift the meaning of every later command.

use serde::Serialize;
use thiserror::Error;

use crate::command::{parse_script, Command, CommandError};
use crate::models::dismissal::DismissedLog;
use crate::models::event::{Event, EventLog};
use crate::models::line::WaitingLine;

/// Errors that abort a simulation run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// `PASSED` or `EXTRA` addressed the front of an empty line.
    #[error("command {seq} ({command}) addressed the front of an empty line")]
    EmptyLine { seq: usize, command: &'static str },

    /// The script failed to parse; nothing was simulated.
    #[error(transparent)]
    Malformed(#[from] CommandError),
}

/// Final outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// Everyone dismissed, in dismissal order.
    pub dismissed: DismissedLog,

    /// Every state change, in command order.
    pub events: EventLog,

    /// Number of commands applied.
    pub commands_processed: usize,
}

/// Exam line simulation: a waiting line, a dismissal log, and the event
/// log of everything that happened to them.
///
/// Drive it over a full script with [`Simulation::run`], or command by
/// command with [`Simulation::apply`] followed by
/// [`Simulation::into_report`].
///
/// # Example
///
/// ```rust
/// use exam_line_core::{Command, Simulation};
///
/// let commands = vec![
///     Command::Ready { id: "alice".to_string() },
///     Command::Ready { id: "bob".to_string() },
///     Command::Extra,
///     Command::Passed,
/// ];
///
/// let report = Simulation::run(&commands).unwrap();
/// assert_eq!(report.dismissed.identifiers(), ["bob"]);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Participants waiting to be called, front to back.
    line: WaitingLine,

    /// Dismissals so far, in dismissal order.
    dismissed: DismissedLog,

    /// Everything that happened, in command order.
    event_log: EventLog,

    /// Sequence number the next command will carry (1-based).
    next_seq: usize,
}

impl Simulation {
    /// Create a simulation with an empty line and empty logs.
    pub fn new() -> Self {
        Self {
            line: WaitingLine::new(),
            dismissed: DismissedLog::new(),
            event_log: EventLog::new(),
            next_seq: 1,
        }
    }

    /// Apply one command and log the resulting event.
    ///
    /// Exactly one mutation to the line per command; `PASSED` additionally
    /// appends to the dismissal log.
    ///
    /// # Returns
    ///
    /// * `Ok(Event)` - the state change that was recorded
    /// * `Err(SimulationError)` - the command addressed an empty line
    pub fn apply(&mut self, command: &Command) -> Result<Event, SimulationError> {
        let seq = self.next_seq;

        let event = match command {
            Command::Ready { id } => {
                self.line.join(id.clone());
                Event::Joined {
                    seq,
                    id: id.clone(),
                }
            }
            Command::Passed => {
                let id = self
                    .line
                    .call_front()
                    .map_err(|_| SimulationError::EmptyLine {
                        seq,
                        command: command.keyword(),
                    })?;
                self.dismissed.record(id.clone());
                Event::Dismissed { seq, id }
            }
            Command::Extra => {
                let id = self
                    .line
                    .requeue_front()
                    .map_err(|_| SimulationError::EmptyLine {
                        seq,
                        command: command.keyword(),
                    })?;
                Event::Requeued { seq, id }
            }
        };

        self.next_seq += 1;
        self.event_log.log(event.clone());
        Ok(event)
    }

    /// Run a full command sequence from an empty line.
    ///
    /// Strict left-to-right fold. The first failing command aborts the run
    /// and no report is produced, so a failed run can never emit a partial
    /// dismissal order.
    pub fn run(commands: &[Command]) -> Result<SimulationReport, SimulationError> {
        let mut simulation = Simulation::new();
        for command in commands {
            simulation.apply(command)?;
        }
        Ok(simulation.into_report())
    }

    /// Parse a script (count line plus command lines) and run it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use exam_line_core::Simulation;
    ///
    /// let report = Simulation::run_script("3\nREADY a\nEXTRA\nPASSED\n").unwrap();
    /// assert_eq!(report.dismissed.identifiers(), ["a"]);
    /// ```
    pub fn run_script(input: &str) -> Result<SimulationReport, SimulationError> {
        let commands = parse_script(input)?;
        Self::run(&commands)
    }

    /// Participants still waiting, front to back.
    pub fn line(&self) -> &WaitingLine {
        &self.line
    }

    /// Dismissals so far, in dismissal order.
    pub fn dismissed(&self) -> &DismissedLog {
        &self.dismissed
    }

    /// Events logged so far.
    pub fn events(&self) -> &EventLog {
        &self.event_log
    }

    /// Number of commands applied so far.
    pub fn commands_processed(&self) -> usize {
        self.next_seq - 1
    }

    /// Finish the run and produce the report.
    pub fn into_report(self) -> SimulationReport {
        SimulationReport {
            commands_processed: self.next_seq - 1,
            dismissed: self.dismissed,
            events: self.event_log,
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
