//! Event logging for simulation replay and auditing.
//!
//! This module defines the Event enum which captures every state change a
//! script command makes to the line. Events enable:
//! - Deterministic replay (re-run a script and compare logs)
//! - Debugging (see exactly what each command did to whom)
//! - Auditing (verify a dismissal order after the fact)
//!
//! Every event carries `seq`, the 1-based position of the command within
//! the script, so an event log lines up with the script that produced it.

use serde::{Deserialize, Serialize};

/// State change produced by one script command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A participant joined the back of the line (`READY`).
    Joined { seq: usize, id: String },

    /// The front participant was dismissed and recorded (`PASSED`).
    Dismissed { seq: usize, id: String },

    /// The front participant was moved to the back of the line (`EXTRA`).
    Requeued { seq: usize, id: String },
}

impl Event {
    /// Script position of the command that produced this event.
    pub fn seq(&self) -> usize {
        match self {
            Event::Joined { seq, .. } => *seq,
            Event::Dismissed { seq, .. } => *seq,
            Event::Requeued { seq, .. } => *seq,
        }
    }

    /// Get a short description of the event type.
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Joined { .. } => "Joined",
            Event::Dismissed { .. } => "Dismissed",
            Event::Requeued { .. } => "Requeued",
        }
    }

    /// Participant the event concerns.
    pub fn participant(&self) -> &str {
        match self {
            Event::Joined { id, .. } => id,
            Event::Dismissed { id, .. } => id,
            Event::Requeued { id, .. } => id,
        }
    }
}

/// Event log for storing and querying simulation events.
///
/// This is a simple wrapper around Vec<Event> with convenience methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log.
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Get the number of events logged.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events, in command order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events for a specific participant.
    pub fn events_for_participant(&self, id: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.participant() == id)
            .collect()
    }
}
