//! Dismissal record.
//!
//! Append-only log of everyone dismissed from the line, in the exact order
//! dismissal occurred. It starts empty, grows by one entry per `PASSED`
//! command, and becomes the final output of a run: one identifier per
//! line, never reordered.

use serde::{Deserialize, Serialize};

/// Ordered, append-only record of dismissed participants.
///
/// # Example
///
/// ```rust
/// use exam_line_core::DismissedLog;
///
/// let mut log = DismissedLog::new();
/// log.record("alice".to_string());
/// log.record("bob".to_string());
///
/// assert_eq!(log.identifiers(), ["alice", "bob"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DismissedLog {
    identifiers: Vec<String>,
}

impl DismissedLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            identifiers: Vec::new(),
        }
    }

    /// Record a dismissal. The order of calls is the order of the output.
    pub fn record(&mut self, id: String) {
        self.identifiers.push(id);
    }

    /// Number of dismissals recorded.
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Check if nobody has been dismissed.
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Dismissed identifiers in dismissal order.
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Consume the log, yielding the identifiers in dismissal order.
    pub fn into_identifiers(self) -> Vec<String> {
        self.identifiers
    }
}
