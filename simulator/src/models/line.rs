//! Waiting line model.
//!
//! An ordered line of participant identifiers with the three mutations the
//! simulation needs: join at the back, dismiss from the front, and requeue
//! from front to back.
//!
//! # Critical Invariants
//!
//! 1. Arrival order is preserved except across an explicit requeue
//! 2. No identifier is duplicated or lost by any mutation
//! 3. Every mutation touches only the front and the back of the line

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by front-of-line operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    /// The front of an empty line was addressed.
    #[error("the waiting line is empty")]
    Empty,
}

/// Ordered line of participants waiting to be called.
///
/// # Example
///
/// ```rust
/// use exam_line_core::WaitingLine;
///
/// let mut line = WaitingLine::new();
/// line.join("alice".to_string());
/// line.join("bob".to_string());
///
/// assert_eq!(line.call_front().unwrap(), "alice");
/// assert_eq!(line.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingLine {
    participants: VecDeque<String>,
}

impl WaitingLine {
    /// Create a new empty line.
    pub fn new() -> Self {
        Self {
            participants: VecDeque::new(),
        }
    }

    /// A new arrival enters at the tail.
    pub fn join(&mut self, id: String) {
        self.participants.push_back(id);
    }

    /// Remove and return the participant at the front.
    pub fn call_front(&mut self) -> Result<String, LineError> {
        self.participants.pop_front().ok_or(LineError::Empty)
    }

    /// Move the front participant to the back of the line.
    ///
    /// Returns the requeued identifier. On a single-participant line the
    /// rotation leaves the line unchanged.
    pub fn requeue_front(&mut self) -> Result<String, LineError> {
        let id = self.participants.pop_front().ok_or(LineError::Empty)?;
        self.participants.push_back(id.clone());
        Ok(id)
    }

    /// Identifier currently at the front, if any.
    pub fn front(&self) -> Option<&str> {
        self.participants.front().map(String::as_str)
    }

    /// Number of participants still waiting.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Check if nobody is waiting.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Iterate the line from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.participants.iter().map(String::as_str)
    }

    /// Whether `id` currently holds a position in the line.
    pub fn contains(&self, id: &str) -> bool {
        self.participants.iter().any(|p| p == id)
    }
}
