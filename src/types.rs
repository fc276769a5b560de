//! This module defines the core data structures and types used throughout the Turing Machine
//! simulator, including program representation, transition rules, configuration and error types.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use thiserror::Error;

use crate::table::TransitionTable;
use crate::tape::Tape;

/// The default blank symbol used on the Turing Machine tape.
pub const DEFAULT_BLANK_SYMBOL: char = ' ';
/// The default number of steps to execute before the program stops the machine.
pub const DEFAULT_LEASH: usize = 10000;
/// The default tape window shown by the renderer.
pub const DEFAULT_WINDOW: Range<i64> = -10..10;
/// Marker printed before the cell under the head.
pub const HEAD_MARKER_LEFT: char = '>';
/// Marker printed after the cell under the head.
pub const HEAD_MARKER_RIGHT: char = '<';

/// Represents a single-tape Turing Machine program.
///
/// A program defines the initial configuration of the machine together with its transition
/// table. The machine keeps the program around so it can be reset to this configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Program {
    /// The name of the Turing Machine program.
    pub name: String,
    /// The initial state of the Turing Machine.
    pub initial_state: String,
    /// The initial head position. May be negative.
    pub head: i64,
    /// The blank symbol used on the tape.
    pub blank: char,
    /// The initial tape contents.
    pub tape: Tape,
    /// The transition rules, keyed by state and then by the symbol under the head.
    pub table: TransitionTable,
}

impl Program {
    /// Replaces the initial tape, keeping the program's blank symbol.
    pub fn with_tape<I>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = (i64, char)>,
    {
        let mut tape = Tape::new(self.blank);
        for (position, symbol) in cells {
            tape.write(position, symbol);
        }
        self.tape = tape;
        self
    }

    /// Replaces the initial head position.
    pub fn with_head(mut self, head: i64) -> Self {
        self.head = head;
        self
    }

    /// Replaces the initial state.
    pub fn with_initial_state(mut self, state: impl Into<String>) -> Self {
        self.initial_state = state.into();
        self
    }
}

/// Represents a single transition rule for a Turing Machine.
///
/// A rule is selected by the pair (current state, symbol under the head) and describes what
/// the machine does next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// The symbol written under the head.
    pub write: char,
    /// The head displacement applied after writing. The reference table only uses -1 and +1.
    pub shift: i64,
    /// The state the machine transitions to.
    pub next_state: String,
}

impl Rule {
    pub fn new(write: char, shift: i64, next_state: impl Into<String>) -> Self {
        Self {
            write,
            shift,
            next_state: next_state.into(),
        }
    }
}

/// Run-time knobs of a simulation: how long it runs and which part of the tape is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// The number of steps to execute.
    pub leash: usize,
    /// First tape position shown by the renderer (inclusive).
    pub window_start: i64,
    /// Last tape position shown by the renderer (exclusive).
    pub window_end: i64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            leash: DEFAULT_LEASH,
            window_start: DEFAULT_WINDOW.start,
            window_end: DEFAULT_WINDOW.end,
        }
    }
}

impl SimulationConfig {
    /// Checks that the configured window is well formed.
    pub fn validate(&self) -> Result<(), TuringMachineError> {
        if self.window_start > self.window_end {
            return Err(TuringMachineError::InvalidWindow {
                start: self.window_start,
                end: self.window_end,
            });
        }

        Ok(())
    }

    /// Returns the configured window as a range.
    pub fn window(&self) -> Range<i64> {
        self.window_start..self.window_end
    }
}

/// Represents various errors that can occur during Turing Machine operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuringMachineError {
    /// Indicates that the transition table has no rule for the current state and symbol.
    #[error("No rule defined for state {state} and symbol {symbol:?}")]
    IncompleteTable { state: String, symbol: char },
    /// Indicates an error during the validation of a program's structure or logic.
    #[error("Program validation error: {0}")]
    ValidationError(String),
    /// Indicates a rule whose shift would move the head past the range of `i64`.
    #[error("Head overflow: shifting {head} by {shift}")]
    HeadOverflow { head: i64, shift: i64 },
    /// Indicates a render window whose start lies after its end.
    #[error("Invalid tape window: start {start} is after end {end}")]
    InvalidWindow { start: i64, end: i64 },
    /// Indicates that the trace sink rejected a line.
    #[error("Output error: {0}")]
    Output(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_serialization() {
        let rule = Rule::new('1', -1, "car");

        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, r#"{"write":"1","shift":-1,"next_state":"car"}"#);

        let deserialized: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(rule, deserialized);
    }

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();

        assert_eq!(config.leash, 10000);
        assert_eq!(config.window(), -10..10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let config = SimulationConfig {
            leash: 1,
            window_start: 5,
            window_end: -5,
        };

        assert_eq!(
            config.validate(),
            Err(TuringMachineError::InvalidWindow { start: 5, end: -5 })
        );
    }

    #[test]
    fn test_error_display() {
        let error = TuringMachineError::IncompleteTable {
            state: "car".to_string(),
            symbol: 'x',
        };

        let error_msg = format!("{}", error);
        assert!(error_msg.contains("No rule defined"));
        assert!(error_msg.contains("car"));
        assert!(error_msg.contains("'x'"));
    }
}
