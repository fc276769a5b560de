//! One-line snapshots of a running machine.
//!
//! A snapshot is the state name, a space, then every cell of a fixed tape window. The cell
//! under the head is wrapped in `>` and `<`. The window does not follow the head, so once
//! the head leaves it no cell is marked.

use std::io::Write;
use std::ops::Range;

use crate::machine::TuringMachine;
use crate::tape::Tape;
use crate::types::{TuringMachineError, DEFAULT_WINDOW, HEAD_MARKER_LEFT, HEAD_MARKER_RIGHT};

/// Renders `tape` over `[window_start, window_end)`, marking `head` if it falls inside.
///
/// ```
/// use tur_inc::{render, Tape};
///
/// let tape = Tape::from_symbols(' ', -1, "10");
/// assert_eq!(render(&tape, 0, "lsb", -2, 2), "lsb  1>0< ");
/// ```
pub fn render(tape: &Tape, head: i64, state: &str, window_start: i64, window_end: i64) -> String {
    let width = usize::try_from(window_end.saturating_sub(window_start)).unwrap_or(0);
    let mut line = String::with_capacity(state.len() + 1 + width + 2);

    line.push_str(state);
    line.push(' ');
    for (position, symbol) in tape.window(window_start..window_end) {
        if position == head {
            line.push(HEAD_MARKER_LEFT);
            line.push(symbol);
            line.push(HEAD_MARKER_RIGHT);
        } else {
            line.push(symbol);
        }
    }

    line
}

/// Renders machines through a fixed window and writes the lines to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    window: Range<i64>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

impl Renderer {
    /// Creates a renderer for `window`. An empty window is allowed; an inverted one is not.
    pub fn new(window: Range<i64>) -> Result<Self, TuringMachineError> {
        if window.start > window.end {
            return Err(TuringMachineError::InvalidWindow {
                start: window.start,
                end: window.end,
            });
        }

        Ok(Self { window })
    }

    pub fn window(&self) -> Range<i64> {
        self.window.clone()
    }

    /// Renders the current configuration of `machine`.
    pub fn render(&self, machine: &TuringMachine) -> String {
        render(
            machine.tape(),
            machine.head(),
            machine.state(),
            self.window.start,
            self.window.end,
        )
    }

    /// Writes the rendering of `machine` to `out`, followed by a newline.
    pub fn emit<W: Write>(
        &self,
        machine: &TuringMachine,
        out: &mut W,
    ) -> Result<(), TuringMachineError> {
        writeln!(out, "{}", self.render(machine))
            .map_err(|e| TuringMachineError::Output(e.to_string()))
    }
}
