//! This module defines the `TuringMachine` struct, which simulates a single-tape Turing
//! Machine over a sparse, two-way infinite tape. It owns the tape, the head position, the
//! current state and the transition table, and drives them one rule at a time.

use std::io::Write;

use tracing::{debug, trace};

use crate::analyzer::analyze;
use crate::render::Renderer;
use crate::tape::Tape;
use crate::types::{Program, Rule, TuringMachineError};

/// Represents a single-tape Turing Machine.
///
/// The machine has no halting state: it keeps applying rules for as long as its caller keeps
/// stepping it, so every run is bounded by an explicit step count.
pub struct TuringMachine {
    state: String,
    tape: Tape,
    head: i64,
    program: Program,
    step_count: usize,
}

impl TuringMachine {
    /// Creates a new `TuringMachine` instance from a given `Program`.
    ///
    /// No validation is performed; a missing rule surfaces as an error from [`Self::step`].
    pub fn new(program: Program) -> Self {
        debug!(
            program = %program.name,
            state = %program.initial_state,
            head = program.head,
            rules = program.table.len(),
            "machine created"
        );

        Self {
            state: program.initial_state.clone(),
            tape: program.tape.clone(),
            head: program.head,
            program,
            step_count: 0,
        }
    }

    /// Creates a new `TuringMachine` after checking the program with [`analyze`].
    pub fn try_new(program: Program) -> Result<Self, TuringMachineError> {
        analyze(&program)?;
        Ok(Self::new(program))
    }

    /// Executes a single step: read, look up, write, move, transition.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if a rule was applied.
    /// * `Err(TuringMachineError::IncompleteTable)` if no rule matches the current state and
    ///   symbol.
    /// * `Err(TuringMachineError::HeadOverflow)` if the shift would leave the range of `i64`.
    ///
    /// The machine is left untouched on error.
    pub fn step(&mut self) -> Result<(), TuringMachineError> {
        let symbol = self.symbol();
        let rule = self.program.table.lookup(&self.state, symbol)?;
        let head = self
            .head
            .checked_add(rule.shift)
            .ok_or(TuringMachineError::HeadOverflow {
                head: self.head,
                shift: rule.shift,
            })?;

        self.tape.write(self.head, rule.write);
        self.head = head;

        trace!(
            step = self.step_count + 1,
            from = %self.state,
            to = %rule.next_state,
            read = ?symbol,
            write = ?rule.write,
            head = self.head,
            "step"
        );

        self.state.clone_from(&rule.next_state);
        self.step_count += 1;

        Ok(())
    }

    /// Executes exactly `steps` steps without rendering.
    pub fn advance(&mut self, steps: usize) -> Result<(), TuringMachineError> {
        for _ in 0..steps {
            self.step()?;
        }

        Ok(())
    }

    /// Executes exactly `leash` steps, writing one rendered line to `out` after each.
    ///
    /// A `leash` of zero executes nothing and writes nothing. The first error stops the run.
    pub fn run<W: Write>(
        &mut self,
        leash: usize,
        renderer: &Renderer,
        out: &mut W,
    ) -> Result<(), TuringMachineError> {
        debug!(leash, window = ?renderer.window(), "run started");

        for _ in 0..leash {
            self.step()?;
            renderer.emit(self, out)?;
        }

        debug!(steps = self.step_count, state = %self.state, head = self.head, "run finished");
        Ok(())
    }

    /// Returns the current state of the Turing Machine.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the initial state of the Turing Machine.
    pub fn initial_state(&self) -> &str {
        &self.program.initial_state
    }

    /// Returns the current head position.
    pub fn head(&self) -> i64 {
        self.head
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Returns the symbol under the head, blank if the cell was never written.
    pub fn symbol(&self) -> char {
        self.tape.read(self.head)
    }

    /// Returns the rule that the next step would apply, if any.
    pub fn rule(&self) -> Option<&Rule> {
        self.program.table.get(&self.state, self.symbol())
    }

    /// Returns the total number of steps executed by the Turing Machine.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Resets the Turing Machine to its initial configuration.
    /// This includes resetting the state, tape, head position, and step count.
    pub fn reset(&mut self) {
        debug!(program = %self.program.name, "machine reset");

        self.state = self.program.initial_state.clone();
        self.tape = self.program.tape.clone();
        self.head = self.program.head;
        self.step_count = 0;
    }
}
