//! This module provides functions for analyzing Turing Machine programs before execution.
//! The increment machine never halts, so every reachable (state, symbol) pair must have a rule;
//! the checks here catch tables that would otherwise fail part way through a run.

use std::collections::{BTreeSet, HashSet};

use crate::types::{Program, TuringMachineError};

/// Represents various errors that can be found during the analysis of a Turing Machine program.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AnalysisError {
    /// Indicates that the initial state has no rules in the transition table.
    InvalidStartState(String),
    /// Indicates that rules reference states that are not defined in the transition table.
    UndefinedNextStates(Vec<String>),
    /// Indicates a (state, symbol) pair without a rule.
    MissingRule { state: String, symbol: char },
    /// Indicates a program whose blank symbol differs from the one its tape uses.
    BlankMismatch { program: char, tape: char },
    /// Indicates states that are defined in the table but cannot be reached from the initial state.
    UnreachableStates(Vec<String>),
}

impl From<AnalysisError> for TuringMachineError {
    /// Converts an `AnalysisError` into a `TuringMachineError`.
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::InvalidStartState(state) => {
                TuringMachineError::ValidationError(format!("Invalid start state: {}", state))
            }
            AnalysisError::UndefinedNextStates(rules) => TuringMachineError::ValidationError(
                format!("Rules reference undefined states: {:?}", rules),
            ),
            AnalysisError::MissingRule { state, symbol } => {
                TuringMachineError::IncompleteTable { state, symbol }
            }
            AnalysisError::BlankMismatch { program, tape } => {
                TuringMachineError::ValidationError(format!(
                    "Program blank {:?} differs from tape blank {:?}",
                    program, tape
                ))
            }
            AnalysisError::UnreachableStates(states) => TuringMachineError::ValidationError(
                format!("Unreachable states detected: {:?}", states),
            ),
        }
    }
}

/// Analyzes a given Turing Machine `Program` for structural and logical errors.
///
/// # Returns
///
/// * `Ok(())` if no errors are found.
/// * `Err(TuringMachineError)` describing the first violated check.
pub fn analyze(program: &Program) -> Result<(), TuringMachineError> {
    let checks: [fn(&Program) -> Result<(), AnalysisError>; 5] = [
        check_blank_symbol,
        check_valid_start_state,
        check_undefined_next_states,
        check_totality,
        check_unreachable_states,
    ];

    match checks.iter().find_map(|check| check(program).err()) {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// Checks that the program and its tape agree on the blank symbol.
///
/// The machine reads blanks through the tape, while the totality check uses the program's
/// blank, so the two must match.
fn check_blank_symbol(program: &Program) -> Result<(), AnalysisError> {
    if program.blank != program.tape.blank() {
        return Err(AnalysisError::BlankMismatch {
            program: program.blank,
            tape: program.tape.blank(),
        });
    }

    Ok(())
}

/// Checks whether the initial state owns at least one rule.
fn check_valid_start_state(program: &Program) -> Result<(), AnalysisError> {
    if !program.table.contains_state(&program.initial_state) {
        return Err(AnalysisError::InvalidStartState(
            program.initial_state.clone(),
        ));
    }

    Ok(())
}

/// Checks that every `next_state` points to a state that owns rules.
///
/// There is no implicit halt state: a machine entering a state without rules would fail on
/// its next step.
fn check_undefined_next_states(program: &Program) -> Result<(), AnalysisError> {
    let mut undefined: Vec<String> = program
        .table
        .iter()
        .filter(|(_, _, rule)| !program.table.contains_state(&rule.next_state))
        .map(|(state, read, rule)| format!("{}[{:?}] -> {}", state, read, rule.next_state))
        .collect();

    if !undefined.is_empty() {
        undefined.sort();
        return Err(AnalysisError::UndefinedNextStates(undefined));
    }

    Ok(())
}

/// Checks that the table is total over its states and the symbols the machine can meet.
///
/// The alphabet is every symbol the table reads or writes, every symbol on the initial tape,
/// and the blank symbol. The first missing pair, in sorted order, is reported.
fn check_totality(program: &Program) -> Result<(), AnalysisError> {
    let mut alphabet: BTreeSet<char> = program.table.alphabet();
    alphabet.extend(program.tape.iter().map(|(_, symbol)| symbol));
    alphabet.insert(program.blank);

    for state in program.table.states() {
        if let Some(&symbol) = alphabet
            .iter()
            .find(|&&symbol| program.table.get(state, symbol).is_none())
        {
            return Err(AnalysisError::MissingRule {
                state: state.to_string(),
                symbol,
            });
        }
    }

    Ok(())
}

/// Checks for states that cannot be reached from the initial state.
fn check_unreachable_states(program: &Program) -> Result<(), AnalysisError> {
    let mut visited = HashSet::new();
    let mut queue = vec![program.initial_state.as_str()];

    while let Some(state) = queue.pop() {
        if !visited.insert(state) {
            continue;
        }

        queue.extend(
            program
                .table
                .iter()
                .filter(|(from, _, _)| *from == state)
                .map(|(_, _, rule)| rule.next_state.as_str())
                .filter(|next| !visited.contains(next)),
        );
    }

    let mut unreachable: Vec<String> = program
        .table
        .states()
        .into_iter()
        .filter(|state| !visited.contains(state))
        .map(str::to_string)
        .collect();

    if !unreachable.is_empty() {
        unreachable.sort(); // Sort for deterministic output
        return Err(AnalysisError::UnreachableStates(unreachable));
    }

    Ok(())
}
