//! This crate provides the core logic for a single-tape Turing Machine that increments a binary
//! counter forever. It includes the sparse tape, the transition table, the interpreter loop,
//! a construction-time analyzer for transition tables, and a one-line tape renderer.

pub mod analyzer;
pub mod machine;
pub mod programs;
pub mod render;
pub mod table;
pub mod tape;
pub mod types;

/// Re-exports the `analyze` function and `AnalysisError` enum from the analyzer module.
pub use analyzer::{analyze, AnalysisError};
/// Re-exports the `TuringMachine` struct from the machine module.
pub use machine::TuringMachine;
/// Re-exports the built-in program from the programs module.
pub use programs::{binary_increment, BINARY_INCREMENT};
/// Re-exports the renderer from the render module.
pub use render::{render, Renderer};
/// Re-exports the `TransitionTable` struct from the table module.
pub use table::TransitionTable;
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports various types related to machine definition and execution from the types module.
pub use types::{
    Program, Rule, SimulationConfig, TuringMachineError, DEFAULT_BLANK_SYMBOL, DEFAULT_LEASH,
    DEFAULT_WINDOW,
};
