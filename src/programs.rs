//! The built-in binary increment program.

use crate::table::TransitionTable;
use crate::tape::Tape;
use crate::types::{Program, DEFAULT_BLANK_SYMBOL};

/// Name of the binary increment program.
pub const BINARY_INCREMENT: &str = "binary-increment";

/// The machine that adds one to a binary counter, forever.
///
/// In state `lsb` the head scans right over the written bits. On reaching a blank it steps
/// back and switches to `car`, which propagates a carry leftward: every `1` becomes `0`,
/// and the first `0` or blank becomes `1`, after which scanning resumes. The counter grows
/// to the left of position 0, most significant bit first.
pub fn binary_increment() -> Program {
    let blank = DEFAULT_BLANK_SYMBOL;
    let table = TransitionTable::new()
        .with_rule("lsb", '1', '1', 1, "lsb")
        .with_rule("lsb", '0', '0', 1, "lsb")
        .with_rule("lsb", blank, blank, -1, "car")
        .with_rule("car", '1', '0', -1, "car")
        .with_rule("car", '0', '1', 1, "lsb")
        .with_rule("car", blank, '1', 1, "lsb");

    Program {
        name: BINARY_INCREMENT.to_string(),
        initial_state: "lsb".to_string(),
        head: 0,
        blank,
        tape: Tape::new(blank),
        table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rule;

    #[test]
    fn test_reference_table() {
        let program = binary_increment();
        let table = &program.table;

        assert_eq!(table.len(), 6);
        assert_eq!(table.get("lsb", '1'), Some(&Rule::new('1', 1, "lsb")));
        assert_eq!(table.get("lsb", '0'), Some(&Rule::new('0', 1, "lsb")));
        assert_eq!(table.get("lsb", ' '), Some(&Rule::new(' ', -1, "car")));
        assert_eq!(table.get("car", '1'), Some(&Rule::new('0', -1, "car")));
        assert_eq!(table.get("car", '0'), Some(&Rule::new('1', 1, "lsb")));
        assert_eq!(table.get("car", ' '), Some(&Rule::new('1', 1, "lsb")));
    }

    #[test]
    fn test_reference_initial_configuration() {
        let program = binary_increment();

        assert_eq!(program.name, BINARY_INCREMENT);
        assert_eq!(program.initial_state, "lsb");
        assert_eq!(program.tape.blank(), program.blank);
        assert_eq!(program.head, 0);
        assert!(program.tape.is_empty());
    }
}
