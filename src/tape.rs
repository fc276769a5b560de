//! Sparse, two-way infinite tape.
//!
//! Only cells holding a non-blank symbol are stored. Reading any other position yields the
//! blank symbol, so the head may wander arbitrarily far in either direction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;

use crate::types::DEFAULT_BLANK_SYMBOL;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tape {
    /// Non-blank cells, ordered by position.
    cells: BTreeMap<i64, char>,
    blank: char,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new(DEFAULT_BLANK_SYMBOL)
    }
}

impl Tape {
    /// Creates an empty tape with the given blank symbol.
    pub fn new(blank: char) -> Self {
        Self {
            cells: BTreeMap::new(),
            blank,
        }
    }

    /// Creates a tape holding `symbols`, the first one at position `start`.
    pub fn from_symbols(blank: char, start: i64, symbols: &str) -> Self {
        let mut tape = Self::new(blank);
        for (position, symbol) in (start..).zip(symbols.chars()) {
            tape.write(position, symbol);
        }
        tape
    }

    /// Returns the symbol at `position`, or the blank symbol if the cell was never written.
    pub fn read(&self, position: i64) -> char {
        self.cells.get(&position).copied().unwrap_or(self.blank)
    }

    /// Writes `symbol` at `position`. Writing the blank symbol frees the cell.
    pub fn write(&mut self, position: i64, symbol: char) {
        if symbol == self.blank {
            self.cells.remove(&position);
        } else {
            self.cells.insert(position, symbol);
        }
    }

    pub fn blank(&self) -> char {
        self.blank
    }

    /// Number of stored (non-blank) cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Lowest and highest non-blank positions, or `None` for an all-blank tape.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        let (&first, _) = self.cells.first_key_value()?;
        let (&last, _) = self.cells.last_key_value()?;
        Some((first, last))
    }

    /// Iterates over the non-blank cells in increasing position order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, char)> + '_ {
        self.cells.iter().map(|(&position, &symbol)| (position, symbol))
    }

    /// Iterates over every cell of `window` in increasing order, blanks included.
    pub fn window(&self, window: Range<i64>) -> impl Iterator<Item = (i64, char)> + '_ {
        window.map(move |position| (position, self.read(position)))
    }

    /// Interprets the written region as a binary number.
    ///
    /// The lowest position holds the most significant bit, matching the way the increment
    /// machine grows its counter to the left. Blanks inside the region count as `0`. Returns
    /// `None` if the region holds a symbol other than `0`/`1` or the value does not fit in a
    /// `u64`. An all-blank tape is `Some(0)`.
    pub fn binary_value(&self) -> Option<u64> {
        let Some((first, last)) = self.bounds() else {
            return Some(0);
        };

        (first..=last).try_fold(0u64, |value, position| {
            let bit = match self.read(position) {
                '1' => 1,
                '0' => 0,
                symbol if symbol == self.blank => 0,
                _ => return None,
            };
            value.checked_mul(2)?.checked_add(bit)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritten_cells_read_blank() {
        let tape = Tape::default();

        assert_eq!(tape.read(0), ' ');
        assert_eq!(tape.read(-1_000_000), ' ');
        assert_eq!(tape.read(i64::MAX), ' ');
        assert!(tape.is_empty());
    }

    #[test]
    fn test_sparse_storage() {
        let mut tape = Tape::new('_');

        tape.write(1_000_000, '1');
        tape.write(-1_000_000, '0');
        assert_eq!(tape.len(), 2);
        assert_eq!(tape.read(1_000_000), '1');
        assert_eq!(tape.read(-1_000_000), '0');
        assert_eq!(tape.bounds(), Some((-1_000_000, 1_000_000)));

        // Writing blank frees the cell.
        tape.write(1_000_000, '_');
        assert_eq!(tape.len(), 1);
        assert_eq!(tape.read(1_000_000), '_');
    }

    #[test]
    fn test_from_symbols_skips_blanks() {
        let tape = Tape::from_symbols(' ', -2, "1 0");

        assert_eq!(tape.len(), 2);
        assert_eq!(tape.iter().collect::<Vec<_>>(), vec![(-2, '1'), (0, '0')]);
    }

    #[test]
    fn test_window_includes_blanks() {
        let tape = Tape::from_symbols(' ', 0, "10");

        let cells: String = tape.window(-1..3).map(|(_, symbol)| symbol).collect();
        assert_eq!(cells, " 10 ");
        assert_eq!(tape.window(4..4).count(), 0);
    }

    #[test]
    fn test_binary_value() {
        assert_eq!(Tape::default().binary_value(), Some(0));
        assert_eq!(Tape::from_symbols(' ', -3, "101").binary_value(), Some(5));
        assert_eq!(Tape::from_symbols(' ', 7, "1100").binary_value(), Some(12));
        assert_eq!(Tape::from_symbols(' ', 0, "1 1").binary_value(), Some(5));
        assert_eq!(Tape::from_symbols(' ', 0, "1x1").binary_value(), None);
    }

    #[test]
    fn test_binary_value_overflow() {
        let tape = Tape::from_symbols(' ', 0, &"1".repeat(65));

        assert_eq!(tape.binary_value(), None);
    }
}
