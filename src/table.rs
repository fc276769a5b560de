//! The transition table: a mapping from (state, symbol under the head) to a [`Rule`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::types::{Rule, TuringMachineError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionTable {
    rules: HashMap<String, HashMap<char, Rule>>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the rule for `(state, read)`, returning the rule it replaces, if any.
    pub fn insert(&mut self, state: impl Into<String>, read: char, rule: Rule) -> Option<Rule> {
        self.rules.entry(state.into()).or_default().insert(read, rule)
    }

    /// Builder form of [`TransitionTable::insert`].
    ///
    /// ```
    /// use tur_inc::TransitionTable;
    ///
    /// let table = TransitionTable::new()
    ///     .with_rule("lsb", '1', '1', 1, "lsb")
    ///     .with_rule("lsb", ' ', ' ', -1, "car");
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn with_rule(
        mut self,
        state: &str,
        read: char,
        write: char,
        shift: i64,
        next_state: &str,
    ) -> Self {
        self.insert(state, read, Rule::new(write, shift, next_state));
        self
    }

    /// Returns the rule for `(state, symbol)`, if one is defined.
    pub fn get(&self, state: &str, symbol: char) -> Option<&Rule> {
        self.rules.get(state)?.get(&symbol)
    }

    /// Returns the rule for `(state, symbol)` or an [`TuringMachineError::IncompleteTable`].
    pub fn lookup(&self, state: &str, symbol: char) -> Result<&Rule, TuringMachineError> {
        self.get(state, symbol)
            .ok_or_else(|| TuringMachineError::IncompleteTable {
                state: state.to_string(),
                symbol,
            })
    }

    /// Returns `true` if `state` has at least one rule.
    pub fn contains_state(&self, state: &str) -> bool {
        self.rules.contains_key(state)
    }

    /// All states that own rules, sorted.
    pub fn states(&self) -> Vec<&str> {
        let mut states: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        states.sort_unstable();
        states
    }

    /// Every symbol the table reads or writes, sorted.
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.rules
            .values()
            .flat_map(|rules| rules.iter())
            .flat_map(|(&read, rule)| [read, rule.write])
            .collect()
    }

    /// Iterates over `(state, read, rule)` triples in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, char, &Rule)> + '_ {
        self.rules.iter().flat_map(|(state, rules)| {
            rules
                .iter()
                .map(move |(&read, rule)| (state.as_str(), read, rule))
        })
    }

    /// Total number of rules.
    pub fn len(&self) -> usize {
        self.rules.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
