
use std::collections::{BTreeMap, BTreeSet};

/*
 * States are indices into the arena of the automaton
 * that owns them.
 */
pub type State = usize;
pub type StateSet = BTreeSet<State>;

pub type TransMap = BTreeMap<Symbol, StateSet>;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Symbol {
    Alpha,
    Num,
    Epsilon,
}

impl Symbol {
    /// Maps an input character onto the class it belongs to.
    /// Never yields `Epsilon`: a character outside both classes
    /// has no symbol at all.
    pub fn of_char(c: char) -> Option<Symbol> {
        if c.is_alphabetic() {
            Some(Symbol::Alpha)
        } else if c.is_numeric() {
            Some(Symbol::Num)
        } else {
            None
        }
    }

    /// The class denoted by a character of a pattern.
    pub fn of_pattern_char(c: char) -> Option<Symbol> {
        match c {
            'a' => Some(Symbol::Alpha),
            'd' => Some(Symbol::Num),
            _ => None,
        }
    }
}
