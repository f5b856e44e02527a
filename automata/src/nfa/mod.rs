
mod types;
mod automaton;
mod simulate;
mod combinators;
mod printing;

pub use types::{State, StateSet, Symbol, TransMap};
pub use automaton::Automaton;
