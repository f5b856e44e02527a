
use std::mem;

use super::types::*;
use super::automaton::Automaton;

impl Automaton {
    /*
     * Moves every state of `other` into our arena, after the
     * ones we already own, and returns the start and the final
     * states of `other` as renumbered here.
     */
    fn absorb(&mut self, other: Automaton) -> (State, StateSet) {
        let offset = self.states.len();
        let shift = |dests: StateSet| -> StateSet {
            dests.into_iter().map(|s| s + offset).collect()
        };

        let Automaton {states, start, finals} = other;
        self.states.extend(states.into_iter().map(|trans| {
            trans.into_iter()
                .map(|(sym, dests)| (sym, shift(dests)))
                .collect::<TransMap>()
        }));

        (start + offset, shift(finals))
    }

    /// Zero or more repetitions of what the machine accepts.
    pub fn star(&mut self) {
        let new_start = self.add_state();
        let old_start = self.start;

        self.add_transition(new_start, Symbol::Epsilon, old_start);

        // Loop back from every final state.
        let finals: Vec<State> = self.finals.iter().cloned().collect();
        finals.into_iter().for_each(|s| {
            self.add_transition(s, Symbol::Epsilon, old_start);
        });

        self.start = new_start;
        self.add_final(new_start);
    }

    /// Appends `other`: the machine now accepts a word of its
    /// own language followed by a word of `other`'s.
    /// Passing `None` leaves the machine unchanged.
    pub fn concatenate<A: Into<Option<Automaton>>>(&mut self, other: A) {
        let other = match other.into() {
            Some(other) => other,
            None => return,
        };

        let (other_start, other_finals) = self.absorb(other);

        let finals = mem::replace(&mut self.finals, other_finals);
        finals.into_iter().for_each(|s| {
            self.add_transition(s, Symbol::Epsilon, other_start);
        });
    }

    /// The machine now also accepts what `other` accepts.
    /// Passing `None` leaves the machine unchanged.
    pub fn union<A: Into<Option<Automaton>>>(&mut self, other: A) {
        let other = match other.into() {
            Some(other) => other,
            None => return,
        };

        let (other_start, other_finals) = self.absorb(other);
        let new_start = self.add_state();
        let old_start = self.start;

        self.add_transition(new_start, Symbol::Epsilon, old_start);
        self.add_transition(new_start, Symbol::Epsilon, other_start);
        self.start = new_start;
        self.finals.extend(other_finals);
    }
}
