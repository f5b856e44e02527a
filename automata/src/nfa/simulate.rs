
use std::iter;

use super::types::*;
use super::automaton::Automaton;

impl Automaton {
    /*
     * Follows epsilon transitions until no new state shows up.
     * Terminates since the set only grows and the arena is finite.
     */
    pub fn epsilon_closure(&self, mut states: StateSet) -> StateSet {
        let mut stack: Vec<State> = states.iter().cloned().collect();

        while let Some(s) = stack.pop() {
            if let Some(dests) = self.destinations(s, Symbol::Epsilon) {
                dests.iter().for_each(|d| {
                    if states.insert(*d) {
                        stack.push(*d);
                    }
                });
            }
        }

        states
    }

    /// The states reachable from `states` by reading `sym` once.
    pub fn step(&self, states: &StateSet, sym: Symbol) -> StateSet {
        states.iter()
            .filter_map(|s| self.destinations(*s, sym))
            .flat_map(|dests| dests.iter().cloned())
            .collect()
    }

    /// Runs every path of the machine at once on `input`.
    pub fn accepts(&self, input: &str) -> bool {
        let mut current = self.epsilon_closure(iter::once(self.start).collect());

        for c in input.chars() {
            let sym = match Symbol::of_char(c) {
                Some(sym) => sym,
                None => return false,
            };

            current = self.epsilon_closure(self.step(&current, sym));
            if current.is_empty() {
                return false
            }
        }

        // Still needed for the empty input.
        current = self.epsilon_closure(current);

        !current.is_disjoint(&self.finals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(states: &[State]) -> StateSet {
        states.iter().cloned().collect()
    }

    // 0 -e-> 1 -e-> 2 -a-> 3, and 3 -e-> 0.
    fn chain() -> Automaton {
        let mut nfa = Automaton::new();
        let s1 = nfa.add_state();
        let s2 = nfa.add_state();
        let s3 = nfa.add_state();

        nfa.add_transition(0, Symbol::Epsilon, s1);
        nfa.add_transition(s1, Symbol::Epsilon, s2);
        nfa.add_transition(s2, Symbol::Alpha, s3);
        nfa.add_transition(s3, Symbol::Epsilon, 0);
        nfa
    }

    #[test]
    fn closure_follows_chains() {
        let nfa = chain();

        assert_eq!(nfa.epsilon_closure(set(&[0])), set(&[0, 1, 2]));
        assert_eq!(nfa.epsilon_closure(set(&[3])), set(&[0, 1, 2, 3]));
        assert_eq!(nfa.epsilon_closure(set(&[])), set(&[]));
    }

    #[test]
    fn closure_is_idempotent() {
        let nfa = chain();

        for s in 0..nfa.state_count() {
            let once = nfa.epsilon_closure(set(&[s]));
            let twice = nfa.epsilon_closure(once.clone());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn closure_terminates_on_cycles() {
        let mut nfa = Automaton::new();
        let s = nfa.add_state();
        nfa.add_transition(0, Symbol::Epsilon, s);
        nfa.add_transition(s, Symbol::Epsilon, 0);

        assert_eq!(nfa.epsilon_closure(set(&[s])), set(&[0, s]));
    }

    #[test]
    fn step_unions_destinations() {
        let mut nfa = Automaton::new();
        let s1 = nfa.add_state();
        let s2 = nfa.add_state();
        let s3 = nfa.add_state();
        nfa.add_transition(0, Symbol::Num, s1);
        nfa.add_transition(0, Symbol::Num, s2);
        nfa.add_transition(s1, Symbol::Num, s3);
        nfa.add_transition(s1, Symbol::Epsilon, s3);

        assert_eq!(nfa.step(&set(&[0, s1]), Symbol::Num), set(&[s1, s2, s3]));
        // Epsilon edges are not followed by a step.
        assert_eq!(nfa.step(&set(&[0]), Symbol::Num), set(&[s1, s2]));
        assert_eq!(nfa.step(&set(&[s2, s3]), Symbol::Num), set(&[]));
        assert_eq!(nfa.step(&set(&[0]), Symbol::Alpha), set(&[]));
    }

    #[test]
    fn empty_input_checks_start_closure() {
        let mut nfa = chain();
        assert!(!nfa.accepts(""));

        nfa.add_final(2);
        assert!(nfa.accepts(""));

        let mut lone = Automaton::new();
        assert!(!lone.accepts(""));
        lone.add_final(0);
        assert!(lone.accepts(""));
    }

    #[test]
    fn simulation_tracks_every_path() {
        let mut nfa = chain();
        nfa.add_final(3);

        assert!(nfa.accepts("x"));
        assert!(nfa.accepts("xyz"));
        assert!(!nfa.accepts("4"));
        assert!(!nfa.accepts("x4"));
    }

    #[test]
    fn unmapped_characters_reject() {
        let mut nfa = Automaton::new();
        nfa.add_final(0);
        nfa.add_transition(0, Symbol::Alpha, 0);

        assert!(nfa.accepts("ab"));
        assert!(!nfa.accepts("a b"));
        assert!(!nfa.accepts("_"));
    }
}
