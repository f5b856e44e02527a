
use super::types::*;

/*
 * A non-deterministic automaton. The states live in an
 * append-only arena: state `i` owns `states[i]`, its
 * transition table.
 *
 * Invariants:
 *   * `start` is a member;
 *   * every destination and every final state is a member.
 */
#[derive(Clone, Debug)]
pub struct Automaton {
    pub(super) states: Vec<TransMap>,
    pub(super) start: State,
    pub(super) finals: StateSet,
}

impl Automaton {
    /// A machine with a single state, which is the start state.
    /// No transitions, no final states.
    pub fn new() -> Self {
        Automaton {
            states: vec![TransMap::new()],
            start: 0,
            finals: StateSet::new(),
        }
    }

    /// Rebuilds an automaton from its raw parts. There is always
    /// at least one state; entries that mention a state outside
    /// of `0..state_count` are ignored.
    pub fn from_parts(
        state_count: usize,
        start: State,
        transitions: &[(State, Symbol, State)],
        finals: &[State],
    )
        -> Self
    {
        let mut nfa = Automaton::new();

        (1..state_count).for_each(|_| {
            nfa.add_state();
        });
        nfa.set_start(start);
        transitions.iter().for_each(|&(from, sym, to)| {
            nfa.add_transition(from, sym, to);
        });
        finals.iter().for_each(|&s| {
            nfa.add_final(s);
        });

        nfa
    }

    pub fn add_state(&mut self) -> State {
        self.states.push(TransMap::new());
        self.states.len() - 1
    }

    #[inline]
    pub fn contains(&self, s: State) -> bool {
        s < self.states.len()
    }

    #[inline]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn add_transition(&mut self, from: State, sym: Symbol, to: State) -> bool {
        if !self.contains(from) || !self.contains(to) {
            return false
        }

        self.states[from]
            .entry(sym)
            .or_insert_with(StateSet::new)
            .insert(to);
        true
    }

    pub fn has_transition(&self, s: State, sym: Symbol) -> bool {
        self.destinations(s, sym).is_some()
    }

    pub fn destinations(&self, s: State, sym: Symbol) -> Option<&StateSet> {
        self.states.get(s).and_then(|trans| trans.get(&sym))
    }

    /// Every transition, as `(from, symbol, to)`, in increasing order.
    pub fn transitions(&self) -> impl Iterator<Item = (State, Symbol, State)> + '_ {
        self.states.iter().enumerate().flat_map(|(from, trans)| {
            trans.iter().flat_map(move |(sym, dests)| {
                dests.iter().map(move |to| (from, *sym, *to))
            })
        })
    }

    #[inline]
    pub fn start(&self) -> State {
        self.start
    }

    pub fn set_start(&mut self, s: State) -> bool {
        if !self.contains(s) {
            return false
        }

        self.start = s;
        true
    }

    #[inline]
    pub fn finals(&self) -> &StateSet {
        &self.finals
    }

    pub fn add_final(&mut self, s: State) -> bool {
        self.contains(s) && self.finals.insert(s)
    }

    pub fn clear_finals(&mut self) {
        self.finals.clear();
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}
