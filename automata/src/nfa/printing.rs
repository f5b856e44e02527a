
use std::fmt;

use super::types::*;
use super::automaton::Automaton;

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Alpha => write!(f, "a"),
            Symbol::Num => write!(f, "d"),
            Symbol::Epsilon => write!(f, "ε"),
        }
    }
}

fn write_list<'a, I>(f: &mut fmt::Formatter<'_>, states: I) -> fmt::Result
    where I: Iterator<Item = &'a State>
{
    let mut first = true;

    for s in states {
        if first {
            first = false;
            write!(f, "{}", s)?;
        } else {
            write!(f, ", {}", s)?;
        }
    }

    Ok(())
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let all: Vec<State> = (0..self.state_count()).collect();

        write!(f, "States: (")?;
        write_list(f, all.iter())?;
        writeln!(f, ")")?;

        writeln!(f, "Start: {}", self.start)?;

        write!(f, "Final States: (")?;
        write_list(f, self.finals.iter())?;
        writeln!(f, ")")?;

        for (from, trans) in self.states.iter().enumerate() {
            for (sym, dests) in trans {
                write!(f, "{} {} --> {{", from, sym)?;
                write_list(f, dests.iter())?;
                writeln!(f, "}}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump() {
        let mut nfa = Automaton::new();
        let s1 = nfa.add_state();
        let s2 = nfa.add_state();
        nfa.add_transition(0, Symbol::Alpha, s1);
        nfa.add_transition(0, Symbol::Alpha, s2);
        nfa.add_transition(s1, Symbol::Epsilon, s2);
        nfa.add_final(s2);

        assert_eq!(
            nfa.to_string(),
            "States: (0, 1, 2)\n\
             Start: 0\n\
             Final States: (2)\n\
             0 a --> {1, 2}\n\
             1 ε --> {2}\n"
        );
    }

    #[test]
    fn dump_fresh_machine() {
        assert_eq!(
            Automaton::new().to_string(),
            "States: (0)\nStart: 0\nFinal States: ()\n"
        );
    }
}
