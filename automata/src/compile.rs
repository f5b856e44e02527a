
use crate::error::{CompileError, ErrorKind};
use crate::nfa::{Automaton, Symbol};

const UNION: char = 'U';
const STAR: char = '*';
const OPEN: char = '(';
const CLOSE: char = ')';

/*
 * Grammar, in the order the cases are tried:
 *
 *   * the empty pattern has no automaton;
 *   * if a 'U' appears anywhere, the pattern is the
 *     union of the pieces between the 'U's
 *     (groups never contain a 'U');
 *   * otherwise the pattern is a sequence of pieces,
 *     each one being 'a' or 'd', maybe followed by '*',
 *     or '(' ... ')' '*'. The first ')' closes the group.
 *
 * Errors are reported from left to right: a group's
 * body is compiled before its '*' is looked for.
 */

/// Compiles `pattern` into an automaton accepting the same
/// language. `Ok(None)` means the pattern was empty.
pub fn compile(pattern: &str) -> Result<Option<Automaton>, CompileError> {
    let chars: Vec<char> = pattern.chars().collect();
    build(&chars, 0)
}

// `at` is the position of `exp` in the whole pattern.
fn build(exp: &[char], at: usize) -> Result<Option<Automaton>, CompileError> {
    if exp.is_empty() {
        return Ok(None)
    }

    if exp.contains(&UNION) {
        build_union(exp, at)
    } else {
        build_sequence(exp, at)
    }
}

fn build_union(exp: &[char], at: usize) -> Result<Option<Automaton>, CompileError> {
    let mut acc: Option<Automaton> = None;
    let mut offset = at;

    for segment in exp.split(|c| *c == UNION) {
        // Empty segments contribute nothing.
        let nfa = build(segment, offset)?;
        offset += segment.len() + 1;

        acc = match acc {
            Some(mut acc) => {
                acc.union(nfa);
                Some(acc)
            },
            None => nfa,
        };
    }

    Ok(acc)
}

/*
 * Pieces are appended one at a time to a single machine,
 * so each concatenation only moves the new piece.
 */
fn build_sequence(exp: &[char], at: usize) -> Result<Option<Automaton>, CompileError> {
    let mut acc: Option<Automaton> = None;
    let mut i = 0;

    while i < exp.len() {
        let (piece, len) = build_piece(&exp[i..], at + i)?;
        i += len;

        acc = match acc {
            Some(mut acc) => {
                acc.concatenate(piece);
                Some(acc)
            },
            None => Some(piece),
        };
    }

    Ok(acc)
}

// Returns the piece at the head of `exp`, and how many chars it spans.
fn build_piece(exp: &[char], at: usize) -> Result<(Automaton, usize), CompileError> {
    if let Some(sym) = Symbol::of_pattern_char(exp[0]) {
        Ok(build_literal(sym, exp))
    } else if exp[0] == OPEN {
        build_group(exp, at)
    } else {
        Err(CompileError::new(at, ErrorKind::UnexpectedChar(exp[0])))
    }
}

fn build_literal(sym: Symbol, exp: &[char]) -> (Automaton, usize) {
    let mut nfa = Automaton::new();
    let start = nfa.start();
    let end = nfa.add_state();
    nfa.add_transition(start, sym, end);
    nfa.add_final(end);

    if exp.get(1) == Some(&STAR) {
        nfa.star();
        (nfa, 2)
    } else {
        (nfa, 1)
    }
}

fn build_group(exp: &[char], at: usize) -> Result<(Automaton, usize), CompileError> {
    let mut close = None;

    for (i, c) in exp.iter().enumerate().skip(1) {
        match *c {
            OPEN => return Err(CompileError::new(at + i, ErrorKind::NestedGroup)),
            CLOSE => {
                close = Some(i);
                break
            },
            _ => (),
        }
    }

    let close = match close {
        Some(close) => close,
        None => return Err(CompileError::new(at, ErrorKind::UnclosedGroup)),
    };

    let mut nfa = match build(&exp[1..close], at + 1)? {
        Some(nfa) => nfa,
        None => return Err(CompileError::new(at, ErrorKind::EmptyGroup)),
    };

    if exp.get(close + 1) != Some(&STAR) {
        return Err(CompileError::new(at + close + 1, ErrorKind::MissingStar))
    }

    nfa.star();
    Ok((nfa, close + 2))
}
