
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnexpectedChar(char),
    UnclosedGroup,
    NestedGroup,
    MissingStar,
    EmptyGroup,
}

/*
 * `at` is a char index into the whole pattern,
 * not into the piece that was being compiled.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileError {
    at: usize,
    kind: ErrorKind,
}

impl CompileError {
    pub fn new(at: usize, kind: ErrorKind) -> Self {
        CompileError {at, kind}
    }

    #[inline]
    pub fn at(&self) -> usize {
        self.at
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnexpectedChar(c) => write!(f, "Unexpected character '{}'.", c),
            ErrorKind::UnclosedGroup => write!(f, "This group is never closed."),
            ErrorKind::NestedGroup => write!(f, "Groups can't be nested."),
            ErrorKind::MissingStar => write!(f, "Expected a '*' after this group."),
            ErrorKind::EmptyGroup => write!(f, "Groups can't be empty."),
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at char {}: {}", self.at, self.kind)
    }
}

impl std::error::Error for CompileError {}
