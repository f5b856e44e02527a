
pub mod nfa;
pub mod compile;
mod error;

pub use compile::compile;
pub use error::{CompileError, ErrorKind};
