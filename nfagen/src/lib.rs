
mod serialize;

/*
 * `nfa!("(a)*d")` compiles the pattern while the crate
 * is being built and expands to an expression that
 * rebuilds the resulting automaton.
 */
#[proc_macro]
pub fn nfa(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    serialize::nfa(input)
}
