
use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Error, LitStr, Result};

use automata::compile;
use automata::nfa::{Automaton, Symbol};

fn serialize_symbol(sym: Symbol) -> TokenStream {
    match sym {
        Symbol::Alpha => quote! {::automata::nfa::Symbol::Alpha},
        Symbol::Num => quote! {::automata::nfa::Symbol::Num},
        Symbol::Epsilon => quote! {::automata::nfa::Symbol::Epsilon},
    }
}

fn serialize(nfa: &Automaton) -> TokenStream {
    let state_count = nfa.state_count();
    let start = nfa.start();
    let transitions = nfa.transitions().map(|(from, sym, to)| {
        let sym = serialize_symbol(sym);
        quote! {(#from, #sym, #to)}
    });
    let finals = nfa.finals().iter();

    quote! {
        ::automata::nfa::Automaton::from_parts(
            #state_count,
            #start,
            &[#(#transitions),*],
            &[#(#finals),*],
        )
    }
}

fn build(pattern: &LitStr) -> Result<TokenStream> {
    match compile(&pattern.value()) {
        Ok(Some(nfa)) => Ok(serialize(&nfa)),
        Ok(None) => Err(Error::new(pattern.span(), "Patterns can't be empty.")),
        Err(e) => Err(Error::new(pattern.span(), format!("Invalid pattern, {}", e))),
    }
}

pub fn nfa(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let pattern = parse_macro_input!(input as LitStr);

    let expanded = match build(&pattern) {
        Ok(expanded) => expanded,
        Err(e) => e.to_compile_error(),
    };

    expanded.into()
}
