
mod batch;

use clap::{Arg, App, AppSettings, SubCommand};

use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::path::Path;

use automata::compile;
use automata::nfa::Automaton;
use batch::{parse_batch, parse_verdicts};

fn read_file(name: &str) -> Result<String, String> {
    let path = Path::new(name);
    let display = path.display();

    let mut file = File::open(&path)
        .map_err(|why| format!("Couldn't open {} : {}", display, why))?;

    let mut s = String::new();
    file.read_to_string(&mut s).map_err(|e| e.to_string())?;

    Ok(s)
}

fn read_stdin() -> Result<String, String> {
    let mut s = String::new();
    io::stdin().read_to_string(&mut s).map_err(|e| e.to_string())?;

    Ok(s)
}

fn build(pattern: &str) -> Result<Automaton, String> {
    match compile(pattern) {
        Ok(Some(nfa)) => Ok(nfa),
        Ok(None) => Err("The pattern is empty.".to_string()),
        Err(e) => Err(format!("Invalid pattern \"{}\", {}", pattern, e)),
    }
}

fn verdict(accepted: bool) -> &'static str {
    if accepted {"YES"} else {"NO"}
}

fn run(file_name: Option<&str>, dump: bool) -> Result<(), String> {
    let s = match file_name {
        None | Some("-") => read_stdin()?,
        Some(name) => read_file(name)?,
    };

    let batch = parse_batch(&s)?;
    let nfa = build(batch.pattern)?;

    if dump {
        print!("{}", nfa);
    }

    batch.candidates.iter().for_each(|candidate| {
        println!("{}", verdict(nfa.accepts(candidate)))
    });

    Ok(())
}

fn test(test_name: &str) -> Result<(), String> {
    let input = read_file(&format!("{}.in", test_name))?;
    let output = read_file(&format!("{}.out", test_name))?;

    let batch = parse_batch(&input)?;
    let expected = parse_verdicts(&output)?;

    if batch.candidates.len() != expected.len() {
        return Err("Mismatched number of sub-tests.".to_string())
    }

    let nfa = build(batch.pattern)?;
    let mut failed = 0;

    for (test_id, (candidate, expected)) in
        Iterator::zip(batch.candidates.iter(), expected.iter()).enumerate()
    {
        let got = nfa.accepts(candidate);

        if got == *expected {
            println!("    #{} passed.", test_id + 1);
        } else {
            failed += 1;
            println!("    #{} failed.", test_id + 1);
            println!(
                "    on \"{}\", expected {}, got {}",
                candidate, verdict(*expected), verdict(got)
            );
        }
    }

    if failed == 0 {
        Ok(())
    } else {
        Err(format!("{} of {} sub-tests failed.", failed, expected.len()))
    }
}

fn main() -> Result<(), String> {
    let matches = App::new("nfasim")
        .version("1.0")
        .author("Julien Marquet")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(SubCommand::with_name("run")
            .about("Tells which candidates of the given batch the pattern accepts")
            .arg(Arg::with_name("input")
                .help("The batch to run (reads stdin when missing or \"-\")")
                .index(1))
            .arg(Arg::with_name("dump")
                .short("d")
                .long("dump")
                .help("Print the compiled automaton first")))
        .subcommand(SubCommand::with_name("test")
            .about("Runs the given test (<name>.in, checked against <name>.out)")
            .arg(Arg::with_name("input")
                .help("The test to run")
                .required(true)
                .index(1)))
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("run") {
        run(matches.value_of("input"), matches.is_present("dump"))?;
    } else if let Some(matches) = matches.subcommand_matches("test") {
        let test_name = matches.value_of("input").ok_or("Missing test name.")?;
        test(test_name)?;
    }

    Ok(())
}
