use std::fs;

use clap::Parser;
use qlisp::eval_source;
use rustyline::{error::ReadlineError, DefaultEditor};

/// qlisp is a tiny Lisp-flavored expression language with evaluable `( )`
/// lists and quoted `{ }` lists.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells qlisp to look at a file instead of an inline expression.
    #[arg(short, long)]
    file: bool,

    /// The expression to evaluate (or a file path with --file). When
    /// omitted, an interactive prompt starts.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
        return;
    };

    let source = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    run_line(&source);
}

/// Evaluates one source string and prints the outcome.
///
/// An evaluation failure is itself a value and prints on stdout as
/// `error: <message>`; only syntax errors go to stderr. Either way the
/// caller carries on with the next input.
fn run_line(source: &str) {
    match eval_source(source) {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}

/// The interactive read-evaluate-print loop.
///
/// Each line is an independent program: nothing is retained between inputs,
/// so a bad expression never affects the next one.
fn repl() {
    println!("qlisp v{}", env!("CARGO_PKG_VERSION"));
    println!("press ctrl+c to exit\n");

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the interactive prompt: {e}");
            std::process::exit(1);
        },
    };

    loop {
        match editor.readline("qlisp> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                let _ = editor.add_history_entry(line.as_str());
                run_line(&line);
            },

            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,

            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            },
        }
    }
}
