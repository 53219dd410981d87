use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::LevelFilter;
use rpcalc::{
    interpreter::session::{Outcome, Session},
    symbols::load_constants,
};
use rustyline::{DefaultEditor, error::ReadlineError};

const PROMPT: &str = "Enter an expression (or type 'exit' to quit): ";

/// rpcalc evaluates infix arithmetic through the shunting-yard algorithm.
/// Type `name = expression` to bind a variable.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File of `name=value` constant definitions, one per line.
    #[arg(short, long, default_value = "constants.txt")]
    constants: PathBuf,

    /// Raises log verbosity; `-vvv` traces every shunting-yard step.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Lines to process instead of starting the interactive prompt.
    expressions: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    let mut session = Session::new(load_constants(&args.constants));

    if !args.expressions.is_empty() {
        return run_batch(&mut session, &args.expressions);
    }

    match run_repl(&mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: repl failed: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run_batch(session: &mut Session, lines: &[String]) -> ExitCode {
    let mut failed = false;

    for line in lines {
        match session.process_line(line) {
            Ok(Outcome::Evaluated(evaluation)) => println!("{}", evaluation.value),
            Ok(Outcome::Assigned { name, value }) => println!("{name} = {value}"),
            Err(e) => {
                eprintln!("Error: {e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn run_repl(session: &mut Session) -> Result<(), ReadlineError> {
    let mut editor = DefaultEditor::new()?;

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e),
        };

        let trimmed = line.trim();
        if trimmed == "exit" || trimmed == "Exit" {
            return Ok(());
        }
        if !trimmed.is_empty() {
            let _ = editor.add_history_entry(trimmed);
        }

        print_outcome(session, &line);
    }
}

fn print_outcome(session: &mut Session, line: &str) {
    match session.process_line(line) {
        Ok(Outcome::Assigned { name, value }) => println!("Variable {name} set to {value}"),
        Ok(Outcome::Evaluated(evaluation)) => {
            println!("Result: {}", evaluation.value);
            println!("Postfix Expression: {}", evaluation.postfix);
            println!("History:");
            for entry in session.history() {
                println!("{entry}");
            }
        },
        Err(e) if line.contains('=') => eprintln!("Error setting variable: {e}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}
