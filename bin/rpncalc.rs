//! Line-oriented RPN calculator.
//!
//! Usage:
//!   rpncalc            Read lines from stdin
//!   rpncalc -e <EXPR>  Evaluate a single expression
//!
//! In line mode, meta-commands start with a dot: `.stack`, `.undo`,
//! `.quit`.

use std::{
    env,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use rpncalc::{HistoryStore, JsonFileStore, Session};

const USAGE: &str = "\
Usage: rpncalc [OPTIONS]

Options:
  -e <EXPR>  Evaluate EXPR and print the result
  -h, --help Print this help message

With no arguments, reads postfix expressions line by line from stdin.
Meta-commands: .stack  .undo  .quit";

enum Action {
    Interactive,
    Eval(String),
    Help,
}

fn parse_args() -> Result<Action, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.as_slice() {
        [] => Ok(Action::Interactive),
        [arg] if arg == "-h" || arg == "--help" => Ok(Action::Help),
        [flag, expr] if flag == "-e" => Ok(Action::Eval(expr.clone())),
        _ => Err(USAGE.into()),
    }
}

fn print_stack(session: &Session) {
    let values: Vec<String> = session.stack().iter().map(|v| v.to_string()).collect();
    println!("[{}]", values.join(" "));
}

fn run_interactive() -> ExitCode {
    let mut session = Session::new();
    let mut store = JsonFileStore::new();

    match store.load(None) {
        Ok(Some(record)) => {
            if let Err(err) = session.import_history(record) {
                eprintln!("warning: ignoring saved history: {err}");
            }
        }
        Ok(None) => {}
        Err(err) => eprintln!("warning: {err}"),
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("error reading stdin: {err}");
                return ExitCode::FAILURE;
            }
        }

        match line.trim() {
            ".quit" => break,
            ".stack" => print_stack(&session),
            ".undo" => match session.undo() {
                Ok(input) => println!("undid {input:?}"),
                Err(err) => eprintln!("{err}"),
            },
            input => match session.eval(input) {
                Ok(value) => println!("{value}"),
                Err(err) => eprintln!("{err}"),
            },
        }
    }

    if let Err(err) = store.save(&session.export_history(), None) {
        eprintln!("warning: {err}");
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    env_logger::init();

    match parse_args() {
        Ok(Action::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Action::Eval(expr)) => match rpncalc::eval(&expr) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        },
        Ok(Action::Interactive) => run_interactive(),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
