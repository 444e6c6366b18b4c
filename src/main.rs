use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use monkey::{
    error::InterpretError,
    interpret,
    interpreter::lexer::Lexer,
    parse,
};

const PROMPT: &str = ">> ";

/// monkey evaluates programs written in the Monkey language.
///
/// Without a script it starts an interactive prompt that evaluates one line
/// at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to look at a file instead of a script.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints the token stream instead of evaluating.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Prints the parsed program instead of evaluating.
    #[arg(long)]
    ast: bool,

    contents: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let Some(contents) = args.contents else {
        return match repl() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    if args.tokens {
        for token in Lexer::new(&script) {
            println!("{} {}", token.kind, token.literal);
        }
        return ExitCode::SUCCESS;
    }

    if args.ast {
        let (program, errors) = parse(&script);
        if !errors.is_empty() {
            report(&errors.into());
            return ExitCode::FAILURE;
        }
        print!("{program}");
        return ExitCode::SUCCESS;
    }

    match interpret(&script) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        },
    }
}

/// Reads lines until end of input, printing each line's value or its
/// diagnostics.
fn repl() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        match interpret(&line) {
            Ok(value) => writeln!(stdout, "{value}")?,
            Err(InterpretError::Parse(errors)) => writeln!(stdout, "{errors}")?,
            Err(InterpretError::Runtime(e)) => writeln!(stdout, "ERROR: {e}")?,
        }
    }
}

fn report(error: &InterpretError) {
    eprintln!("{error}");
}
