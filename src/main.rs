use std::{fs, process::ExitCode};

use clap::Parser;
use log::{LevelFilter, warn};
use shunt::calculator::Calculator;

/// shunt evaluates arithmetic expressions with variables, functions and
/// `|x|` absolute values.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shunt to read expressions from a file, one per line, instead of
    /// evaluating a single expression.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable before any expression is parsed. May be repeated.
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE", value_parser = parse_definition)]
    definitions: Vec<(String, f64)>,

    /// Prints the postfix form of every expression before its result.
    #[arg(short, long)]
    rpn: bool,

    /// Enables debug logging. `RUST_LOG` takes precedence when set.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn parse_definition(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s.split_once('=')
                         .ok_or_else(|| format!("expected NAME=VALUE, found '{s}'"))?;
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{}': {e}", name.trim()))?;
    Ok((name.trim().to_string(), value))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(default_level)
                              .parse_default_env()
                              .init();

    let mut calculator = Calculator::new();
    for (name, value) in &args.definitions {
        if let Err(e) = calculator.add_variable(name, *value) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };

    let mut failed = false;
    for line in script.lines()
                      .map(str::trim)
                      .filter(|l| !l.is_empty() && !l.starts_with('#'))
    {
        if !run_line(&mut calculator, line, args.rpn) {
            failed = true;
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Parses and calculates one expression, printing the result or the error.
fn run_line(calculator: &mut Calculator, line: &str, rpn: bool) -> bool {
    let index = match calculator.add_expression(line) {
        Ok(index) => index,
        Err(e) => {
            warn!("rejected expression '{line}'");
            eprintln!("{e}");
            return false;
        },
    };

    if rpn && let Some(expression) = calculator.expression(index) {
        println!("{}", expression.to_postfix_text());
    }

    match calculator.calculate(index) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}
