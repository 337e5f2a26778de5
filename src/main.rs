use std::{fs, process::ExitCode};

use clap::Parser;
use log::info;
use shunt::{Environment, Value, evaluate, interpreter::lexer::is_identifier};

/// shunt evaluates arithmetic expressions with variables, functions and
/// vectors.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shunt to read expressions from a file, one per line, instead of
    /// evaluating the argument itself.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable, e.g. `--var x=2` or `--var v=[1,2,3]`. The value may
    /// itself be an expression using builtins.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, Value)>,

    /// Leaves out the builtin functions such as `sqrt` and `atan2`.
    #[arg(long)]
    no_builtins: bool,

    /// Threshold below which `=` treats two numbers as equal.
    #[arg(short, long, default_value_t = shunt::interpreter::environment::DEFAULT_TOLERANCE)]
    tolerance: f64,

    contents: String,
}

/// Parses `NAME=VALUE`, evaluating `VALUE` with the builtins available.
fn parse_binding(s: &str) -> Result<(String, Value), String> {
    let (name, source) = s.split_once('=')
                          .ok_or_else(|| format!("expected NAME=VALUE, found '{s}'"))?;

    let name = name.trim();
    if !is_identifier(name) {
        return Err(format!("'{name}' is not a valid variable name"));
    }

    let value = evaluate(source, &Environment::new().with_builtins()).map_err(|e| e.to_string())?;

    Ok((name.to_string(), value))
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let mut env = Environment::new().with_tolerance(args.tolerance);
    if !args.no_builtins {
        env = env.with_builtins();
    }
    for (name, value) in args.vars {
        env = env.with_variable(name, value);
    }

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let lines: Vec<&str> = if args.file {
        script.lines().filter(|line| !line.trim().is_empty()).collect()
    } else {
        vec![script.as_str()]
    };

    let mut failures = 0;
    for line in &lines {
        match evaluate(line, &env) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                failures += 1;
                eprintln!("{}", e.render(line));
            },
        }
    }

    if failures > 0 {
        info!("{failures} of {} expression(s) failed", lines.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
