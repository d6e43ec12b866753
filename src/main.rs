use std::{collections::HashMap, fs, process::ExitCode};

use clap::{Parser, ValueEnum};
use intexpr::{ErrorMode, ParseError, parse};
use tracing_subscriber::{EnvFilter, fmt};

/// intexpr evaluates integer expressions with Go-style operators.
/// Comparisons and logical operators yield 1 or 0.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells intexpr to read the expression from a file instead of the
    /// argument.
    #[arg(short, long)]
    file: bool,

    /// What to do when evaluation hits an undefined variable, a zero divisor
    /// or a negative shift.
    #[arg(short, long, value_enum, default_value_t = Mode::Error)]
    mode: Mode,

    /// Binds a variable. May be repeated; the last binding of a name wins.
    #[arg(short, long, value_name = "NAME=VALUE", value_parser = parse_definition)]
    define: Vec<(String, i64)>,

    /// Prints the fully parenthesized expression before its value.
    #[arg(short, long)]
    tree: bool,

    contents: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Stop at the first error and report it.
    Error,
    /// Treat every failing subexpression as 0 and keep going.
    Zero,
}

impl From<Mode> for ErrorMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Error => Self::ReturnError,
            Mode::Zero => Self::ReturnZero,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG controls the level; warnings only by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let expr = match parse(&source) {
        Ok(expr) => expr,
        Err(e) => {
            report_parse_error(&source, &e);
            return ExitCode::FAILURE;
        },
    };

    if args.tree {
        println!("{expr}");
    }

    let bindings: HashMap<String, i64> = args.define.into_iter().collect();
    match expr.eval(&bindings, args.mode.into()) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Parses a `NAME=VALUE` variable definition.
fn parse_definition(definition: &str) -> Result<(String, i64), String> {
    let (name, value) = definition.split_once('=')
                                  .ok_or_else(|| {
                                      format!("invalid definition '{definition}': expected NAME=VALUE")
                                  })?;
    let name = name.trim();

    let mut chars = name.chars();
    let valid = chars.next()
                     .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(format!("invalid variable name '{name}'"));
    }

    let value = value.trim()
                     .parse()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.to_string(), value))
}

/// Prints a parse error followed by the offending source line with a caret
/// under the column where parsing stopped.
fn report_parse_error(source: &str, error: &ParseError) {
    eprintln!("{error}");

    let offset = error.offset().unwrap_or_else(|| source.trim_end().len());
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[offset..].find('\n').map_or(source.len(), |i| offset + i);
    let column = source[line_start..offset].chars().count();

    eprintln!("  {}", source[line_start..line_end].trim_end());
    eprintln!("  {}^", " ".repeat(column));
}
