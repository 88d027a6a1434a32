use std::fs;

use clap::Parser;
use shunt::{Error, evaluate_rpn, interpreter::registry::Registry, parse_to_rpn};
use tracing_subscriber::{EnvFilter, fmt};

/// shunt evaluates arithmetic expressions through a shunting-yard RPN
/// pipeline.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shunt to read expressions from a file, one per line, instead of
    /// evaluating the argument itself. Blank lines and lines starting with
    /// `#` are skipped.
    #[arg(short, long)]
    file: bool,

    /// Prints the numbered RPN token listing before each result.
    #[arg(short, long)]
    rpn: bool,

    contents: String,
}

/// Installs the stderr log subscriber.
///
/// The filter comes from `SHUNT_LOG`, then `RUST_LOG`, and defaults to `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_env("SHUNT_LOG").or_else(|_| EnvFilter::try_from_default_env())
                                                     .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();
}

/// Runs one expression through every stage, optionally listing its RPN.
fn run(expression: &str, show_rpn: bool) -> Result<f64, Error> {
    let rpn = parse_to_rpn(expression)?;

    if show_rpn {
        for (index, token) in rpn.iter().enumerate() {
            println!("{} {token}", index + 1);
        }
    }

    evaluate_rpn(&rpn, Registry::shared())
}

fn main() {
    let args = Args::parse();
    init_logging();

    let expressions: Vec<String> = if args.file {
        let contents = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                                                             eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                                       &args.contents);
                                                             std::process::exit(1);
                                                         });
        contents.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string)
                .collect()
    } else {
        vec![args.contents]
    };

    let mut failed = false;
    for expression in &expressions {
        if args.file {
            println!("{expression}");
        }
        match run(expression, args.rpn) {
            Ok(value) => println!("Result: {value}"),
            Err(e) => {
                tracing::debug!(%expression, error = %e, "expression failed");
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed {
        std::process::exit(1);
    }
}
