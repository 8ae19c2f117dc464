use std::{fs, io};

use clap::{ArgAction, Parser};
use log::{LevelFilter, error};
use stepcalc::repl::{ReplConfig, handle_line, run_interactive, run_script};

/// stepcalc evaluates arithmetic expressions and shows every step of the
/// evaluation. Without arguments it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells stepcalc to read expressions from a file, one per line, instead
    /// of taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode prints only the result of each expression.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Log more detail to stderr. Repeat for trace output.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// An expression, or a file path with `--file`.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    let config = ReplConfig { pipe_mode: args.pipe_mode };
    let mut stdout = io::stdout().lock();

    let outcome = match args.contents {
        None => run_interactive(io::stdin().lock(), &mut stdout, config),
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|e| {
                error!("reading {path}: {e}");
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            run_script(&script, &mut stdout, config)
        },
        Some(expression) => handle_line(&expression, &mut stdout, config).map(|_| ()),
    };

    if let Err(e) = outcome {
        error!("output failed: {e}");
    }
}
