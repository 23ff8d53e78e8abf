//! Boolgen - Command Line Interface
//!
//! Reads a truth table from a file or standard input and prints one
//! `<name> = <expression>` line per output variable.

use boolgen::{evaluate_table, BoolgenConfig, TruthTable};
use clap::{ArgAction, Parser};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "boolgen")]
#[command(about = "Derive minimized Boolean expressions from truth tables", long_about = None)]
#[command(version)]
struct Args {
    /// Truth table file (reads standard input if not specified)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Evaluate output columns in parallel
    #[arg(short = 'j', long = "parallel")]
    parallel: bool,

    /// Check every expression against the table before printing it
    #[arg(long = "verify")]
    verify: bool,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries expressions
    if let Err(e) = TermLogger::init(
        log_level(args.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    let table = match &args.input {
        Some(path) => TruthTable::from_file(path).map_err(|e| {
            eprintln!("Error reading truth table '{}': {}", path.display(), e);
        }),
        None => TruthTable::from_reader(io::stdin().lock()).map_err(|e| {
            eprintln!("Error reading truth table from stdin: {}", e);
        }),
    };
    let table = match table {
        Ok(table) => table,
        Err(()) => process::exit(1),
    };

    let config = BoolgenConfig {
        parallel: args.parallel,
        verify: args.verify,
    };

    match evaluate_table(&table, &config) {
        Ok(outputs) => {
            for output in outputs {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
