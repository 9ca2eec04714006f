//! Command-line front end: fixture runs and one-off comparisons.

use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use env_logger::Builder;
use log::LevelFilter;

use editdistance::fixture::run_fixture;
use editdistance::{
    damerau_levenshtein_matrix, damerau_levenshtein_traced, levenshtein_traced, CellObserver,
    DamerauBoundary, LogObserver, NoopObserver, Result,
};

/// Levenshtein and Damerau-Levenshtein edit distances
#[derive(Parser, Debug)]
#[command(name = "editdistance")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct Args {
    /// Verbosity level (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check both algorithms against a comma-delimited fixture file
    Run {
        /// Lines of `<a>,<b>,<levenshtein>,<damerau_levenshtein>`; `#` starts a comment
        fixture: PathBuf,
    },

    /// Print both distances for a single pair
    Compare {
        a: String,
        b: String,

        /// Seeding of the Damerau-Levenshtein table's first row and column
        #[arg(long, value_enum, default_value = "zero")]
        boundary: Boundary,

        /// Compare Unicode scalar values instead of bytes
        #[arg(long)]
        chars: bool,

        /// Also print the Damerau-Levenshtein table
        #[arg(long)]
        matrix: bool,

        /// Log every computed cell at trace level
        #[arg(long)]
        trace: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Boundary {
    Zero,
    Ramp,
}

impl From<Boundary> for DamerauBoundary {
    fn from(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Zero => DamerauBoundary::Zero,
            Boundary::Ramp => DamerauBoundary::Ramp,
        }
    }
}

fn main() {
    let args = Args::parse();

    let log_level = if args.quiet {
        LevelFilter::Error
    } else {
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };

    let mut builder = Builder::new();
    builder
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    if matches!(args.command, Command::Compare { trace: true, .. }) {
        builder.filter_module("editdistance::trace", LevelFilter::Trace);
    }
    builder.init();

    if let Err(e) = execute(args.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn execute(command: Command) -> Result<()> {
    match command {
        Command::Run { fixture } => {
            let report = run_fixture(&fixture)?;
            print!("{report}");
            Ok(())
        }
        Command::Compare {
            a,
            b,
            boundary,
            chars,
            matrix,
            trace,
        } => {
            let options = CompareOptions {
                boundary: boundary.into(),
                matrix,
                trace,
            };
            if chars {
                let a_chars: Vec<char> = a.chars().collect();
                let b_chars: Vec<char> = b.chars().collect();
                compare(&a, &b, &a_chars, &b_chars, options)
            } else {
                compare(&a, &b, a.as_bytes(), b.as_bytes(), options)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CompareOptions {
    boundary: DamerauBoundary,
    matrix: bool,
    trace: bool,
}

fn compare<T: PartialEq>(
    a_label: &str,
    b_label: &str,
    a: &[T],
    b: &[T],
    options: CompareOptions,
) -> Result<()> {
    let mut log_observer = LogObserver;
    let mut noop_observer = NoopObserver;
    let observer: &mut dyn CellObserver = if options.trace {
        &mut log_observer
    } else {
        &mut noop_observer
    };

    let levenshtein = levenshtein_traced(a, b, &mut *observer)?;
    let damerau = damerau_levenshtein_traced(a, b, options.boundary, &mut *observer)?;
    println!("levenshtein({a_label},{b_label}) = {levenshtein}");
    println!("damerau_levenshtein({a_label},{b_label}) = {damerau}");

    if options.matrix {
        print!("{}", damerau_levenshtein_matrix(a, b, options.boundary)?);
    }
    Ok(())
}
