use clap::Parser;
use deriv_repl::{derive_line, parse_var, Stats};
use std::{fs, io, path::PathBuf, process::ExitCode};
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Measures how much the simplifier shortens the derivatives of a file of expressions.
///
/// The file holds one expression per line. Blank lines and lines starting with `#` are skipped.
#[derive(Parser, Debug)]
#[command(name = "deriv-stats", version)]
struct Args {
    /// The file of expressions to differentiate.
    path: PathBuf,

    /// The variable of differentiation.
    #[arg(long, default_value_t = 'x', value_parser = parse_var)]
    var: char,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let source = match fs::read_to_string(&args.path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{}: {}", args.path.display(), err);
            return ExitCode::FAILURE;
        },
    };

    let src_id = args.path.display().to_string();
    let mut stats = Stats::new();
    for (number, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match derive_line(line, args.var) {
            Ok(derivation) => {
                debug!(line = number + 1, raw = %derivation.raw, "recorded derivative");
                stats.record(&derivation.raw, &derivation.simplified);
            },
            Err(err) => {
                warn!(line = number + 1, error = %err, "skipping expression");
                if let Err(io_err) = err.report_to_stderr(&src_id, line) {
                    eprintln!("{}: {}", err, io_err);
                }
                stats.record_failure();
            },
        }
    }

    println!("{}", stats);
    ExitCode::SUCCESS
}
