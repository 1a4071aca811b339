use clap::Parser;
use deriv_repl::{derive_line, parse_var, Options};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io::{self, BufRead, IsTerminal}, process::ExitCode};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Differentiates expressions typed at the prompt.
///
/// A line may start with `d<var>/d<with>` to choose the variable of differentiation for that
/// line, such as `dy/dt t ^ 2`. Enter `q` to quit.
#[derive(Parser, Debug)]
#[command(name = "deriv", version)]
struct Args {
    /// The default variable of differentiation.
    #[arg(long, default_value_t = 'x', value_parser = parse_var)]
    var: char,

    /// Only print the raw derivative, without simplifying it.
    #[arg(long)]
    raw: bool,

    /// Print the steps taken to simplify each derivative.
    #[arg(long, conflicts_with = "raw")]
    steps: bool,
}

/// Differentiates one line of input, printing the result or reporting the error.
///
/// Returns false if the line could not be differentiated.
fn run_line(input: &str, var: char, options: &Options) -> bool {
    match derive_line(input, var) {
        Ok(derivation) => {
            println!("{}", derivation.render(options));
            true
        },
        Err(err) => {
            if let Err(io_err) = err.report_to_stderr("input", input) {
                eprintln!("{}: {}", err, io_err);
            }
            false
        },
    }
}

/// Returns true if the input asks to quit.
fn is_quit(input: &str) -> bool {
    matches!(input.trim(), "q" | "Q")
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let options = Options { raw: args.raw, steps: args.steps };

    if !io::stdin().is_terminal() {
        // differentiate every line from stdin
        let mut ok = true;
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("{}", err);
                    return ExitCode::FAILURE;
                },
            };
            if line.trim().is_empty() {
                continue;
            }
            if is_quit(&line) {
                break;
            }
            ok &= run_line(&line, args.var, &options);
        }

        return if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    // run the repl / interactive mode
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };

    /// Reads and differentiates one line. Returns false when the user asks to quit.
    fn process_line(
        rl: &mut DefaultEditor,
        var: char,
        options: &Options,
    ) -> Result<bool, ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(true);
        }
        if is_quit(&input) {
            return Ok(false);
        }

        rl.add_history_entry(&input)?;

        run_line(&input, var, options);
        Ok(true)
    }

    loop {
        match process_line(&mut rl, args.var, &options) {
            Ok(true) => (),
            Ok(false) => break,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            },
        }
    }

    info!("exiting");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn quit() {
        assert!(is_quit("q"));
        assert!(is_quit(" Q "));
        assert!(!is_quit("quit"));
    }

    #[test]
    fn default_args() {
        let args = Args::parse_from(["deriv"]);
        assert_eq!(args.var, 'x');
        assert!(!args.raw && !args.steps);

        let args = Args::parse_from(["deriv", "--var", "t", "--steps"]);
        assert_eq!(args.var, 't');
        assert!(args.steps);

        assert!(Args::try_parse_from(["deriv", "--raw", "--steps"]).is_err());
    }
}
