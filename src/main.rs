use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use colored::Colorize;
use polycalc::{
    interpreter::{
        command::HELP,
        session::{Outcome, Session},
    },
    storage,
};
use tracing_subscriber::EnvFilter;

/// polycalc is an interactive calculator for univariate polynomials with real
/// coefficients.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs the commands of a script file instead of starting the
    /// interactive prompt.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Loads a saved polynomial table before running any command.
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Does not print the command list when the prompt starts.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();

    let mut session = match &args.load {
        Some(path) => match storage::load(path) {
            Ok(bindings) => Session::with_bindings(bindings),
            Err(e) => {
                eprintln!("{} {e}", "error:".red().bold());
                std::process::exit(1);
            },
        },
        None => Session::new(),
    };

    if let Some(path) = &args.file {
        let script = fs::read_to_string(path).unwrap_or_else(|_| {
                                                 eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                           path.display());
                                                 std::process::exit(1);
                                             });

        match session.run_script(&script) {
            Ok(lines) => lines.iter().for_each(|line| println!("{line}")),
            Err(e) => {
                eprintln!("{}", e.to_string().red());
                std::process::exit(1);
            },
        }
        return;
    }

    if !args.quiet {
        println!("{HELP}");
    }
    repl(&mut session);
}

/// Reads commands from stdin until `exit` or end of input. Errors are printed
/// and the loop goes on.
fn repl(session: &mut Session) {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print!("{} ", ">>".bold());
        io::stdout().flush().ok();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            },
            Ok(_) => {},
            Err(e) => {
                eprintln!("{} {e}", "error:".red().bold());
                break;
            },
        }

        match session.execute(&line) {
            Ok(Outcome::Continue(lines)) => lines.iter().for_each(|l| println!("{l}")),
            Ok(Outcome::Exit) => break,
            Err(e) => eprintln!("{} {e}", "error:".red().bold()),
        }
    }
}
