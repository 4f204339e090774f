mod cli;

use crate::cli::Cli;

fn main() {
    // Logging starts inside the dispatcher, once the base path is known.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("dltidy error: {:#}", err);
        std::process::exit(1);
    }
}
