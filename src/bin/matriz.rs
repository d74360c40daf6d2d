//! matriz: interactive console calculator for real-valued matrices.
//!
//! Presents the six-operation menu over stdin/stdout; all arithmetic lives
//! in the `matriz` library.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use matriz::{console::Session, RenderOptions};

#[derive(Parser)]
#[command(name = "matriz")]
#[command(about = "Interactive console calculator for real-valued matrices")]
#[command(version)]
struct Cli {
    /// Decimal digits in rendered matrices
    #[arg(short, long, default_value = "2")]
    precision: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = RenderOptions {
        precision: cli.precision,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::with_options(stdin.lock(), stdout.lock(), options);
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
