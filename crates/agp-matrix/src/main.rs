//! agp-matrix CLI entry point.

// The CLI binary owns stdout/stderr output.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use agp_matrix::cli::{self, EXIT_OK};
use agp_matrix::commands;
use tracing_subscriber::EnvFilter;

fn main() {
    // NOTE: eprintln! in the panic hook is intentional; tracing may be
    // unusable while unwinding.
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {panic_info}");
        eprintln!("Run with RUST_LOG=debug for more information.");
    }));

    init_tracing();

    let cli = cli::parse();
    match commands::run(cli) {
        Ok(()) => std::process::exit(EXIT_OK),
        Err(error) => {
            let code = cli::exit_code_for(&error);
            eprintln!("{:?}", miette::Report::new(error));
            std::process::exit(code);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
