//! rvr-tracegen CLI - C tracer header skeleton generator

mod cli;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, EXIT_FAILURE, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(cli.log_directive().parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match rvr_tracegen::generate(&cli.input, &cli.output, cli.xlen.into()) {
        Ok(_) => EXIT_SUCCESS,
        Err(err) => {
            error!(error = %err, "tracer header generation failed");
            EXIT_FAILURE
        }
    };

    std::process::exit(exit_code);
}
