//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "rvr-tracegen")]
#[command(about = "Emit a C tracer header skeleton from a Rust tracer file")]
#[command(version)]
pub struct Cli {
    /// Rust tracer source (scanned for `TRACER_NAME: &str = "..."`)
    #[arg(value_name = "RUST_TRACER")]
    pub input: PathBuf,

    /// Output header path (overwritten if it exists)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Register width of the generated hooks
    #[arg(long, value_enum, default_value = "64")]
    pub xlen: XlenArg,

    /// Enable verbose output (sets RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output (only show errors)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub silent: bool,
}

impl Cli {
    /// Default log directive for the selected verbosity.
    pub const fn log_directive(&self) -> &'static str {
        if self.verbose {
            "rvr_tracegen=debug"
        } else if self.silent {
            "rvr_tracegen=error"
        } else {
            "rvr_tracegen=info"
        }
    }
}

/// Register width argument.
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum XlenArg {
    /// 32-bit registers (`uint32_t`)
    #[value(name = "32")]
    Rv32,
    /// 64-bit registers (`uint64_t`)
    #[default]
    #[value(name = "64")]
    Rv64,
}

impl From<XlenArg> for u8 {
    fn from(arg: XlenArg) -> Self {
        match arg {
            XlenArg::Rv32 => 32,
            XlenArg::Rv64 => 64,
        }
    }
}
