//! Tracer header skeleton generator.
//!
//! Reads a Rust-side tracer, resolves its `TRACER_NAME`, and emits a C header
//! with no-op stubs for every tracer hook at the requested register width.
//!
//! # Example
//!
//! ```ignore
//! use rvr_tracegen::generate;
//!
//! let generated = generate("tracers/rust/pc_count.rs", "pc_count.h", 64)?;
//! assert_eq!(generated.name, "pc_count");
//! ```

mod error;
mod header;
pub mod hooks;
mod name;
mod xlen;

pub use error::{Error, Result};
pub use header::{gen_tracer_header, render_header};
pub use name::{DEFAULT_TRACER_NAME, extract_tracer_name, fallback_name, resolve_tracer_name};
pub use xlen::{Rv32, Rv64, Xlen, reg_type};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

/// Result of a successful [`generate`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedHeader {
    /// Resolved tracer name.
    pub name: String,
    /// Path the header was written to.
    pub path: PathBuf,
}

/// Generate a tracer header from `input` and write it to `output`.
///
/// Any existing file at `output` is overwritten.
///
/// # Errors
///
/// Returns an error if `input` cannot be read, `xlen` is not 32 or 64, or
/// `output` cannot be written.
pub fn generate(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    xlen: u8,
) -> Result<GeneratedHeader> {
    let input = input.as_ref();
    let output = output.as_ref();

    let content = fs::read_to_string(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let name = resolve_tracer_name(input, &content);
    let header = gen_tracer_header(&name, xlen)?;

    fs::write(output, header).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!(name = %name, xlen, output = %output.display(), "wrote tracer header");

    Ok(GeneratedHeader {
        name,
        path: output.to_path_buf(),
    })
}
