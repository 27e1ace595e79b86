use std::path::PathBuf;

use thiserror::Error;

/// Header generation errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read tracer source {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write header {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported XLEN {0} (expected 32 or 64)")]
    UnsupportedXlen(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
