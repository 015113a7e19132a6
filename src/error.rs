#![forbid(unsafe_code)]

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::counting::ByteCounts;

/// Failure of a single target. None of these stop a batch.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: io::Error,
    },
    #[error("cannot create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: io::Error,
    },
    #[error("file: {} does not have suffix {suffix}", .path.display())]
    SuffixMismatch { path: PathBuf, suffix: String },
    #[error(
        "stream failed after {} bytes in, {} bytes out: {source}",
        .counts.read,
        .counts.written
    )]
    Transform {
        path: PathBuf,
        counts: ByteCounts,
        source: io::Error,
    },
}
