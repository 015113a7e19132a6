#![forbid(unsafe_code)]

use std::fmt;

pub mod batch;
pub mod counting;
pub mod error;
pub mod path;
pub mod pipeline;
mod progress;
pub mod stats;

pub use crate::batch::{run_batch, Config, Outcome};
pub use crate::counting::{ByteCounts, CountingStream};
pub use crate::error::Error;
pub use crate::stats::Stats;

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Compress => f.write_str("compress"),
            Mode::Decompress => f.write_str("decompress"),
        }
    }
}
