#![forbid(unsafe_code)]

use std::fmt;
use std::time::Duration;

use crate::{counting::ByteCounts, Mode};

const MIB: f64 = 1024.0 * 1024.0;

////////////////////////////////////////////////////////////////////////////////

/// Size reduction and speed of one run.
///
/// `ratio` is the fraction of the uncompressed size that the compressed form
/// saves, in either direction. `throughput_mbps` is MiB of uncompressed data
/// per second. A field that cannot be measured (empty input, zero elapsed
/// time) is `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stats {
    pub ratio: f64,
    pub throughput_mbps: f64,
}

impl Stats {
    pub fn compute(mode: Mode, counts: ByteCounts, elapsed: Duration) -> Self {
        let (compressed, plain) = match mode {
            Mode::Compress => (counts.written, counts.read),
            Mode::Decompress => (counts.read, counts.written),
        };

        let ratio = if plain == 0 {
            0.0
        } else {
            1.0 - compressed as f64 / plain as f64
        };

        let seconds = elapsed.as_secs_f64();
        let throughput_mbps = if seconds > 0.0 {
            plain as f64 / MIB / seconds
        } else {
            0.0
        };

        Self {
            ratio,
            throughput_mbps,
        }
    }

    pub fn percentage(&self) -> f64 {
        self.ratio * 100.0
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%\t{:.2}M/s", self.percentage(), self.throughput_mbps)
    }
}

////////////////////////////////////////////////////////////////////////////////
