#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{anyhow, ensure, Result};
use structopt::StructOpt;

use snappy_cli::{path::DEFAULT_SUFFIX, run_batch, Config, Mode};

const USAGE: &str = "snappy [-dcvh] [-s suffix] file [file [...]]\n    cat file | snappy [-dcv]";

/// Compress or decompress files with the snappy framing format
#[derive(StructOpt, Debug)]
#[structopt(name = "snappy", usage = USAGE)]
struct Opts {
    /// Decompress
    #[structopt(short = "d", long)]
    decompress: bool,

    /// Write output on standard output
    #[structopt(short = "c", long)]
    stdout: bool,

    /// Show progress, then name, percentage reduction and speed of each file
    #[structopt(short = "v", long)]
    verbose: bool,

    /// Output filename suffix
    #[structopt(short = "s", long, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// Buffer size for copy, in KiB
    #[structopt(
        short = "b",
        long,
        default_value = "128",
        parse(try_from_str = parse_buffer_kib)
    )]
    buffer_size: usize,

    /// Files to process; standard input when none are given
    #[structopt(parse(from_os_str))]
    files: Vec<PathBuf>,
}

fn parse_buffer_kib(value: &str) -> Result<usize> {
    let kib: usize = value.parse()?;
    ensure!(kib > 0, "buffer size must be positive");
    kib.checked_mul(1024)
        .ok_or_else(|| anyhow!("buffer size too large"))
}

fn main() -> Result<()> {
    let opts = Opts::from_args();
    // warn by default, info adds the per-file summary
    let verbosity: usize = if opts.verbose { 2 } else { 1 };
    stderrlog::new()
        .verbosity(verbosity)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let config = Config {
        mode: if opts.decompress {
            Mode::Decompress
        } else {
            Mode::Compress
        },
        to_stdout: opts.stdout,
        verbose: opts.verbose,
        suffix: opts.suffix,
        buffer_size: opts.buffer_size,
    };

    let outcomes = run_batch(&config, &opts.files);
    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    log::debug!("{} of {} targets failed", failed, outcomes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = Opts::from_iter_safe(&["snappy"]).unwrap();
        assert!(!opts.decompress && !opts.stdout && !opts.verbose);
        assert_eq!(opts.suffix, ".snappy");
        assert_eq!(opts.buffer_size, 128 * 1024);
        assert!(opts.files.is_empty());
    }

    #[test]
    fn flags_and_files() {
        let opts =
            Opts::from_iter_safe(&["snappy", "-dcv", "-s", ".sz", "-b", "4", "a.sz", "b.sz"])
                .unwrap();
        assert!(opts.decompress && opts.stdout && opts.verbose);
        assert_eq!(opts.suffix, ".sz");
        assert_eq!(opts.buffer_size, 4096);
        assert_eq!(opts.files, [PathBuf::from("a.sz"), PathBuf::from("b.sz")]);
    }

    #[test]
    fn bad_buffer_size() {
        for value in ["0", "-1", "lots"] {
            assert!(Opts::from_iter_safe(&["snappy", "-b", value]).is_err(), "{}", value);
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_operand() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let bad = OsString::from_vec(b"bad\xff".to_vec());
        let args = [OsString::from("snappy"), OsString::from("good.txt"), bad.clone()];
        let opts = Opts::from_iter_safe(&args).unwrap();
        assert_eq!(opts.files, [PathBuf::from("good.txt"), PathBuf::from(bad)]);
    }
}
