#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, error, info};

use crate::{
    error::Error,
    path::{self, Destination, DEFAULT_SUFFIX, STDIO_NAME},
    pipeline::{self, DEFAULT_BUFFER_SIZE},
    progress::Progress,
    stats::Stats,
    Mode,
};

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug)]
pub struct Config {
    pub mode: Mode,
    /// Write every result to stdout instead of a derived file.
    pub to_stdout: bool,
    /// Show progress and log a summary line per target.
    pub verbose: bool,
    pub suffix: String,
    /// Copy buffer size in bytes.
    pub buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Compress,
            to_stdout: false,
            verbose: false,
            suffix: DEFAULT_SUFFIX.to_owned(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

#[derive(Debug)]
pub struct Outcome {
    pub name: PathBuf,
    pub result: Result<Stats, Error>,
}

////////////////////////////////////////////////////////////////////////////////

/// Processes `names` one after another, logging each failure and moving on.
/// No names means a single pass from stdin to stdout.
pub fn run_batch<P: AsRef<Path>>(config: &Config, names: &[P]) -> Vec<Outcome> {
    let stdio = [Path::new(STDIO_NAME)];
    let names: Vec<&Path> = if names.is_empty() {
        stdio.to_vec()
    } else {
        names.iter().map(|name| name.as_ref()).collect()
    };

    let mut outcomes = Vec::with_capacity(names.len());
    for name in names {
        let result = process(config, name);
        match &result {
            Ok(stats) => {
                if config.verbose {
                    info!("{}\t{}", name.display(), stats);
                }
            }
            Err(err) => error!("{} {} failed: {}", name.display(), config.mode, err),
        }
        outcomes.push(Outcome {
            name: name.to_owned(),
            result,
        });
    }
    outcomes
}

/// Runs a single target. Files opened here are closed before returning, on
/// every path.
pub fn process(config: &Config, name: &Path) -> Result<Stats, Error> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    process_with(config, name, stdin.lock(), stdout.lock())
}

/// [`process`] with the standard streams supplied by the caller.
fn process_with<I: Read, O: Write>(
    config: &Config,
    name: &Path,
    stdin: I,
    stdout: O,
) -> Result<Stats, Error> {
    if name == Path::new(STDIO_NAME) {
        return transform(config, name, stdin, stdout, None);
    }

    let open_error = |source| Error::Open {
        path: name.into(),
        source,
    };
    let input = File::open(name).map_err(open_error)?;
    let len = if config.verbose {
        Some(input.metadata().map_err(open_error)?.len())
    } else {
        None
    };

    match path::resolve(name, config.mode, &config.suffix, config.to_stdout)? {
        Destination::Stdout => transform(config, name, input, stdout, len),
        Destination::File(path) => {
            let output = File::create(&path).map_err(|source| Error::Create {
                path: path.clone(),
                source,
            })?;
            debug!("{} -> {}", name.display(), path.display());
            transform(config, name, input, output, len)
        }
    }
}

fn transform<R: Read, W: Write>(
    config: &Config,
    name: &Path,
    source: R,
    sink: W,
    len: Option<u64>,
) -> Result<Stats, Error> {
    let progress = if config.verbose {
        Some(Progress::new(len))
    } else {
        None
    };

    let start = Instant::now();
    let result = match &progress {
        Some(progress) => pipeline::run(
            progress.wrap(source),
            sink,
            config.mode,
            config.buffer_size,
        ),
        None => pipeline::run(source, sink, config.mode, config.buffer_size),
    };
    let elapsed = start.elapsed();

    match result {
        Ok(counts) => {
            if let Some(progress) = &progress {
                progress.finish();
            }
            debug!(
                "{}: {} bytes in, {} bytes out, {:?}",
                name.display(),
                counts.read,
                counts.written,
                elapsed
            );
            Ok(Stats::compute(config.mode, counts, elapsed))
        }
        Err(err) => {
            if let Some(progress) = &progress {
                progress.abandon();
            }
            Err(Error::Transform {
                path: name.to_owned(),
                counts: err.counts,
                source: err.source,
            })
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
