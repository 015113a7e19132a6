#![forbid(unsafe_code)]

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::{error::Error, Mode};

/// Target name standing for standard input and standard output.
pub const STDIO_NAME: &str = "-";

pub const DEFAULT_SUFFIX: &str = ".snappy";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

/// Picks where the output of `input` goes. Compressing appends `suffix`,
/// decompressing strips it and refuses names that do not carry it.
///
/// Names are handled as raw OS strings, so they need not be valid UTF-8.
pub fn resolve(
    input: &Path,
    mode: Mode,
    suffix: &str,
    to_stdout: bool,
) -> Result<Destination, Error> {
    if to_stdout {
        return Ok(Destination::Stdout);
    }
    match mode {
        Mode::Compress => {
            let mut name = OsString::from(input.as_os_str());
            name.push(suffix);
            Ok(Destination::File(name.into()))
        }
        Mode::Decompress => match strip_suffix(input.as_os_str(), suffix) {
            Some(stem) if !stem.is_empty() => Ok(Destination::File(stem.into())),
            _ => Err(Error::SuffixMismatch {
                path: input.to_owned(),
                suffix: suffix.to_owned(),
            }),
        },
    }
}

#[cfg(unix)]
fn strip_suffix<'a>(name: &'a OsStr, suffix: &str) -> Option<&'a OsStr> {
    use std::os::unix::ffi::OsStrExt;

    name.as_bytes()
        .strip_suffix(suffix.as_bytes())
        .map(OsStr::from_bytes)
}

#[cfg(not(unix))]
fn strip_suffix<'a>(name: &'a OsStr, suffix: &str) -> Option<&'a OsStr> {
    name.to_str()?.strip_suffix(suffix).map(OsStr::new)
}

////////////////////////////////////////////////////////////////////////////////
