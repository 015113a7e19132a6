#![forbid(unsafe_code)]

use std::io::{self, ErrorKind, Read, Write};

use snap::{read::FrameDecoder, write::FrameEncoder};
use thiserror::Error;

use crate::{
    counting::{ByteCounts, CountingStream},
    Mode,
};

pub const DEFAULT_BUFFER_SIZE: usize = 128 * 1024;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("{source}")]
pub struct TransferError {
    pub counts: ByteCounts,
    pub source: io::Error,
}

////////////////////////////////////////////////////////////////////////////////

/// Moves everything from `source` through the snappy frame codec into `sink`.
///
/// One [`CountingStream`] sits around both ends, so on success `read` is the
/// number of bytes taken from `source` and `written` the number accepted by
/// `sink`. On failure nothing is rolled back and the returned counts cover
/// what moved before the fault.
pub fn run<R: Read, W: Write>(
    source: R,
    sink: W,
    mode: Mode,
    buffer_size: usize,
) -> Result<ByteCounts, TransferError> {
    let mut stream = CountingStream::new(source, sink);
    let mut buf = vec![0u8; buffer_size];
    match transfer(&mut stream, mode, &mut buf) {
        Ok(()) => Ok(stream.counts()),
        Err(source) => Err(TransferError {
            counts: stream.counts(),
            source,
        }),
    }
}

fn transfer<R: Read, W: Write>(
    stream: &mut CountingStream<R, W>,
    mode: Mode,
    buf: &mut [u8],
) -> io::Result<()> {
    let (mut reader, mut writer) = stream.split();
    match mode {
        Mode::Compress => {
            let mut encoder = FrameEncoder::new(&mut writer);
            copy_buffer(&mut reader, &mut encoder, buf)?;
            encoder.flush()?;
        }
        Mode::Decompress => {
            let mut decoder = FrameDecoder::new(&mut reader);
            copy_buffer(&mut decoder, &mut writer, buf)?;
        }
    }
    writer.flush()
}

/// Like [`io::copy`], but with a caller-provided buffer.
pub fn copy_buffer<R, W>(reader: &mut R, writer: &mut W, buf: &mut [u8]) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    if buf.is_empty() {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            "copy buffer must not be empty",
        ));
    }
    let mut total = 0u64;
    loop {
        let size = match reader.read(buf) {
            Ok(0) => return Ok(total),
            Ok(size) => size,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        writer.write_all(&buf[..size])?;
        total += size as u64;
    }
}

////////////////////////////////////////////////////////////////////////////////
