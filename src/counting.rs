#![forbid(unsafe_code)]

use std::io::{self, Read, Write};

////////////////////////////////////////////////////////////////////////////////

/// Snapshot of the two counters of a [`CountingStream`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByteCounts {
    pub read: u64,
    pub written: u64,
}

////////////////////////////////////////////////////////////////////////////////

/// Passes reads and writes through to the wrapped streams unchanged, tallying
/// how many bytes went each way.
///
/// Only bytes actually reported by the inner stream are counted. A failed call
/// leaves the counters untouched, so after an error they still describe what
/// was transferred up to that point.
pub struct CountingStream<R, W> {
    reader: R,
    writer: W,
    counts: ByteCounts,
}

impl<R, W> CountingStream<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            counts: ByteCounts::default(),
        }
    }

    pub fn count_read(&self) -> u64 {
        self.counts.read
    }

    pub fn count_written(&self) -> u64 {
        self.counts.written
    }

    pub fn counts(&self) -> ByteCounts {
        self.counts
    }

    /// Borrows the read and write sides separately. Both halves feed the
    /// counters of this instance, so one can be handed to a codec while the
    /// other is driven by a copy loop.
    pub fn split(&mut self) -> (CountingReader<'_, R>, CountingWriter<'_, W>) {
        let ByteCounts { read, written } = &mut self.counts;
        (
            CountingReader {
                inner: &mut self.reader,
                count: read,
            },
            CountingWriter {
                inner: &mut self.writer,
                count: written,
            },
        )
    }

    pub fn into_inners(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: Read, W> Read for CountingStream<R, W> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.split().0.read(buf)
    }
}

impl<R, W: Write> Write for CountingStream<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.split().1.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

////////////////////////////////////////////////////////////////////////////////

pub struct CountingReader<'a, R> {
    inner: &'a mut R,
    count: &'a mut u64,
}

impl<R: Read> Read for CountingReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let size = self.inner.read(buf)?;
        *self.count += size as u64;
        Ok(size)
    }
}

pub struct CountingWriter<'a, W> {
    inner: &'a mut W,
    count: &'a mut u64,
}

impl<W: Write> Write for CountingWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let size = self.inner.write(buf)?;
        *self.count += size as u64;
        Ok(size)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

////////////////////////////////////////////////////////////////////////////////
