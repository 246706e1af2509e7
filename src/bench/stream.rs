//! Stream helpers used between benchmark iterations.
//!
//! The harness treats its streams as the source of truth: every iteration
//! probes the length, reads the whole stream into a fresh buffer, and rewinds
//! afterwards so the next iteration sees identical bytes.

use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::buffer::{BufferAllocator, OwnedBuffer};
use crate::error::BenchError;

/// Total length of `stream`, leaving it positioned at the start.
pub fn stream_len<S: Seek + ?Sized>(stream: &mut S) -> io::Result<u64> {
    let len = stream.seek(SeekFrom::End(0))?;
    stream.seek(SeekFrom::Start(0))?;
    Ok(len)
}

/// Reposition `stream` at offset 0.
pub fn rewind<S: Seek + ?Sized>(stream: &mut S) -> io::Result<()> {
    stream.seek(SeekFrom::Start(0)).map(|_| ())
}

/// Read the whole of `stream` into a buffer from `allocator`.
///
/// The stream is left at its end; callers rewind it explicitly.
///
/// # Errors
/// [`BenchError::Configuration`] for an empty stream, allocation errors from
/// `allocator`, and [`BenchError::Io`] when the stream is shorter than probed.
pub fn read_whole<R, A>(stream: &mut R, allocator: &mut A) -> Result<OwnedBuffer, BenchError>
where
    R: Read + Seek + ?Sized,
    A: BufferAllocator + ?Sized,
{
    let len = stream_len(stream)?;
    if len == 0 {
        return Err(BenchError::Configuration("no data to bench".into()));
    }
    let len = usize::try_from(len)
        .map_err(|_| BenchError::Configuration(format!("stream of {} bytes does not fit in memory", len)))?;
    let mut buf = allocator.allocate(len)?;
    stream.read_exact(buf.capacity_mut())?;
    buf.fill_to_capacity();
    Ok(buf)
}

/// Write all of `data` to `stream` and flush, verifying the byte count.
///
/// Short writes are retried until the stream stops accepting bytes; a stream
/// that accepts nothing, or fails mid-way, is a [`BenchError::WriteVerification`]
/// carrying how far it got.
pub fn write_verified<W: Write + ?Sized>(stream: &mut W, data: &[u8]) -> Result<usize, BenchError> {
    let mut written = 0usize;
    while written < data.len() {
        match stream.write(&data[written..]) {
            Ok(0) => break,
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
    }
    if written != data.len() || stream.flush().is_err() {
        return Err(BenchError::WriteVerification { expected: data.len(), written });
    }
    Ok(written)
}
