//! Streaming newline counter.
//!
//! Counts `\n` bytes only, so a trailing line without a terminator is not
//! counted (`"a\nb"` is 1). This intentionally differs from editors that
//! report the number of visible lines.

use std::io::{BufRead, BufReader, ErrorKind, Read};

/// Read chunk size used when none is configured.
pub const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

/// Count newline bytes in `reader` using the default chunk size.
///
/// # Errors
/// Propagates any read error other than `ErrorKind::Interrupted`.
pub fn count_lines<R: Read>(reader: R) -> std::io::Result<usize> {
    count_lines_with_capacity(reader, DEFAULT_BUFFER_SIZE)
}

/// Count newline bytes in `reader`, holding at most `capacity` bytes in memory.
///
/// A `capacity` of zero is treated as one byte.
///
/// # Errors
/// Propagates any read error other than `ErrorKind::Interrupted`.
pub fn count_lines_with_capacity<R: Read>(reader: R, capacity: usize) -> std::io::Result<usize> {
    let mut reader = BufReader::with_capacity(capacity.max(1), reader);
    let mut lines = 0;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        lines += bytecount::count(buf, b'\n');

        let len = buf.len();
        reader.consume(len);
    }

    Ok(lines)
}
