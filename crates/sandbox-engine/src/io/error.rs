use std::fmt;

/// Outcome of a successful [`read_line`](super::read_line) call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ReadStatus {
    /// A full line was read; the newline was consumed and dropped.
    Line,
    /// The stream ended. The buffer holds any partial line (possibly empty).
    EndOfStream,
}

/// Failure while reading a line.
#[derive(Debug)]
pub enum LineError {
    /// The line does not fit the buffer (terminator included).
    ///
    /// The buffer keeps the `capacity - 1` bytes that fit.
    TooLong { capacity: usize },
    /// The underlying stream failed.
    Io(std::io::Error),
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::TooLong { capacity } => {
                write!(f, "line exceeds buffer capacity of {capacity} bytes")
            }
            LineError::Io(e) => write!(f, "line read failed: {e}"),
        }
    }
}

impl std::error::Error for LineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LineError::Io(e) => Some(e),
            LineError::TooLong { .. } => None,
        }
    }
}

impl From<std::io::Error> for LineError {
    fn from(e: std::io::Error) -> Self {
        LineError::Io(e)
    }
}
