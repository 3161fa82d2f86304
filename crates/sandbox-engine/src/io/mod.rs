//! Line-oriented text input.
//!
//! `read_line` pulls one `\n`-delimited line from any `std::io::Read` into a
//! caller-owned, fixed-capacity [`LineBuffer`]. Lines that would not fit the
//! buffer (terminator included) are reported as [`LineError::TooLong`] instead
//! of being written past the end.
//!
//! [`LineReader`] wraps the usual "read until end-of-stream" loop.

mod buffer;
mod error;
mod line_reader;

pub use buffer::LineBuffer;
pub use error::{LineError, ReadStatus};
pub use line_reader::{read_line, LineReader};
