use std::io::{ErrorKind, Read};

use super::{LineBuffer, LineError, ReadStatus};

/// Reads one `\n`-delimited line from `stream` into `buffer`.
///
/// The newline is consumed but not stored. The buffer is zero-terminated at
/// its new length in every outcome, including errors.
///
/// Bytes are pulled one at a time; wrap files in a `BufReader`.
pub fn read_line<R: Read + ?Sized>(
    stream: &mut R,
    buffer: &mut LineBuffer,
) -> Result<ReadStatus, LineError> {
    buffer.clear();

    let mut byte = [0u8; 1];
    loop {
        let n = match stream.read(&mut byte) {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                buffer.terminate();
                return Err(LineError::Io(e));
            }
        };

        if n == 0 {
            buffer.terminate();
            return Ok(ReadStatus::EndOfStream);
        }

        if byte[0] == b'\n' {
            buffer.terminate();
            return Ok(ReadStatus::Line);
        }

        if !buffer.try_push(byte[0]) {
            buffer.terminate();
            return Err(LineError::TooLong {
                capacity: buffer.capacity(),
            });
        }
    }
}

/// Drives [`read_line`] over a stream with an owned buffer.
///
/// After a [`LineError::TooLong`], the next call first discards the rest of
/// the overlong line, so reading resumes at the following line.
pub struct LineReader<R> {
    stream: R,
    buffer: LineBuffer,
    done: bool,
    resync: bool,
}

impl<R: Read> LineReader<R> {
    pub fn new(stream: R, capacity: usize) -> Self {
        Self {
            stream,
            buffer: LineBuffer::with_capacity(capacity),
            done: false,
            resync: false,
        }
    }

    /// Returns the next line, or `None` once the stream is exhausted.
    ///
    /// A final line without a trailing newline is still returned. The empty
    /// segment after a trailing newline is not.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>, LineError> {
        if self.done {
            return Ok(None);
        }

        if self.resync {
            self.resync = false;
            if !skip_line(&mut self.stream)? {
                self.done = true;
                self.buffer.clear();
                return Ok(None);
            }
        }

        let status = match read_line(&mut self.stream, &mut self.buffer) {
            Ok(status) => status,
            Err(e) => {
                if matches!(e, LineError::TooLong { .. }) {
                    self.resync = true;
                }
                return Err(e);
            }
        };

        match status {
            ReadStatus::Line => Ok(Some(self.buffer.as_bytes())),
            ReadStatus::EndOfStream => {
                self.done = true;
                if self.buffer.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(self.buffer.as_bytes()))
                }
            }
        }
    }

    /// Calls `f` for every line until the stream ends.
    ///
    /// Returns the number of lines delivered.
    pub fn for_each_line<F>(&mut self, mut f: F) -> Result<usize, LineError>
    where
        F: FnMut(&[u8]),
    {
        let mut count = 0;
        while let Some(line) = self.next_line()? {
            f(line);
            count += 1;
        }
        Ok(count)
    }
}

/// Consumes bytes through the next `\n`. Returns `false` if the stream ended first.
fn skip_line<R: Read + ?Sized>(stream: &mut R) -> Result<bool, LineError> {
    let mut byte = [0u8; 1];
    loop {
        match stream.read(&mut byte) {
            Ok(0) => return Ok(false),
            Ok(_) if byte[0] == b'\n' => return Ok(true),
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(LineError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    fn read_all(input: &[u8]) -> Vec<(ReadStatus, Vec<u8>)> {
        let mut stream = Cursor::new(input);
        let mut buf = LineBuffer::with_capacity(64);
        let mut out = Vec::new();
        loop {
            let status = read_line(&mut stream, &mut buf).unwrap();
            out.push((status, buf.as_bytes().to_vec()));
            if status == ReadStatus::EndOfStream {
                return out;
            }
        }
    }

    // ── read_line ─────────────────────────────────────────────────────────

    #[test]
    fn empty_stream_is_end_of_stream() {
        let mut stream = Cursor::new(&b""[..]);
        let mut buf = LineBuffer::with_capacity(8);
        assert_eq!(read_line(&mut stream, &mut buf).unwrap(), ReadStatus::EndOfStream);
        assert_eq!(buf.as_bytes_with_terminator(), &[0]);
    }

    #[rstest]
    #[case(b"abc\n", &[(ReadStatus::Line, "abc"), (ReadStatus::EndOfStream, "")])]
    #[case(b"abc", &[(ReadStatus::EndOfStream, "abc")])]
    #[case(b"a\n\nb\n", &[
        (ReadStatus::Line, "a"),
        (ReadStatus::Line, ""),
        (ReadStatus::Line, "b"),
        (ReadStatus::EndOfStream, ""),
    ])]
    #[case(b"\n", &[(ReadStatus::Line, ""), (ReadStatus::EndOfStream, "")])]
    #[case(b"x\r\n", &[(ReadStatus::Line, "x\r"), (ReadStatus::EndOfStream, "")])]
    fn reads_expected_lines(#[case] input: &[u8], #[case] expected: &[(ReadStatus, &str)]) {
        let got = read_all(input);
        let expected: Vec<(ReadStatus, Vec<u8>)> = expected
            .iter()
            .map(|(s, l)| (*s, l.as_bytes().to_vec()))
            .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn buffer_is_terminated_after_line() {
        let mut stream = Cursor::new(&b"hello\nworld"[..]);
        let mut buf = LineBuffer::with_capacity(16);
        read_line(&mut stream, &mut buf).unwrap();
        assert_eq!(buf.as_bytes_with_terminator(), b"hello\0");
        read_line(&mut stream, &mut buf).unwrap();
        assert_eq!(buf.as_bytes_with_terminator(), b"world\0");
    }

    #[test]
    fn end_of_stream_is_sticky() {
        let mut stream = Cursor::new(&b"z"[..]);
        let mut buf = LineBuffer::with_capacity(8);
        assert_eq!(read_line(&mut stream, &mut buf).unwrap(), ReadStatus::EndOfStream);
        assert_eq!(buf.as_bytes(), b"z");
        for _ in 0..3 {
            assert_eq!(read_line(&mut stream, &mut buf).unwrap(), ReadStatus::EndOfStream);
            assert!(buf.is_empty());
        }
    }

    #[test]
    fn advances_stream_past_newline() {
        let mut stream = Cursor::new(&b"ab\ncd"[..]);
        let mut buf = LineBuffer::with_capacity(8);
        read_line(&mut stream, &mut buf).unwrap();
        assert_eq!(stream.position(), 3);
    }

    #[test]
    fn rejoined_lines_reconstruct_input() {
        let input = b"#shader vertex\nvoid main() {}\n\n#shader fragment\nend";
        let lines: Vec<Vec<u8>> = read_all(input).into_iter().map(|(_, l)| l).collect();
        assert_eq!(lines.join(&b'\n'), input.to_vec());
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn line_of_capacity_minus_one_fits() {
        let mut stream = Cursor::new(&b"abc\n"[..]);
        let mut buf = LineBuffer::with_capacity(4);
        assert_eq!(read_line(&mut stream, &mut buf).unwrap(), ReadStatus::Line);
        assert_eq!(buf.as_bytes_with_terminator(), b"abc\0");
    }

    #[test]
    fn line_of_capacity_is_too_long() {
        let mut stream = Cursor::new(&b"abcd\n"[..]);
        let mut buf = LineBuffer::with_capacity(4);
        let err = read_line(&mut stream, &mut buf).unwrap_err();
        assert!(matches!(err, LineError::TooLong { capacity: 4 }));
        assert_eq!(buf.as_bytes_with_terminator(), b"abc\0");
        // The offending byte is consumed; the rest of the line stays in the stream.
        assert_eq!(stream.position(), 4);
    }

    // ── errors ────────────────────────────────────────────────────────────

    struct Flaky {
        interrupted: bool,
        inner: Cursor<&'static [u8]>,
    }

    impl Read for Flaky {
        fn read(&mut self, out: &mut [u8]) -> std::io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            self.inner.read(out)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device gone"))
        }
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let mut stream = Flaky { interrupted: false, inner: Cursor::new(&b"ok\n"[..]) };
        let mut buf = LineBuffer::with_capacity(8);
        assert_eq!(read_line(&mut stream, &mut buf).unwrap(), ReadStatus::Line);
        assert_eq!(buf.as_bytes(), b"ok");
    }

    #[test]
    fn io_errors_propagate() {
        let mut buf = LineBuffer::with_capacity(8);
        let err = read_line(&mut Broken, &mut buf).unwrap_err();
        assert!(matches!(err, LineError::Io(_)));
        assert!(buf.is_empty());
    }

    // ── LineReader ────────────────────────────────────────────────────────

    #[test]
    fn for_each_line_delivers_trailing_partial_line() {
        let mut reader = LineReader::new(Cursor::new(&b"a\nb"[..]), 8);
        let mut seen = Vec::new();
        let n = reader.for_each_line(|l| seen.push(l.to_vec())).unwrap();
        assert_eq!(n, 2);
        assert_eq!(seen, vec![b"a".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn for_each_line_skips_empty_final_segment() {
        let mut reader = LineReader::new(Cursor::new(&b"a\n\n"[..]), 8);
        let mut seen = Vec::new();
        reader.for_each_line(|l| seen.push(l.to_vec())).unwrap();
        assert_eq!(seen, vec![b"a".to_vec(), Vec::new()]);
    }

    #[test]
    fn next_line_returns_none_after_exhaustion() {
        let mut reader = LineReader::new(Cursor::new(&b"x"[..]), 8);
        assert_eq!(reader.next_line().unwrap(), Some(&b"x"[..]));
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn for_each_line_stops_on_overlong_line() {
        let mut reader = LineReader::new(Cursor::new(&b"ok\ntoolong\n"[..]), 4);
        let mut seen = Vec::new();
        let err = reader.for_each_line(|l| seen.push(l.to_vec())).unwrap_err();
        assert!(matches!(err, LineError::TooLong { capacity: 4 }));
        assert_eq!(seen, vec![b"ok".to_vec()]);
    }

    #[test]
    fn next_line_resumes_after_overlong_line() {
        let mut reader = LineReader::new(Cursor::new(&b"abcdef\nxy\n"[..]), 4);
        let err = reader.next_line().unwrap_err();
        assert!(matches!(err, LineError::TooLong { capacity: 4 }));
        assert_eq!(reader.next_line().unwrap(), Some(&b"xy"[..]));
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn overlong_final_line_ends_the_stream() {
        let mut reader = LineReader::new(Cursor::new(&b"ok\nabcdef"[..]), 4);
        assert_eq!(reader.next_line().unwrap(), Some(&b"ok"[..]));
        assert!(reader.next_line().is_err());
        assert_eq!(reader.next_line().unwrap(), None);
    }
}
