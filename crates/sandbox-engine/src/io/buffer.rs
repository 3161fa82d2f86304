/// Fixed-capacity line buffer.
///
/// Owned by the caller and overwritten by every read. One byte of capacity is
/// always reserved for the zero terminator, so a buffer of capacity `n` holds
/// lines of at most `n - 1` bytes.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    bytes: Box<[u8]>,
    len: usize,
}

impl LineBuffer {
    /// Creates a buffer with room for `capacity` bytes including the terminator.
    ///
    /// A zero capacity is bumped to 1 so the terminator always fits.
    pub fn with_capacity(capacity: usize) -> Self {
        let bytes = vec![0u8; capacity.max(1)].into_boxed_slice();
        Self { bytes, len: 0 }
    }

    /// Total capacity, terminator included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Length of the current line, terminator excluded.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes of the current line.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Bytes of the current line followed by the zero terminator.
    #[inline]
    pub fn as_bytes_with_terminator(&self) -> &[u8] {
        &self.bytes[..=self.len]
    }

    /// Current line decoded as UTF-8, invalid sequences replaced.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }

    pub(crate) fn clear(&mut self) {
        self.len = 0;
        self.bytes[0] = 0;
    }

    /// Appends `byte` if it leaves room for the terminator.
    ///
    /// Returns `false` (and leaves the buffer unchanged) when full.
    pub(crate) fn try_push(&mut self, byte: u8) -> bool {
        if self.len + 1 >= self.bytes.len() {
            return false;
        }
        self.bytes[self.len] = byte;
        self.len += 1;
        true
    }

    pub(crate) fn terminate(&mut self) {
        self.bytes[self.len] = 0;
    }
}
