//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte or one UTF-8 scalar
//! at a time. EOF is detected when the current byte equals the sentinel
//! (`0x00`) and the position has reached the source length.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < source_len` is source content; a null at
//! `pos >= source_len` is the sentinel (EOF). Scanners must ask
//! [`Cursor::is_eof`] rather than compare the current byte against zero.

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots for backtracking.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and all bytes after it are `0x00`. This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at EOF. Interior null bytes also return `0x00`.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the Unicode scalar starting at the current position.
    ///
    /// Returns `'\0'` at EOF. A position that does not start a valid UTF-8
    /// sequence (reachable only through [`advance_n`](Self::advance_n))
    /// yields `U+FFFD`.
    pub fn current_char(&self) -> char {
        let byte = self.current();
        if byte.is_ascii() {
            return char::from(byte);
        }
        let end = (self.pos + Self::utf8_char_width(byte)).min(self.source_len);
        std::str::from_utf8(&self.buf[self.pos as usize..end as usize])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Advance the cursor past one full UTF-8 character.
    ///
    /// Does nothing at EOF, and never moves past the sentinel even when the
    /// leading byte claims more bytes than remain.
    #[inline]
    pub fn advance_char(&mut self) {
        if self.is_eof() {
            return;
        }
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len);
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as `&str`.
    ///
    /// Returns `""` when `start..end` is out of order, runs past the source
    /// content, or splits a UTF-8 sequence.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        if start > end || end > self.source_len {
            return "";
        }
        std::str::from_utf8(&self.buf[start as usize..end as usize]).unwrap_or("")
    }
}
