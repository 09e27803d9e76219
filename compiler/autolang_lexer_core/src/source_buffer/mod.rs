//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the cursor detects EOF without a separate length check on every read.
//! The total size is rounded up to the next 64-byte boundary, which also
//! leaves zero padding for reads just past the sentinel.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source code.
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to the first
    /// `u32::MAX` bytes of content; offsets are `u32` throughout.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len_u32 = u32::try_from(source_bytes.len()).unwrap_or(u32::MAX);
        let source_len = source_len_u32 as usize;

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(&source_bytes[..source_len]);

        Self {
            buf,
            source_len: source_len_u32,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Create a [`Cursor`] positioned at byte `pos`.
    ///
    /// Positions past the end of the content clamp to the sentinel, so the
    /// returned cursor is at EOF.
    pub fn cursor_at(&self, pos: u32) -> Cursor<'_> {
        let mut cursor = self.cursor();
        cursor.advance_n(pos.min(self.source_len));
        cursor
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
