//! Low-level scanning primitives for AutoLang external scanners.
//!
//! [`SourceBuffer`] owns a copy of the source followed by a `0x00` sentinel
//! and zero padding, so a [`Cursor`] can read one byte past the content
//! without bounds bookkeeping. The cursor is `Copy`: a driver snapshots it
//! before handing it to a scanner and restores the snapshot if the scan
//! reports no match.
//!
//! This crate has no `autolang_*` dependencies. Editor tooling can use it
//! without pulling in the scanner or its C ABI.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
