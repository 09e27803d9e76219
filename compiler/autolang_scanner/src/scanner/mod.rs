//! Scanner instance and lifecycle.
//!
//! The host creates one scanner per parse session, serializes it after each
//! external token so incremental reparses can restore it, and destroys it
//! when the session ends. This scanner has nothing to carry between calls:
//! the instance is zero-sized and serialization writes zero bytes.

use crate::lexer::Lexer;
use crate::llvm_ir::scan_llvm_ir;
use crate::token::ValidSymbols;

/// Size of the buffer the host passes to [`Scanner::serialize`].
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// Stateless external scanner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scanner;

const _: () = assert!(std::mem::size_of::<Scanner>() == 0);

#[allow(
    clippy::unused_self,
    reason = "lifecycle methods follow the host contract even with no state"
)]
impl Scanner {
    pub const fn new() -> Self {
        Scanner
    }

    /// Write the scanner state into `buffer`, returning the bytes written.
    ///
    /// Always `0`; `buffer` is left untouched.
    pub fn serialize(&self, buffer: &mut [u8]) -> usize {
        let _ = buffer;
        0
    }

    /// Restore state written by [`serialize`](Self::serialize).
    ///
    /// Accepts any input, including bytes this scanner never wrote.
    pub fn deserialize(&mut self, buffer: &[u8]) {
        let _ = buffer;
    }

    /// Try to recognize an external token at the lexer's position.
    pub fn scan<L: Lexer + ?Sized>(&mut self, lexer: &mut L, valid: ValidSymbols<'_>) -> bool {
        scan_llvm_ir(lexer, valid)
    }
}

#[cfg(test)]
mod tests;
