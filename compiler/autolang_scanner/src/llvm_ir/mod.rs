//! Brace-balanced LLVM IR block scan.
//!
//! The scan starts just after the `{` that opens an `asm` block and stops
//! with the first `}` that no earlier `{` balances. That `}` is the block's
//! closing brace: the end mark is committed in front of it so the grammar
//! can match it as its own token.
//!
//! Two IR constructs are opaque to brace counting:
//! - string constants, `"` through the next `"`;
//! - line comments, `;` through the next `\n`.
//!
//! Either construct running into end of input is no match, the same as a
//! block that is never closed.

use autolang_lexer_core::SourceBuffer;
use tracing::{debug, trace};

use crate::lexer::{BufferLexer, Lexer, ScannedToken};
use crate::token::{TokenType, ValidSymbols};

/// Scan for an `llvm_ir` token at the lexer's current position.
///
/// Returns `false` without touching the lexer when the parser cannot accept
/// `llvm_ir` here. Otherwise the lexer is advanced while searching; on
/// success the result symbol is set and the end mark sits in front of the
/// terminating `}`.
pub fn scan_llvm_ir<L: Lexer + ?Sized>(lexer: &mut L, valid: ValidSymbols<'_>) -> bool {
    if !valid.contains(TokenType::LlvmIr) {
        return false;
    }

    let mut depth: u32 = 0;
    loop {
        if lexer.is_eof() {
            debug!(depth, "llvm_ir: end of input before closing brace");
            return false;
        }
        match lexer.lookahead() {
            '"' => {
                if !skip_through(lexer, '"') {
                    debug!("llvm_ir: unterminated string constant");
                    return false;
                }
            }
            ';' => {
                if !skip_through(lexer, '\n') {
                    debug!("llvm_ir: comment runs to end of input");
                    return false;
                }
            }
            '{' => {
                depth += 1;
                trace!(depth, "llvm_ir: open brace");
            }
            '}' if depth == 0 => {
                lexer.set_result_symbol(TokenType::LlvmIr);
                lexer.mark_end();
                debug!("llvm_ir: matched");
                return true;
            }
            '}' => {
                depth -= 1;
                trace!(depth, "llvm_ir: close brace");
            }
            _ => {}
        }
        lexer.advance(false);
    }
}

/// Advance until the lookahead is `terminator`.
///
/// The current lookahead (the opening delimiter) is always consumed first.
/// Returns `false` if input ends before `terminator` shows up.
fn skip_through<L: Lexer + ?Sized>(lexer: &mut L, terminator: char) -> bool {
    loop {
        lexer.advance(false);
        if lexer.is_eof() {
            return false;
        }
        if lexer.lookahead() == terminator {
            return true;
        }
    }
}

/// Scan `source` from byte `start` and return the recognized token.
pub fn scan_buffer(
    source: &SourceBuffer,
    start: u32,
    valid: ValidSymbols<'_>,
) -> Option<ScannedToken> {
    let mut lexer = BufferLexer::new(source.cursor_at(start));
    if scan_llvm_ir(&mut lexer, valid) {
        lexer.token()
    } else {
        None
    }
}
