//! Host lexer capability.
//!
//! The scanner never owns the input. The host hands it a [`Lexer`] for the
//! duration of one scan: a lookahead character, an advance operation, an
//! end-of-input check, an end mark, and a slot for the recognized token.
//! Failed scans leave the lexer advanced; restoring the pre-scan position is
//! the host's job.

use autolang_lexer_core::{Cursor, SourceBuffer};

use crate::token::TokenType;

/// Character-level view of the host lexer during one external scan.
pub trait Lexer {
    /// Character at the current position, `'\0'` at end of input.
    fn lookahead(&self) -> char;

    /// Consume the lookahead character.
    ///
    /// With `skip` set, the character is treated as whitespace and the
    /// token start moves past it.
    fn advance(&mut self, skip: bool);

    /// Commit the current position as the end of the token.
    fn mark_end(&mut self);

    /// Returns `true` once all input has been consumed.
    fn is_eof(&self) -> bool;

    /// Record which external token was recognized.
    fn set_result_symbol(&mut self, token: TokenType);
}

/// A token recognized by an external scan over a [`SourceBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannedToken {
    pub kind: TokenType,
    /// Byte offset of the first character of the token.
    pub start: u32,
    /// Byte offset of the committed end mark (exclusive).
    pub end: u32,
}

impl ScannedToken {
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Source text covered by the token.
    pub fn text<'a>(&self, source: &'a SourceBuffer) -> &'a str {
        source.cursor().slice(self.start, self.end)
    }

    /// Offset just past the `}` that terminates the enclosing block.
    ///
    /// The brace itself is not part of the token; the grammar matches it.
    pub fn block_end(&self) -> u32 {
        self.end + 1
    }
}

/// [`Lexer`] over an in-memory [`SourceBuffer`].
///
/// Mirrors the host runtime: advancing past the end is a no-op, and a
/// token without an explicit end mark ends at the current position.
#[derive(Clone, Debug)]
pub struct BufferLexer<'a> {
    cursor: Cursor<'a>,
    token_start: u32,
    marked_end: Option<u32>,
    result: Option<TokenType>,
}

impl<'a> BufferLexer<'a> {
    /// Start a scan at the cursor's position.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            token_start: cursor.pos(),
            cursor,
            marked_end: None,
            result: None,
        }
    }

    /// Current byte offset.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    pub fn token_start(&self) -> u32 {
        self.token_start
    }

    pub fn marked_end(&self) -> Option<u32> {
        self.marked_end
    }

    pub fn result_symbol(&self) -> Option<TokenType> {
        self.result
    }

    /// The recognized token, once a result symbol has been set.
    pub fn token(&self) -> Option<ScannedToken> {
        let kind = self.result?;
        Some(ScannedToken {
            kind,
            start: self.token_start,
            end: self
                .marked_end
                .unwrap_or(self.cursor.pos())
                .max(self.token_start),
        })
    }

    /// Give the cursor back to the driver.
    pub fn into_cursor(self) -> Cursor<'a> {
        self.cursor
    }
}

impl Lexer for BufferLexer<'_> {
    #[inline]
    fn lookahead(&self) -> char {
        self.cursor.current_char()
    }

    #[inline]
    fn advance(&mut self, skip: bool) {
        self.cursor.advance_char();
        if skip {
            self.token_start = self.cursor.pos();
            // A skipped character cannot sit inside the token.
            if self.marked_end.is_some_and(|end| end < self.token_start) {
                self.marked_end = Some(self.token_start);
            }
        }
    }

    fn mark_end(&mut self) {
        self.marked_end = Some(self.cursor.pos());
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    fn set_result_symbol(&mut self, token: TokenType) {
        self.result = Some(token);
    }
}

#[cfg(test)]
mod tests;
