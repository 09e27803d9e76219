use super::*;
use pretty_assertions::assert_eq;

#[test]
fn starts_at_cursor_position() {
    let buf = SourceBuffer::new("asm { ret void }");
    let lexer = BufferLexer::new(buf.cursor_at(5));
    assert_eq!(lexer.pos(), 5);
    assert_eq!(lexer.token_start(), 5);
    assert_eq!(lexer.lookahead(), ' ');
    assert_eq!(lexer.marked_end(), None);
    assert_eq!(lexer.result_symbol(), None);
    assert_eq!(lexer.token(), None);
}

#[test]
fn skip_after_mark_moves_end_with_start() {
    let buf = SourceBuffer::new("a  b");
    let mut lexer = BufferLexer::new(buf.cursor());
    lexer.advance(false);
    lexer.mark_end();
    lexer.advance(true);
    lexer.advance(true);
    lexer.set_result_symbol(TokenType::LlvmIr);

    let token = lexer.token().expect("result symbol is set");
    assert_eq!(token.start, 3);
    assert_eq!(token.end, 3);
    assert_eq!(token.len(), 0);
    assert!(token.is_empty());
    assert_eq!(token.text(&buf), "");
    assert_eq!(lexer.marked_end(), Some(3));
}

#[test]
fn inverted_token_has_zero_len() {
    let token = ScannedToken {
        kind: TokenType::LlvmIr,
        start: 3,
        end: 1,
    };
    assert_eq!(token.len(), 0);
    assert!(token.is_empty());
}

#[test]
fn advance_moves_by_character() {
    let buf = SourceBuffer::new("\u{e9}}");
    let mut lexer = BufferLexer::new(buf.cursor());
    assert_eq!(lexer.lookahead(), '\u{e9}');
    lexer.advance(false);
    assert_eq!(lexer.pos(), 2);
    assert_eq!(lexer.lookahead(), '}');
}

#[test]
fn advance_at_eof_is_noop() {
    let buf = SourceBuffer::new("x");
    let mut lexer = BufferLexer::new(buf.cursor());
    lexer.advance(false);
    assert!(lexer.is_eof());
    assert_eq!(lexer.lookahead(), '\0');
    lexer.advance(false);
    assert_eq!(lexer.pos(), 1);
}

#[test]
fn skip_moves_token_start() {
    let buf = SourceBuffer::new("  ret");
    let mut lexer = BufferLexer::new(buf.cursor());
    lexer.advance(true);
    lexer.advance(true);
    lexer.advance(false);
    assert_eq!(lexer.token_start(), 2);
    assert_eq!(lexer.pos(), 3);
}

#[test]
fn token_uses_marked_end() {
    let buf = SourceBuffer::new("ret }");
    let mut lexer = BufferLexer::new(buf.cursor());
    for _ in 0..4 {
        lexer.advance(false);
    }
    lexer.mark_end();
    lexer.advance(false);
    lexer.set_result_symbol(TokenType::LlvmIr);

    let token = lexer.token();
    assert_eq!(
        token,
        Some(ScannedToken {
            kind: TokenType::LlvmIr,
            start: 0,
            end: 4,
        })
    );
    assert_eq!(lexer.pos(), 5);
}

#[test]
fn token_without_mark_ends_at_position() {
    let buf = SourceBuffer::new("abc");
    let mut lexer = BufferLexer::new(buf.cursor());
    lexer.advance(false);
    lexer.advance(false);
    lexer.set_result_symbol(TokenType::LlvmIr);
    assert_eq!(lexer.token().map(|t| t.end), Some(2));
}

#[test]
fn into_cursor_keeps_position() {
    let buf = SourceBuffer::new("abc");
    let mut lexer = BufferLexer::new(buf.cursor());
    lexer.advance(false);
    let cursor = lexer.into_cursor();
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.current(), b'b');
}

// === ScannedToken ===

#[test]
fn scanned_token_accessors() {
    let buf = SourceBuffer::new("asm { ret void }");
    let token = ScannedToken {
        kind: TokenType::LlvmIr,
        start: 5,
        end: 15,
    };
    assert_eq!(token.len(), 10);
    assert!(!token.is_empty());
    assert_eq!(token.text(&buf), " ret void ");
    assert_eq!(token.block_end(), 16);
}

#[test]
fn empty_scanned_token() {
    let buf = SourceBuffer::new("{}");
    let token = ScannedToken {
        kind: TokenType::LlvmIr,
        start: 1,
        end: 1,
    };
    assert!(token.is_empty());
    assert_eq!(token.text(&buf), "");
    assert_eq!(token.block_end(), 2);
}
