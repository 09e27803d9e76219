use super::*;
use crate::lexer::BufferLexer;
use crate::token::TokenType;
use autolang_lexer_core::SourceBuffer;
use pretty_assertions::assert_eq;

#[test]
fn new_matches_default() {
    assert_eq!(Scanner::new(), Scanner::default());
}

#[test]
fn serialize_writes_nothing() {
    let scanner = Scanner::new();
    let mut buffer = [0xAA_u8; SERIALIZATION_BUFFER_SIZE];
    assert_eq!(scanner.serialize(&mut buffer), 0);
    assert!(buffer.iter().all(|&b| b == 0xAA));
}

#[test]
fn serialize_into_empty_buffer() {
    assert_eq!(Scanner::new().serialize(&mut []), 0);
}

#[test]
fn deserialize_ignores_input() {
    let mut scanner = Scanner::new();
    scanner.deserialize(&[]);
    scanner.deserialize(b"\x01\x02\x03");
    assert_eq!(scanner, Scanner::new());
}

#[test]
fn scan_delegates_to_block_scan() {
    let buf = SourceBuffer::new("asm { ret void } x");
    let mut lexer = BufferLexer::new(buf.cursor_at(5));
    let mut scanner = Scanner::new();
    assert!(scanner.scan(&mut lexer, ValidSymbols::new(&[true])));
    let token = lexer.token().expect("token should be recognized");
    assert_eq!(token.kind, TokenType::LlvmIr);
    assert_eq!(token.text(&buf), " ret void ");
}

#[test]
fn scan_after_round_trip() {
    let mut scanner = Scanner::new();
    let mut buffer = [0u8; SERIALIZATION_BUFFER_SIZE];
    let written = scanner.serialize(&mut buffer);
    scanner.deserialize(&buffer[..written]);

    let buf = SourceBuffer::new("{ { } }");
    let mut lexer = BufferLexer::new(buf.cursor_at(1));
    assert!(scanner.scan(&mut lexer, ValidSymbols::new(&[true])));
    assert_eq!(lexer.marked_end(), Some(6));
}

#[test]
fn scan_declines_unrequested_token() {
    let buf = SourceBuffer::new("{}");
    let mut lexer = BufferLexer::new(buf.cursor_at(1));
    assert!(!Scanner::new().scan(&mut lexer, ValidSymbols::new(&[false])));
    assert_eq!(lexer.pos(), 1);
}
