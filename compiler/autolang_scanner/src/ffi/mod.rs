//! C ABI for the tree-sitter runtime.
//!
//! The generated `parser.c` declares the five
//! `tree_sitter_autolang_external_scanner_*` functions and calls them with
//! its own `TSLexer`. [`HostLexer`] adapts that struct to [`Lexer`] so the
//! scan itself stays safe Rust.
#![deny(unsafe_op_in_unsafe_fn)]

use std::ffi::{c_char, c_void};
use std::marker::PhantomData;
use std::ptr::NonNull;

use tracing::debug;

use crate::lexer::Lexer;
use crate::scanner::{Scanner, SERIALIZATION_BUFFER_SIZE};
use crate::token::{SymbolError, TokenType, ValidSymbols};

/// Host lexer, laid out as `TSLexer` in `tree_sitter/parser.h`.
#[repr(C)]
pub struct TSLexer {
    pub lookahead: i32,
    pub result_symbol: u16,
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    pub is_at_included_range_start: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub eof: unsafe extern "C" fn(*const TSLexer) -> bool,
    /// Debug log callback; null when the host has no logger attached.
    pub log: Option<unsafe extern "C" fn(*const TSLexer, *const c_char, ...)>,
}

/// [`Lexer`] over a host-owned [`TSLexer`].
///
/// Holds the host pointer rather than a reference: the host's callbacks
/// write through the same pointer (and may reach a larger struct that
/// embeds the `TSLexer`).
pub struct HostLexer<'a> {
    raw: NonNull<TSLexer>,
    _host: PhantomData<&'a mut TSLexer>,
}

impl HostLexer<'_> {
    /// # Safety
    ///
    /// `raw` must point to a live `TSLexer` whose callbacks stay valid and
    /// uphold the runtime's contract for as long as the adapter is used.
    pub unsafe fn new(raw: NonNull<TSLexer>) -> Self {
        Self {
            raw,
            _host: PhantomData,
        }
    }
}

impl HostLexer<'_> {
    /// The external token currently in the host's result slot.
    pub fn result_symbol(&self) -> Result<TokenType, SymbolError> {
        // SAFETY: `raw` is live per `HostLexer::new`.
        let symbol = unsafe { (*self.raw.as_ptr()).result_symbol };
        TokenType::try_from(symbol)
    }
}

impl Lexer for HostLexer<'_> {
    fn lookahead(&self) -> char {
        // SAFETY: `raw` is live per `HostLexer::new`.
        let code = unsafe { (*self.raw.as_ptr()).lookahead };
        u32::try_from(code)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or('\0')
    }

    fn advance(&mut self, skip: bool) {
        let raw = self.raw.as_ptr();
        // SAFETY: `raw` is live and `advance` is the host's own callback.
        unsafe { ((*raw).advance)(raw, skip) }
    }

    fn mark_end(&mut self) {
        let raw = self.raw.as_ptr();
        // SAFETY: as above.
        unsafe { ((*raw).mark_end)(raw) }
    }

    fn is_eof(&self) -> bool {
        let raw = self.raw.as_ptr();
        // SAFETY: as above.
        unsafe { ((*raw).eof)(raw) }
    }

    fn set_result_symbol(&mut self, token: TokenType) {
        // SAFETY: `raw` is live per `HostLexer::new`.
        unsafe { (*self.raw.as_ptr()).result_symbol = token.symbol() }
    }
}

#[no_mangle]
pub extern "C" fn tree_sitter_autolang_external_scanner_create() -> *mut c_void {
    crate::init_tracing();
    // Zero-sized: boxing does not allocate.
    Box::into_raw(Box::new(Scanner::new())).cast()
}

/// # Safety
///
/// `payload` must come from `tree_sitter_autolang_external_scanner_create`
/// and must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_autolang_external_scanner_destroy(payload: *mut c_void) {
    if payload.is_null() {
        return;
    }
    // SAFETY: `payload` was produced by `Box::into_raw` in `create`.
    drop(unsafe { Box::from_raw(payload.cast::<Scanner>()) });
}

/// # Safety
///
/// `payload` must come from `create`; `buffer` must be null or point to
/// `SERIALIZATION_BUFFER_SIZE` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_autolang_external_scanner_serialize(
    payload: *mut c_void,
    buffer: *mut c_char,
) -> u32 {
    // SAFETY: `payload` is null or a live scanner per the contract.
    let Some(scanner) = (unsafe { payload.cast::<Scanner>().as_ref() }) else {
        return 0;
    };
    if buffer.is_null() {
        return 0;
    }
    // SAFETY: the host provides `SERIALIZATION_BUFFER_SIZE` bytes.
    let buffer =
        unsafe { std::slice::from_raw_parts_mut(buffer.cast::<u8>(), SERIALIZATION_BUFFER_SIZE) };
    u32::try_from(scanner.serialize(buffer)).unwrap_or(0)
}

/// # Safety
///
/// `payload` must come from `create`; `buffer` must be null or point to
/// `length` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_autolang_external_scanner_deserialize(
    payload: *mut c_void,
    buffer: *const c_char,
    length: u32,
) {
    // SAFETY: `payload` is null or a live scanner per the contract.
    let Some(scanner) = (unsafe { payload.cast::<Scanner>().as_mut() }) else {
        return;
    };
    let bytes: &[u8] = if buffer.is_null() || length == 0 {
        &[]
    } else {
        // SAFETY: the host provides `length` readable bytes.
        unsafe { std::slice::from_raw_parts(buffer.cast::<u8>(), length as usize) }
    };
    scanner.deserialize(bytes);
}

/// # Safety
///
/// `payload` must come from `create`, `lexer` must be a live host lexer,
/// and `valid_symbols` must be null or point to one flag per external token.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_autolang_external_scanner_scan(
    payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    // SAFETY: `payload` is null or a live scanner per the contract.
    let Some(scanner) = (unsafe { payload.cast::<Scanner>().as_mut() }) else {
        return false;
    };
    let (Some(raw), false) = (NonNull::new(lexer), valid_symbols.is_null()) else {
        return false;
    };
    // SAFETY: the host passes one flag per entry in `externals`.
    let flags = unsafe { std::slice::from_raw_parts(valid_symbols, TokenType::COUNT) };
    // SAFETY: `lexer` is live for the duration of this call.
    let mut host = unsafe { HostLexer::new(raw) };
    let found = scanner.scan(&mut host, ValidSymbols::new(flags));
    if found {
        match host.result_symbol() {
            Ok(token) => debug!(%token, "external token recognized"),
            Err(err) => debug!(%err, "scan left an invalid result symbol"),
        }
    }
    found
}
