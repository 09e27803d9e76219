//! External scanner for the AutoLang grammar.
//!
//! The grammar declares one external token, `llvm_ir`, used by
//! `asm { <llvm_ir> }`. A declarative grammar cannot find where embedded IR
//! ends, because the IR itself contains braces, string constants, and `;`
//! comments. The scanner runs when the parser is about to accept `llvm_ir`
//! and consumes everything up to the first `}` that is not balanced by an
//! earlier `{`, ignoring braces inside `"..."` and `; ...\n`.
//!
//! # Layers
//!
//! - [`token`]: the external token table and the host's valid-symbol flags.
//! - [`lexer`]: the [`Lexer`] capability the scanner drives, and
//!   [`BufferLexer`], an implementation over an in-memory source.
//! - [`llvm_ir`]: the brace-balanced block scan.
//! - [`scanner`]: the stateless [`Scanner`] and its lifecycle.
//! - `ffi` (feature `ffi`): the `tree_sitter_autolang_external_scanner_*`
//!   C ABI consumed by the generated parser.
//!
//! # Debugging
//!
//! - `RUST_LOG=autolang_scanner=debug`: one event per scan outcome.
//! - `RUST_LOG=autolang_scanner=trace`: brace depth changes as well.

use std::sync::Once;

pub mod lexer;
pub mod llvm_ir;
pub mod scanner;
pub mod token;

#[cfg(feature = "ffi")]
#[allow(
    unsafe_code,
    reason = "C ABI entry points and host lexer callbacks for the tree-sitter runtime"
)]
pub mod ffi;

pub use lexer::{BufferLexer, Lexer, ScannedToken};
pub use llvm_ir::{scan_buffer, scan_llvm_ir};
pub use scanner::{Scanner, SERIALIZATION_BUFFER_SIZE};
pub use token::{SymbolError, TokenType, ValidSymbols};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Installs a stderr subscriber only when
/// `RUST_LOG` is set, and leaves an already-installed global subscriber
/// (for example, the host editor's) alone.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .try_init();
        }
    });
}
