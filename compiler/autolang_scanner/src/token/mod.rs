//! External token table.
//!
//! Symbols are indices into the grammar's `externals` list, which is also
//! the layout of the `valid_symbols` array the host passes to every scan.

use std::fmt;

/// External tokens, in `externals` declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TokenType {
    /// Raw LLVM IR between the braces of an `asm` block.
    LlvmIr = 0,
}

impl TokenType {
    /// Number of external tokens the grammar declares.
    pub const COUNT: usize = 1;

    /// Every external token, indexed by symbol.
    pub const ALL: [TokenType; Self::COUNT] = [TokenType::LlvmIr];

    /// Host symbol for this token (its index in `externals`).
    #[inline]
    pub const fn symbol(self) -> u16 {
        self as u16
    }

    /// Grammar rule name.
    pub const fn name(self) -> &'static str {
        match self {
            TokenType::LlvmIr => "llvm_ir",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a host `result_symbol` back onto the token table.
///
/// The C ABI uses this to report what a scan left in the host's result
/// slot; host-side tooling holding raw symbols can use it the same way.
impl TryFrom<u16> for TokenType {
    type Error = SymbolError;

    fn try_from(symbol: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|token| token.symbol() == symbol)
            .ok_or(SymbolError::Unknown(symbol))
    }
}

/// Failure to map a host symbol onto an external token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SymbolError {
    #[error("unknown external symbol {0} (the grammar declares {} external tokens)", TokenType::COUNT)]
    Unknown(u16),
}

/// Borrowed view of the host's `valid_symbols` flags.
///
/// Flags the slice does not carry read as `false`, so a short slice can
/// never request a token by accident.
#[derive(Clone, Copy, Debug)]
pub struct ValidSymbols<'a> {
    flags: &'a [bool],
}

impl<'a> ValidSymbols<'a> {
    pub fn new(flags: &'a [bool]) -> Self {
        Self { flags }
    }

    /// Returns `true` if the parser can accept `token` at this position.
    #[inline]
    pub fn contains(self, token: TokenType) -> bool {
        self.flags
            .get(usize::from(token.symbol()))
            .copied()
            .unwrap_or(false)
    }

    /// Tokens the parser can accept at this position.
    pub fn iter(self) -> impl Iterator<Item = TokenType> + 'a {
        let flags = self.flags;
        TokenType::ALL
            .into_iter()
            .filter(move |token| ValidSymbols { flags }.contains(*token))
    }
}
