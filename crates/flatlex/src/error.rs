use thiserror::Error;

/// A lexical error that ends a scan.
///
/// Errors are terminal: once a [`Tokenizer`](crate::Tokenizer) reports one,
/// every further step reports the same error without moving the cursor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenizeError {
    /// A malformed or truncated multi-byte UTF-8 sequence.
    #[error("malformed or truncated UTF-8 sequence")]
    BrokenUtf8,
    /// Input ended inside a `"` quoted string.
    #[error("unterminated quoted string")]
    UnterminatedString,
    /// A numeric run with more than one `.`, like `0..1` or `0.1.1`.
    #[error("malformed float")]
    MalformedFloat,
    /// A number used as a name, like `123=` or `0.1=`.
    #[error("number on left hand side of '='")]
    NumberOnLeftHandSide,
    /// A leading, trailing or doubled comma in a comma-separated list.
    #[error("comma-separated list sequencing violated")]
    CommaListViolation,
}

impl TokenizeError {
    /// Returns the classic negative error code for this error.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::BrokenUtf8 => -5,
            Self::UnterminatedString => -4,
            Self::MalformedFloat => -3,
            Self::NumberOnLeftHandSide => -2,
            Self::CommaListViolation => -1,
        }
    }
}

/// Failure to materialize a token as a NUL-terminated string.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CstrError {
    /// The token plus its terminator does not fit in the output buffer.
    #[error("token needs {needed} bytes with terminator, buffer holds {capacity}")]
    TooLong {
        /// Bytes required, including the terminator.
        needed: usize,
        /// Size of the output buffer.
        capacity: usize,
    },
    /// The payload contains a NUL byte and cannot be a C string.
    #[error("payload contains an interior NUL byte")]
    InteriorNul,
}
