//! Byte classification under a set of [`TokenizerOptions`].

use crate::TokenizerOptions;

/// Delimiters of the structured header grammar. `"` is absent because the
/// scanner handles it as a quote before classification matters.
const EXTENDED_DELIMITERS: &[u8] = b"(),/:;<=>?@[\\]{}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ByteClass {
    /// Separates elements, never reported.
    Whitespace,
    /// Opens or closes a quoted string.
    Quote,
    /// Starts a comment running to end of line.
    Comment,
    /// Reported on its own as a single-byte delimiter.
    Delimiter,
    /// ASCII byte that continues a token.
    Token,
    /// Lead or continuation byte of a multi-byte sequence; always token
    /// content once decoded.
    NonAscii,
}

#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0c)
}

#[inline]
pub(crate) fn is_line_end(b: u8) -> bool {
    matches!(b, b'\n' | b'\r')
}

/// Classifies `b`. NUL is not handled here: the scanner treats it as end of
/// input before asking.
pub(crate) fn classify(b: u8, options: &TokenizerOptions) -> ByteClass {
    match b {
        b if is_whitespace(b) => ByteClass::Whitespace,
        b'"' => ByteClass::Quote,
        b'#' if options.hash_comment => ByteClass::Comment,
        b'#' => ByteClass::Token,
        0x80..=0xFF => ByteClass::NonAscii,
        b'-' if !options.minus_non_terminal => ByteClass::Delimiter,
        b'.' if !options.dot_non_terminal => ByteClass::Delimiter,
        b'-' | b'.' => ByteClass::Token,
        _ if options.extended_delimiters => {
            if b < 0x20 || b == 0x7f || EXTENDED_DELIMITERS.contains(&b) {
                ByteClass::Delimiter
            } else {
                ByteClass::Token
            }
        }
        b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'_' => ByteClass::Token,
        _ => ByteClass::Delimiter,
    }
}
