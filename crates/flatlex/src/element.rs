use core::fmt;

use bstr::BStr;

/// Classification of a reported lexical element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    /// A single non-token character such as `,`, `;` or `=`.
    Delimiter,
    /// A run of token characters.
    Token,
    /// A run of decimal digits.
    Integer,
    /// Digits, one `.`, digits.
    Float,
    /// A token followed by `=`, whitespace allowed in between.
    NameEquals,
    /// A token followed by `:`. Only reported with
    /// [`aggregate_colon`](crate::TokenizerOptions::aggregate_colon).
    NameColon,
    /// The bytes between a pair of `"`, quotes excluded.
    QuotedString,
}

impl ElementKind {
    /// Whether this element is list content rather than a delimiter.
    #[must_use]
    pub const fn is_content(self) -> bool {
        !matches!(self, Self::Delimiter)
    }

    /// Returns the classic ordinal for this element. End of input is `0`
    /// and errors are negative, see [`TokenizeError::code`].
    ///
    /// [`TokenizeError::code`]: crate::TokenizeError::code
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Delimiter => 1,
            Self::Token => 2,
            Self::Integer => 3,
            Self::Float => 4,
            Self::NameEquals => 5,
            Self::NameColon => 6,
            Self::QuotedString => 7,
        }
    }
}

/// Where a comma-separated list stands between elements.
///
/// Only advanced when
/// [`comma_sequencing`](crate::TokenizerOptions::comma_sequencing) is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DelimiterTracking {
    /// Nothing has been seen yet; a comma here is a leading comma.
    #[default]
    NeedFirstContent,
    /// Content was just seen; more content before a comma is an error.
    NeedDelimiter,
    /// A comma was just seen; the end or another comma here is an error.
    NeedNextContent,
}

/// One reported element: its classification and a view of its payload in
/// the original input.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lexeme<'src> {
    kind: ElementKind,
    payload: &'src [u8],
    offset: usize,
}

impl<'src> Lexeme<'src> {
    pub(crate) fn new(kind: ElementKind, input: &'src [u8], start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= input.len());
        Self {
            kind,
            payload: &input[start..end],
            offset: start,
        }
    }

    /// The element classification.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The payload bytes, borrowed from the input.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &'src [u8] {
        self.payload
    }

    /// The payload as text.
    #[must_use]
    pub fn as_str(&self) -> &'src str {
        // SAFETY: the scanner only closes a payload after every non-ASCII
        // sequence inside it decoded to a complete code point, so payloads
        // are always valid UTF-8.
        unsafe { core::str::from_utf8_unchecked(self.payload) }
    }

    /// Byte offset of the payload within the input.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Payload length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Whether the payload is empty. Only `""` produces an empty payload.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl fmt::Debug for Lexeme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexeme")
            .field("kind", &self.kind)
            .field("payload", &BStr::new(self.payload))
            .field("offset", &self.offset)
            .finish()
    }
}

impl fmt::Display for Lexeme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(BStr::new(self.payload), f)
    }
}
