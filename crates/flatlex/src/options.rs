#![allow(clippy::struct_excessive_bools)]

/// Lexical rules applied by a [`Tokenizer`](crate::Tokenizer).
///
/// The options are fixed when the tokenizer is constructed and never change
/// during a scan. Every option is independent and they may be combined
/// freely.
///
/// # Examples
///
/// ```rust
/// use flatlex::{ElementKind, Tokenizer, TokenizerOptions};
///
/// let options = TokenizerOptions {
///     dot_non_terminal: true,
///     no_floats: true,
///     ..Default::default()
/// };
/// let mut tokens = Tokenizer::new(b"192.168.0.1", options);
/// let lexeme = tokens.step().unwrap().unwrap();
/// assert_eq!(lexeme.kind(), ElementKind::Token);
/// assert_eq!(lexeme.as_str(), "192.168.0.1");
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TokenizerOptions {
    /// Whether `-` is an ordinary token character.
    ///
    /// When `true`, `my-token` is reported as a single token instead of
    /// `my`, `-`, `token`.
    ///
    /// # Default
    ///
    /// `false`
    pub minus_non_terminal: bool,

    /// Whether `name:` is reported as [`ElementKind::NameColon`].
    ///
    /// When `false`, `:` is an ordinary delimiter.
    ///
    /// [`ElementKind::NameColon`]: crate::ElementKind::NameColon
    ///
    /// # Default
    ///
    /// `false`
    pub aggregate_colon: bool,

    /// Whether to enforce a strict `token, token, token` list.
    ///
    /// A leading comma, a trailing comma, two commas in a row, or two content
    /// elements without a comma between them is reported as
    /// [`TokenizeError::CommaListViolation`]. Other delimiters such as `;`
    /// are reported without affecting the list state.
    ///
    /// [`TokenizeError::CommaListViolation`]: crate::TokenizeError::CommaListViolation
    ///
    /// # Default
    ///
    /// `false`
    pub comma_sequencing: bool,

    /// Whether to use the structured header delimiter set.
    ///
    /// By default only ASCII alphanumerics, `_` and (without
    /// [`hash_comment`](Self::hash_comment)) `#` make up tokens and every
    /// other ASCII character is a delimiter. With this option tokens may
    /// contain any visible character except `(),/:;<=>?@[\]{}`, which remain
    /// the only delimiters (along with `-` and `.` unless their own
    /// non-terminal options are set, and control characters).
    ///
    /// # Default
    ///
    /// `false`
    pub extended_delimiters: bool,

    /// Whether `.` is an ordinary token character.
    ///
    /// When `true`, `host.example.com` is reported as a single token.
    ///
    /// # Default
    ///
    /// `false`
    pub dot_non_terminal: bool,

    /// Whether a numeric run containing `.` is reported as a plain token.
    ///
    /// This lets dotted quads such as `192.168.0.1` come through as
    /// [`ElementKind::Token`] rather than being rejected as malformed
    /// floats.
    ///
    /// [`ElementKind::Token`]: crate::ElementKind::Token
    ///
    /// # Default
    ///
    /// `false`
    pub no_floats: bool,

    /// Whether all-digit runs are reported as plain tokens.
    ///
    /// With this option no run is ever numeric, so floats and
    /// [`TokenizeError::NumberOnLeftHandSide`] cannot occur either.
    ///
    /// [`TokenizeError::NumberOnLeftHandSide`]: crate::TokenizeError::NumberOnLeftHandSide
    ///
    /// # Default
    ///
    /// `false`
    pub no_integers: bool,

    /// Whether `#` starts a comment running to the end of the line.
    ///
    /// Comments are consumed and never reported, and their bytes need not be
    /// UTF-8. Inside a quoted string `#` is always literal. When `false`, `#`
    /// is an ordinary token character.
    ///
    /// # Default
    ///
    /// `false`
    pub hash_comment: bool,
}

impl TokenizerOptions {
    /// Bit for [`minus_non_terminal`](Self::minus_non_terminal).
    pub const MINUS_NON_TERMINAL: u32 = 1 << 0;
    /// Bit for [`aggregate_colon`](Self::aggregate_colon).
    pub const AGGREGATE_COLON: u32 = 1 << 1;
    /// Bit for [`comma_sequencing`](Self::comma_sequencing).
    pub const COMMA_SEQUENCING: u32 = 1 << 2;
    /// Bit for [`extended_delimiters`](Self::extended_delimiters).
    pub const EXTENDED_DELIMITERS: u32 = 1 << 3;
    /// Bit for [`dot_non_terminal`](Self::dot_non_terminal).
    pub const DOT_NON_TERMINAL: u32 = 1 << 4;
    /// Bit for [`no_floats`](Self::no_floats).
    pub const NO_FLOATS: u32 = 1 << 5;
    /// Bit for [`no_integers`](Self::no_integers).
    pub const NO_INTEGERS: u32 = 1 << 6;
    /// Bit for [`hash_comment`](Self::hash_comment).
    pub const HASH_COMMENT: u32 = 1 << 7;

    /// Builds options from the classic flag bitset. Unknown bits are
    /// ignored.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            minus_non_terminal: bits & Self::MINUS_NON_TERMINAL != 0,
            aggregate_colon: bits & Self::AGGREGATE_COLON != 0,
            comma_sequencing: bits & Self::COMMA_SEQUENCING != 0,
            extended_delimiters: bits & Self::EXTENDED_DELIMITERS != 0,
            dot_non_terminal: bits & Self::DOT_NON_TERMINAL != 0,
            no_floats: bits & Self::NO_FLOATS != 0,
            no_integers: bits & Self::NO_INTEGERS != 0,
            hash_comment: bits & Self::HASH_COMMENT != 0,
        }
    }

    /// Returns the classic flag bitset for these options.
    #[must_use]
    pub const fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.minus_non_terminal {
            bits |= Self::MINUS_NON_TERMINAL;
        }
        if self.aggregate_colon {
            bits |= Self::AGGREGATE_COLON;
        }
        if self.comma_sequencing {
            bits |= Self::COMMA_SEQUENCING;
        }
        if self.extended_delimiters {
            bits |= Self::EXTENDED_DELIMITERS;
        }
        if self.dot_non_terminal {
            bits |= Self::DOT_NON_TERMINAL;
        }
        if self.no_floats {
            bits |= Self::NO_FLOATS;
        }
        if self.no_integers {
            bits |= Self::NO_INTEGERS;
        }
        if self.hash_comment {
            bits |= Self::HASH_COMMENT;
        }
        bits
    }
}

#[cfg(feature = "fuzzing")]
impl<'a> arbitrary::Arbitrary<'a> for TokenizerOptions {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let bits = <u8 as arbitrary::Arbitrary>::arbitrary(u)?;
        Ok(Self::from_bits(u32::from(bits)))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <u8 as arbitrary::Arbitrary>::size_hint(depth)
    }
}
