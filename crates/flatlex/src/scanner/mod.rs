//! The tokenizer engine.
//!
//! Overview
//! - A [`Tokenizer`] borrows the caller's bytes and walks a cursor over them,
//!   reporting one [`Lexeme`] per [`step`](Tokenizer::step). Payloads are
//!   sub-slices of the input; nothing is copied and nothing is allocated.
//! - Each step skips whitespace and comments, then dispatches on the class
//!   of the next byte: a quote opens a quoted string, a delimiter is reported
//!   on its own, anything else starts a token run.
//! - A token run is scanned to its end, then the scanner looks past any
//!   whitespace for `=` (and `:` with `aggregate_colon`) to decide whether the
//!   run is a name. The byte that ended the run is left for the next step.
//!
//! Numbers
//! - A run whose bytes so far are all digits is numeric. Its first `.` makes
//!   it a float candidate and a second `.` is a malformed float, even when
//!   other bytes came between the dots (`1.myserver.com`). With `no_floats`
//!   the dots are taken as token content instead, so a dotted quad comes out
//!   as one plain token. A non-digit before any dot turns the run into a
//!   plain token.
//!
//! Invariants
//! - The cursor never moves backward and every non-terminal step moves it by
//!   at least one byte.
//! - End of input and errors are latched: later steps return the same outcome
//!   without touching the cursor.
//! - Every payload is valid UTF-8.

mod class;


use core::ffi::CStr;
use core::iter::FusedIterator;

use tracing::{debug, trace};

use self::class::{ByteClass, classify, is_line_end, is_whitespace};
use crate::{DelimiterTracking, ElementKind, Lexeme, TokenizeError, TokenizerOptions};

/// Outcome of one step: an element, `Ok(None)` at the end of input, or an
/// error.
pub type Step<'src> = Result<Option<Lexeme<'src>>, TokenizeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminal {
    Ended,
    Failed(TokenizeError),
}

impl Terminal {
    fn replay<'src>(self) -> Step<'src> {
        match self {
            Terminal::Ended => Ok(None),
            Terminal::Failed(err) => Err(err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Numeric {
    No,
    Integer,
    Float,
    /// A float candidate followed by a non-digit. Reported as a plain token,
    /// but another `.` is still malformed.
    FloatTail,
    /// Digits and dots under `no_floats`; reported as a plain token.
    Dotted,
}

impl Numeric {
    fn after_non_digit(self) -> Self {
        match self {
            Numeric::Float | Numeric::FloatTail => Numeric::FloatTail,
            Numeric::No | Numeric::Integer | Numeric::Dotted => Numeric::No,
        }
    }
}

/// Single-pass tokenizer over a borrowed byte buffer.
///
/// # Examples
///
/// ```rust
/// use flatlex::{ElementKind, Tokenizer, TokenizerOptions};
///
/// let options = TokenizerOptions {
///     comma_sequencing: true,
///     ..Default::default()
/// };
/// let mut tokens = Tokenizer::new(b"gzip, deflate, br", options);
/// let mut seen = Vec::new();
/// while let Some(lexeme) = tokens.step().unwrap() {
///     seen.push((lexeme.kind(), lexeme.as_str()));
/// }
/// assert_eq!(
///     seen,
///     [
///         (ElementKind::Token, "gzip"),
///         (ElementKind::Delimiter, ","),
///         (ElementKind::Token, "deflate"),
///         (ElementKind::Delimiter, ","),
///         (ElementKind::Token, "br"),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'src> {
    input: &'src [u8],
    pos: usize,
    len: usize,
    options: TokenizerOptions,
    delimiter: DelimiterTracking,
    current: Option<Lexeme<'src>>,
    terminal: Option<Terminal>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer over all of `input`.
    ///
    /// A NUL byte ends the input early, so C-style terminated buffers can be
    /// passed as they are.
    #[must_use]
    pub fn new(input: &'src [u8], options: TokenizerOptions) -> Self {
        Self::with_len(input, input.len(), options)
    }

    /// Creates a tokenizer over the first `len` bytes of `input`. A `len`
    /// past the end of `input` is clamped.
    #[must_use]
    pub fn with_len(input: &'src [u8], len: usize, options: TokenizerOptions) -> Self {
        Self {
            input,
            pos: 0,
            len: len.min(input.len()),
            options,
            delimiter: DelimiterTracking::NeedFirstContent,
            current: None,
            terminal: None,
        }
    }

    /// Creates a tokenizer over the bytes of a C string, terminator excluded.
    #[must_use]
    pub fn from_cstr(input: &'src CStr, options: TokenizerOptions) -> Self {
        Self::new(input.to_bytes(), options)
    }

    /// The options this tokenizer was created with.
    #[must_use]
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Current cursor offset into the input.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left before the scan limit. A NUL inside them still ends the
    /// scan early.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.len - self.pos
    }

    /// Current comma-list state. Stays at
    /// [`DelimiterTracking::NeedFirstContent`] unless
    /// [`comma_sequencing`](TokenizerOptions::comma_sequencing) is set.
    #[must_use]
    pub fn delimiter_tracking(&self) -> DelimiterTracking {
        self.delimiter
    }

    /// The element reported by the most recent step, if that step produced
    /// one.
    #[must_use]
    pub fn current(&self) -> Option<Lexeme<'src>> {
        self.current
    }

    /// Whether end of input or an error has been reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.terminal.is_some()
    }

    /// Scans and reports the next element.
    ///
    /// Returns `Ok(None)` at the end of input. End of input and errors are
    /// terminal: every later call returns the same value again.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenizeError`] when the input is lexically malformed.
    pub fn step(&mut self) -> Step<'src> {
        if let Some(terminal) = self.terminal {
            return terminal.replay();
        }
        let outcome = self.scan();
        match &outcome {
            Ok(Some(lexeme)) => {
                trace!(
                    kind = ?lexeme.kind(),
                    offset = lexeme.offset(),
                    len = lexeme.len(),
                    "element"
                );
                self.current = Some(*lexeme);
            }
            Ok(None) => {
                trace!(pos = self.pos, "ended");
                self.current = None;
                self.terminal = Some(Terminal::Ended);
            }
            Err(err) => {
                debug!(pos = self.pos, error = %err, "tokenize failed");
                self.current = None;
                self.terminal = Some(Terminal::Failed(*err));
            }
        }
        outcome
    }

    // --- Input --------------------------------------------------------------

    /// Next unread byte, or `None` at the scan limit or a NUL.
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.peek_at(self.pos)
    }

    #[inline]
    fn peek_at(&self, at: usize) -> Option<u8> {
        if at < self.len {
            match self.input[at] {
                0 => None,
                b => Some(b),
            }
        } else {
            None
        }
    }

    /// Consumes one complete multi-byte code point.
    fn consume_utf8(&mut self) -> Result<(), TokenizeError> {
        match bstr::decode_utf8(&self.input[self.pos..self.len]) {
            (Some(_), size) => {
                self.pos += size;
                Ok(())
            }
            (None, _) => Err(TokenizeError::BrokenUtf8),
        }
    }

    // --- Sequencing ---------------------------------------------------------

    /// Advances the comma-list state over `lexeme`. Delimiters other than
    /// `,` leave the state alone.
    fn sequence(&mut self, lexeme: &Lexeme<'src>) -> Result<(), TokenizeError> {
        use DelimiterTracking::{NeedDelimiter, NeedNextContent};

        if !self.options.comma_sequencing {
            return Ok(());
        }
        if lexeme.kind().is_content() {
            if self.delimiter == NeedDelimiter {
                return Err(TokenizeError::CommaListViolation);
            }
            self.delimiter = NeedDelimiter;
        } else if lexeme.as_bytes() == b"," {
            if self.delimiter != NeedDelimiter {
                return Err(TokenizeError::CommaListViolation);
            }
            self.delimiter = NeedNextContent;
        }
        Ok(())
    }

    // --- Scanning -----------------------------------------------------------

    fn scan(&mut self) -> Step<'src> {
        loop {
            let Some(b) = self.peek() else {
                return self.end_of_input();
            };
            let lexeme = match classify(b, &self.options) {
                ByteClass::Whitespace => {
                    self.pos += 1;
                    continue;
                }
                ByteClass::Comment => {
                    self.skip_comment();
                    continue;
                }
                ByteClass::Quote => self.quoted_string()?,
                ByteClass::Delimiter => self.single_delimiter(),
                ByteClass::Token | ByteClass::NonAscii => self.token()?,
            };
            self.sequence(&lexeme)?;
            return Ok(Some(lexeme));
        }
    }

    fn end_of_input(&self) -> Step<'src> {
        if self.options.comma_sequencing && self.delimiter == DelimiterTracking::NeedNextContent {
            return Err(TokenizeError::CommaListViolation);
        }
        Ok(None)
    }

    /// Skips from `#` up to, not including, the next line end. Comment bytes
    /// are not decoded and need not be UTF-8.
    fn skip_comment(&mut self) {
        self.pos += 1;
        while self.peek().is_some_and(|b| !is_line_end(b)) {
            self.pos += 1;
        }
    }

    fn single_delimiter(&mut self) -> Lexeme<'src> {
        let start = self.pos;
        self.pos += 1;
        Lexeme::new(ElementKind::Delimiter, self.input, start, self.pos)
    }

    fn quoted_string(&mut self) -> Result<Lexeme<'src>, TokenizeError> {
        self.pos += 1;
        let start = self.pos;
        loop {
            match self.peek() {
                None => return Err(TokenizeError::UnterminatedString),
                Some(b'"') => {
                    let end = self.pos;
                    self.pos += 1;
                    return Ok(Lexeme::new(ElementKind::QuotedString, self.input, start, end));
                }
                Some(b) if b.is_ascii() => self.pos += 1,
                Some(_) => self.consume_utf8()?,
            }
        }
    }

    fn token(&mut self) -> Result<Lexeme<'src>, TokenizeError> {
        let start = self.pos;
        let mut numeric = if !self.options.no_integers && self.input[start].is_ascii_digit() {
            Numeric::Integer
        } else {
            Numeric::No
        };

        while let Some(b) = self.peek() {
            if b == b'.' && numeric != Numeric::No {
                numeric = match numeric {
                    _ if self.options.no_floats => Numeric::Dotted,
                    Numeric::Float | Numeric::FloatTail => {
                        return Err(TokenizeError::MalformedFloat);
                    }
                    _ => Numeric::Float,
                };
                self.pos += 1;
                continue;
            }
            match classify(b, &self.options) {
                ByteClass::Token => {
                    if !b.is_ascii_digit() {
                        numeric = numeric.after_non_digit();
                    }
                    self.pos += 1;
                }
                ByteClass::NonAscii => {
                    numeric = numeric.after_non_digit();
                    self.consume_utf8()?;
                }
                ByteClass::Whitespace
                | ByteClass::Quote
                | ByteClass::Comment
                | ByteClass::Delimiter => break,
            }
        }
        let end = self.pos;

        let mut look = end;
        while self.peek_at(look).is_some_and(is_whitespace) {
            look += 1;
        }
        match self.peek_at(look) {
            Some(b'=') => {
                if matches!(numeric, Numeric::Integer | Numeric::Float) {
                    return Err(TokenizeError::NumberOnLeftHandSide);
                }
                self.pos = look + 1;
                return Ok(Lexeme::new(ElementKind::NameEquals, self.input, start, end));
            }
            Some(b':') if self.options.aggregate_colon => {
                self.pos = look + 1;
                return Ok(Lexeme::new(ElementKind::NameColon, self.input, start, end));
            }
            _ => {}
        }

        let kind = match numeric {
            Numeric::Integer => ElementKind::Integer,
            // `1.` has no fraction digits and stays a plain token
            Numeric::Float if self.input[end - 1].is_ascii_digit() => ElementKind::Float,
            Numeric::Float | Numeric::FloatTail | Numeric::Dotted | Numeric::No => {
                ElementKind::Token
            }
        };
        Ok(Lexeme::new(kind, self.input, start, end))
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Result<Lexeme<'src>, TokenizeError>;

    /// Yields each element, then a single error if one occurs. Unlike
    /// [`Tokenizer::step`], the iterator does not repeat the terminal
    /// outcome.
    fn next(&mut self) -> Option<Self::Item> {
        if self.terminal.is_some() {
            return None;
        }
        self.step().transpose()
    }
}

impl FusedIterator for Tokenizer<'_> {}
