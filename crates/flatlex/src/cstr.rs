//! Copying payloads out as NUL-terminated strings.

use core::ffi::CStr;

use crate::{CstrError, Tokenizer};

/// Copies `payload` into `out` followed by a NUL terminator and returns the
/// result as a [`CStr`] borrowed from `out`.
///
/// Nothing is written unless `payload.len() + 1 <= out.len()`.
///
/// # Errors
///
/// [`CstrError::TooLong`] if the payload and terminator do not fit, and
/// [`CstrError::InteriorNul`] if `payload` itself contains a NUL byte.
pub fn copy_cstr<'out>(payload: &[u8], out: &'out mut [u8]) -> Result<&'out CStr, CstrError> {
    let needed = payload.len() + 1;
    if needed > out.len() {
        return Err(CstrError::TooLong {
            needed,
            capacity: out.len(),
        });
    }
    out[..payload.len()].copy_from_slice(payload);
    out[payload.len()] = 0;
    CStr::from_bytes_with_nul(&out[..needed]).map_err(|_| CstrError::InteriorNul)
}

impl Tokenizer<'_> {
    /// Copies the payload of the last reported element into `out` as a
    /// NUL-terminated string.
    ///
    /// When no element is current (before the first step, or after the end
    /// of input or an error) an empty string is written.
    ///
    /// ```rust
    /// use flatlex::{Tokenizer, TokenizerOptions};
    ///
    /// let mut tokens = Tokenizer::new(b"charset=utf-8", TokenizerOptions::default());
    /// tokens.step().unwrap();
    /// let mut buf = [0u8; 16];
    /// assert_eq!(tokens.copy_token_cstr(&mut buf).unwrap().to_bytes(), b"charset");
    /// ```
    ///
    /// # Errors
    ///
    /// [`CstrError::TooLong`] if the payload and terminator do not fit in
    /// `out`. The buffer contents are left untouched in that case.
    pub fn copy_token_cstr<'out>(&self, out: &'out mut [u8]) -> Result<&'out CStr, CstrError> {
        let payload = self.current().map_or(&[][..], |lexeme| lexeme.as_bytes());
        copy_cstr(payload, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenizerOptions;

    #[test]
    fn exact_fit_includes_terminator() {
        let mut tokens = Tokenizer::new(b"abc", TokenizerOptions::default());
        tokens.step().unwrap();
        let mut buf = [0xAA_u8; 4];
        let s = tokens.copy_token_cstr(&mut buf).unwrap();
        assert_eq!(s.to_bytes_with_nul(), b"abc\0");
        assert_eq!(buf, *b"abc\0");
    }

    #[test]
    fn one_byte_short_fails_without_writing() {
        let mut tokens = Tokenizer::new(b"abcd", TokenizerOptions::default());
        tokens.step().unwrap();
        let mut buf = [0xAA_u8; 4];
        assert_eq!(
            tokens.copy_token_cstr(&mut buf),
            Err(CstrError::TooLong {
                needed: 5,
                capacity: 4
            })
        );
        assert_eq!(buf, [0xAA; 4]);
    }

    #[test]
    fn empty_buffer_never_fits() {
        let tokens = Tokenizer::new(b"", TokenizerOptions::default());
        assert_eq!(
            tokens.copy_token_cstr(&mut []),
            Err(CstrError::TooLong {
                needed: 1,
                capacity: 0
            })
        );
    }

    #[test]
    fn no_current_element_writes_empty_string() {
        let mut tokens = Tokenizer::new(b"", TokenizerOptions::default());
        assert_eq!(tokens.step(), Ok(None));
        let mut buf = [0xAA_u8; 2];
        assert_eq!(tokens.copy_token_cstr(&mut buf).unwrap().to_bytes(), b"");
        assert_eq!(buf[0], 0);
    }

    #[test]
    fn quoted_string_copies_without_quotes() {
        let mut tokens = Tokenizer::new(br#""a b,c""#, TokenizerOptions::default());
        tokens.step().unwrap();
        let mut buf = [0u8; 8];
        assert_eq!(tokens.copy_token_cstr(&mut buf).unwrap().to_bytes(), b"a b,c");
    }

    #[test]
    fn interior_nul_is_rejected() {
        let mut buf = [0u8; 8];
        assert_eq!(copy_cstr(b"a\0b", &mut buf), Err(CstrError::InteriorNul));
    }
}
