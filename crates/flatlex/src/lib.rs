//! An allocation-free, single-pass tokenizer for protocol header values,
//! configuration fragments and comma-separated lists.
//!
//! A [`Tokenizer`] borrows the input and reports one classified [`Lexeme`]
//! per step, each payload a view into the original bytes. Callers drive it
//! one element at a time, which keeps the work per call bounded.
//!
//! ```rust
//! use flatlex::{ElementKind, Tokenizer, TokenizerOptions};
//!
//! let mut tokens = Tokenizer::new(br#"q=0.5, name="a b""#, TokenizerOptions::default());
//! let kinds: Vec<_> = tokens.by_ref().map(|l| l.unwrap().kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         ElementKind::NameEquals,
//!         ElementKind::Float,
//!         ElementKind::Delimiter,
//!         ElementKind::NameEquals,
//!         ElementKind::QuotedString,
//!     ]
//! );
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

mod cstr;
mod element;
mod error;
mod options;
mod scanner;

#[cfg(test)]
mod tests;

pub use cstr::copy_cstr;
pub use element::{DelimiterTracking, ElementKind, Lexeme};
pub use error::{CstrError, TokenizeError};
pub use options::TokenizerOptions;
pub use scanner::{Step, Tokenizer};
