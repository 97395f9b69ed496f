use std::vec::Vec;

use quickcheck::{Arbitrary, Gen};

use crate::{ElementKind, Lexeme, TokenizeError, Tokenizer, TokenizerOptions};

/// Everything a scan reported, in order, plus how it finished.
pub struct Run<'src> {
    pub lexemes: Vec<Lexeme<'src>>,
    pub end: Result<(), TokenizeError>,
    pub steps: usize,
}

/// Steps `t` to its terminal outcome, giving up after `limit` steps.
pub fn run_to_end<'src>(t: &mut Tokenizer<'src>, limit: usize) -> Option<Run<'src>> {
    let mut lexemes = Vec::new();
    for steps in 1..=limit {
        match t.step() {
            Ok(Some(l)) => lexemes.push(l),
            Ok(None) => {
                return Some(Run {
                    lexemes,
                    end: Ok(()),
                    steps,
                });
            }
            Err(e) => {
                return Some(Run {
                    lexemes,
                    end: Err(e),
                    steps,
                });
            }
        }
    }
    None
}

/// `(kind, text)` pairs for compact assertions.
pub fn pairs<'src>(run: &Run<'src>) -> Vec<(ElementKind, &'src str)> {
    run.lexemes.iter().map(|l| (l.kind(), l.as_str())).collect()
}

/// Option bitset drawn uniformly from the eight defined flags.
#[derive(Debug, Clone, Copy)]
pub struct AnyOptions(pub TokenizerOptions);

impl Arbitrary for AnyOptions {
    fn arbitrary(g: &mut Gen) -> Self {
        AnyOptions(TokenizerOptions::from_bits(u32::from(u8::arbitrary(g))))
    }
}

/// Fragments that hit every branch of the scanner far more often than raw
/// random bytes would.
const FRAGMENTS: &[&[u8]] = &[
    b"a",
    b"Zz_",
    b"0",
    b"42",
    b".",
    b",",
    b"=",
    b":",
    b";",
    b"\"",
    b"#",
    b"-",
    b"/",
    b"*",
    b" ",
    b"\t",
    b"\n",
    b"\r\n",
    "é".as_bytes(),
    "日".as_bytes(),
    b"\xC3",
    b"\xFF",
];

/// Input assembled from [`FRAGMENTS`], never containing NUL.
#[derive(Debug, Clone)]
pub struct LexInput(pub Vec<u8>);

impl Arbitrary for LexInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let picks = Vec::<u8>::arbitrary(g);
        let mut bytes = Vec::new();
        for pick in picks {
            bytes.extend_from_slice(FRAGMENTS[usize::from(pick) % FRAGMENTS.len()]);
        }
        LexInput(bytes)
    }

    fn shrink(&self) -> std::boxed::Box<dyn Iterator<Item = Self>> {
        std::boxed::Box::new(self.0.shrink().map(|mut bytes| {
            bytes.retain(|b| *b != 0);
            LexInput(bytes)
        }))
    }
}

/// Quickcheck iteration count, higher on CI.
pub fn test_count() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}
