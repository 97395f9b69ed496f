#![no_main]

use arbitrary::Arbitrary;
use flatlex::{Tokenizer, TokenizerOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    options: TokenizerOptions,
    /// Scan limit; `None` scans the whole buffer.
    len: Option<usize>,
    data: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let mut tokens = match input.len {
        Some(len) => Tokenizer::with_len(input.data, len, input.options),
        None => Tokenizer::new(input.data, input.options),
    };
    let limit = input.len.unwrap_or(input.data.len()).min(input.data.len());

    let mut prev_end = 0;
    let outcome = loop {
        let before = tokens.position();
        match tokens.step() {
            Ok(Some(lexeme)) => {
                assert!(tokens.position() > before, "step did not advance");
                assert!(lexeme.offset() >= prev_end, "payloads overlap");
                assert!(lexeme.offset() + lexeme.len() <= limit, "payload past limit");
                assert_eq!(
                    &input.data[lexeme.offset()..lexeme.offset() + lexeme.len()],
                    lexeme.as_bytes()
                );
                assert!(core::str::from_utf8(lexeme.as_bytes()).is_ok());
                assert!(!lexeme.as_bytes().contains(&0));

                let mut buf = [0u8; 64];
                if let Ok(s) = tokens.copy_token_cstr(&mut buf) {
                    assert_eq!(s.to_bytes(), lexeme.as_bytes());
                }
                prev_end = lexeme.offset() + lexeme.len();
            }
            other => break other,
        }
    };

    let pos = tokens.position();
    for _ in 0..3 {
        assert_eq!(tokens.step(), outcome);
        assert_eq!(tokens.position(), pos);
        assert!(tokens.current().is_none());
    }
});
