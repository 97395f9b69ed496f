//! Tokenizes a few HTTP header values and prints each element as it is
//! reported, copying names into a fixed stack buffer the way a C caller
//! would.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=flatlex=trace cargo run -p flatlex --example header_list
//! ```
#![allow(missing_docs)]

use flatlex::{ElementKind, Tokenizer, TokenizerOptions};
use tracing_subscriber::EnvFilter;

const HEADERS: &[(&str, &str)] = &[
    ("Accept-Encoding", "gzip, deflate, br"),
    ("Cache-Control", "max-age=3600, no-cache"),
    ("Content-Type", "text/html; charset=\"utf-8\""),
    ("Forwarded", "for=192.0.2.60; proto=http; by=203.0.113.43"),
    ("Accept-Encoding", "gzip,, br"),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = TokenizerOptions {
        minus_non_terminal: true,
        dot_non_terminal: true,
        no_floats: true,
        ..Default::default()
    };

    for (name, value) in HEADERS {
        println!("{name}: {value}");
        let options = TokenizerOptions {
            comma_sequencing: *name == "Accept-Encoding",
            ..options
        };
        let mut tokens = Tokenizer::new(value.as_bytes(), options);
        let mut buf = [0u8; 32];
        loop {
            match tokens.step() {
                Ok(Some(lexeme)) if lexeme.kind() == ElementKind::NameEquals => {
                    match tokens.copy_token_cstr(&mut buf) {
                        Ok(name) => println!("  {:<12} {name:?}", "parameter"),
                        Err(err) => println!("  {:<12} ({err})", "parameter"),
                    }
                }
                Ok(Some(lexeme)) => println!("  {:<12} {lexeme}", format!("{:?}", lexeme.kind())),
                Ok(None) => break,
                Err(err) => {
                    println!("  error: {err} (code {})", err.code());
                    break;
                }
            }
        }
    }
}
