#![allow(dead_code)]

use strscan_rs::{Token, scan};

/// Scan `input` and assert the token texts concatenate back to it.
pub fn assert_lossless(input: &str) -> Vec<Token> {
    let tokens = scan(input);
    let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(
        joined, input,
        "lossless scan mismatch:\n--- input ---\n{input}\n--- joined ---\n{joined}"
    );
    tokens
}
