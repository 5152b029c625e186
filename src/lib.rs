//! Lossless, position-tracking string scanner.
//!
//! Converts raw text into a flat sequence of classified tokens (words,
//! numbers, quoted strings, whitespace, symbols, line terminators) while
//! tracking 1-based line/column coordinates for diagnostics. There is no
//! grammar layer: the scanner only classifies lexical runs, and every
//! input character lands in some token, so scanning never fails.
//!
//! # Quick start
//!
//! ## Scan a string in one call
//!
//! ```
//! use strscan_rs::{TokenKind, scan};
//!
//! let tokens = scan("x = 1.5");
//! assert_eq!(tokens[0].text, "x");
//! assert_eq!(tokens[2].kind, TokenKind::Symbol);
//! assert_eq!(tokens[4].text, "1.5");
//!
//! // The scan is lossless.
//! let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(joined, "x = 1.5");
//! ```
//!
//! ## Pull tokens with a configured scanner
//!
//! ```
//! use strscan_rs::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("alpha  beta");
//! scanner.set_ignore_whitespace(true);
//!
//! assert_eq!(scanner.next_token().text, "alpha");
//! assert_eq!(scanner.next_token().text, "beta");
//! assert_eq!(scanner.next_token().kind, TokenKind::EndOfInput);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod scanner;
pub mod token;

pub use scanner::{DEFAULT_SYMBOL_CHARS, ScanError, Scanner, scan};
pub use token::{Span, Token, TokenKind};
