use std::io::Read;

use crate::token::{Span, Token, TokenKind};

/// Symbol alphabet used by a freshly constructed scanner.
pub const DEFAULT_SYMBOL_CHARS: &[char] = &[
    '=', '+', '-', '/', ',', '.', '*', '~', '!', '@', '#', '$', '%', '^', '&', '(', ')', '{', '}',
    '[', ']', ':', ';', '<', '>', '?', '|', '\\',
];

/// Error produced while constructing a scanner from a reader.
///
/// Scanning itself never fails: every character sequence maps to some
/// token, with `Unknown` as the fallback.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Reading the input to completion failed.
    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),
    /// The input bytes are not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Scan a source string into a sequence of tokens.
///
/// Convenience over [`Scanner`] with default configuration; collects
/// every token up to (excluding) the final `EndOfInput`.
#[must_use]
pub fn scan(input: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        if token.kind == TokenKind::EndOfInput {
            break;
        }
        tokens.push(token);
    }
    tokens
}

/// Pull-based character scanner.
///
/// Owns an immutable input buffer and a cursor; each [`next_token`] call
/// classifies one lexical run and advances past it. The scan is lossless:
/// with whitespace suppression off, token texts concatenate back to the
/// input.
///
/// [`next_token`]: Scanner::next_token
#[derive(Debug)]
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    // Cursor snapshot from the start of the current token scan.
    save_pos: usize,
    save_line: usize,
    save_col: usize,
    ignore_whitespace: bool,
    symbol_chars: Vec<char>,
    finished: bool,
}

impl Scanner {
    /// Create a scanner over a complete in-memory buffer.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            save_pos: 0,
            save_line: 1,
            save_col: 1,
            ignore_whitespace: false,
            symbol_chars: DEFAULT_SYMBOL_CHARS.to_vec(),
            finished: false,
        }
    }

    /// Create a scanner by draining `reader` to completion.
    ///
    /// # Errors
    ///
    /// Returns `ScanError` if reading fails or the bytes are not
    /// valid UTF-8.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, ScanError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes)?;
        Ok(Self::new(&text))
    }

    /// Whether space and tab characters are dropped instead of emitted
    /// as `WhiteSpace` tokens.
    #[must_use]
    pub const fn ignore_whitespace(&self) -> bool {
        self.ignore_whitespace
    }

    /// Suppress (or re-enable) `WhiteSpace` tokens. Line terminators and
    /// whitespace inside quoted strings are unaffected. May be toggled
    /// between calls to [`next_token`](Self::next_token).
    pub const fn set_ignore_whitespace(&mut self, ignore: bool) {
        self.ignore_whitespace = ignore;
    }

    /// Characters currently classified as single-character `Symbol` tokens.
    #[must_use]
    pub fn symbol_chars(&self) -> &[char] {
        &self.symbol_chars
    }

    /// Replace the symbol alphabet. Characters removed from the default
    /// set degrade to `Unknown` tokens.
    pub fn set_symbol_chars(&mut self, chars: &[char]) {
        self.symbol_chars = chars.to_vec();
    }

    /// Look `offset` characters ahead of the cursor without consuming.
    /// Returns `None` past the end of the buffer.
    #[must_use]
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Classify and return the next token, advancing the cursor past it.
    ///
    /// Never fails; once the buffer is exhausted every call returns an
    /// `EndOfInput` token with empty text and an unchanged position.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.mark();
            match self.peek(0) {
                None => return self.make_token(TokenKind::EndOfInput),
                Some(' ' | '\t') => {
                    if self.ignore_whitespace {
                        // Contributes no token; restart classification.
                        self.advance();
                        continue;
                    }
                    return self.read_whitespace();
                }
                Some('0'..='9') => return self.read_number(),
                Some('\r') => {
                    self.advance();
                    if self.peek(0) == Some('\n') {
                        self.advance();
                    }
                    self.bump_line();
                    return self.make_token(TokenKind::EndOfLine);
                }
                Some('\n') => {
                    self.advance();
                    self.bump_line();
                    return self.make_token(TokenKind::EndOfLine);
                }
                Some('"') => return self.read_quoted_string(),
                Some(ch) if ch.is_alphabetic() || ch == '_' => return self.read_word(),
                Some(ch) if self.symbol_chars.contains(&ch) => {
                    self.advance();
                    return self.make_token(TokenKind::Symbol);
                }
                Some(_) => {
                    self.advance();
                    return self.make_token(TokenKind::Unknown);
                }
            }
        }
    }

    /// Snapshot the cursor so `make_token` can report the token's start.
    const fn mark(&mut self) {
        self.save_pos = self.pos;
        self.save_line = self.line;
        self.save_col = self.col;
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token {
            kind,
            text: self.chars[self.save_pos..self.pos].iter().collect(),
            span: Span {
                line: self.save_line,
                column: self.save_col,
            },
        }
    }

    const fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
            self.col += 1;
        }
    }

    const fn bump_line(&mut self) {
        self.line += 1;
        self.col = 1;
    }

    /// Read a run of spaces and tabs. Line terminators never join the run.
    fn read_whitespace(&mut self) -> Token {
        self.advance();
        while matches!(self.peek(0), Some(' ' | '\t')) {
            self.advance();
        }
        self.make_token(TokenKind::WhiteSpace)
    }

    /// Read a number: `DIGIT+ ('.' DIGIT*)?`. A second decimal point
    /// terminates the token.
    fn read_number(&mut self) -> Token {
        self.advance();
        let mut had_dot = false;
        loop {
            match self.peek(0) {
                Some(ch) if ch.is_ascii_digit() => self.advance(),
                Some('.') if !had_dot => {
                    had_dot = true;
                    self.advance();
                }
                _ => break,
            }
        }
        self.make_token(TokenKind::Number)
    }

    /// Read a word: letters and underscores. Digits do not continue a word.
    fn read_word(&mut self) -> Token {
        self.advance();
        while matches!(self.peek(0), Some(ch) if ch.is_alphabetic() || ch == '_') {
            self.advance();
        }
        self.make_token(TokenKind::Word)
    }

    /// Read a double-quoted string, keeping both delimiters and any `""`
    /// escapes verbatim. The string may span lines; an unterminated
    /// string closes silently at end of input.
    fn read_quoted_string(&mut self) -> Token {
        self.advance(); // opening quote
        loop {
            match self.peek(0) {
                None => break,
                Some('\r') => {
                    self.advance();
                    if self.peek(0) == Some('\n') {
                        self.advance();
                    }
                    self.bump_line();
                }
                Some('\n') => {
                    self.advance();
                    self.bump_line();
                }
                Some('"') => {
                    self.advance();
                    if self.peek(0) == Some('"') {
                        // Doubled quote: escaped literal, keep going.
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some(_) => self.advance(),
            }
        }
        self.make_token(TokenKind::QuotedString)
    }
}

impl Iterator for Scanner {
    type Item = Token;

    /// Yields every token including a single final `EndOfInput`,
    /// then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::EndOfInput {
            self.finished = true;
        }
        Some(token)
    }
}
