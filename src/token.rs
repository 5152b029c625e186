/// Source location where a token starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Single character no other kind claims.
    Unknown,
    /// Run of letters and underscores.
    Word,
    /// Number (`DIGIT+ ('.' DIGIT*)?`).
    Number,
    /// Double-quoted string (`"..."`), delimiters and `""` escapes kept
    /// verbatim.
    QuotedString,
    /// Run of spaces and tabs. Never includes line terminators.
    WhiteSpace,
    /// Single character from the configured symbol set.
    Symbol,
    /// Line terminator (`\n`, `\r`, or `\r\n`).
    EndOfLine,
    /// End of the input buffer. Text is always empty.
    EndOfInput,
}

/// A single token with its kind, exact source text, and start location.
///
/// `text` is the verbatim slice of input the token covers; with whitespace
/// suppression off, concatenating the texts of a full scan reproduces the
/// input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}
