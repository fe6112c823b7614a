//! Raw token definitions for logos (before cooking/interning).

use logos::Logos;

/// Raw token from logos.
///
/// Whitespace and comments are skipped at this layer. Payload-carrying
/// tokens (numbers, strings, identifiers) are cooked into their interned
/// form by [`crate::cook`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
pub enum RawToken {
    // Keywords
    #[token("and")]
    And,
    #[token("break")]
    Break,
    #[token("class")]
    Class,
    #[token("continue")]
    Continue,
    #[token("else")]
    Else,
    #[token("false")]
    False,
    #[token("for")]
    For,
    #[token("fun")]
    Fun,
    #[token("if")]
    If,
    #[token("nil")]
    Nil,
    #[token("or")]
    Or,
    #[token("print")]
    Print,
    #[token("return")]
    Return,
    #[token("super")]
    Super,
    #[token("this")]
    This,
    #[token("true")]
    True,
    #[token("var")]
    Var,
    #[token("while")]
    While,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token(";")]
    Semicolon,
    #[token("*")]
    Star,
    #[token("!=")]
    BangEqual,
    #[token("!")]
    Bang,
    #[token("==")]
    EqualEqual,
    #[token("=")]
    Equal,
    #[token(">=")]
    GreaterEqual,
    #[token(">")]
    Greater,
    #[token("<=")]
    LessEqual,
    #[token("<")]
    Less,
    #[token("/")]
    Slash,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,

    // Literals
    /// Digits with an optional single fractional part. `1.` lexes as
    /// `1` then `.`; `.5` lexes as `.` then `5`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// Double-quoted string; may span lines, no escapes.
    #[regex(r#""[^"]*""#)]
    Str,

    /// A `"` whose closing quote never arrives (runs to end of input).
    #[regex(r#""[^"]*"#)]
    UnterminatedStr,

    /// A `/*` whose closing `*/` never arrives. The terminated skip rule
    /// above wins whenever a closer exists, so matching this means the
    /// rest of the input is comment.
    #[token("/*")]
    UnterminatedBlockComment,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}
