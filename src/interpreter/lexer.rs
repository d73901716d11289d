use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Literal tokens carry their raw text rather than a parsed value: converting
/// the text to a number is the reader's job, so that an out-of-range literal
/// can become an error value instead of a parse failure.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Real number literal tokens, such as `3.14` or `-0.5`.
    #[regex(r"-?[0-9]+\.[0-9]+", raw_slice)]
    Real(String),
    /// Integer literal tokens, such as `42` or `-7`.
    #[regex(r"-?[0-9]+", raw_slice)]
    Integer(String),
    /// Symbol tokens; an operator character or a builtin-style name such as
    /// `+`, `min` or `head`. Names outside the builtin set still lex, so the
    /// evaluator can report them as unknown.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", raw_slice)]
    #[regex(r"[+\-*/%^]", raw_slice)]
    Symbol(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// Newlines advance the line counter and are otherwise discarded.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Copies the current token slice out of the lexer.
fn raw_slice(lex: &mut logos::Lexer<Token>) -> String {
    lex.slice().to_string()
}
