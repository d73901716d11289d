use std::iter::Peekable;

use crate::{error::ParseError, interpreter::lexer::Token};

pub type ParseResult<T> = Result<T, ParseError>;

/// A node of the labeled syntax tree handed to the reader.
///
/// The parser classifies every piece of input into a node whose `tag` is a
/// `|`-joined list of category labels (for example `expr|integer`). Leaves
/// keep their raw lexeme in `contents`; interior nodes keep their ordered
/// children, including the grouping delimiters, which the reader skips.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    /// Category labels for this node, joined with `|`.
    pub tag:      String,
    /// The raw lexeme for leaves; empty for interior nodes.
    pub contents: String,
    /// Ordered child nodes; empty for leaves.
    pub children: Vec<SyntaxTree>,
}

impl SyntaxTree {
    fn leaf(tag: &str, contents: &str) -> Self {
        Self { tag:      tag.to_string(),
               contents: contents.to_string(),
               children: Vec::new(), }
    }

    fn branch(tag: &str, children: Vec<Self>) -> Self {
        Self { tag: tag.to_string(),
               contents: String::new(),
               children }
    }
}

/// Parses a whole program: one or more expressions up to the end of input.
///
/// The expressions become the children of a single `root` node, so a bare
/// `+ 1 2` typed at the prompt reduces the same way `(+ 1 2)` does.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the token stream is empty.
/// - Propagates any error from expression parsing.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<SyntaxTree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut children = Vec::new();

    while tokens.peek().is_some() {
        children.push(parse_expr(tokens)?);
    }

    if children.is_empty() {
        return Err(ParseError::UnexpectedEndOfInput { line: 1 });
    }

    Ok(SyntaxTree::branch("root", children))
}

/// Parses a single expression: a literal, a symbol, or a delimited list.
///
/// # Errors
/// - `UnexpectedToken` for a stray closing delimiter.
/// - `UnexpectedEndOfInput` if the stream ends before an expression starts.
pub fn parse_expr<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<SyntaxTree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(text), _)) => Ok(SyntaxTree::leaf("expr|integer", text)),
        Some((Token::Real(text), _)) => Ok(SyntaxTree::leaf("expr|real", text)),
        Some((Token::Symbol(text), _)) => Ok(SyntaxTree::leaf("expr|symbol", text)),

        Some((Token::LParen, line)) => parse_listing(tokens, ListKind::Sexpr, *line),
        Some((Token::LBrace, line)) => parse_listing(tokens, ListKind::Qexpr, *line),

        Some((Token::RParen, line)) => {
            Err(ParseError::UnexpectedToken { token: ")".to_string(),
                                              line:  *line, })
        },
        Some((Token::RBrace, line)) => {
            Err(ParseError::UnexpectedToken { token: "}".to_string(),
                                              line:  *line, })
        },

        // NewLine and Ignored are consumed by the lexer and never reach here.
        Some((token, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                              line:  *line, })
        },

        None => Err(ParseError::UnexpectedEndOfInput { line: 1 }),
    }
}

#[derive(Clone, Copy)]
enum ListKind {
    Sexpr,
    Qexpr,
}

impl ListKind {
    const fn tag(self) -> &'static str {
        match self {
            Self::Sexpr => "expr|sexpr",
            Self::Qexpr => "expr|qexpr",
        }
    }

    const fn open(self) -> &'static str {
        match self {
            Self::Sexpr => "(",
            Self::Qexpr => "{",
        }
    }

    const fn close(self) -> &'static str {
        match self {
            Self::Sexpr => ")",
            Self::Qexpr => "}",
        }
    }

    fn closes(self, token: &Token) -> bool {
        matches!((self, token),
                 (Self::Sexpr, Token::RParen) | (Self::Qexpr, Token::RBrace))
    }

    const fn unterminated(self, line: usize) -> ParseError {
        match self {
            Self::Sexpr => ParseError::ExpectedClosingParen { line },
            Self::Qexpr => ParseError::ExpectedClosingBrace { line },
        }
    }
}

/// Parses the body of a delimited list, the opening token already consumed.
///
/// The delimiters themselves are kept as `bracket` children so the produced
/// tree mirrors the source; the reader discards them.
fn parse_listing<'a, I>(tokens: &mut Peekable<I>,
                        kind: ListKind,
                        open_line: usize)
                        -> ParseResult<SyntaxTree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut children = vec![SyntaxTree::leaf("bracket", kind.open())];

    loop {
        match tokens.peek() {
            Some((token, _)) if kind.closes(token) => {
                tokens.next();
                children.push(SyntaxTree::leaf("bracket", kind.close()));
                return Ok(SyntaxTree::branch(kind.tag(), children));
            },

            Some(_) => children.push(parse_expr(tokens)?),

            None => return Err(kind.unterminated(open_line)),
        }
    }
}
