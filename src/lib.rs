//! # qlisp
//!
//! qlisp is a tiny interpreter for a Lisp-flavored expression language.
//! Parenthesized expressions `( )` are evaluated; braced expressions `{ }`
//! are quoted data that a fixed set of builtins can pick apart, glue back
//! together, or hand back to the evaluator. There are no variables and no
//! user-defined functions: every program is a closed expression over
//! numbers, symbols and lists.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::interpreter::{
    lexer::{LexerExtras, Token},
    parser,
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating code. Parse errors travel through `Result` and carry source
/// line numbers; runtime errors are wrapped in error values and travel
/// through evaluation itself.
pub mod error;
/// Orchestrates the entire process of expression execution.
///
/// This module ties together the lexer, the parser, the tree reader, the
/// value representation, the evaluator and the builtin table to provide a
/// complete runtime for the expression language.
///
/// # Responsibilities
/// - Defines the value and syntax-tree types shared by all phases.
/// - Provides the reader, evaluator and builtin dispatch.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{evaluator::eval, reader::read, value::Value},
};

/// Evaluates a source string to a single value.
///
/// The source is tokenized and parsed into a labeled tree, the tree is read
/// into a value, and the value is evaluated. Several expressions may appear
/// at top level; they form one evaluable list, so `+ 1 2` behaves like
/// `(+ 1 2)`.
///
/// # Errors
/// Returns a [`ParseError`] if the source is not syntactically well formed.
/// Evaluation failures do not show up here: they come back as an
/// [`Value::Error`] result, which renders as `error: <message>`.
///
/// # Examples
/// ```
/// use qlisp::{eval_source, Value};
///
/// let value = eval_source("(+ 1 (* 2 3))").unwrap();
/// assert_eq!(value, Value::Integer(7));
///
/// // A failed evaluation is still an Ok result, carrying an error value.
/// let value = eval_source("(/ 1 0)").unwrap();
/// assert_eq!(value.to_string(), "error: divide by zero");
///
/// // Malformed input is a parse error instead.
/// assert!(eval_source("(+ 1").is_err());
/// ```
pub fn eval_source(source: &str) -> Result<Value, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    let mut iter = tokens.iter().peekable();
    let tree = parser::parse_program(&mut iter)?;

    Ok(eval(read(&tree)))
}
