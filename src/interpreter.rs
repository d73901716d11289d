/// Builtin dispatch.
///
/// Holds the static table mapping a leading symbol to its operation, the
/// arity checks performed before any operation runs, and the list builtins
/// (`list`, `head`, `tail`, `join`, `eval`, `cons`, `init`, `len`).
pub mod builtins;
/// The recursive evaluator.
///
/// Defines `eval`, the reduction of an s-expression to a single terminal
/// value: children first, then error short-circuiting, then dispatch on the
/// leading symbol.
pub mod evaluator;
/// Tokenization of source text.
///
/// Defines the `Token` enum produced by the lexer. Tokens are minimal
/// meaningful units: numeric literals (kept as raw text), symbols, and the
/// four grouping delimiters.
pub mod lexer;
/// Arithmetic operator application.
///
/// Implements the left-to-right binary fold for `+ - * / % ^ min max`,
/// including per-step integer-to-real promotion, the zero-divisor checks and
/// the single-argument negation rule for `-`.
pub mod ops;
/// Parsing of tokens into a labeled syntax tree.
///
/// The parser produces generic `SyntaxTree` nodes (tag, contents, children)
/// rather than a typed AST; classifying nodes into values is the reader's
/// job.
pub mod parser;
/// The tree reader.
///
/// Converts a labeled syntax tree into a value tree, parsing literals and
/// skipping purely lexical children along the way.
pub mod reader;
/// Runtime value representation.
///
/// Defines the `Value` enum and its rendering back to text.
pub mod value;
