/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unexpected tokens, missing closing delimiters,
/// and any other issue detected before evaluation.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error kinds that can be raised while reading or evaluating an
/// expression. Unlike parse errors these are not returned through `Result`
/// channels all the way to the caller: they are wrapped in an error value and
/// flow through evaluation like any other datum.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
