#[derive(Debug, Clone, PartialEq)]
/// Represents all failures that can occur while reading or evaluating an
/// expression.
///
/// A `RuntimeError` is never raised out of the evaluator as a Rust error.
/// It is carried inside an error value, which displaces the expression that
/// produced it and otherwise travels through evaluation like any other value.
/// The variant is the authoritative error kind; the rendered message is
/// diagnostic text only.
pub enum RuntimeError {
    /// A numeric literal failed to parse or was out of the representable
    /// range.
    BadNumber {
        /// The literal text as written in the source.
        literal: String,
    },
    /// Division (or remainder) with a zero right-hand operand.
    DivideByZero,
    /// An arithmetic operator was applied to a non-numeric argument.
    NonNumericOperand {
        /// The operator that was applied.
        op:    &'static str,
        /// The type of the offending argument.
        found: &'static str,
    },
    /// A builtin received the wrong number of arguments.
    ArityMismatch {
        /// The builtin name.
        op:       &'static str,
        /// The number of arguments the builtin requires.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
    },
    /// A builtin received an argument of the wrong kind.
    TypeMismatch {
        /// The builtin name.
        op:       &'static str,
        /// What the builtin requires.
        expected: &'static str,
        /// The type of the offending argument.
        found:    &'static str,
    },
    /// `head`, `tail` or `init` was applied to an empty quoted list.
    EmptyContainer {
        /// The builtin name.
        op: &'static str,
    },
    /// The first element of an evaluated list was not a symbol.
    NotASymbol {
        /// The type of the first element.
        found: &'static str,
    },
    /// The leading symbol matched none of the builtins.
    UnknownFunction {
        /// The symbol text.
        name: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadNumber { literal } => {
                write!(f, "invalid number literal '{literal}'")
            },
            Self::DivideByZero => write!(f, "divide by zero"),
            Self::NonNumericOperand { op, found } => {
                write!(f, "cannot operate on non-numbers: '{op}' applied to {found}")
            },
            Self::ArityMismatch { op, expected, found } => {
                write!(f, "'{op}' expects {expected} argument(s), got {found}")
            },
            Self::TypeMismatch { op, expected, found } => {
                write!(f, "'{op}' expects {expected}, got {found}")
            },
            Self::EmptyContainer { op } => {
                write!(f, "'{op}' passed an empty q-expression")
            },
            Self::NotASymbol { found } => {
                write!(f, "s-expression does not start with a symbol, got {found}")
            },
            Self::UnknownFunction { name } => write!(f, "unknown function '{name}'"),
        }
    }
}

impl std::error::Error for RuntimeError {}
